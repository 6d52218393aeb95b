//! L4 Atomic Layer: Scroll target resolution
//!
//! Turns a [`ScrollRequest`] into an absolute destination offset by sampling
//! the viewport's layout once.

use std::fmt;

use pagescroll_core::{ElementId, Error, Result, Viewport};

/// Where a scroll animation should go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollRequest {
    /// Literal scroll offset in pixels
    AbsolutePosition(i64),
    /// Top of an element; a positive offset stops short of it,
    /// a negative offset scrolls past it
    ElementTarget { element: ElementId, offset: i64 },
    /// Bottom of the document, minus the offset
    DocumentEnd { offset: i64 },
}

impl ScrollRequest {
    pub fn position(pixels: i64) -> Self {
        ScrollRequest::AbsolutePosition(pixels)
    }

    pub fn element(element: impl Into<ElementId>) -> Self {
        ScrollRequest::ElementTarget {
            element: element.into(),
            offset: 0,
        }
    }

    pub fn document_end() -> Self {
        ScrollRequest::DocumentEnd { offset: 0 }
    }

    /// Replace the pixel offset. Absolute positions carry no offset and are returned as is.
    pub fn with_offset(self, offset: i64) -> Self {
        match self {
            ScrollRequest::AbsolutePosition(_) => self,
            ScrollRequest::ElementTarget { element, .. } => {
                ScrollRequest::ElementTarget { element, offset }
            }
            ScrollRequest::DocumentEnd { .. } => ScrollRequest::DocumentEnd { offset },
        }
    }
}

impl fmt::Display for ScrollRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrollRequest::AbsolutePosition(pixels) => write!(f, "position {}", pixels),
            ScrollRequest::ElementTarget { element, offset } => {
                write!(f, "element {} (offset {})", element, offset)
            }
            ScrollRequest::DocumentEnd { offset } => write!(f, "document end (offset {})", offset),
        }
    }
}

/// Resolve a request to a destination within `[0, max_scroll]`
pub fn resolve<V: Viewport + ?Sized>(viewport: &V, request: &ScrollRequest) -> Result<i64> {
    let max_scroll = viewport.max_scroll();

    let raw = match request {
        ScrollRequest::AbsolutePosition(pixels) => *pixels,
        ScrollRequest::ElementTarget { element, offset } => {
            let top = viewport
                .element_top(element)
                .ok_or_else(|| Error::TargetNotFound(element.clone()))?;
            top.saturating_sub(*offset)
        }
        ScrollRequest::DocumentEnd { offset } => {
            (viewport.document_scroll_height() - viewport.viewport_height()).saturating_sub(*offset)
        }
    };

    Ok(raw.clamp(0, max_scroll))
}
