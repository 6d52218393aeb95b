//! Viewport collaborator interface
//!
//! The scroll engine never touches a real document. Everything it needs to
//! know about layout, and the single write it performs, go through the
//! [`Viewport`] trait.

mod page;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use page::{PageLayout, SimulatedPage};

/// Reference to an element in the document, by id
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Read/write access to the document viewport's vertical scroll state
///
/// All values are in CSS pixels.
pub trait Viewport {
    /// Current vertical scroll offset
    fn current_scroll_offset(&self) -> i64;

    /// Height of the visible area
    fn viewport_height(&self) -> i64;

    /// Full scrollable height of the document
    fn document_scroll_height(&self) -> i64;

    /// Top edge of an element relative to the document, or `None` if the
    /// element is not part of the document
    fn element_top(&self, element: &ElementId) -> Option<i64>;

    /// Move the viewport to a new vertical offset
    fn set_scroll_offset(&mut self, offset: i64);

    /// Largest reachable scroll offset, floored at zero
    fn max_scroll(&self) -> i64 {
        (self.document_scroll_height() - self.viewport_height()).max(0)
    }
}

impl<V: Viewport + ?Sized> Viewport for &mut V {
    fn current_scroll_offset(&self) -> i64 {
        (**self).current_scroll_offset()
    }

    fn viewport_height(&self) -> i64 {
        (**self).viewport_height()
    }

    fn document_scroll_height(&self) -> i64 {
        (**self).document_scroll_height()
    }

    fn element_top(&self, element: &ElementId) -> Option<i64> {
        (**self).element_top(element)
    }

    fn set_scroll_offset(&mut self, offset: i64) {
        (**self).set_scroll_offset(offset)
    }
}
