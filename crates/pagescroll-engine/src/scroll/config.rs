//! L4 Atomic Layer: Configuration helpers for page scrolling
//!
//! Re-exports configuration from pagescroll-core and provides additional utilities.

use std::time::Duration;

// Re-export config types from core
pub use pagescroll_core::{EasingType, ScrollConfig};

use pagescroll_core::ElementId;

use super::controller::ScrollOptions;
use super::target::ScrollRequest;

/// Extension trait for ScrollConfig with utility methods
pub trait ScrollConfigExt {
    /// Get animation duration as Duration
    fn animation_duration(&self) -> Duration;

    /// Get the time between animation frames
    fn frame_interval(&self) -> Duration;

    /// Per-request options seeded from this configuration
    fn default_options(&self) -> ScrollOptions;

    /// Element request using the configured offset
    fn element_request(&self, element: impl Into<ElementId>) -> ScrollRequest;

    /// Document-end request using the configured offset
    fn document_end_request(&self) -> ScrollRequest;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    #[inline]
    fn frame_interval(&self) -> Duration {
        if self.frame_rate == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis((1000 / self.frame_rate as u64).max(1))
        }
    }

    fn default_options(&self) -> ScrollOptions {
        let options = ScrollOptions::new(self.duration_ms, self.easing)
            .with_interruptible(self.interruptible);
        match self.speed {
            Some(speed) => options.with_speed(speed),
            None => options,
        }
    }

    fn element_request(&self, element: impl Into<ElementId>) -> ScrollRequest {
        ScrollRequest::element(element).with_offset(self.offset)
    }

    fn document_end_request(&self) -> ScrollRequest {
        ScrollRequest::document_end().with_offset(self.offset)
    }
}
