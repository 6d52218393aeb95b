//! Time and frame scheduling abstractions
//!
//! Animation progress is measured against a [`Clock`] and advanced by ticks
//! handed out by a [`Scheduler`]. Both are injected so that tests can run
//! animations against virtual time.

mod clock;
mod frames;

pub use clock::{Clock, ManualClock, SystemClock, TokioClock};
pub use frames::{FrameQueue, Scheduler, TickHandle};
