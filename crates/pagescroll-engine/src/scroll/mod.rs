//! Smooth page scrolling
//!
//! Animates a viewport's vertical offset from its current value to a resolved
//! target with configurable duration and easing.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing functions (quadratic, cubic, quintic, exponential)
//! - `timing` - Time calculation utilities (progress, interpolation)
//! - `target` - Scroll request resolution against the viewport layout
//! - `config` - Configuration types and defaults (re-exported from pagescroll-core)
//!
//! ## L3 Molecular Layer
//! - `animation` - Animation sessions and the animator that ticks them
//! - `event` - Completion notifications and lifecycle events
//!
//! ## L2 Organism Layer
//! - `controller` - Public facade owning one viewport's animation state
//!
//! # Usage
//!
//! ```ignore
//! use pagescroll_core::{FrameQueue, ScrollConfig, SimulatedPage, SystemClock};
//! use pagescroll_engine::{ScrollController, ScrollOptions, ScrollRequest, EasingType};
//!
//! let page = SimulatedPage::new(800, 3000).with_element("head7", 1000);
//! let mut controller = ScrollController::new(
//!     page,
//!     SystemClock::new(),
//!     FrameQueue::new(),
//!     ScrollConfig::default(),
//! );
//!
//! let handle = controller.scroll_to(
//!     ScrollRequest::element("head7").with_offset(150),
//!     ScrollOptions::new(1250, EasingType::EaseInOutQuad),
//! )?;
//!
//! // In main loop, run one frame at a time
//! while controller.is_animating() {
//!     controller.run_frame();
//! }
//! ```

// L4 Atomic Layer
pub mod config;
pub mod easing;
pub mod target;
pub mod timing;

// L3 Molecular Layer
pub mod animation;
pub mod event;

// L2 Organism Layer
pub mod controller;

// Re-exports for convenient access
pub use animation::{AnimationSession, ScrollAnimator, TickOutcome};
pub use config::{ScrollConfig, ScrollConfigExt};
pub use controller::{ScrollController, ScrollOptions, ScrollState};
pub use easing::{Easing, EasingType, EasingTypeExt};
pub use event::{ScrollCompletion, ScrollEvent, ScrollHandle};
pub use target::ScrollRequest;
