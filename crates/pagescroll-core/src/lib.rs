pub mod config;
pub mod error;
pub mod scheduler;
pub mod viewport;

pub use config::{AppConfig, ConfigSource, EasingType, ScrollConfig};
pub use error::{Error, Result};
pub use scheduler::{Clock, FrameQueue, ManualClock, Scheduler, SystemClock, TickHandle, TokioClock};
pub use viewport::{ElementId, PageLayout, SimulatedPage, Viewport};
