pub mod driver;
pub mod scroll;

pub use driver::drive;
pub use scroll::{
    Easing, EasingType, EasingTypeExt, ScrollAnimator, ScrollCompletion, ScrollConfig,
    ScrollConfigExt, ScrollController, ScrollEvent, ScrollHandle, ScrollOptions, ScrollRequest,
    ScrollState,
};
