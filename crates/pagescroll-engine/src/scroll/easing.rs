//! L4 Atomic Layer: Pure easing functions for page scroll animations
//!
//! Provides mathematical easing functions that map input [0, 1] to output [0, 1]
//! with various acceleration curves.

use std::fmt;
use std::sync::Arc;

// Re-export EasingType from core
pub use pagescroll_core::EasingType;

/// Extension trait for EasingType with calculation methods
pub trait EasingTypeExt {
    /// Apply the easing function to a progress value
    ///
    /// # Arguments
    /// * `t` - Progress value in range [0, 1]
    ///
    /// # Returns
    /// Eased value, 0 at t=0 and 1 at t=1
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::EaseInQuad => t * t,
            EasingType::EaseOutQuad => t * (2.0 - t),
            EasingType::EaseInOutQuad => quad_ease_in_out(t),
            EasingType::EaseInOutCubic => cubic_ease_in_out(t),
            EasingType::EaseOutCubic => cubic_ease_out(t),
            EasingType::EaseOutQuint => quintic_ease_out(t),
            EasingType::EaseOutExpo => exponential_ease_out(t),
            EasingType::EaseInOutExpo => exponential_ease_in_out(t),
        }
    }
}

#[inline]
fn quad_ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

#[inline]
fn cubic_ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = 2.0 * t - 2.0;
        (t - 1.0) * u * u + 1.0
    }
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Quintic ease-out: f(t) = 1 - (1-t)⁵
#[inline]
fn quintic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

/// Exponential ease-out: f(t) = 1 - 2^(-10t)
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

#[inline]
fn exponential_ease_in_out(t: f64) -> f64 {
    if t <= 0.0 {
        0.0
    } else if t >= 1.0 {
        1.0
    } else if t < 0.5 {
        2.0_f64.powf(20.0 * t - 10.0) / 2.0
    } else {
        (2.0 - 2.0_f64.powf(-20.0 * t + 10.0)) / 2.0
    }
}

/// Caller-supplied easing curve
pub type EasingFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Easing used by a scroll animation: a named curve or a custom function
///
/// Custom functions are not validated; whatever they return drives the
/// interpolation.
#[derive(Clone)]
pub enum Easing {
    Named(EasingType),
    Custom(EasingFn),
}

impl Easing {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Easing::Custom(Arc::new(f))
    }

    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Easing::Named(easing) => easing.apply(t),
            Easing::Custom(f) => f(t),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Named(EasingType::default())
    }
}

impl From<EasingType> for Easing {
    fn from(easing: EasingType) -> Self {
        Easing::Named(easing)
    }
}

impl fmt::Debug for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Named(easing) => write!(f, "Easing({})", easing),
            Easing::Custom(_) => f.write_str("Easing(custom)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_boundaries() {
        for easing in EasingType::ALL {
            assert!((easing.apply(0.0) - 0.0).abs() < 0.001, "{:?} at t=0", easing);
            assert_eq!(easing.apply(1.0), 1.0, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in EasingType::ALL {
            let mut prev = 0.0;
            for i in 0..=20 {
                let t = i as f64 / 20.0;
                let v = easing.apply(t);
                assert!(v >= prev, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_ease_in_out_against_linear() {
        for easing in [
            EasingType::EaseInOutQuad,
            EasingType::EaseInOutCubic,
            EasingType::EaseInOutExpo,
        ] {
            assert!(easing.apply(0.25) < 0.25, "{:?} at t=0.25", easing);
            assert!(easing.apply(0.75) > 0.75, "{:?} at t=0.75", easing);
        }
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(EasingType::Linear.apply(-0.5), 0.0);
        assert_eq!(EasingType::EaseOutCubic.apply(1.5), 1.0);
    }

    #[test]
    fn test_custom_easing_is_not_validated() {
        let overshoot = Easing::custom(|t| t * 1.5);
        assert_eq!(overshoot.apply(1.0), 1.5);

        let named: Easing = EasingType::Linear.into();
        assert_eq!(named.apply(0.4), 0.4);
        assert_eq!(format!("{:?}", overshoot), "Easing(custom)");
    }
}
