//! L4 Atomic Layer: Time calculation utilities for scroll animations
//!
//! Provides pure functions for calculating animation progress and interpolation.

use std::time::Duration;

use pagescroll_core::{Error, Result};

/// Calculate animation progress (0.0 to 1.0) from elapsed time and duration
///
/// Returns exactly 1.0 once `elapsed` reaches `duration`, so the terminal
/// frame can never be skipped by floating point drift.
#[inline]
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if is_complete(elapsed, duration) {
        return 1.0;
    }
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if animation is complete
#[inline]
pub fn is_complete(elapsed: Duration, duration: Duration) -> bool {
    elapsed >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Linear interpolation for pixel offsets, rounded to the nearest pixel
#[inline]
pub fn lerp_px(from: i64, to: i64, t: f64) -> i64 {
    lerp(from as f64, to as f64, t).round() as i64
}

/// Duration needed to cover `distance` pixels at `speed` pixels per second
///
/// Never shorter than one millisecond.
pub fn duration_for_speed(distance: i64, speed: f64) -> Result<Duration> {
    if !speed.is_finite() || speed <= 0.0 {
        return Err(Error::InvalidSpeed(speed));
    }
    let ms = (distance.unsigned_abs() as f64 / speed * 1000.0).round() as u64;
    Ok(Duration::from_millis(ms.max(1)))
}
