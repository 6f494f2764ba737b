//! Time calculation utilities for scroll animations
//!
//! Everything here is a pure function of elapsed time, so animations can be
//! driven by any clock (or none, in tests).

use std::time::Duration;

/// Calculate animation progress (0.0 to 1.0) from elapsed time and duration
#[inline]
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if an animation of `duration` has run its course
#[inline]
pub fn is_complete(elapsed: Duration, duration: Duration) -> bool {
    elapsed >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Linear interpolation for scroll positions, rounded to the nearest cell
#[inline]
pub fn lerp_usize(from: usize, to: usize, t: f64) -> usize {
    lerp(from as f64, to as f64, t).round().max(0.0) as usize
}
