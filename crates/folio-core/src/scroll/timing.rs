//! Time calculation utilities for scroll and property animations
//!
//! Everything here is driven by explicit elapsed durations handed in by the
//! host's frame loop, never by frame counts.

use std::time::Duration;

/// Calculate animation progress (0.0 to 1.0) from elapsed time and duration
///
/// # Arguments
/// * `elapsed` - Time since the animation started
/// * `duration` - Total animation duration
///
/// # Returns
/// Progress value clamped to [0.0, 1.0]
#[inline]
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
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

/// Position of `value` inside `[start, end]`, clamped to [0, 1]
///
/// A degenerate range acts as a step at `start`.
#[inline]
pub fn inverse_lerp(start: f64, end: f64, value: f64) -> f64 {
    if end <= start {
        return if value >= start { 1.0 } else { 0.0 };
    }
    ((value - start) / (end - start)).clamp(0.0, 1.0)
}

/// Scale a per-frame damping factor to an arbitrary frame length
///
/// `1 - (1 - factor)^(dt / reference)`: applying it over two half-frames
/// covers the same distance as one full frame.
#[inline]
pub fn frame_factor(factor: f64, dt: Duration, reference: Duration) -> f64 {
    let factor = factor.clamp(0.0, 1.0);
    if dt.is_zero() {
        return 0.0;
    }
    if reference.is_zero() || factor >= 1.0 {
        return 1.0;
    }
    let frames = dt.as_secs_f64() / reference.as_secs_f64();
    1.0 - (1.0 - factor).powf(frames)
}
