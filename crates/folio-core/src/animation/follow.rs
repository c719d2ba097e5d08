//! Retargetable tween for a point chasing a moving target
//!
//! Every new target restarts the tween from wherever the point is now, so a
//! stream of pointer moves never snaps.

use std::time::Duration;

use crate::config::EasingType;
use crate::scroll::timing::{is_complete, lerp, progress};

#[derive(Debug, Clone)]
pub struct Follow {
    duration: Duration,
    easing: EasingType,
    from: (f64, f64),
    to: (f64, f64),
    value: Option<(f64, f64)>,
    elapsed: Duration,
}

impl Follow {
    pub fn new(duration: Duration, easing: EasingType) -> Self {
        Self {
            duration,
            easing,
            from: (0.0, 0.0),
            to: (0.0, 0.0),
            value: None,
            elapsed: Duration::ZERO,
        }
    }

    /// Chase a new target; the first one places the point directly
    pub fn retarget(&mut self, x: f64, y: f64) {
        match self.value {
            Some(current) => {
                self.from = current;
                self.elapsed = Duration::ZERO;
            }
            None => {
                self.value = Some((x, y));
                self.from = (x, y);
                self.elapsed = self.duration;
            }
        }
        self.to = (x, y);
    }

    /// Advance by `dt` and return the current point
    pub fn step(&mut self, dt: Duration) -> Option<(f64, f64)> {
        if self.value.is_none() || self.is_settled() {
            return self.value;
        }
        self.elapsed += dt;
        let t = self.easing.apply(progress(self.elapsed, self.duration));
        self.value = Some((
            lerp(self.from.0, self.to.0, t),
            lerp(self.from.1, self.to.1, t),
        ));
        self.value
    }

    pub fn position(&self) -> Option<(f64, f64)> {
        self.value
    }

    pub fn target(&self) -> Option<(f64, f64)> {
        self.value.map(|_| self.to)
    }

    pub fn is_settled(&self) -> bool {
        is_complete(self.elapsed, self.duration)
    }

    /// Forget the point until the next target
    pub fn hide(&mut self) {
        self.value = None;
        self.elapsed = self.duration;
    }
}
