//! Pure easing functions for commanded scrolls and property timelines
//!
//! Every curve maps input [0, 1] to output [0, 1] at the endpoints; only
//! `ElasticOut` leaves that range in between.

use std::f64::consts::PI;

pub use crate::config::EasingType;

impl EasingType {
    /// Apply the easing function to a progress value
    ///
    /// # Arguments
    /// * `t` - Progress value in range [0, 1]
    ///
    /// # Returns
    /// Eased value, 0 at `t = 0` and 1 at `t = 1`
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::Cubic => power_out(t, 3),
            EasingType::Quintic => power_out(t, 5),
            EasingType::EaseOut => exponential_ease_out(t),
            EasingType::Power1Out => power_out(t, 2),
            EasingType::Power3Out => power_out(t, 4),
            EasingType::Power3InOut => power_in_out(t, 4),
            EasingType::Power4InOut => power_in_out(t, 5),
            EasingType::ExpoInOut => expo_in_out(t),
            EasingType::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            EasingType::ElasticOut => elastic_out(t),
        }
    }

    /// Whether the curve never decreases
    pub fn is_monotonic(&self) -> bool {
        !matches!(self, EasingType::ElasticOut)
    }
}

/// Power ease-out: f(t) = 1 - (1-t)^n
#[inline]
fn power_out(t: f64, exponent: i32) -> f64 {
    1.0 - (1.0 - t).powi(exponent)
}

/// Power ease-in-out, symmetric around t = 0.5
#[inline]
fn power_in_out(t: f64, exponent: i32) -> f64 {
    if t < 0.5 {
        2f64.powi(exponent - 1) * t.powi(exponent)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(exponent) / 2.0
    }
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
fn expo_in_out(t: f64) -> f64 {
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

/// Elastic ease-out with amplitude 1 and period 0.5
#[inline]
fn elastic_out(t: f64) -> f64 {
    const PERIOD: f64 = 0.5;
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let shift = PERIOD / 4.0;
    2.0_f64.powf(-10.0 * t) * ((t - shift) * (2.0 * PI) / PERIOD).sin() + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingType; 12] = [
        EasingType::None,
        EasingType::Linear,
        EasingType::Cubic,
        EasingType::Quintic,
        EasingType::EaseOut,
        EasingType::Power1Out,
        EasingType::Power3Out,
        EasingType::Power3InOut,
        EasingType::Power4InOut,
        EasingType::ExpoInOut,
        EasingType::SineInOut,
        EasingType::ElasticOut,
    ];

    #[test]
    fn test_easing_boundaries() {
        for easing in ALL {
            if easing != EasingType::None {
                assert!(easing.apply(0.0).abs() < 0.001, "{:?} at t=0", easing);
            }
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in ALL.into_iter().filter(EasingType::is_monotonic) {
            let mut prev = 0.0;
            for i in 0..=20 {
                let t = i as f64 / 20.0;
                let v = easing.apply(t);
                assert!(v >= prev - 1e-12, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_in_out_curves_are_symmetric() {
        for easing in [
            EasingType::Power3InOut,
            EasingType::Power4InOut,
            EasingType::ExpoInOut,
            EasingType::SineInOut,
        ] {
            assert!((easing.apply(0.5) - 0.5).abs() < 1e-9, "{:?}", easing);
            let a = easing.apply(0.2);
            let b = easing.apply(0.8);
            assert!((a + b - 1.0).abs() < 1e-9, "{:?}", easing);
        }
    }

    #[test]
    fn test_elastic_overshoots() {
        let peak = (1..100)
            .map(|i| EasingType::ElasticOut.apply(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(EasingType::Linear.apply(-0.5), 0.0);
        assert_eq!(EasingType::Linear.apply(1.5), 1.0);
    }
}
