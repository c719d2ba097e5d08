//! Property timelines: what values an element moves through, and how fast

use std::time::Duration;

use super::props::Property;
use crate::scroll::timing::{inverse_lerp, lerp};
use crate::config::EasingType;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub property: Property,
    pub from: f64,
    pub to: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    #[default]
    Once,
    /// Ping-pong between `from` and `to` forever
    Yoyo,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyTimeline {
    pub tracks: Vec<Track>,
    pub duration: Duration,
    pub delay: Duration,
    pub easing: EasingType,
    pub repeat: Repeat,
}

impl PropertyTimeline {
    pub fn new(duration: Duration) -> Self {
        Self {
            tracks: Vec::new(),
            duration,
            delay: Duration::ZERO,
            easing: EasingType::Linear,
            repeat: Repeat::Once,
        }
    }

    pub fn track(mut self, property: Property, from: f64, to: f64) -> Self {
        self.tracks.push(Track { property, from, to });
        self
    }

    pub fn easing(mut self, easing: EasingType) -> Self {
        self.easing = easing;
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn yoyo(mut self) -> Self {
        self.repeat = Repeat::Yoyo;
        self
    }

    /// Delay plus one pass; infinite playback for yoyo timelines is not counted
    pub fn total_duration(&self) -> Duration {
        self.delay + self.duration
    }

    /// Un-eased position within the current pass at elapsed time `time` (seconds)
    pub fn local_progress(&self, time: f64) -> f64 {
        let active = time - self.delay.as_secs_f64();
        if active <= 0.0 {
            return 0.0;
        }
        let duration = self.duration.as_secs_f64();
        if duration <= 0.0 {
            return 1.0;
        }
        let cycles = active / duration;
        match self.repeat {
            Repeat::Once => cycles.min(1.0),
            Repeat::Yoyo => {
                let phase = cycles % 2.0;
                if phase <= 1.0 {
                    phase
                } else {
                    2.0 - phase
                }
            }
        }
    }

    /// Eased values at elapsed time `time` (seconds)
    pub fn sample_at(&self, time: f64) -> Vec<(Property, f64)> {
        let t = self.easing.apply(self.local_progress(time));
        self.values_at(t)
    }

    /// Values at a scrub position, linear in `position` (no easing)
    pub fn sample_scrub(&self, position: f64) -> Vec<(Property, f64)> {
        self.values_at(position.clamp(0.0, 1.0))
    }

    fn values_at(&self, t: f64) -> Vec<(Property, f64)> {
        self.tracks
            .iter()
            .map(|track| (track.property, lerp(track.from, track.to, t)))
            .collect()
    }

    /// Whether a single pass has finished at `time` (seconds)
    pub fn is_finished_at(&self, time: f64) -> bool {
        self.repeat == Repeat::Once && time >= self.total_duration().as_secs_f64()
    }
}

/// Scrub interval in global progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRange {
    pub start: f64,
    pub end: f64,
}

impl ScrollRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// The whole page
    pub fn full() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Progress interval while a block travels through the viewport, from
    /// its top meeting the viewport bottom to its bottom leaving the top
    pub fn through_viewport(
        top: f64,
        bottom: f64,
        viewport_height: f64,
        total_scrollable_height: f64,
    ) -> Self {
        if total_scrollable_height <= 0.0 {
            return Self::full();
        }
        let start = (top - viewport_height) / total_scrollable_height;
        let end = bottom / total_scrollable_height;
        Self::new(start, end)
    }

    /// Position of `progress` in this range, clamped to [0, 1]
    pub fn position(&self, progress: f64) -> f64 {
        inverse_lerp(self.start, self.end, progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fade_up() -> PropertyTimeline {
        PropertyTimeline::new(Duration::from_millis(1000))
            .track(Property::Opacity, 0.0, 1.0)
            .track(Property::TranslateY, 60.0, 0.0)
    }

    #[test]
    fn test_sample_endpoints() {
        let timeline = fade_up();
        assert_eq!(timeline.sample_at(0.0), vec![(Property::Opacity, 0.0), (Property::TranslateY, 60.0)]);
        assert_eq!(timeline.sample_at(5.0), vec![(Property::Opacity, 1.0), (Property::TranslateY, 0.0)]);
    }

    #[test]
    fn test_delay_holds_from_values() {
        let timeline = fade_up().delay(Duration::from_millis(500));
        assert_eq!(timeline.local_progress(0.4), 0.0);
        assert!((timeline.local_progress(1.0) - 0.5).abs() < 1e-9);
        assert_eq!(timeline.total_duration(), Duration::from_millis(1500));
        assert!(!timeline.is_finished_at(1.4));
        assert!(timeline.is_finished_at(1.5));
    }

    #[test]
    fn test_yoyo_ping_pongs() {
        let timeline = fade_up().yoyo();
        assert!((timeline.local_progress(0.5) - 0.5).abs() < 1e-9);
        assert!((timeline.local_progress(1.5) - 0.5).abs() < 1e-9);
        assert!(timeline.local_progress(2.0).abs() < 1e-9);
        assert!(!timeline.is_finished_at(100.0));
    }

    #[test]
    fn test_scrub_is_not_eased() {
        let timeline = fade_up().easing(EasingType::Power3Out);
        let values = timeline.sample_scrub(0.25);
        assert_eq!(values[0], (Property::Opacity, 0.25));
    }

    #[test]
    fn test_range_position() {
        let range = ScrollRange::new(0.2, 0.6);
        assert_eq!(range.position(0.1), 0.0);
        assert!((range.position(0.4) - 0.5).abs() < 1e-9);
        assert_eq!(range.position(0.9), 1.0);
    }

    #[test]
    fn test_through_viewport() {
        // block 200..300, viewport 100, scrollable 400
        let range = ScrollRange::through_viewport(200.0, 300.0, 100.0, 400.0);
        assert!((range.start - 0.25).abs() < 1e-9);
        assert!((range.end - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_through_viewport_keeps_blocks_near_top_mid_range() {
        // block 10..20 is already on screen at progress 0
        let range = ScrollRange::through_viewport(10.0, 20.0, 100.0, 400.0);
        assert!((range.start + 0.225).abs() < 1e-9);
        assert!((range.end - 0.05).abs() < 1e-9);
        assert!((range.position(0.0) - 0.225 / 0.275).abs() < 1e-9);
        assert_eq!(range.position(0.05), 1.0);
    }
}
