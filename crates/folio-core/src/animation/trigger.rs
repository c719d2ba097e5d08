use super::timeline::ScrollRange;
use crate::section::SectionBounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Replay {
    /// Fire on the first entry only
    #[default]
    Once,
    /// Play forward on every entry and backward on every exit
    Reversible,
}

/// What drives a binding's timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerSpec {
    /// Scrubbed directly by global scroll progress
    ScrollRange(ScrollRange),
    /// Played when the visible fraction of the element reaches the threshold
    EnterViewport { threshold_ratio: f64, replay: Replay },
    /// Hover in plays forward, hover out plays backward
    Pointer,
    /// Played as soon as it is bound
    Mount,
}

impl TriggerSpec {
    pub fn scroll_range(start: f64, end: f64) -> Self {
        Self::ScrollRange(ScrollRange::new(start, end))
    }

    pub fn enter_viewport(threshold_ratio: f64) -> Self {
        Self::EnterViewport {
            threshold_ratio,
            replay: Replay::Once,
        }
    }

    pub fn enter_viewport_reversible(threshold_ratio: f64) -> Self {
        Self::EnterViewport {
            threshold_ratio,
            replay: Replay::Reversible,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TriggerSpec::ScrollRange(_) => "scroll-range",
            TriggerSpec::EnterViewport { .. } => "enter-viewport",
            TriggerSpec::Pointer => "pointer",
            TriggerSpec::Mount => "mount",
        }
    }
}

/// Fraction of `bounds` visible in a viewport scrolled to `offset`
///
/// Zero-height elements count as fully visible while inside the viewport.
pub fn intersection_ratio(bounds: SectionBounds, offset: f64, viewport_height: f64) -> f64 {
    if !bounds.is_valid() {
        return 0.0;
    }
    let view_top = offset;
    let view_bottom = offset + viewport_height;
    let height = bounds.height();
    if height <= 0.0 {
        return if bounds.top >= view_top && bounds.top < view_bottom {
            1.0
        } else {
            0.0
        };
    }
    let visible = (bounds.bottom.min(view_bottom) - bounds.top.max(view_top)).max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

/// Whether an element counts as in view for a threshold
///
/// A zero threshold still needs some overlap.
pub fn is_in_view(ratio: f64, threshold_ratio: f64) -> bool {
    let threshold = threshold_ratio.clamp(0.0, 1.0);
    if threshold <= 0.0 {
        ratio > 0.0
    } else {
        ratio >= threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_outside_viewport() {
        let bounds = SectionBounds::new(500.0, 600.0);
        assert_eq!(intersection_ratio(bounds, 0.0, 100.0), 0.0);
    }

    #[test]
    fn test_ratio_partial() {
        let bounds = SectionBounds::new(80.0, 120.0);
        assert!((intersection_ratio(bounds, 0.0, 100.0) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_full() {
        let bounds = SectionBounds::new(10.0, 20.0);
        assert_eq!(intersection_ratio(bounds, 0.0, 100.0), 1.0);
    }

    #[test]
    fn test_zero_height_element() {
        let bounds = SectionBounds::new(50.0, 50.0);
        assert_eq!(intersection_ratio(bounds, 0.0, 100.0), 1.0);
        assert_eq!(intersection_ratio(bounds, 60.0, 100.0), 0.0);
    }

    #[test]
    fn test_in_view_threshold() {
        assert!(!is_in_view(0.0, 0.0));
        assert!(is_in_view(0.01, 0.0));
        assert!(!is_in_view(0.2, 0.25));
        assert!(is_in_view(0.25, 0.25));
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(TriggerSpec::Pointer.kind(), "pointer");
        assert_eq!(TriggerSpec::enter_viewport(0.2).kind(), "enter-viewport");
    }
}
