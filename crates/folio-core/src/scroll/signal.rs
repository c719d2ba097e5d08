//! Derives normalized progress and the active section from the smoothed offset

use tracing::{debug, trace};

use crate::section::SectionRegistry;

/// `clamp(offset / total, 0, 1)`; a document that fits the viewport is at 0
#[inline]
pub fn compute_progress(offset: f64, total_scrollable_height: f64) -> f64 {
    if !(total_scrollable_height > 0.0) || !offset.is_finite() {
        return 0.0;
    }
    (offset / total_scrollable_height).clamp(0.0, 1.0)
}

#[derive(Debug, Clone)]
pub struct ScrollSignal {
    /// Viewport fraction of the activation line
    active_line_ratio: f64,
    total_scrollable_height: f64,
    viewport_height: f64,
    /// Sections whose band contained the line at the last resolution
    inside: Vec<String>,
    active: Option<String>,
}

impl ScrollSignal {
    pub fn new(active_line_ratio: f64) -> Self {
        Self {
            active_line_ratio: active_line_ratio.clamp(0.0, 1.0),
            total_scrollable_height: 0.0,
            viewport_height: 0.0,
            inside: Vec::new(),
            active: None,
        }
    }

    /// Record new layout metrics; call on every resize
    pub fn set_layout(&mut self, total_scrollable_height: f64, viewport_height: f64) {
        self.total_scrollable_height = total_scrollable_height.max(0.0);
        self.viewport_height = viewport_height.max(0.0);
    }

    pub fn total_scrollable_height(&self) -> f64 {
        self.total_scrollable_height
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Document offset of the activation line for a scroll offset
    pub fn active_line(&self, offset: f64) -> f64 {
        offset + self.viewport_height * self.active_line_ratio
    }

    pub fn progress(&self, offset: f64) -> f64 {
        compute_progress(offset, self.total_scrollable_height)
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Update and return the active section for `offset`
    ///
    /// A section activates when the line enters its band from either side
    /// and stays active until another band is entered.
    pub fn resolve_active_section(
        &mut self,
        offset: f64,
        registry: &SectionRegistry,
    ) -> Option<&str> {
        if registry.is_empty() {
            self.inside.clear();
            self.active = None;
            return None;
        }

        if let Some(active) = &self.active {
            if !registry.contains(active) {
                debug!(section = %active, "Active section unregistered, resolving again");
                self.active = None;
                self.inside.clear();
            }
        }

        let line = self.active_line(offset);
        let mut now_inside = Vec::new();
        for descriptor in registry.get_all() {
            let bounds = descriptor.bounds();
            if !bounds.is_valid() {
                trace!(section = %descriptor.id, ?bounds, "Skipping stale section geometry");
                continue;
            }
            if bounds.contains(line) {
                now_inside.push(descriptor.id.clone());
            }
        }

        // Last newly entered band in registration order wins
        let entered = now_inside
            .iter()
            .filter(|id| !self.inside.contains(id))
            .last()
            .cloned();

        if let Some(id) = entered {
            if self.active.as_deref() != Some(id.as_str()) {
                debug!(section = %id, line, "Section became active");
            }
            self.active = Some(id);
        } else if self.active.is_none() {
            self.active = registry.first_id().map(str::to_string);
        }

        self.inside = now_inside;
        self.active.as_deref()
    }

    /// Forget band history, e.g. after the registry was rebuilt
    pub fn reset(&mut self) {
        self.inside.clear();
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::{SectionBounds, SectionDescriptor};

    const VIEWPORT: f64 = 100.0;

    fn stacked() -> SectionRegistry {
        let mut registry = SectionRegistry::new();
        registry.register(SectionDescriptor::fixed("hero", SectionBounds::new(0.0, 100.0)));
        registry.register(SectionDescriptor::fixed("work", SectionBounds::new(100.0, 300.0)));
        registry.register(SectionDescriptor::fixed("contact", SectionBounds::new(300.0, 400.0)));
        registry
    }

    fn signal() -> ScrollSignal {
        let mut signal = ScrollSignal::new(0.4);
        signal.set_layout(300.0, VIEWPORT);
        signal
    }

    #[test]
    fn test_compute_progress_clamps() {
        assert_eq!(compute_progress(-10.0, 100.0), 0.0);
        assert!((compute_progress(25.0, 100.0) - 0.25).abs() < 1e-9);
        assert_eq!(compute_progress(150.0, 100.0), 1.0);
    }

    #[test]
    fn test_compute_progress_without_scrollable_height() {
        assert_eq!(compute_progress(10.0, 0.0), 0.0);
        assert_eq!(compute_progress(10.0, -5.0), 0.0);
    }

    #[test]
    fn test_first_section_active_at_top() {
        let registry = stacked();
        let mut signal = signal();
        assert_eq!(signal.resolve_active_section(0.0, &registry), Some("hero"));
    }

    #[test]
    fn test_crossing_points_activate_in_order() {
        let registry = stacked();
        let mut signal = signal();
        // line = offset + 40 lands exactly on each section top
        assert_eq!(signal.resolve_active_section(60.0, &registry), Some("work"));
        assert_eq!(signal.resolve_active_section(260.0, &registry), Some("contact"));
    }

    #[test]
    fn test_just_before_crossing_keeps_previous() {
        let registry = stacked();
        let mut signal = signal();
        signal.resolve_active_section(0.0, &registry);
        assert_eq!(signal.resolve_active_section(59.9, &registry), Some("hero"));
    }

    #[test]
    fn test_enter_back_when_scrolling_up() {
        let registry = stacked();
        let mut signal = signal();
        signal.resolve_active_section(260.0, &registry);
        assert_eq!(signal.resolve_active_section(100.0, &registry), Some("work"));
    }

    #[test]
    fn test_stays_active_in_gap() {
        let mut registry = SectionRegistry::new();
        registry.register(SectionDescriptor::fixed("a", SectionBounds::new(0.0, 50.0)));
        registry.register(SectionDescriptor::fixed("b", SectionBounds::new(200.0, 300.0)));
        let mut signal = signal();

        signal.resolve_active_section(0.0, &registry);
        // line at 90 is in no band; "a" stays active
        assert_eq!(signal.resolve_active_section(50.0, &registry), Some("a"));
    }

    #[test]
    fn test_overlap_most_recently_entered_wins() {
        let mut registry = SectionRegistry::new();
        registry.register(SectionDescriptor::fixed("a", SectionBounds::new(0.0, 200.0)));
        registry.register(SectionDescriptor::fixed("b", SectionBounds::new(100.0, 300.0)));
        let mut signal = signal();

        assert_eq!(signal.resolve_active_section(0.0, &registry), Some("a"));
        // line 140 is in both bands, only "b" was newly entered
        assert_eq!(signal.resolve_active_section(100.0, &registry), Some("b"));
    }

    #[test]
    fn test_before_any_band_defaults_to_first() {
        let mut registry = SectionRegistry::new();
        registry.register(SectionDescriptor::fixed("late", SectionBounds::new(500.0, 600.0)));
        let mut signal = signal();
        assert_eq!(signal.resolve_active_section(0.0, &registry), Some("late"));
    }

    #[test]
    fn test_empty_registry_has_no_active_section() {
        let registry = SectionRegistry::new();
        let mut signal = signal();
        assert_eq!(signal.resolve_active_section(10.0, &registry), None);
        assert!((signal.progress(150.0) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_stale_bounds_skipped() {
        let mut registry = SectionRegistry::new();
        registry.register(SectionDescriptor::fixed("hero", SectionBounds::new(0.0, 100.0)));
        registry.register(SectionDescriptor::fixed(
            "broken",
            SectionBounds::new(f64::NAN, f64::NAN),
        ));
        let mut signal = signal();
        assert_eq!(signal.resolve_active_section(10.0, &registry), Some("hero"));
    }

    #[test]
    fn test_unregistered_active_resolves_again() {
        let mut registry = stacked();
        let mut signal = signal();
        signal.resolve_active_section(60.0, &registry);
        registry.unregister("work");
        assert_eq!(signal.resolve_active_section(60.0, &registry), Some("hero"));
    }
}
