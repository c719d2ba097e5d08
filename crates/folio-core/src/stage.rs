//! Root context owning the scroll pipeline for one page
//!
//! A `Stage` is created by the host, handed to components while they mount,
//! and ticked once per frame. There is no global state behind it.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::animation::{AnimationBinding, BindingEvent, ComponentId, Teardown};
use crate::config::AppConfig;
use crate::navigation::NavigationController;
use crate::scroll::{NativeInput, ScrollSignal, ScrollState, SmoothScrollDriver};
use crate::section::{SectionDescriptor, SectionRegistry};
use crate::Result;

pub struct Stage {
    config: AppConfig,
    driver: SmoothScrollDriver,
    signal: ScrollSignal,
    registry: SectionRegistry,
    binding: AnimationBinding,
    navigation: NavigationController,
    document_height: f64,
    viewport_height: f64,
    state: ScrollState,
    destroyed: bool,
}

impl Stage {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            config: config.clone(),
            driver: SmoothScrollDriver::new(config.scroll.clone()),
            signal: ScrollSignal::new(config.sections.active_line_ratio),
            registry: SectionRegistry::new(),
            binding: AnimationBinding::new(config.animation.seed),
            navigation: NavigationController::new(&config.navigation),
            document_height: 0.0,
            viewport_height: 0.0,
            state: ScrollState::default(),
            destroyed: false,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Snapshot written by the last tick
    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn binding(&self) -> &AnimationBinding {
        &self.binding
    }

    pub fn binding_mut(&mut self) -> &mut AnimationBinding {
        &mut self.binding
    }

    pub fn driver(&self) -> &SmoothScrollDriver {
        &self.driver
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    pub fn document_height(&self) -> f64 {
        self.document_height
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub fn total_scrollable_height(&self) -> f64 {
        self.signal.total_scrollable_height()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// New layout metrics from the host
    pub fn resize(&mut self, document_height: f64, viewport_height: f64) {
        let document_height = if document_height.is_finite() { document_height.max(0.0) } else { 0.0 };
        let viewport_height = if viewport_height.is_finite() { viewport_height.max(0.0) } else { 0.0 };
        let total = (document_height - viewport_height).max(0.0);

        self.document_height = document_height;
        self.viewport_height = viewport_height;
        self.driver.set_max_extent(total);
        self.signal.set_layout(total, viewport_height);
        debug!(document_height, viewport_height, total, "Stage resized");
    }

    pub fn on_input(&mut self, input: NativeInput) {
        if self.destroyed {
            return;
        }
        self.driver.on_input(input);
    }

    /// Raw delta in document units, e.g. a page step
    pub fn scroll_by(&mut self, delta: f64) {
        if self.destroyed {
            return;
        }
        self.driver.on_native_delta(delta);
    }

    /// Commanded scroll to a registered section
    pub fn go_to(&mut self, section_id: &str) -> bool {
        if self.destroyed {
            warn!(section = %section_id, "Navigation on a destroyed stage ignored");
            return false;
        }
        self.navigation
            .go_to(section_id, &mut self.driver, &self.registry)
    }

    /// Scroll to the section after the active one, wrapping around
    pub fn go_to_next(&mut self) -> bool {
        let current = self
            .driver
            .trajectory_target()
            .or(self.state.active_section_id.as_deref());
        match self.navigation.next_section(current, &self.registry) {
            Some(next) => self.go_to(&next),
            None => false,
        }
    }

    /// The "Connect" affordance
    pub fn go_to_connect(&mut self) -> bool {
        let target = self.navigation.connect_section().to_string();
        self.go_to(&target)
    }

    pub fn shows_connect(&self) -> bool {
        self.navigation
            .shows_connect(self.state.active_section_id.as_deref())
    }

    /// Smooth scroll to an absolute offset, replacing any commanded scroll
    pub fn scroll_to_offset(&mut self, offset: f64) {
        if self.destroyed {
            return;
        }
        if let Some(section) = self.driver.trajectory_target() {
            debug!(section = %section, offset, "Commanded scroll replaced");
        }
        self.driver.cancel();
        let delta = offset - self.driver.target_offset();
        self.driver.on_native_delta(delta);
    }

    pub fn jump_to(&mut self, offset: f64) {
        self.driver.jump_to(offset);
    }

    // ---- components ----

    pub fn mount(&mut self, name: impl Into<String>) -> ComponentId {
        self.binding.mount(name)
    }

    pub fn finish_mount(&mut self, id: ComponentId) -> Result<()> {
        self.binding.finish_mount(id)
    }

    /// Register a section on behalf of a component; it is unregistered on unmount
    pub fn register_section(&mut self, owner: ComponentId, descriptor: SectionDescriptor) -> Result<()> {
        self.binding.attach_section(owner, &descriptor.id)?;
        self.registry.register(descriptor);
        Ok(())
    }

    /// Unmount a component and drop the sections it registered
    pub fn unmount(&mut self, id: ComponentId) -> Result<Teardown> {
        let teardown = self.binding.unmount(id)?;
        for section in &teardown.sections {
            self.registry.unregister(section);
        }
        Ok(teardown)
    }

    // ---- per-frame ----

    /// The host should keep ticking at animation frame rate
    pub fn needs_frame(&self) -> bool {
        !self.destroyed && (self.driver.needs_frame() || self.binding.is_animating())
    }

    /// One frame: driver step, then signal derivation, then binding render
    pub fn tick(&mut self, dt: Duration) -> &ScrollState {
        if self.destroyed {
            return &self.state;
        }

        let offset = self.driver.step(dt);
        let progress = self.signal.progress(offset);
        let active = self
            .signal
            .resolve_active_section(offset, &self.registry)
            .map(str::to_string);

        if active != self.state.active_section_id {
            info!(
                from = self.state.active_section_id.as_deref().unwrap_or("-"),
                to = active.as_deref().unwrap_or("-"),
                "Active section changed"
            );
        }

        self.state = ScrollState {
            raw_offset: self.driver.target_offset(),
            smoothed_offset: offset,
            progress,
            active_section_id: active,
        };

        self.binding.render(&self.state, self.viewport_height, dt);
        &self.state
    }

    pub fn drain_events(&mut self) -> Vec<BindingEvent> {
        self.binding.drain_events()
    }

    /// Tear everything down; safe to call repeatedly
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        let teardowns = self.binding.unmount_all();
        self.binding.drain_events();
        self.driver.destroy();
        self.registry.clear();
        self.signal.reset();
        self.destroyed = true;
        info!(components = teardowns.len(), "Stage destroyed");
    }
}

impl Drop for Stage {
    fn drop(&mut self) {
        self.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Property, PropertyTimeline, TriggerSpec};
    use crate::section::SectionBounds;

    const FRAME: Duration = Duration::from_millis(16);

    fn stage() -> Stage {
        let mut stage = Stage::new(&AppConfig::default());
        stage.resize(400.0, 100.0);
        let owner = stage.mount("page");
        for (i, id) in ["hero", "work", "contact"].iter().enumerate() {
            let bounds = SectionBounds::from_height(i as f64 * 100.0, 100.0);
            stage
                .register_section(owner, SectionDescriptor::fixed(*id, bounds))
                .unwrap();
        }
        stage.finish_mount(owner).unwrap();
        stage
    }

    #[test]
    fn test_resize_sets_scrollable_height() {
        let stage = stage();
        assert_eq!(stage.total_scrollable_height(), 300.0);
        assert_eq!(stage.driver().max_extent(), 300.0);
    }

    #[test]
    fn test_short_document_has_zero_progress() {
        let mut stage = Stage::new(&AppConfig::default());
        stage.resize(50.0, 100.0);
        stage.on_input(NativeInput::Wheel(10.0));
        assert_eq!(stage.tick(FRAME).progress, 0.0);
    }

    #[test]
    fn test_binding_sees_same_tick_state() {
        let mut stage = stage();
        let owner = stage.mount("marquee");
        let element = stage.binding_mut().create_element(owner, "text").unwrap();
        stage.finish_mount(owner).unwrap();
        let timeline = PropertyTimeline::new(Duration::from_millis(1)).track(Property::TranslateX, 0.0, -100.0);
        stage
            .binding_mut()
            .bind(element, TriggerSpec::scroll_range(0.0, 1.0), timeline)
            .unwrap();

        stage.jump_to(150.0);
        let progress = stage.tick(FRAME).progress;
        let x = stage.binding().element(element).unwrap().props().translate_x;
        assert!((x - progress * -100.0).abs() < 1e-9);
    }

    #[test]
    fn test_go_to_next_wraps() {
        let mut stage = stage();
        stage.tick(FRAME);
        assert_eq!(stage.state().active_section_id.as_deref(), Some("hero"));

        assert!(stage.go_to_next());
        assert_eq!(stage.driver().trajectory_target(), Some("work"));
        assert!(stage.go_to_next());
        assert_eq!(stage.driver().trajectory_target(), Some("contact"));
        assert!(stage.go_to_next());
        assert_eq!(stage.driver().trajectory_target(), Some("hero"));
    }

    #[test]
    fn test_connect_affordance() {
        let mut stage = stage();
        stage.tick(FRAME);
        assert!(stage.shows_connect());
        assert!(stage.go_to_connect());
        for _ in 0..200 {
            stage.tick(FRAME);
        }
        assert_eq!(stage.state().smoothed_offset, 200.0);
        assert!(!stage.shows_connect());
    }

    #[test]
    fn test_unmount_unregisters_sections() {
        let mut stage = stage();
        let owner = stage.binding().component_ids()[0];
        let teardown = stage.unmount(owner).unwrap();
        assert_eq!(teardown.sections.len(), 3);
        assert!(stage.registry().is_empty());
        assert_eq!(stage.tick(FRAME).active_section_id, None);
    }

    #[test]
    fn test_offset_scroll_replaces_navigation() {
        let mut stage = stage();
        assert!(stage.go_to("contact"));
        for _ in 0..20 {
            stage.tick(FRAME);
        }
        assert!(stage.driver().is_animating());

        stage.scroll_to_offset(0.0);
        assert!(!stage.driver().is_animating());
        for _ in 0..400 {
            stage.tick(FRAME);
        }
        assert_eq!(stage.state().smoothed_offset, 0.0);
        assert!(stage.state().is_active("hero"));
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let mut stage = stage();
        stage.destroy();
        stage.destroy();
        assert!(stage.is_destroyed());
        assert!(stage.registry().is_empty());
        assert!(!stage.go_to("hero"));
        assert!(!stage.needs_frame());

        let before = stage.state().clone();
        stage.on_input(NativeInput::Wheel(5.0));
        assert_eq!(stage.tick(FRAME), &before);
    }
}
