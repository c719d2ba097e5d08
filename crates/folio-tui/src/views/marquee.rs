use std::time::Duration;

use anyhow::Result;
use folio_core::animation::{
    AnimationHandle, ComponentId, ElementId, Property, PropertyTimeline, ScrollRange, TriggerSpec,
};
use folio_core::Stage;
use tracing::debug;

use super::View;
use crate::layout::{BlockKind, PageLayout};
use crate::paint;

/// Fraction of one text segment travelled across the block's pass
const TRAVEL: f64 = 0.7;

pub struct MarqueeView {
    component: ComponentId,
    pub text: String,
    pub element: ElementId,
    handle: Option<AnimationHandle>,
}

impl MarqueeView {
    pub fn mount(stage: &mut Stage, layout: &PageLayout, text: &str) -> Result<Self> {
        let component = stage.mount("marquee");
        let element = stage.binding_mut().create_element(component, "text")?;
        stage.finish_mount(component)?;

        let mut view = Self {
            component,
            text: text.to_string(),
            element,
            handle: None,
        };
        view.bind_scrub(stage, layout);
        Ok(view)
    }

    /// Width in cells of one repetition, at least the screen width
    pub fn segment_width(&self, layout: &PageLayout) -> u16 {
        paint::cells(&self.text).max(layout.width).max(1)
    }

    /// Scrub range depends on geometry, so it is rebound on every relayout
    fn bind_scrub(&mut self, stage: &mut Stage, layout: &PageLayout) {
        if let Some(handle) = self.handle.take() {
            stage.binding_mut().unbind(handle);
        }
        let block = layout.bounds_of(BlockKind::Marquee);
        let range = ScrollRange::through_viewport(
            block.top,
            block.bottom,
            stage.viewport_height(),
            stage.total_scrollable_height(),
        );
        let travel = f64::from(self.segment_width(layout)) * TRAVEL;
        let timeline = PropertyTimeline::new(Duration::from_millis(1))
            .track(Property::TranslateX, 0.0, -travel);

        let binding = stage.binding_mut();
        binding.set_element_bounds(self.element, block);
        self.handle = binding.bind(self.element, TriggerSpec::ScrollRange(range), timeline);
        debug!(start = range.start, end = range.end, travel, "Marquee scrub bound");
    }
}

impl View for MarqueeView {
    fn component(&self) -> ComponentId {
        self.component
    }

    fn relayout(&mut self, stage: &mut Stage, layout: &PageLayout) {
        self.bind_scrub(stage, layout);
    }
}
