use std::time::Duration;

use anyhow::Result;
use folio_core::animation::{
    AnimationHandle, ComponentId, ElementId, Property, PropertyTimeline, ScrollRange, TriggerSpec,
};
use folio_core::Stage;

use super::View;
use crate::layout::PageLayout;

/// Screen-fixed background shape scrubbed by page progress
#[derive(Debug, Clone)]
pub struct ParallaxShape {
    pub element: ElementId,
    pub glyph: &'static str,
    /// Screen position as fractions of the viewport
    pub x_ratio: f64,
    pub y_ratio: f64,
    speed: f64,
    direction: f64,
    rotation: f64,
    handle: Option<AnimationHandle>,
}

/// Only mounted on wide viewports with parallax enabled
pub struct ParallaxView {
    component: ComponentId,
    pub shapes: Vec<ParallaxShape>,
}

impl ParallaxView {
    pub fn mount(stage: &mut Stage, layout: &PageLayout) -> Result<Self> {
        let component = stage.mount("parallax");
        // (glyph, x, y, speed, direction, rotation)
        let specs = [
            ("●", 0.25, 0.25, 0.2, -1.0, 0.0),
            ("◯", 0.75, 0.75, 0.1, 1.0, 0.0),
            ("■", 0.33, 0.5, 0.15, -1.0, -45.0),
        ];
        let mut shapes = Vec::with_capacity(specs.len());
        for (i, (glyph, x_ratio, y_ratio, speed, direction, rotation)) in specs.into_iter().enumerate() {
            let element = stage
                .binding_mut()
                .create_element(component, format!("backdrop-{i}"))?;
            shapes.push(ParallaxShape {
                element,
                glyph,
                x_ratio,
                y_ratio,
                speed,
                direction,
                rotation,
                handle: None,
            });
        }
        stage.finish_mount(component)?;

        let mut view = Self { component, shapes };
        view.relayout(stage, layout);
        Ok(view)
    }
}

impl View for ParallaxView {
    fn component(&self) -> ComponentId {
        self.component
    }

    /// Travel scales with the viewport, so the scrub is rebound
    fn relayout(&mut self, stage: &mut Stage, layout: &PageLayout) {
        let travel = f64::from(layout.viewport_height) * 2.0;
        let binding = stage.binding_mut();
        for shape in &mut self.shapes {
            if let Some(handle) = shape.handle.take() {
                binding.unbind(handle);
            }
            let timeline = PropertyTimeline::new(Duration::from_millis(1))
                .track(Property::TranslateY, 0.0, shape.direction * shape.speed * travel)
                .track(Property::Rotation, 0.0, shape.rotation);
            shape.handle = binding.bind(
                shape.element,
                TriggerSpec::ScrollRange(ScrollRange::full()),
                timeline,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::stage_and_layout;
    use super::*;

    #[test]
    fn test_shapes_move_against_scroll() {
        let (mut stage, layout, _) = stage_and_layout(120);
        let parallax = ParallaxView::mount(&mut stage, &layout).unwrap();

        stage.jump_to(stage.total_scrollable_height());
        stage.tick(Duration::from_millis(16));

        let first = stage.binding().element(parallax.shapes[0].element).unwrap().props();
        assert_eq!(first.translate_y, -0.2 * 60.0);
        let third = stage.binding().element(parallax.shapes[2].element).unwrap().props();
        assert_eq!(third.rotation, -45.0);
    }

    #[test]
    fn test_unmount_releases_scrubs() {
        let (mut stage, layout, _) = stage_and_layout(120);
        let parallax = ParallaxView::mount(&mut stage, &layout).unwrap();
        assert_eq!(stage.binding().live_handles(), 3);
        stage.unmount(parallax.component()).unwrap();
        assert_eq!(stage.binding().live_handles(), 0);
    }
}
