use std::time::Duration;

use anyhow::Result;
use folio_core::animation::{
    AnimationHandle, ComponentId, ElementId, Property, PropertyTimeline, ScrollRange, TriggerSpec,
};
use folio_core::{EasingType, Stage};

use super::{SectionHeader, SectionSlot, View};
use crate::layout::{row_bounds, BlockKind, PageLayout};

const SHAPE_GLYPHS: [&str; 4] = ["◆", "○", "△", "□"];

/// Decorative background shape that breathes and drifts with scroll
#[derive(Debug, Clone)]
pub struct BreathingShape {
    pub element: ElementId,
    pub glyph: &'static str,
    /// Horizontal position as a fraction of the width
    pub x_ratio: f64,
    /// Row offset inside the skills block
    pub row: u16,
    /// +1 drifts up, -1 drifts down
    direction: f64,
    rotation: f64,
    drift: Option<AnimationHandle>,
}

pub struct SkillsView {
    component: ComponentId,
    slot: Option<SectionSlot>,
    pub header: SectionHeader,
    pub bars: Vec<ElementId>,
    pub shapes: Vec<BreathingShape>,
}

impl SkillsView {
    pub fn mount(stage: &mut Stage, layout: &PageLayout, skill_count: usize) -> Result<Self> {
        let component = stage.mount("skills");
        let slot = SectionSlot::register(stage, component, BlockKind::Skills, layout)?;
        let header = SectionHeader::create(stage, component)?;
        let bars = (0..skill_count)
            .map(|i| stage.binding_mut().create_element(component, format!("bar-{i}")))
            .collect::<folio_core::Result<Vec<_>>>()?;

        let mut shapes = Vec::with_capacity(SHAPE_GLYPHS.len());
        for (i, glyph) in SHAPE_GLYPHS.into_iter().enumerate() {
            let element = stage
                .binding_mut()
                .create_element(component, format!("shape-{i}"))?;
            let jitter = stage.binding_mut().jitter_mut();
            shapes.push(BreathingShape {
                element,
                glyph,
                x_ratio: 0.6 + jitter.range(0.0, 0.35),
                row: 2 + (i as u16) * 3,
                direction: if i % 2 == 0 { 1.0 } else { -1.0 },
                rotation: jitter.range(0.0, 180.0),
                drift: None,
            });
        }
        stage.finish_mount(component)?;

        let mut view = Self {
            component,
            slot,
            header,
            bars,
            shapes,
        };
        view.relayout(stage, layout);
        view.header.bind(stage);

        let fill = PropertyTimeline::new(Duration::from_millis(1200))
            .track(Property::ScaleX, 0.0, 1.0)
            .easing(EasingType::Power3InOut);
        stage.binding_mut().bind_group(
            &view.bars,
            TriggerSpec::enter_viewport_reversible(0.5),
            &fill,
            Duration::from_millis(100),
        );

        for shape in &view.shapes {
            let binding = stage.binding_mut();
            let jitter = binding.jitter_mut();
            let growth = jitter.range(0.1, 0.4);
            let dim = jitter.range(0.1, 0.25);
            let period = jitter.range(2.0, 5.0);
            let breathe = PropertyTimeline::new(Duration::from_secs_f64(period))
                .track(Property::Scale, 1.0, 1.0 + growth)
                .track(Property::Opacity, 0.45, dim)
                .easing(EasingType::SineInOut)
                .yoyo();
            binding.bind(shape.element, TriggerSpec::Mount, breathe);
        }
        Ok(view)
    }

    fn bind_drift(&mut self, stage: &mut Stage, layout: &PageLayout) {
        let block = layout.bounds_of(BlockKind::Skills);
        let range = ScrollRange::through_viewport(
            block.top,
            block.bottom,
            stage.viewport_height(),
            stage.total_scrollable_height(),
        );
        let binding = stage.binding_mut();
        for (i, shape) in self.shapes.iter_mut().enumerate() {
            if let Some(handle) = shape.drift.take() {
                binding.unbind(handle);
            }
            if layout.mobile {
                continue;
            }
            let drift = PropertyTimeline::new(Duration::from_millis(1))
                .track(Property::TranslateY, 0.0, shape.direction * -6.0)
                .track(Property::TranslateX, 0.0, ((i % 3) as f64 - 1.0) * 4.0)
                .track(Property::Rotation, 0.0, shape.direction * shape.rotation);
            shape.drift = binding.bind(shape.element, TriggerSpec::ScrollRange(range), drift);
        }
    }
}

impl View for SkillsView {
    fn component(&self) -> ComponentId {
        self.component
    }

    fn relayout(&mut self, stage: &mut Stage, layout: &PageLayout) {
        if let Some(slot) = &self.slot {
            slot.update(layout);
        }
        if let Some(block) = layout.block(BlockKind::Skills).copied() {
            self.header.relayout(stage, &block);
            let binding = stage.binding_mut();
            for shape in &self.shapes {
                binding.set_element_bounds(shape.element, row_bounds(block.top + shape.row));
            }
        }
        let binding = stage.binding_mut();
        for (bar, row) in self.bars.iter().zip(&layout.skill_rows) {
            binding.set_element_bounds(*bar, row_bounds(*row));
        }
        self.bind_drift(stage, layout);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::stage_and_layout;
    use super::*;

    #[test]
    fn test_bars_replay_reversibly() {
        let (mut stage, layout, content) = stage_and_layout(120);
        let skills = SkillsView::mount(&mut stage, &layout, content.skills.len()).unwrap();
        let bar = skills.bars[0];

        stage.jump_to(f64::from(layout.skill_rows[0]) - 5.0);
        for _ in 0..150 {
            stage.tick(Duration::from_millis(16));
        }
        assert_eq!(stage.binding().element(bar).unwrap().props().scale_x, 1.0);

        stage.jump_to(0.0);
        for _ in 0..150 {
            stage.tick(Duration::from_millis(16));
        }
        assert_eq!(stage.binding().element(bar).unwrap().props().scale_x, 0.0);
    }

    #[test]
    fn test_drift_disabled_on_mobile() {
        let (mut stage, layout, content) = stage_and_layout(60);
        let skills = SkillsView::mount(&mut stage, &layout, content.skills.len()).unwrap();
        assert!(skills.shapes.iter().all(|s| s.drift.is_none()));

        let (mut stage, layout, content) = stage_and_layout(120);
        let skills = SkillsView::mount(&mut stage, &layout, content.skills.len()).unwrap();
        assert!(skills.shapes.iter().all(|s| s.drift.is_some()));
    }

    #[test]
    fn test_shapes_keep_breathing() {
        let (mut stage, layout, content) = stage_and_layout(120);
        let skills = SkillsView::mount(&mut stage, &layout, content.skills.len()).unwrap();
        for _ in 0..1000 {
            stage.tick(Duration::from_millis(16));
        }
        assert!(stage.binding().is_animating());
        let shape = stage.binding().element(skills.shapes[0].element).unwrap().props();
        assert!(shape.scale >= 1.0 && shape.scale <= 1.4);
    }
}
