use std::time::Duration;

use anyhow::Result;
use folio_core::animation::{ComponentId, ElementId, TriggerSpec};
use folio_core::config::AnimationConfig;
use folio_core::{EasingType, Stage};

use super::{fade_up, SectionHeader, SectionSlot, View};
use crate::layout::{rect_bounds, BlockKind, PageLayout};

/// Project grid with a staggered fade-up entrance
pub struct WorkView {
    component: ComponentId,
    slot: Option<SectionSlot>,
    pub header: SectionHeader,
    pub cards: Vec<ElementId>,
}

impl WorkView {
    pub fn mount(
        stage: &mut Stage,
        layout: &PageLayout,
        card_count: usize,
        animation: &AnimationConfig,
    ) -> Result<Self> {
        let component = stage.mount("work");
        let slot = SectionSlot::register(stage, component, BlockKind::Work, layout)?;
        let header = SectionHeader::create(stage, component)?;
        let cards = (0..card_count)
            .map(|i| stage.binding_mut().create_element(component, format!("card-{i}")))
            .collect::<folio_core::Result<Vec<_>>>()?;
        stage.finish_mount(component)?;

        let mut view = Self {
            component,
            slot,
            header,
            cards,
        };
        view.relayout(stage, layout);

        view.header.bind(stage);
        let entrance = fade_up(
            Duration::from_millis(animation.entrance_duration_ms),
            3.0,
            EasingType::Power3Out,
        );
        stage.binding_mut().bind_group(
            &view.cards,
            TriggerSpec::enter_viewport(0.1),
            &entrance,
            Duration::from_millis(animation.entrance_stagger_ms),
        );
        Ok(view)
    }
}

impl View for WorkView {
    fn component(&self) -> ComponentId {
        self.component
    }

    fn relayout(&mut self, stage: &mut Stage, layout: &PageLayout) {
        if let Some(slot) = &self.slot {
            slot.update(layout);
        }
        if let Some(block) = layout.block(BlockKind::Work) {
            self.header.relayout(stage, block);
        }
        let binding = stage.binding_mut();
        for (card, rect) in self.cards.iter().zip(&layout.cards) {
            binding.set_element_bounds(*card, rect_bounds(*rect));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::stage_and_layout;
    use super::*;

    #[test]
    fn test_cards_play_when_scrolled_into_view() {
        let (mut stage, layout, content) = stage_and_layout(120);
        let work = WorkView::mount(&mut stage, &layout, content.projects.len(), &Default::default())
            .unwrap();
        let first = work.cards[0];

        for _ in 0..10 {
            stage.tick(Duration::from_millis(16));
        }
        assert_eq!(stage.binding().element(first).unwrap().props().opacity, 0.0);

        assert!(stage.go_to("work"));
        for _ in 0..250 {
            stage.tick(Duration::from_millis(16));
        }
        assert_eq!(stage.binding().element(first).unwrap().props().opacity, 1.0);
    }
}
