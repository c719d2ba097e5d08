use std::time::Duration;

use anyhow::Result;
use folio_core::animation::{ComponentId, ElementId, TriggerSpec};
use folio_core::{EasingType, Stage};

use super::{fade_up, SectionHeader, SectionSlot, View};
use crate::layout::{row_bounds, BlockKind, PageLayout};

/// Closing section: email and social links rising in one after another
pub struct ContactView {
    component: ComponentId,
    slot: Option<SectionSlot>,
    pub header: SectionHeader,
    /// Email line first, then one per social link
    pub lines: Vec<ElementId>,
}

impl ContactView {
    pub fn mount(stage: &mut Stage, layout: &PageLayout, social_count: usize) -> Result<Self> {
        let component = stage.mount("contact");
        let slot = SectionSlot::register(stage, component, BlockKind::Contact, layout)?;
        let header = SectionHeader::create(stage, component)?;
        let lines = (0..=social_count)
            .map(|i| stage.binding_mut().create_element(component, format!("line-{i}")))
            .collect::<folio_core::Result<Vec<_>>>()?;
        stage.finish_mount(component)?;

        let mut view = Self {
            component,
            slot,
            header,
            lines,
        };
        view.relayout(stage, layout);
        view.header.bind(stage);

        // Each line triggers on its own, delays still grow down the list
        let binding = stage.binding_mut();
        for (i, line) in view.lines.iter().enumerate() {
            let entrance = fade_up(Duration::from_millis(900), 2.0, EasingType::Power3Out)
                .delay(Duration::from_millis(150) * i as u32);
            binding.bind(*line, TriggerSpec::enter_viewport(0.0), entrance);
        }
        Ok(view)
    }
}

impl View for ContactView {
    fn component(&self) -> ComponentId {
        self.component
    }

    fn relayout(&mut self, stage: &mut Stage, layout: &PageLayout) {
        if let Some(slot) = &self.slot {
            slot.update(layout);
        }
        if let Some(block) = layout.block(BlockKind::Contact) {
            self.header.relayout(stage, block);
        }
        let binding = stage.binding_mut();
        for (line, row) in self.lines.iter().zip(&layout.contact_rows) {
            binding.set_element_bounds(*line, row_bounds(*row));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::stage_and_layout;
    use super::*;

    #[test]
    fn test_one_line_per_social_plus_email() {
        let (mut stage, layout, content) = stage_and_layout(120);
        let contact = ContactView::mount(&mut stage, &layout, content.socials.len()).unwrap();
        assert_eq!(contact.lines.len(), content.socials.len() + 1);
        assert!(stage.registry().contains("contact"));
    }

    #[test]
    fn test_lines_rise_in_at_the_bottom() {
        let (mut stage, layout, content) = stage_and_layout(120);
        let contact = ContactView::mount(&mut stage, &layout, content.socials.len()).unwrap();
        let last = *contact.lines.last().unwrap();

        stage.jump_to(stage.total_scrollable_height());
        for _ in 0..150 {
            stage.tick(Duration::from_millis(16));
        }
        let props = stage.binding().element(last).unwrap().props();
        assert_eq!(props.opacity, 1.0);
        assert_eq!(props.translate_y, 0.0);
    }
}
