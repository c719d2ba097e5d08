use std::time::Duration;

use anyhow::Result;
use folio_core::animation::{ComponentId, ElementId, Property, PropertyTimeline, TriggerSpec};
use folio_core::content::Hero;
use folio_core::{EasingType, Stage};
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use super::{fade_up, SectionSlot, View};
use crate::layout::{BlockKind, PageLayout};

pub const BUTTON_LABEL: &str = "  Let's Connect  →  ";

/// Document positions of the hero lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroGeometry {
    pub greeting_row: u16,
    pub name_row: u16,
    pub headline_row: u16,
    pub tagline_row: u16,
    pub button: Rect,
}

impl HeroGeometry {
    pub fn compute(layout: &PageLayout) -> Self {
        let block = layout
            .block(BlockKind::Hero)
            .copied()
            .unwrap_or(crate::layout::Block {
                kind: BlockKind::Hero,
                top: 0,
                height: layout.viewport_height,
            });
        let middle = block.top + block.height / 2;
        let greeting_row = middle.saturating_sub(4);
        let width = BUTTON_LABEL.width() as u16;
        Self {
            greeting_row,
            name_row: greeting_row + 1,
            headline_row: greeting_row + 2,
            tagline_row: greeting_row + 4,
            button: Rect::new(
                layout.width.saturating_sub(width) / 2,
                greeting_row + 7,
                width,
                1,
            ),
        }
    }
}

pub struct HeroView {
    component: ComponentId,
    slot: Option<SectionSlot>,
    pub copy: Hero,
    pub greeting: ElementId,
    pub name: ElementId,
    pub headline: ElementId,
    pub tagline: ElementId,
    pub button: ElementId,
    /// Hover highlight sweeping across the button
    pub button_fill: ElementId,
    pub geometry: HeroGeometry,
}

impl HeroView {
    pub fn mount(stage: &mut Stage, layout: &PageLayout, copy: &Hero) -> Result<Self> {
        let component = stage.mount("hero");
        let slot = SectionSlot::register(stage, component, BlockKind::Hero, layout)?;

        let binding = stage.binding_mut();
        let greeting = binding.create_element(component, "greeting")?;
        let name = binding.create_element(component, "name")?;
        let headline = binding.create_element(component, "headline")?;
        let tagline = binding.create_element(component, "tagline")?;
        let button = binding.create_element(component, "button")?;
        let button_fill = binding.create_element(component, "button-fill")?;
        stage.finish_mount(component)?;

        let binding = stage.binding_mut();
        let title = fade_up(Duration::from_millis(1200), 3.0, EasingType::Power3Out)
            .delay(Duration::from_millis(500));
        binding.bind_group(
            &[greeting, name, headline],
            TriggerSpec::Mount,
            &title,
            Duration::from_millis(150),
        );
        binding.bind(
            tagline,
            TriggerSpec::Mount,
            fade_up(Duration::from_millis(1000), 2.0, EasingType::Power3Out)
                .delay(Duration::from_millis(1300)),
        );
        binding.bind(
            button,
            TriggerSpec::Mount,
            fade_up(Duration::from_millis(800), 1.0, EasingType::ElasticOut)
                .delay(Duration::from_millis(2000)),
        );
        binding.bind(
            button_fill,
            TriggerSpec::Pointer,
            PropertyTimeline::new(Duration::from_millis(300))
                .track(Property::ScaleX, 0.0, 1.0)
                .easing(EasingType::Power3Out),
        );

        Ok(Self {
            component,
            slot,
            copy: copy.clone(),
            greeting,
            name,
            headline,
            tagline,
            button,
            button_fill,
            geometry: HeroGeometry::compute(layout),
        })
    }

    /// Whether a document cell lies on the connect button
    pub fn hits_button(&self, column: u16, document_row: u16) -> bool {
        let button = self.geometry.button;
        column >= button.x
            && column < button.right()
            && document_row >= button.y
            && document_row < button.bottom()
    }
}

impl View for HeroView {
    fn component(&self) -> ComponentId {
        self.component
    }

    fn relayout(&mut self, _stage: &mut Stage, layout: &PageLayout) {
        if let Some(slot) = &self.slot {
            slot.update(layout);
        }
        self.geometry = HeroGeometry::compute(layout);
    }
}
