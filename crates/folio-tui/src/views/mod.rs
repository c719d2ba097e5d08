//! Page components: each mounts on the stage, registers its section and
//! binds the animations of the elements it owns

use std::time::Duration;

use anyhow::Result;
use folio_core::animation::{ComponentId, ElementId, Property, PropertyTimeline, TriggerSpec};
use folio_core::section::{SectionBounds, SectionDescriptor, SharedBounds};
use folio_core::{EasingType, Stage};

use crate::layout::{row_bounds, Block, BlockKind, PageLayout};

mod contact;
mod hero;
mod marquee;
mod parallax;
mod skills;
mod work;

pub use contact::ContactView;
pub use hero::{HeroGeometry, HeroView, BUTTON_LABEL};
pub use marquee::MarqueeView;
pub use parallax::{ParallaxShape, ParallaxView};
pub use skills::{BreathingShape, SkillsView};
pub use work::WorkView;

pub trait View {
    fn component(&self) -> ComponentId;

    /// Push fresh geometry to sections and elements after a layout change
    fn relayout(&mut self, stage: &mut Stage, layout: &PageLayout);
}

/// Section registration whose bounds follow the layout
#[derive(Debug, Clone)]
pub struct SectionSlot {
    pub kind: BlockKind,
    bounds: SharedBounds,
}

impl SectionSlot {
    pub fn register(
        stage: &mut Stage,
        owner: ComponentId,
        kind: BlockKind,
        layout: &PageLayout,
    ) -> Result<Option<Self>> {
        let Some(id) = kind.section_id() else {
            return Ok(None);
        };
        let (bounds, provider) = SectionBounds::shared(layout.bounds_of(kind));
        stage.register_section(owner, SectionDescriptor::new(id, provider))?;
        Ok(Some(Self { kind, bounds }))
    }

    pub fn update(&self, layout: &PageLayout) {
        self.bounds.set(layout.bounds_of(self.kind));
    }
}

/// Heading with a clip reveal and a divider that grows from the left
#[derive(Debug, Clone, Copy)]
pub struct SectionHeader {
    pub heading: ElementId,
    pub divider: ElementId,
}

impl SectionHeader {
    /// Create the elements; call while the owner is mounting
    pub fn create(stage: &mut Stage, owner: ComponentId) -> Result<Self> {
        let binding = stage.binding_mut();
        Ok(Self {
            heading: binding.create_element(owner, "heading")?,
            divider: binding.create_element(owner, "divider")?,
        })
    }

    /// Bind the entrance; call once the owner is bound
    pub fn bind(&self, stage: &mut Stage) {
        let binding = stage.binding_mut();
        binding.bind(self.heading, TriggerSpec::enter_viewport(0.0), heading_reveal());
        binding.bind(
            self.divider,
            TriggerSpec::enter_viewport(0.0),
            PropertyTimeline::new(Duration::from_millis(1000))
                .track(Property::ScaleX, 0.0, 1.0)
                .easing(EasingType::Power3Out)
                .delay(Duration::from_millis(300)),
        );
    }

    pub fn relayout(&self, stage: &mut Stage, block: &Block) {
        let binding = stage.binding_mut();
        binding.set_element_bounds(self.heading, row_bounds(block.heading_row()));
        binding.set_element_bounds(self.divider, row_bounds(block.divider_row()));
    }
}

/// Clip-path style wipe from the left
pub fn heading_reveal() -> PropertyTimeline {
    PropertyTimeline::new(Duration::from_millis(1200))
        .track(Property::Reveal, 0.0, 1.0)
        .track(Property::Opacity, 0.4, 1.0)
        .easing(EasingType::Power4InOut)
}

/// Rise into place while fading in
pub fn fade_up(duration: Duration, rise: f64, easing: EasingType) -> PropertyTimeline {
    PropertyTimeline::new(duration)
        .track(Property::Opacity, 0.0, 1.0)
        .track(Property::TranslateY, rise, 0.0)
        .easing(easing)
}
