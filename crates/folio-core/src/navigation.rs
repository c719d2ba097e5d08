//! Programmatic "go to section" commands

use std::time::Duration;

use tracing::{info, warn};

use crate::config::{EasingType, NavigationConfig};
use crate::scroll::SmoothScrollDriver;
use crate::section::SectionRegistry;

/// One-shot request consumed by the scroll driver
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollCommand {
    pub target_section_id: String,
    pub duration: Duration,
    pub easing: EasingType,
}

/// Turns user intents into scroll commands with fixed defaults
#[derive(Debug, Clone)]
pub struct NavigationController {
    duration: Duration,
    easing: EasingType,
    connect_section: String,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new(&NavigationConfig::default())
    }
}

impl NavigationController {
    pub fn new(config: &NavigationConfig) -> Self {
        Self {
            duration: Duration::from_millis(config.duration_ms),
            easing: config.easing,
            connect_section: config.connect_section.clone(),
        }
    }

    /// Command for a section with the default duration and easing
    pub fn command_for(&self, section_id: &str) -> ScrollCommand {
        ScrollCommand {
            target_section_id: section_id.to_string(),
            duration: self.duration,
            easing: self.easing,
        }
    }

    /// Scroll to a registered section; unknown ids are a logged no-op
    pub fn go_to(
        &self,
        section_id: &str,
        driver: &mut SmoothScrollDriver,
        registry: &SectionRegistry,
    ) -> bool {
        if !registry.contains(section_id) {
            warn!(section = %section_id, "Section not found, navigation ignored");
            return false;
        }
        info!(section = %section_id, "Navigating");
        driver.scroll_to(&self.command_for(section_id), registry)
    }

    /// Section after `current`, wrapping to the first
    pub fn next_section(&self, current: Option<&str>, registry: &SectionRegistry) -> Option<String> {
        let len = registry.len();
        if len == 0 {
            return None;
        }
        let next = current
            .and_then(|id| registry.position(id))
            .map(|index| (index + 1) % len)
            .unwrap_or(0);
        registry.id_at(next).map(str::to_string)
    }

    /// Target of the "Connect" affordance
    pub fn connect_section(&self) -> &str {
        &self.connect_section
    }

    /// The affordance is hidden once its target section is active
    pub fn shows_connect(&self, active_section: Option<&str>) -> bool {
        active_section != Some(self.connect_section.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::{SectionBounds, SectionDescriptor};

    fn registry() -> SectionRegistry {
        let mut registry = SectionRegistry::new();
        for (i, id) in ["hero", "work", "skills", "contact"].iter().enumerate() {
            registry.register(SectionDescriptor::fixed(
                *id,
                SectionBounds::from_height(i as f64 * 100.0, 100.0),
            ));
        }
        registry
    }

    #[test]
    fn test_command_uses_defaults() {
        let nav = NavigationController::default();
        let command = nav.command_for("work");
        assert_eq!(command.target_section_id, "work");
        assert_eq!(command.duration, Duration::from_millis(1800));
        assert_eq!(command.easing, EasingType::ExpoInOut);
    }

    #[test]
    fn test_go_to_unknown_is_noop() {
        let nav = NavigationController::default();
        let mut driver = SmoothScrollDriver::default();
        driver.set_max_extent(300.0);
        assert!(!nav.go_to("blog", &mut driver, &registry()));
        assert!(!driver.is_animating());
    }

    #[test]
    fn test_go_to_starts_trajectory() {
        let nav = NavigationController::default();
        let mut driver = SmoothScrollDriver::default();
        driver.set_max_extent(300.0);
        assert!(nav.go_to("skills", &mut driver, &registry()));
        assert_eq!(driver.trajectory_target(), Some("skills"));
    }

    #[test]
    fn test_next_section_wraps() {
        let nav = NavigationController::default();
        let registry = registry();
        assert_eq!(nav.next_section(Some("hero"), &registry).as_deref(), Some("work"));
        assert_eq!(nav.next_section(Some("contact"), &registry).as_deref(), Some("hero"));
        assert_eq!(nav.next_section(None, &registry).as_deref(), Some("hero"));
        assert_eq!(nav.next_section(Some("gone"), &registry).as_deref(), Some("hero"));
    }

    #[test]
    fn test_connect_hidden_on_target() {
        let nav = NavigationController::default();
        assert!(nav.shows_connect(Some("hero")));
        assert!(nav.shows_connect(None));
        assert!(!nav.shows_connect(Some("contact")));
    }
}
