use serde::Serialize;

/// Per-tick scroll snapshot shared read-only with bindings and the UI
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScrollState {
    /// Accumulated input target (where the page is heading)
    pub raw_offset: f64,
    /// Interpolated offset actually displayed
    pub smoothed_offset: f64,
    /// Normalized position across the scrollable height, in [0, 1]
    pub progress: f64,
    /// Section whose trigger band the active line last entered
    pub active_section_id: Option<String>,
}

impl ScrollState {
    /// Progress as a whole percentage, for indicators
    pub fn percent(&self) -> u16 {
        (self.progress * 100.0).round() as u16
    }

    pub fn is_active(&self, section_id: &str) -> bool {
        self.active_section_id.as_deref() == Some(section_id)
    }
}
