use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub sections: SectionConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Easing curve applied to commanded scrolls and timelines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump at the end
    None,
    Linear,
    /// Cubic ease-out
    #[default]
    Cubic,
    /// Quintic ease-out
    Quintic,
    /// Exponential ease-out
    EaseOut,
    Power1Out,
    Power3Out,
    Power3InOut,
    Power4InOut,
    ExpoInOut,
    SineInOut,
    /// Overshooting spring-like settle
    ElasticOut,
}

/// Smooth scroll ("inertia layer") configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Interpolate toward the target instead of jumping
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Fraction of the remaining distance covered per reference frame
    #[serde(default = "default_lerp_factor")]
    pub lerp_factor: f64,
    /// Frame length the lerp factor is calibrated against
    #[serde(default = "default_reference_frame_ms")]
    pub reference_frame_ms: u64,
    /// Offset units per wheel notch
    #[serde(default = "default_wheel_multiplier")]
    pub wheel_multiplier: f64,
    /// Offset units per touch-drag unit
    #[serde(default = "default_touch_multiplier")]
    pub touch_multiplier: f64,
    /// Distance below which the smoothed offset snaps to the target
    #[serde(default = "default_settle_threshold")]
    pub settle_threshold: f64,
    /// Let native input cancel an in-flight commanded scroll
    #[serde(default)]
    pub interrupt_on_input: bool,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            lerp_factor: default_lerp_factor(),
            reference_frame_ms: default_reference_frame_ms(),
            wheel_multiplier: default_wheel_multiplier(),
            touch_multiplier: default_touch_multiplier(),
            settle_threshold: default_settle_threshold(),
            interrupt_on_input: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Duration of a "go to section" scroll
    #[serde(default = "default_navigation_duration")]
    pub duration_ms: u64,
    /// Easing of a "go to section" scroll
    #[serde(default = "default_navigation_easing")]
    pub easing: EasingType,
    /// Section targeted by the "Connect" affordance
    #[serde(default = "default_connect_section")]
    pub connect_section: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_navigation_duration(),
            easing: default_navigation_easing(),
            connect_section: default_connect_section(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionConfig {
    /// Viewport fraction (from the top) of the line that activates sections
    #[serde(default = "default_active_line_ratio")]
    pub active_line_ratio: f64,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            active_line_ratio: default_active_line_ratio(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Seed for randomized animation parameters
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Duration of a single entrance animation
    #[serde(default = "default_entrance_duration")]
    pub entrance_duration_ms: u64,
    /// Start offset between consecutive elements of a group entrance
    #[serde(default = "default_entrance_stagger")]
    pub entrance_stagger_ms: u64,
    /// Render decorative parallax shapes on wide viewports
    #[serde(default = "default_true")]
    pub parallax_enabled: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            entrance_duration_ms: default_entrance_duration(),
            entrance_stagger_ms: default_entrance_stagger(),
            parallax_enabled: default_true(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while anything is animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Viewports narrower than this (columns) are treated as mobile
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: u16,
    /// Optional portfolio content file (TOML or JSON)
    #[serde(default)]
    pub content_path: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            mobile_breakpoint: default_mobile_breakpoint(),
            content_path: None,
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_lerp_factor() -> f64 {
    0.1
}

fn default_reference_frame_ms() -> u64 {
    16
}

fn default_wheel_multiplier() -> f64 {
    3.0
}

fn default_touch_multiplier() -> f64 {
    2.0
}

fn default_settle_threshold() -> f64 {
    0.5
}

fn default_navigation_duration() -> u64 {
    1800
}

fn default_navigation_easing() -> EasingType {
    EasingType::ExpoInOut
}

fn default_connect_section() -> String {
    "contact".to_string()
}

fn default_active_line_ratio() -> f64 {
    0.4
}

fn default_seed() -> u64 {
    0x5eed_f011
}

fn default_entrance_duration() -> u64 {
    800
}

fn default_entrance_stagger() -> u64 {
    100
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_mobile_breakpoint() -> u16 {
    80
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, defaults if it does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    /// Serialize to pretty TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/folio/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
            .join("config.toml")
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("folio.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Content file path (with tilde expansion), if configured
    pub fn content_path(&self) -> Option<PathBuf> {
        self.ui.content_path.as_deref().map(expand_tilde)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scroll_config() {
        let config = ScrollConfig::default();
        assert!(config.smooth_enabled);
        assert!((config.lerp_factor - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.reference_frame_ms, 16);
        assert!(!config.interrupt_on_input);
    }

    #[test]
    fn test_default_navigation() {
        let config = NavigationConfig::default();
        assert_eq!(config.duration_ms, 1800);
        assert_eq!(config.easing, EasingType::ExpoInOut);
        assert_eq!(config.connect_section, "contact");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [scroll]
            lerp_factor = 0.2

            [navigation]
            easing = "power3_in_out"
            "#,
        )
        .unwrap();

        assert!((config.scroll.lerp_factor - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.scroll.settle_threshold, 0.5);
        assert_eq!(config.navigation.easing, EasingType::Power3InOut);
        assert_eq!(config.navigation.duration_ms, 1800);
        assert!((config.sections.active_line_ratio - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_toml_roundtrip_keeps_easing() {
        let mut config = AppConfig::default();
        config.navigation.easing = EasingType::SineInOut;
        let text = config.to_toml().unwrap();
        assert!(text.contains("sine_in_out"));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("folio-config-that-does-not-exist.toml");
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.ui.animation_fps, 60);
    }

    #[test]
    fn test_expand_tilde_passthrough() {
        let path = PathBuf::from("/tmp/folio");
        assert_eq!(expand_tilde(&path), path);
    }
}
