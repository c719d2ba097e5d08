pub mod animation;
pub mod config;
pub mod content;
pub mod error;
pub mod navigation;
pub mod scroll;
pub mod section;
pub mod stage;

pub use config::{AppConfig, EasingType, ScrollConfig};
pub use error::{Error, Result};
pub use stage::Stage;
