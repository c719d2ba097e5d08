pub mod app;
pub mod event;
pub mod input;
pub mod layout;
pub mod paint;
pub mod theme;
pub mod views;
pub mod widgets;

pub use app::App;
pub use theme::Theme;
