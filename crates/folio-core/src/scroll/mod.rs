//! Smooth scrolling and scroll-derived signals
//!
//! # Layers
//!
//! ## Atoms
//! - `easing` - Pure easing curves
//! - `timing` - Progress, interpolation and frame-rate scaling
//! - `state` - The per-tick `ScrollState` snapshot
//!
//! ## Molecules
//! - `driver` - Input accumulation and the eased/interpolated offset
//! - `signal` - Progress and active-section derivation
//!
//! # Usage
//!
//! ```ignore
//! use folio_core::scroll::{SmoothScrollDriver, ScrollSignal};
//!
//! let mut driver = SmoothScrollDriver::default();
//! driver.set_max_extent(max_scroll);
//! driver.on_native_delta(120.0);
//!
//! // once per frame
//! let offset = driver.step(dt);
//! let progress = signal.progress(offset);
//! ```

pub mod easing;
pub mod timing;
pub mod state;

pub mod driver;
pub mod signal;

pub use driver::{NativeInput, SmoothScrollDriver};
pub use easing::EasingType;
pub use signal::{compute_progress, ScrollSignal};
pub use state::ScrollState;
