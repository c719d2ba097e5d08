//! Element animations bound to scroll, viewport, pointer and mount triggers
//!
//! Components mount through [`AnimationBinding`], create elements, and bind
//! [`PropertyTimeline`]s to them. Every handle belongs to the component that
//! created it and is released when that component unmounts.

pub mod props;
pub mod element;
pub mod component;
pub mod timeline;
pub mod trigger;
pub mod jitter;
pub mod follow;

pub mod binding;

pub use binding::{AnimationBinding, AnimationHandle, BindingEvent, GroupBinding, Teardown};
pub use component::{Component, ComponentId, LifecycleState};
pub use element::{Element, ElementArena, ElementId};
pub use follow::Follow;
pub use jitter::Jitter;
pub use props::{Property, VisualProps};
pub use timeline::{PropertyTimeline, Repeat, ScrollRange, Track};
pub use trigger::{intersection_ratio, is_in_view, Replay, TriggerSpec};
