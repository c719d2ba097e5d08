//! Per-component lifecycle: Unmounted → Mounting → Bound → Unbinding → Unmounted

use std::fmt;

use serde::Serialize;

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u32);

impl ComponentId {
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "component#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LifecycleState {
    Unmounted,
    Mounting,
    Bound,
    Unbinding,
}

impl LifecycleState {
    fn can_transition_to(self, next: LifecycleState) -> bool {
        use LifecycleState::*;
        matches!(
            (self, next),
            (Unmounted, Mounting)
                | (Mounting, Bound)
                | (Mounting, Unbinding)
                | (Bound, Unbinding)
                | (Unbinding, Unmounted)
        )
    }
}

#[derive(Debug, Clone)]
pub struct Component {
    pub id: ComponentId,
    pub name: String,
    state: LifecycleState,
    /// Sections this component registered, unregistered on unmount
    sections: Vec<String>,
}

impl Component {
    pub fn new(id: ComponentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            state: LifecycleState::Unmounted,
            sections: Vec::new(),
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub(crate) fn add_section(&mut self, id: &str) {
        if !self.sections.iter().any(|s| s == id) {
            self.sections.push(id.to_string());
        }
    }

    pub(crate) fn take_sections(&mut self) -> Vec<String> {
        std::mem::take(&mut self.sections)
    }

    pub fn transition(&mut self, next: LifecycleState) -> Result<()> {
        if !self.state.can_transition_to(next) {
            return Err(Error::InvalidTransition {
                component: self.name.clone(),
                from: self.state,
                to: next,
            });
        }
        self.state = next;
        Ok(())
    }
}
