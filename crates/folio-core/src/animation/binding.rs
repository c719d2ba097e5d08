//! Animation binding context
//!
//! Owns the element arena, the component lifecycles and every animation
//! bound to an element. One instance lives per root view and is handed to
//! components explicitly; nothing here is global.

use std::time::Duration;

use indexmap::IndexMap;
use tracing::{debug, info, warn};

use super::component::{Component, ComponentId, LifecycleState};
use super::element::{Element, ElementArena, ElementId};
use super::jitter::Jitter;
use super::timeline::PropertyTimeline;
use super::trigger::{intersection_ratio, is_in_view, Replay, TriggerSpec};
use crate::scroll::ScrollState;
use crate::section::SectionBounds;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct HandleId {
    index: u32,
    generation: u32,
}

/// Key to one bound animation, owned by the component that created it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationHandle {
    id: HandleId,
    element: ElementId,
    owner: ComponentId,
}

impl AnimationHandle {
    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn owner(&self) -> ComponentId {
        self.owner
    }
}

/// Notifications drained by the host after each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingEvent {
    Started(AnimationHandle),
    Completed(AnimationHandle),
    Entered(AnimationHandle),
    Exited(AnimationHandle),
}

impl BindingEvent {
    pub fn handle(&self) -> AnimationHandle {
        match self {
            BindingEvent::Started(h)
            | BindingEvent::Completed(h)
            | BindingEvent::Entered(h)
            | BindingEvent::Exited(h) => *h,
        }
    }
}

/// Handles of a staggered group
#[derive(Debug, Clone, PartialEq)]
pub struct GroupBinding {
    pub handles: Vec<AnimationHandle>,
    /// Start offset of each member
    pub starts: Vec<Duration>,
    /// Until the last member finishes its pass
    pub total_duration: Duration,
}

/// What an unmount released
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Teardown {
    pub released_handles: usize,
    pub removed_elements: usize,
    /// Sections the component had registered
    pub sections: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Idle,
    Forward,
    Reverse,
}

#[derive(Debug, Clone, Copy)]
struct Playhead {
    /// Seconds into the timeline, delay included
    time: f64,
    direction: Direction,
}

impl Playhead {
    fn idle() -> Self {
        Self {
            time: 0.0,
            direction: Direction::Idle,
        }
    }

    fn playing() -> Self {
        Self {
            time: 0.0,
            direction: Direction::Forward,
        }
    }

    /// Returns true when a forward pass finished during this advance
    fn advance(&mut self, dt: f64, timeline: &PropertyTimeline) -> bool {
        match self.direction {
            Direction::Idle => false,
            Direction::Forward => {
                self.time += dt;
                if timeline.is_finished_at(self.time) {
                    self.time = timeline.total_duration().as_secs_f64();
                    self.direction = Direction::Idle;
                    true
                } else {
                    false
                }
            }
            Direction::Reverse => {
                self.time = (self.time - dt).max(0.0);
                if self.time <= 0.0 {
                    self.direction = Direction::Idle;
                }
                false
            }
        }
    }
}

#[derive(Debug, Clone)]
struct HandleRecord {
    element: ElementId,
    owner: ComponentId,
    trigger: TriggerSpec,
    timeline: PropertyTimeline,
    playhead: Playhead,
    /// Viewport trigger has fired at least once
    fired: bool,
    in_view: bool,
}

#[derive(Debug, Default)]
struct HandleSlot {
    generation: u32,
    record: Option<HandleRecord>,
}

#[derive(Debug)]
pub struct AnimationBinding {
    elements: ElementArena,
    slots: Vec<HandleSlot>,
    free: Vec<u32>,
    components: IndexMap<ComponentId, Component>,
    next_component: u32,
    jitter: Jitter,
    events: Vec<BindingEvent>,
}

impl AnimationBinding {
    pub fn new(seed: u64) -> Self {
        Self {
            elements: ElementArena::new(),
            slots: Vec::new(),
            free: Vec::new(),
            components: IndexMap::new(),
            next_component: 1,
            jitter: Jitter::new(seed),
            events: Vec::new(),
        }
    }

    pub fn jitter_mut(&mut self) -> &mut Jitter {
        &mut self.jitter
    }

    // ---- component lifecycle ----

    /// Start mounting a component; it may create elements but not bind yet
    pub fn mount(&mut self, name: impl Into<String>) -> ComponentId {
        let id = ComponentId::from_raw(self.next_component);
        self.next_component += 1;

        let mut component = Component::new(id, name);
        // Unmounted -> Mounting is always valid for a fresh component
        let _ = component.transition(LifecycleState::Mounting);
        debug!(component = %component.name, %id, "Mounting component");
        self.components.insert(id, component);
        id
    }

    /// Mounting -> Bound; binding is allowed from here on
    pub fn finish_mount(&mut self, id: ComponentId) -> Result<()> {
        let component = self
            .components
            .get_mut(&id)
            .ok_or_else(|| Error::Other(format!("unknown {}", id)))?;
        component.transition(LifecycleState::Bound)?;
        debug!(component = %component.name, %id, "Component bound");
        Ok(())
    }

    pub fn state_of(&self, id: ComponentId) -> LifecycleState {
        self.components
            .get(&id)
            .map(Component::state)
            .unwrap_or(LifecycleState::Unmounted)
    }

    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.get(&id)
    }

    pub fn component_ids(&self) -> Vec<ComponentId> {
        self.components.keys().copied().collect()
    }

    /// Record that a component registered a section
    pub fn attach_section(&mut self, owner: ComponentId, section_id: &str) -> Result<()> {
        let component = self.live_component_mut(owner)?;
        component.add_section(section_id);
        Ok(())
    }

    /// Tear a component down: release its animations, drop its elements
    ///
    /// Unknown or already unmounted components are a no-op.
    pub fn unmount(&mut self, id: ComponentId) -> Result<Teardown> {
        let Some(component) = self.components.get_mut(&id) else {
            debug!(%id, "Unmount of unknown or already unmounted component ignored");
            return Ok(Teardown::default());
        };
        component.transition(LifecycleState::Unbinding)?;
        let name = component.name.clone();
        let sections = component.take_sections();

        let handles = self.handles_of(id);
        let released_handles = handles
            .into_iter()
            .filter(|handle| self.unbind(*handle))
            .count();

        let element_ids = self.elements.owned_by(id);
        let removed_elements = element_ids
            .into_iter()
            .filter(|element| self.elements.remove(*element).is_some())
            .count();

        if let Some(mut component) = self.components.shift_remove(&id) {
            component.transition(LifecycleState::Unmounted)?;
        }

        info!(
            component = %name,
            released_handles,
            removed_elements,
            "Component unmounted"
        );
        Ok(Teardown {
            released_handles,
            removed_elements,
            sections,
        })
    }

    fn live_component_mut(&mut self, id: ComponentId) -> Result<&mut Component> {
        let component = self
            .components
            .get_mut(&id)
            .ok_or_else(|| Error::Other(format!("unknown {}", id)))?;
        match component.state() {
            LifecycleState::Mounting | LifecycleState::Bound => Ok(component),
            state => Err(Error::Other(format!(
                "{} is {:?}, expected Mounting or Bound",
                component.name, state
            ))),
        }
    }

    // ---- elements ----

    pub fn create_element(&mut self, owner: ComponentId, label: impl Into<String>) -> Result<ElementId> {
        self.live_component_mut(owner)?;
        Ok(self.elements.insert(label, owner))
    }

    /// Update viewport geometry of an element; false for stale ids
    pub fn set_element_bounds(&mut self, id: ElementId, bounds: SectionBounds) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                element.bounds = Some(bounds);
                true
            }
            None => false,
        }
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn elements(&self) -> &ElementArena {
        &self.elements
    }

    // ---- binding ----

    /// Bind a timeline to an element under a trigger
    ///
    /// Stale elements and components that are not `Bound` yield `None`.
    pub fn bind(
        &mut self,
        element: ElementId,
        trigger: TriggerSpec,
        timeline: PropertyTimeline,
    ) -> Option<AnimationHandle> {
        match self.try_bind(element, trigger, timeline) {
            Ok(handle) => Some(handle),
            Err(e) => {
                warn!(error = %e, trigger = trigger.kind(), "Animation not bound");
                None
            }
        }
    }

    fn try_bind(
        &mut self,
        element_id: ElementId,
        trigger: TriggerSpec,
        timeline: PropertyTimeline,
    ) -> Result<AnimationHandle> {
        let owner = self
            .elements
            .get(element_id)
            .map(|element| element.owner)
            .ok_or_else(|| Error::UnknownElement(element_id.to_string()))?;

        let state = self.state_of(owner);
        if state != LifecycleState::Bound {
            return Err(Error::Other(format!(
                "{} is {:?}, animations can only be bound in Bound",
                owner, state
            )));
        }

        let playhead = match trigger {
            TriggerSpec::Mount => Playhead::playing(),
            _ => Playhead::idle(),
        };

        // Show the starting values right away; scrubbed values wait for the next render
        if !matches!(trigger, TriggerSpec::ScrollRange(_)) {
            if let Some(element) = self.elements.get_mut(element_id) {
                for (property, value) in timeline.sample_at(0.0) {
                    element.write(property, value);
                }
            }
        }

        let record = HandleRecord {
            element: element_id,
            owner,
            trigger,
            timeline,
            playhead,
            fired: false,
            in_view: false,
        };

        let id = if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.record = Some(record);
            HandleId {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(HandleSlot {
                generation: 0,
                record: Some(record),
            });
            HandleId {
                index,
                generation: 0,
            }
        };

        let handle = AnimationHandle {
            id,
            element: element_id,
            owner,
        };
        if matches!(trigger, TriggerSpec::Mount) {
            self.events.push(BindingEvent::Started(handle));
        }
        debug!(element = %element_id, %owner, trigger = trigger.kind(), "Animation bound");
        Ok(handle)
    }

    /// Bind one timeline to many elements with staggered starts
    ///
    /// Member `i` starts `i * stagger` after the timeline's own delay.
    pub fn bind_group(
        &mut self,
        elements: &[ElementId],
        trigger: TriggerSpec,
        timeline: &PropertyTimeline,
        stagger: Duration,
    ) -> Option<GroupBinding> {
        let mut handles = Vec::with_capacity(elements.len());
        let mut starts = Vec::with_capacity(elements.len());

        for (i, element) in elements.iter().enumerate() {
            let start = stagger * i as u32;
            let member = timeline.clone().delay(timeline.delay + start);
            if let Some(handle) = self.bind(*element, trigger, member) {
                handles.push(handle);
                starts.push(start);
            }
        }

        if handles.is_empty() {
            warn!(requested = elements.len(), "Group binding produced no animations");
            return None;
        }

        // The last bound member finishes last, whatever index it had
        let last_start = starts.last().copied().unwrap_or_default();
        let total_duration = timeline.total_duration() + last_start;
        Some(GroupBinding {
            handles,
            starts,
            total_duration,
        })
    }

    /// Release an animation immediately; repeated calls return false
    pub fn unbind(&mut self, handle: AnimationHandle) -> bool {
        let Some(slot) = self.slots.get_mut(handle.id.index as usize) else {
            return false;
        };
        if slot.generation != handle.id.generation || slot.record.is_none() {
            return false;
        }
        slot.record = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.id.index);
        self.events.retain(|event| event.handle() != handle);
        debug!(element = %handle.element, "Animation unbound");
        true
    }

    pub fn is_live(&self, handle: AnimationHandle) -> bool {
        self.record(handle).is_some()
    }

    pub fn timeline_of(&self, handle: AnimationHandle) -> Option<&PropertyTimeline> {
        self.record(handle).map(|record| &record.timeline)
    }

    fn record(&self, handle: AnimationHandle) -> Option<&HandleRecord> {
        self.slots
            .get(handle.id.index as usize)
            .filter(|slot| slot.generation == handle.id.generation)
            .and_then(|slot| slot.record.as_ref())
    }

    /// Live handles created by a component
    pub fn handles_of(&self, owner: ComponentId) -> Vec<AnimationHandle> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                let record = slot.record.as_ref()?;
                (record.owner == owner).then_some(AnimationHandle {
                    id: HandleId {
                        index: index as u32,
                        generation: slot.generation,
                    },
                    element: record.element,
                    owner: record.owner,
                })
            })
            .collect()
    }

    pub fn live_handles(&self) -> usize {
        self.slots.iter().filter(|slot| slot.record.is_some()).count()
    }

    // ---- pointer ----

    /// Hover in: pointer timelines on the element play forward
    pub fn pointer_enter(&mut self, element: ElementId) -> bool {
        self.steer_pointer(element, Direction::Forward)
    }

    /// Hover out: pointer timelines reverse from wherever they are
    pub fn pointer_leave(&mut self, element: ElementId) -> bool {
        self.steer_pointer(element, Direction::Reverse)
    }

    fn steer_pointer(&mut self, element: ElementId, direction: Direction) -> bool {
        if !self.elements.contains(element) {
            warn!(%element, "Pointer event for unknown element ignored");
            return false;
        }

        let mut steered = false;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let generation = slot.generation;
            let Some(record) = slot.record.as_mut() else {
                continue;
            };
            if record.element != element || record.trigger != TriggerSpec::Pointer {
                continue;
            }
            if direction == Direction::Forward && record.playhead.direction != Direction::Forward {
                self.events.push(BindingEvent::Started(AnimationHandle {
                    id: HandleId {
                        index: index as u32,
                        generation,
                    },
                    element,
                    owner: record.owner,
                }));
            }
            record.playhead.direction = direction;
            steered = true;
        }
        steered
    }

    // ---- per-frame ----

    /// Something time-based is still moving and needs frames
    pub fn is_animating(&self) -> bool {
        self.slots
            .iter()
            .filter_map(|slot| slot.record.as_ref())
            .any(|record| record.playhead.direction != Direction::Idle)
    }

    /// Third pipeline stage: advance timelines and write element properties
    pub fn render(&mut self, state: &ScrollState, viewport_height: f64, dt: Duration) {
        let dt = dt.as_secs_f64();

        for (index, slot) in self.slots.iter_mut().enumerate() {
            let generation = slot.generation;
            let Some(record) = slot.record.as_mut() else {
                continue;
            };
            let Some(element) = self.elements.get_mut(record.element) else {
                continue;
            };
            let handle = AnimationHandle {
                id: HandleId {
                    index: index as u32,
                    generation,
                },
                element: record.element,
                owner: record.owner,
            };

            let values = match record.trigger {
                TriggerSpec::ScrollRange(range) => {
                    record.timeline.sample_scrub(range.position(state.progress))
                }
                TriggerSpec::EnterViewport {
                    threshold_ratio,
                    replay,
                } => {
                    let in_view = element
                        .bounds
                        .map(|bounds| {
                            intersection_ratio(bounds, state.smoothed_offset, viewport_height)
                        })
                        .is_some_and(|ratio| is_in_view(ratio, threshold_ratio));

                    if in_view && !record.in_view {
                        self.events.push(BindingEvent::Entered(handle));
                        if !record.fired || replay == Replay::Reversible {
                            record.fired = true;
                            record.playhead.direction = Direction::Forward;
                            self.events.push(BindingEvent::Started(handle));
                        }
                    } else if !in_view && record.in_view {
                        self.events.push(BindingEvent::Exited(handle));
                        if replay == Replay::Reversible && record.fired {
                            record.playhead.direction = Direction::Reverse;
                        }
                    }
                    record.in_view = in_view;

                    if record.playhead.advance(dt, &record.timeline) {
                        self.events.push(BindingEvent::Completed(handle));
                    }
                    record.timeline.sample_at(record.playhead.time)
                }
                TriggerSpec::Pointer | TriggerSpec::Mount => {
                    if record.playhead.advance(dt, &record.timeline) {
                        self.events.push(BindingEvent::Completed(handle));
                    }
                    record.timeline.sample_at(record.playhead.time)
                }
            };

            for (property, value) in values {
                if element.props().get(property) != value {
                    element.write(property, value);
                }
            }
        }
    }

    /// Take the notifications produced since the last drain
    pub fn drain_events(&mut self) -> Vec<BindingEvent> {
        std::mem::take(&mut self.events)
    }

    /// Unmount every component, newest first
    pub fn unmount_all(&mut self) -> Vec<Teardown> {
        let mut ids = self.component_ids();
        ids.reverse();
        ids.into_iter()
            .filter_map(|id| match self.unmount(id) {
                Ok(teardown) => Some(teardown),
                Err(e) => {
                    warn!(error = %e, "Component teardown failed");
                    None
                }
            })
            .collect()
    }
}
