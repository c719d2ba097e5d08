//! Arena of animation targets addressed by generational handles

use std::fmt;

use super::component::ComponentId;
use super::props::{Property, VisualProps};
use crate::section::SectionBounds;

/// Handle to an element; stale once the element is removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId {
    index: u32,
    generation: u32,
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element#{}v{}", self.index, self.generation)
    }
}

#[derive(Debug, Clone)]
pub struct Element {
    pub label: String,
    pub owner: ComponentId,
    /// Document-relative geometry, used by viewport triggers
    pub bounds: Option<SectionBounds>,
    props: VisualProps,
    /// Number of property writes applied so far
    writes: u64,
}

impl Element {
    pub fn props(&self) -> &VisualProps {
        &self.props
    }

    pub fn writes(&self) -> u64 {
        self.writes
    }

    pub(crate) fn write(&mut self, property: Property, value: f64) {
        self.props.set(property, value);
        self.writes += 1;
    }
}

#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    element: Option<Element>,
}

#[derive(Debug, Default)]
pub struct ElementArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
}

impl ElementArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, owner: ComponentId) -> ElementId {
        let element = Element {
            label: label.into(),
            owner,
            bounds: None,
            props: VisualProps::default(),
            writes: 0,
        };

        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.element = Some(element);
            ElementId {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                element: Some(element),
            });
            ElementId {
                index,
                generation: 0,
            }
        }
    }

    /// Remove an element, invalidating every copy of its id
    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let element = slot.element.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        Some(element)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.element.as_ref())
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.element.as_mut())
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.get(id).is_some()
    }

    /// Ids of every live element owned by `owner`
    pub fn owned_by(&self, owner: ComponentId) -> Vec<ElementId> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                slot.element
                    .as_ref()
                    .filter(|element| element.owner == owner)
                    .map(|_| ElementId {
                        index: index as u32,
                        generation: slot.generation,
                    })
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.element.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut arena = ElementArena::new();
        let id = arena.insert("title", ComponentId::from_raw(1));
        let element = arena.get(id).unwrap();
        assert_eq!(element.label, "title");
        assert_eq!(element.writes(), 0);
    }

    #[test]
    fn test_removed_id_is_stale_after_reuse() {
        let mut arena = ElementArena::new();
        let old = arena.insert("card", ComponentId::from_raw(1));
        assert!(arena.remove(old).is_some());
        let new = arena.insert("other", ComponentId::from_raw(2));

        assert_ne!(old, new);
        assert!(arena.get(old).is_none());
        assert_eq!(arena.get(new).unwrap().label, "other");
        assert!(arena.remove(old).is_none());
    }

    #[test]
    fn test_owned_by() {
        let mut arena = ElementArena::new();
        let owner = ComponentId::from_raw(7);
        let a = arena.insert("a", owner);
        arena.insert("b", ComponentId::from_raw(8));
        let c = arena.insert("c", owner);

        assert_eq!(arena.owned_by(owner), vec![a, c]);
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_write_counts() {
        let mut arena = ElementArena::new();
        let id = arena.insert("dot", ComponentId::from_raw(1));
        let element = arena.get_mut(id).unwrap();
        element.write(Property::Opacity, 0.5);
        element.write(Property::Scale, 2.0);
        assert_eq!(element.writes(), 2);
        assert_eq!(element.props().opacity, 0.5);
    }
}
