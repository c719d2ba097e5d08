//! Section registry: id → live geometry of each mounted section

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use tracing::debug;

/// Document-relative vertical extent of a block
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Bounds of a block starting at `top` with the given height
    pub fn from_height(top: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height,
        }
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Finite and not inverted; anything else is stale geometry
    pub fn is_valid(&self) -> bool {
        self.top.is_finite() && self.bottom.is_finite() && self.bottom >= self.top
    }

    /// Whether `line` falls inside `[top, bottom)`
    pub fn contains(&self, line: f64) -> bool {
        self.top <= line && line < self.bottom
    }

    /// Create a cell the host updates on relayout plus a provider reading it
    pub fn shared(initial: SectionBounds) -> (SharedBounds, BoundsProvider) {
        let cell = Rc::new(Cell::new(initial));
        let reader = Rc::clone(&cell);
        (SharedBounds(cell), Box::new(move || reader.get()))
    }
}

/// Host-side writer for a shared bounds cell
#[derive(Debug, Clone)]
pub struct SharedBounds(Rc<Cell<SectionBounds>>);

impl SharedBounds {
    pub fn set(&self, bounds: SectionBounds) {
        self.0.set(bounds);
    }

    pub fn get(&self) -> SectionBounds {
        self.0.get()
    }
}

/// Queried every time geometry is needed so layout changes are picked up
pub type BoundsProvider = Box<dyn Fn() -> SectionBounds>;

pub struct SectionDescriptor {
    pub id: String,
    pub bounds_provider: BoundsProvider,
}

impl SectionDescriptor {
    pub fn new(id: impl Into<String>, bounds_provider: BoundsProvider) -> Self {
        Self {
            id: id.into(),
            bounds_provider,
        }
    }

    /// Descriptor with fixed bounds
    pub fn fixed(id: impl Into<String>, bounds: SectionBounds) -> Self {
        Self::new(id, Box::new(move || bounds))
    }

    pub fn bounds(&self) -> SectionBounds {
        (self.bounds_provider)()
    }
}

impl fmt::Debug for SectionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionDescriptor")
            .field("id", &self.id)
            .field("bounds", &self.bounds())
            .finish()
    }
}

/// Insertion-ordered mapping of section id to descriptor
#[derive(Debug, Default)]
pub struct SectionRegistry {
    entries: IndexMap<String, SectionDescriptor>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the descriptor for its id
    ///
    /// Replacing keeps the original registration position.
    pub fn register(&mut self, descriptor: SectionDescriptor) {
        let id = descriptor.id.clone();
        if self.entries.insert(id.clone(), descriptor).is_some() {
            debug!(section = %id, "Replaced section descriptor");
        } else {
            debug!(section = %id, "Registered section");
        }
    }

    /// Remove a descriptor; no-op if absent
    pub fn unregister(&mut self, id: &str) -> bool {
        let removed = self.entries.shift_remove(id).is_some();
        if removed {
            debug!(section = %id, "Unregistered section");
        }
        removed
    }

    /// Descriptors in registration order
    pub fn get_all(&self) -> impl Iterator<Item = &SectionDescriptor> {
        self.entries.values()
    }

    /// Ids with bounds queried now, in registration order
    pub fn snapshot(&self) -> Vec<(String, SectionBounds)> {
        self.entries
            .values()
            .map(|d| (d.id.clone(), d.bounds()))
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&SectionDescriptor> {
        self.entries.get(id)
    }

    pub fn bounds_of(&self, id: &str) -> Option<SectionBounds> {
        self.entries.get(id).map(SectionDescriptor::bounds)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn first_id(&self) -> Option<&str> {
        self.entries.keys().next().map(String::as_str)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.get_index_of(id)
    }

    pub fn id_at(&self, index: usize) -> Option<&str> {
        self.entries.get_index(index).map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
