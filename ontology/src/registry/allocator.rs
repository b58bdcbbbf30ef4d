//! Lazy, stable output identifiers.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::entity::{EntityRef, Identity};

/// Assigns `"0"`, `"1"`, ... to entities in order of first request.
///
/// Keys are entity identities, not IRIs: two distinct entities sharing an
/// IRI receive distinct identifiers. Every numbered entity is retained so
/// its allocation can never be reused by another entity. Numbers are never
/// reassigned or reused.
#[derive(Debug, Default)]
pub struct IdAllocator {
    state: RefCell<AllocatorState>,
}

#[derive(Debug, Default)]
struct AllocatorState {
    assigned: HashMap<Identity, String>,
    retained: Vec<EntityRef>,
}

impl IdAllocator {
    /// Creates an allocator whose first identifier will be `"0"`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the identifier of `entity`, assigning the next one on first
    /// request.
    pub fn id_for(&self, entity: &EntityRef) -> String {
        let mut state = self.state.borrow_mut();
        let identity = entity.identity();
        if let Some(id) = state.assigned.get(&identity) {
            return id.clone();
        }
        let id = state.retained.len().to_string();
        state.assigned.insert(identity, id.clone());
        state.retained.push(entity.clone());
        id
    }

    /// Number of identifiers handed out so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.borrow().retained.len()
    }

    /// Returns true if no identifier was handed out yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::IdAllocator;
    use crate::entity::{Class, ClassKind, EntityRef};
    use crate::iri::Iri;

    fn class(text: &str) -> EntityRef {
        let iri = Iri::new(text).expect("valid iri");
        EntityRef::from(Rc::new(Class::new(iri, ClassKind::Owl)))
    }

    #[test]
    fn first_request_gets_zero_and_repeats_are_stable() {
        let ids = IdAllocator::new();
        let a = class("http://ex#A");
        assert_eq!(ids.id_for(&a), "0");
        assert_eq!(ids.id_for(&a), "0");
        assert_eq!(ids.len(), 1);
    }

    #[test]
    fn numbering_follows_request_order() {
        let ids = IdAllocator::new();
        let created_first = class("http://ex#A");
        let created_second = class("http://ex#B");
        assert_eq!(ids.id_for(&created_second), "0");
        assert_eq!(ids.id_for(&created_first), "1");
    }

    #[test]
    fn distinct_entities_with_equal_iris_are_numbered_separately() {
        let ids = IdAllocator::new();
        let a = class("http://ex#A");
        let twin = class("http://ex#A");
        assert_ne!(ids.id_for(&a), ids.id_for(&twin));
    }
}
