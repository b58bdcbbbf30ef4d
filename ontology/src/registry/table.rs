//! IRI-keyed entity tables.

use std::collections::btree_map::{self, BTreeMap};
use std::rc::Rc;

use crate::entity::EntityRef;
use crate::iri::Iri;

/// One kind's table: IRI to shared entity handle.
pub type TypedTable<T> = Table<Rc<T>>;

/// The unified table holding every node and property entity.
pub type EntityTable = Table<EntityRef>;

/// A mapping from IRI to entity, iterated in IRI order.
///
/// Only the registry can insert or remove entries. Everyone else receives
/// `&Table`, a live read-only view: the borrow keeps the registry from
/// mutating while the view is held.
#[derive(Debug, Clone)]
pub struct Table<V> {
    entries: BTreeMap<Iri, V>,
}

impl<V> Default for Table<V> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<V> Table<V> {
    /// Inserts or overwrites the entry for `iri`, returning the displaced value.
    pub(crate) fn put(&mut self, iri: Iri, value: V) -> Option<V> {
        self.entries.insert(iri, value)
    }

    pub(crate) fn remove(&mut self, iri: &Iri) -> Option<V> {
        self.entries.remove(iri)
    }

    /// Returns the entry for `iri`, if present.
    #[must_use]
    pub fn get(&self, iri: &Iri) -> Option<&V> {
        self.entries.get(iri)
    }

    /// Returns true if `iri` has an entry.
    #[must_use]
    pub fn contains(&self, iri: &Iri) -> bool {
        self.entries.contains_key(iri)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in IRI order.
    pub fn iter(&self) -> btree_map::Iter<'_, Iri, V> {
        self.entries.iter()
    }

    /// Iterates IRIs in order.
    pub fn iris(&self) -> btree_map::Keys<'_, Iri, V> {
        self.entries.keys()
    }

    /// Iterates values in IRI order.
    pub fn values(&self) -> btree_map::Values<'_, Iri, V> {
        self.entries.values()
    }
}

impl<'a, V> IntoIterator for &'a Table<V> {
    type Item = (&'a Iri, &'a V);
    type IntoIter = btree_map::Iter<'a, Iri, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Table;
    use crate::iri::Iri;

    fn iri(text: &str) -> Iri {
        Iri::new(text).expect("valid iri")
    }

    #[test]
    fn put_is_last_write_wins() {
        let mut table = Table::default();
        assert_eq!(table.put(iri("http://ex#A"), 1), None);
        assert_eq!(table.put(iri("http://ex#A"), 2), Some(1));
        assert_eq!(table.get(&iri("http://ex#A")), Some(&2));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn iterates_in_iri_order() {
        let mut table = Table::default();
        table.put(iri("http://ex#C"), 'c');
        table.put(iri("http://ex#A"), 'a');
        table.put(iri("http://ex#B"), 'b');
        let values: String = table.values().collect();
        assert_eq!(values, "abc");
        assert!(table.contains(&iri("http://ex#B")));
        assert!(!table.contains(&iri("http://ex#D")));
    }
}
