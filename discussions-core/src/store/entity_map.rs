/*
    entity_map.rs - Insertion-ordered upsert map

    One map per entity type. Keys keep the position of their first
    insertion: upserting an existing id replaces the record in place,
    new ids append. Removal is total; a removed id reads as absent until
    it is re-added.
*/

use hashlink::LinkedHashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A record addressable by a stable id
pub trait Entity {
    type Id: Clone + Eq + Hash + Debug;

    fn entity_id(&self) -> &Self::Id;
}

/// Normalized cache for a single entity type
#[derive(Debug, Clone)]
pub struct EntityMap<T: Entity> {
    records: LinkedHashMap<T::Id, T>,
}

impl<T: Entity> EntityMap<T> {
    pub fn new() -> Self {
        EntityMap {
            records: LinkedHashMap::new(),
        }
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.records.get(id)
    }

    /// Records for the given ids, in input order; ids with no record are
    /// dropped rather than reported
    pub fn get_many<'a>(&self, ids: impl IntoIterator<Item = &'a T::Id>) -> Vec<&T>
    where
        T::Id: 'a,
    {
        ids.into_iter().filter_map(|id| self.records.get(id)).collect()
    }

    /// Upsert by id; an existing id keeps its original position
    ///
    /// `replace` rather than `insert`: hashlink's `insert` moves an
    /// existing key to the back of the iteration order.
    pub fn insert(&mut self, record: T) {
        self.records.replace(record.entity_id().clone(), record);
    }

    pub fn insert_many(&mut self, records: impl IntoIterator<Item = T>) {
        for record in records {
            self.insert(record);
        }
    }

    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        self.records.remove(id)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.records.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &T::Id> {
        self.records.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Entity> Default for EntityMap<T> {
    fn default() -> Self {
        EntityMap::new()
    }
}

impl<T: Entity + PartialEq> PartialEq for EntityMap<T> {
    fn eq(&self, other: &Self) -> bool {
        self.records.len() == other.records.len()
            && self.records.iter().zip(other.records.iter()).all(
                |((key_a, value_a), (key_b, value_b))| key_a == key_b && value_a == value_b,
            )
    }
}
