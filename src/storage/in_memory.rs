//! In-memory implementation of EntityStore

use crate::core::entity::Entity;
use crate::core::error::ConsoleError;
use crate::core::store::EntityStore;
use indexmap::IndexMap;

/// In-memory entity store
///
/// Entities are kept in insertion order keyed by id. Each console owns its
/// stores exclusively, so mutation goes through `&mut self` and no locking
/// is involved.
#[derive(Debug, Clone)]
pub struct InMemoryStore<T> {
    items: IndexMap<String, T>,
}

impl<T: Entity> InMemoryStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
        }
    }

    /// Build a store from seed records, rejecting duplicate ids
    pub fn from_records(records: Vec<T>) -> Result<Self, ConsoleError> {
        let mut store = Self::new();
        for record in records {
            store.insert(record)?;
        }
        Ok(store)
    }

    /// Borrowing iterator in collection order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    /// Replace the whole collection, e.g. after a reordering
    pub fn replace_all(&mut self, records: Vec<T>) -> Result<(), ConsoleError> {
        *self = Self::from_records(records)?;
        Ok(())
    }
}

impl<T: Entity> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> EntityStore<T> for InMemoryStore<T> {
    fn list(&self) -> Vec<T> {
        self.items.values().cloned().collect()
    }

    fn get(&self, id: &str) -> Option<T> {
        self.items.get(id).cloned()
    }

    fn insert(&mut self, entity: T) -> Result<T, ConsoleError> {
        if self.items.contains_key(entity.id()) {
            return Err(ConsoleError::AlreadyExists {
                entity_type: T::resource_name_singular(),
                id: entity.id().to_string(),
            });
        }
        self.items.insert(entity.id().to_string(), entity.clone());
        Ok(entity)
    }

    fn insert_first(&mut self, entity: T) -> Result<T, ConsoleError> {
        if self.items.contains_key(entity.id()) {
            return Err(ConsoleError::AlreadyExists {
                entity_type: T::resource_name_singular(),
                id: entity.id().to_string(),
            });
        }
        self.items
            .shift_insert(0, entity.id().to_string(), entity.clone());
        Ok(entity)
    }

    fn update(&mut self, entity: T) -> Result<T, ConsoleError> {
        let slot = self
            .items
            .get_mut(entity.id())
            .ok_or_else(|| ConsoleError::not_found(T::resource_name_singular(), entity.id()))?;
        *slot = entity.clone();
        Ok(entity)
    }

    fn remove(&mut self, id: &str) -> Result<T, ConsoleError> {
        self.items
            .shift_remove(id)
            .ok_or_else(|| ConsoleError::not_found(T::resource_name_singular(), id))
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
