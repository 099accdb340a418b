//! Repository trait for entity collections

use crate::core::entity::{Data, Entity};
use crate::core::error::ConsoleError;
use crate::core::filter::{Clause, filter_iter};

/// A collection of one entity type, the system of record for a list page
///
/// The in-memory implementation lives in [`crate::storage`]; a real backend
/// can implement the same contract. Listing always preserves the
/// collection's own order.
pub trait EntityStore<T: Entity> {
    /// Get all entities (unfiltered), in collection order
    fn list(&self) -> Vec<T>;

    /// Get an entity by ID
    fn get(&self, id: &str) -> Option<T>;

    /// Append a new entity
    fn insert(&mut self, entity: T) -> Result<T, ConsoleError>;

    /// Insert a new entity ahead of all others (newest-first lists)
    fn insert_first(&mut self, entity: T) -> Result<T, ConsoleError>;

    /// Replace an existing entity, keeping its position
    fn update(&mut self, entity: T) -> Result<T, ConsoleError>;

    /// Remove an entity
    fn remove(&mut self, id: &str) -> Result<T, ConsoleError>;

    /// Number of entities held
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entities satisfying every clause, in collection order
    fn filter(&self, clauses: &[Clause]) -> Vec<T>
    where
        T: Data,
    {
        filter_iter(&self.list(), clauses)
    }

    /// Apply `change` to the entity with `id` and store the result
    fn modify<F>(&mut self, id: &str, change: F) -> Result<T, ConsoleError>
    where
        F: FnOnce(&mut T) -> Result<(), ConsoleError>,
        Self: Sized,
    {
        let mut entity = self
            .get(id)
            .ok_or_else(|| ConsoleError::not_found(T::resource_name_singular(), id))?;
        change(&mut entity)?;
        self.update(entity)
    }
}
