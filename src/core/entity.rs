//! Game entity system with simple integer IDs

use crate::DominionError;
use crate::Result;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Simple integer ID for card instances
///
/// Keeps IDs simple and contiguous for human readability and dense storage.
/// IDs are never reused within a game: a card that returns to its pile is
/// dropped from the store and a later gain mints a fresh ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(u32);

impl EntityId {
    pub const fn new(id: u32) -> Self {
        EntityId(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Card instance identifier
pub type CardId = EntityId;

/// Seat of a player in turn order (0-based, fixed for the game)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(usize);

impl PlayerId {
    pub const fn new(index: usize) -> Self {
        PlayerId(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0 + 1)
    }
}

/// Central storage for all card instances
///
/// Provides fast lookup by EntityId and manages entity lifecycle.
/// Uses FxHashMap for fast hashing of integer keys.
#[derive(Debug, Clone)]
pub struct EntityStore<T> {
    entities: FxHashMap<EntityId, T>,
    next_id: u32,
}

impl<T> EntityStore<T> {
    pub fn new() -> Self {
        EntityStore {
            entities: FxHashMap::default(),
            next_id: 0,
        }
    }

    /// Generate a new unique EntityId
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Insert an entity with a specific ID
    pub fn insert(&mut self, id: EntityId, entity: T) {
        self.entities.insert(id, entity);
    }

    /// Get an entity by ID
    pub fn get(&self, id: EntityId) -> Result<&T> {
        self.entities
            .get(&id)
            .ok_or(DominionError::CardNotFound(id.as_u32()))
    }

    /// Get a mutable reference to an entity
    pub fn get_mut(&mut self, id: EntityId) -> Result<&mut T> {
        self.entities
            .get_mut(&id)
            .ok_or(DominionError::CardNotFound(id.as_u32()))
    }

    /// Check if an entity exists
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// Remove an entity (cards returned to a pile stop existing)
    pub fn remove(&mut self, id: EntityId) -> Option<T> {
        self.entities.remove(&id)
    }

    /// Iterate over all entities
    pub fn iter(&self) -> impl Iterator<Item = (&EntityId, &T)> {
        self.entities.iter()
    }

    /// Get count of entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_store() {
        let mut store = EntityStore::new();
        let id1 = store.next_id();
        let id2 = store.next_id();

        assert_eq!(id1.as_u32(), 0);
        assert_eq!(id2.as_u32(), 1);

        store.insert(id1, "Copper");
        store.insert(id2, "Estate");

        assert_eq!(store.len(), 2);
        assert_eq!(*store.get(id1).unwrap(), "Copper");
        assert_eq!(*store.get(id2).unwrap(), "Estate");
        assert!(store.get(EntityId::new(999)).is_err());

        assert_eq!(store.remove(id1), Some("Copper"));
        assert!(!store.contains(id1));
        // Removed IDs are never handed out again
        assert_eq!(store.next_id().as_u32(), 2);
    }

    #[test]
    fn test_player_id_display() {
        assert_eq!(PlayerId::new(0).to_string(), "P1");
        assert_eq!(PlayerId::new(3).index(), 3);
    }
}
