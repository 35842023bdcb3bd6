// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ordered, id-keyed collections of embedded entities.
//!
//! Every section of a user's aggregate stores its entities in a
//! [`Collection`]. Insertion order is preserved and is the default read
//! order. No operation leaves a collection holding two entities with the
//! same id.

use crate::error::DomainError;
use crate::id::{EntityId, EntityKind};
use serde::{Deserialize, Deserializer, Serialize};

/// An entity stored in a [`Collection`].
pub trait Entity {
    /// The kind reported in lookup errors.
    const KIND: EntityKind;

    /// Returns the entity's id.
    fn id(&self) -> EntityId;
}

/// An entity carrying a section-unique name.
pub trait Named: Entity {
    /// Returns the entity's name.
    fn name(&self) -> &str;
}

/// Ordered sequence of entities with unique ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Collection<T> {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterates mutably in insertion order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Returns the entities as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Removes every entity.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Entity> Collection<T> {
    /// Appends an entity and returns its id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateId` if an entity with the same id is
    /// already present. The collection is unchanged in that case.
    pub fn insert(&mut self, entity: T) -> Result<EntityId, DomainError> {
        let id: EntityId = entity.id();
        if self.contains(id) {
            return Err(DomainError::DuplicateId { kind: T::KIND, id });
        }
        self.items.push(entity);
        Ok(id)
    }

    /// Returns whether an entity with this id is present.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.position(id).is_some()
    }

    /// Looks up an entity by id.
    #[must_use]
    pub fn find(&self, id: EntityId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Looks up an entity by id for mutation.
    pub fn find_mut(&mut self, id: EntityId) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Looks up an entity by id for mutation, failing if it is absent.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if no entity with the id exists.
    pub fn require_mut(&mut self, id: EntityId) -> Result<&mut T, DomainError> {
        self.find_mut(id)
            .ok_or(DomainError::NotFound { kind: T::KIND, id })
    }

    /// Removes an entity by id, returning it.
    pub fn remove(&mut self, id: EntityId) -> Option<T> {
        self.position(id).map(|index| self.items.remove(index))
    }

    /// Removes every entity matching the predicate, returning the removed
    /// entities in their original order.
    pub fn remove_where<F>(&mut self, mut matches: F) -> Vec<T>
    where
        F: FnMut(&T) -> bool,
    {
        let (removed, kept): (Vec<T>, Vec<T>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|item| matches(item));
        self.items = kept;
        removed
    }

    fn position(&self, id: EntityId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Entity> TryFrom<Vec<T>> for Collection<T> {
    type Error = DomainError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        let mut collection: Self = Self::new();
        for item in items {
            collection.insert(item)?;
        }
        Ok(collection)
    }
}

// Stored documents are re-checked on load so a corrupted document cannot
// smuggle duplicate ids into a collection.
impl<'de, T> Deserialize<'de> for Collection<T>
where
    T: Entity + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items: Vec<T> = Vec::deserialize(deserializer)?;
        Self::try_from(items).map_err(serde::de::Error::custom)
    }
}
