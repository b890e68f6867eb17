//! Item use-case service.
//!
//! # Responsibility
//! - Provide the stable call surface consumed by outer layers.
//! - Delegate persistence to the configured repository implementation.
//!
//! # Invariants
//! - The service adds no logic of its own: no validation, no error
//!   translation, no independent state.

use crate::model::item::{Item, ItemId, ItemUpdate, NewItem};
use crate::query::filter::ItemFilter;
use crate::repo::item_repo::{ItemRepository, RepoResult};

/// Pass-through service over an [`ItemRepository`] implementation.
pub struct ItemService<R: ItemRepository> {
    repo: R,
}

impl<R: ItemRepository> ItemService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Stores a new item and returns it with its assigned id.
    pub fn save(&self, item: NewItem) -> RepoResult<Item> {
        self.repo.save(item)
    }

    /// Replaces the mutable fields of an existing item.
    ///
    /// Returns repository-level not-found errors unchanged.
    pub fn update(&self, id: ItemId, update: &ItemUpdate) -> RepoResult<()> {
        self.repo.update(id, update)
    }

    /// Gets one item by id.
    pub fn find_by_id(&self, id: ItemId) -> RepoResult<Option<Item>> {
        self.repo.find_by_id(id)
    }

    /// Lists items matching the search condition.
    pub fn find_items(&self, filter: &ItemFilter) -> RepoResult<Vec<Item>> {
        self.repo.find_all(filter)
    }
}
