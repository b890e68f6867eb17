//! Item domain model.
//!
//! # Responsibility
//! - Define the canonical item record owned by the store.
//! - Provide the request shapes for creation and wholesale update.
//!
//! # Invariants
//! - `id` is assigned by the store on save and never changes afterwards.
//! - All data fields are independently optional; there is no uniqueness
//!   constraint on `item_name`.

use serde::{Deserialize, Serialize};

/// Stable identifier for a stored item.
///
/// Assigned by the repository on save (monotonic counter in the reference
/// store, rowid in SQLite). Kept as a type alias to make semantic intent
/// explicit in signatures.
pub type ItemId = i64;

/// Canonical item record as owned by the store.
///
/// Only ever constructed by a repository; callers start from [`NewItem`] and
/// receive an `Item` back once an id exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Store-assigned stable id.
    pub id: ItemId,
    /// Display name. No uniqueness or casing rules.
    pub item_name: Option<String>,
    /// Unit price in minor currency units.
    pub price: Option<i64>,
    /// Units on hand.
    pub quantity: Option<i64>,
}

impl Item {
    /// Overwrites the three mutable fields from an update request.
    ///
    /// The id is untouched. There is no field-level merge: callers must
    /// supply previous values for fields they do not intend to change.
    pub fn apply(&mut self, update: &ItemUpdate) {
        self.item_name = update.item_name.clone();
        self.price = update.price;
        self.quantity = update.quantity;
    }
}

/// Request shape for creating an item.
///
/// Deliberately has no id field: identity does not exist until the store
/// assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub item_name: Option<String>,
    pub price: Option<i64>,
    pub quantity: Option<i64>,
}

impl NewItem {
    /// Creates a fully-populated request.
    pub fn new(item_name: impl Into<String>, price: i64, quantity: i64) -> Self {
        Self {
            item_name: Some(item_name.into()),
            price: Some(price),
            quantity: Some(quantity),
        }
    }
}

/// Wholesale replacement of an item's mutable fields.
///
/// Identifies its target externally by [`ItemId`]; see
/// [`Item::apply`] for the overwrite semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemUpdate {
    pub item_name: Option<String>,
    pub price: Option<i64>,
    pub quantity: Option<i64>,
}

impl ItemUpdate {
    /// Creates a fully-populated update.
    pub fn new(item_name: impl Into<String>, price: i64, quantity: i64) -> Self {
        Self {
            item_name: Some(item_name.into()),
            price: Some(price),
            quantity: Some(quantity),
        }
    }
}
