//! Domain model for stocked items.
//!
//! # Responsibility
//! - Define the canonical item record and its request shapes.
//!
//! # Invariants
//! - Every stored item is identified by a store-assigned `ItemId`.
//! - An id, once assigned, never changes and is never reused.

pub mod item;
