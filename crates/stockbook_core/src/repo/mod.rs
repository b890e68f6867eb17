//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for item storage.
//! - Isolate map/SQLite storage details from service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) in addition to
//!   infrastructure transport errors.
//! - Every implementation lists items in ascending-id order.

pub mod item_repo;
