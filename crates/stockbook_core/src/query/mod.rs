//! Item search filtering.
//!
//! # Responsibility
//! - Translate an optional search condition into a matches/doesn't-match
//!   decision per item.
//! - Keep the in-memory and SQL execution strategies selecting identical
//!   rows.

pub mod filter;
