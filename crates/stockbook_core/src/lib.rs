//! Core domain logic for Stockbook.
//! This crate is the single source of truth for item storage invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{Item, ItemId, ItemUpdate, NewItem};
pub use query::filter::ItemFilter;
pub use repo::item_repo::{
    ItemRepository, MemoryItemRepository, RepoError, RepoResult, SqliteItemRepository,
};
pub use service::item_service::ItemService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
