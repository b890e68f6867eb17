//! Core use-case services.
//!
//! # Responsibility
//! - Expose repository operations as use-case level APIs.
//! - Keep outer layers decoupled from storage details.

pub mod item_service;
