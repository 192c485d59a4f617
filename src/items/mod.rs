//! Shopping Item Domain Module
//!
//! This module contains the shopping item business logic:
//! - Domain model (Item)
//! - Ordered in-memory store and application state
//! - REST API handlers

pub mod handlers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::Item;
pub use state::{AppState, ItemStore, SharedState};
