//! Shopping Items Library
//!
//! This library provides a small HTTP service for creating, listing and
//! deleting shopping items held in memory.

// Domain modules
pub mod items;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
