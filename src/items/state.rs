//! Shopping Item State Management
//!
//! This module owns the in-memory item store and the application state that
//! wraps it for the handlers.

use super::models::Item;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

// =============================================================================
// Item Store
// =============================================================================

/// Ordered, process-lifetime collection of items.
///
/// Every read and mutation goes through the same lock, so `add` and `remove`
/// are atomic with respect to each other and to `list`.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: RwLock<Vec<Item>>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all items in insertion order.
    pub async fn list(&self) -> Vec<Item> {
        self.items.read().await.clone()
    }

    /// Appends `item` under a newly generated id and returns the stored copy.
    pub async fn add(&self, mut item: Item) -> Item {
        item.id = Uuid::new_v4();

        let mut items = self.items.write().await;
        items.push(item.clone());
        tracing::debug!(id = %item.id, name = %item.name, len = items.len(), "item added");

        item
    }

    /// Removes the first item with `id`, keeping the others in order.
    ///
    /// Returns `false` when no item matched; the store is left untouched.
    pub async fn remove(&self, id: Uuid) -> bool {
        let mut items = self.items.write().await;
        match items.iter().position(|i| i.id == id) {
            Some(index) => {
                items.remove(index);
                tracing::debug!(%id, len = items.len(), "item removed");
                true
            }
            None => {
                tracing::debug!(%id, "no item to remove");
                false
            }
        }
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state
#[derive(Debug, Default)]
pub struct AppState {
    /// The single item store, owned by the router for the process lifetime.
    pub items: ItemStore,
}

impl AppState {
    /// Creates a new AppState with an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = ItemStore::new();
        assert!(store.is_empty().await);
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_add_overwrites_caller_id() {
        let store = ItemStore::new();
        let supplied = Uuid::new_v4();

        let created = store
            .add(Item {
                id: supplied,
                name: "milk".into(),
            })
            .await;

        assert_ne!(created.id, supplied);
        assert_ne!(created.id, Uuid::nil());
        assert_eq!(store.list().await, vec![created]);
    }

    #[tokio::test]
    async fn test_add_preserves_insertion_order() {
        let store = ItemStore::new();
        for name in ["milk", "eggs", "bread"] {
            store.add(Item::new(name)).await;
        }

        let items = store.list().await;
        assert_eq!(names(&items), vec!["milk", "eggs", "bread"]);
    }

    #[tokio::test]
    async fn test_remove_keeps_relative_order() {
        let store = ItemStore::new();
        let milk = store.add(Item::new("milk")).await;
        let eggs = store.add(Item::new("eggs")).await;
        let bread = store.add(Item::new("bread")).await;

        assert!(store.remove(eggs.id).await);

        assert_eq!(store.list().await, vec![milk, bread]);
    }

    #[tokio::test]
    async fn test_remove_unknown_id_is_noop() {
        let store = ItemStore::new();
        store.add(Item::new("milk")).await;
        let before = store.list().await;

        assert!(!store.remove(Uuid::new_v4()).await);

        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn test_concurrent_adds_are_all_kept() {
        let state: SharedState = Arc::new(AppState::new());

        let handles: Vec<_> = (0..32)
            .map(|n| {
                let state = state.clone();
                tokio::spawn(async move { state.items.add(Item::new(format!("item-{n}"))).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        let items = state.items.list().await;
        assert_eq!(items.len(), 32);

        let mut ids: Vec<_> = items.iter().map(|i| i.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 32, "generated ids must be distinct");
    }
}
