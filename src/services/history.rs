use std::sync::Arc;

use crate::{
    db::{HistoryStore, SlotKey},
    models::BrowsingHistory,
};

/// Browsing history bound to a durable slot
///
/// Storage is a best-effort cache: read failures start the ledger empty and
/// write failures are logged while the in-memory state stays authoritative.
pub struct HistoryLedger {
    history: BrowsingHistory,
    store: Arc<dyn HistoryStore>,
    slot: SlotKey,
}

impl HistoryLedger {
    /// Creates an empty ledger for `visitor_id`. Call [`load`](Self::load) to
    /// pick up a previous session.
    pub fn new(store: Arc<dyn HistoryStore>, visitor_id: impl Into<String>) -> Self {
        Self {
            history: BrowsingHistory::new(),
            store,
            slot: SlotKey::BrowsingHistory(visitor_id.into()),
        }
    }

    /// Replaces the in-memory state with whatever the slot holds
    pub async fn load(&mut self) {
        self.history = match self.store.read(&self.slot).await {
            Ok(Some(payload)) => match BrowsingHistory::from_json(&payload) {
                Some(history) => history,
                None => {
                    tracing::warn!(slot = %self.slot, "Discarding unparsable browsing history");
                    BrowsingHistory::new()
                }
            },
            Ok(None) => BrowsingHistory::new(),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    store = self.store.name(),
                    slot = %self.slot,
                    "History storage unavailable, starting empty"
                );
                BrowsingHistory::new()
            }
        };

        tracing::info!(slot = %self.slot, entries = self.history.len(), "Browsing history loaded");
    }

    /// Moves `item_id` to the front and writes the ledger through to storage
    pub async fn record_view(&mut self, item_id: &str) {
        self.history.record(item_id);
        tracing::debug!(item_id = %item_id, entries = self.history.len(), "Recorded view");
        self.persist().await;
    }

    /// Forgets every recorded view
    pub async fn clear(&mut self) {
        self.history.clear();
        self.persist().await;
    }

    pub fn most_recent(&self) -> Option<&str> {
        self.history.most_recent()
    }

    pub fn snapshot(&self) -> &BrowsingHistory {
        &self.history
    }

    async fn persist(&self) {
        if let Err(e) = self.store.write(&self.slot, &self.history.to_json()).await {
            tracing::warn!(
                error = %e,
                store = self.store.name(),
                slot = %self.slot,
                "Failed to persist browsing history"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{MemoryHistoryStore, MockHistoryStore};
    use crate::error::AppError;

    fn memory_ledger(store: &Arc<MemoryHistoryStore>, visitor: &str) -> HistoryLedger {
        HistoryLedger::new(store.clone(), visitor)
    }

    #[tokio::test]
    async fn test_load_without_prior_state_is_empty() {
        let store = Arc::new(MemoryHistoryStore::new());
        let mut ledger = memory_ledger(&store, "alice");
        ledger.load().await;
        assert!(ledger.snapshot().is_empty());
        assert_eq!(ledger.most_recent(), None);
    }

    #[tokio::test]
    async fn test_record_view_writes_through() {
        let store = Arc::new(MemoryHistoryStore::new());
        let mut ledger = memory_ledger(&store, "alice");

        ledger.record_view("2").await;
        ledger.record_view("5").await;

        let slot = SlotKey::BrowsingHistory("alice".to_string());
        assert_eq!(
            store.read(&slot).await.unwrap().as_deref(),
            Some(r#"["5","2"]"#)
        );
    }

    #[tokio::test]
    async fn test_reload_yields_identical_sequence() {
        let store = Arc::new(MemoryHistoryStore::new());
        let mut ledger = memory_ledger(&store, "alice");
        for id in ["1", "3", "2", "1", "8"] {
            ledger.record_view(id).await;
        }

        let mut restarted = memory_ledger(&store, "alice");
        restarted.load().await;

        assert_eq!(restarted.snapshot(), ledger.snapshot());
        assert_eq!(restarted.snapshot().as_slice(), ["8", "1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_load_is_idempotent() {
        let store = Arc::new(MemoryHistoryStore::new());
        let mut ledger = memory_ledger(&store, "alice");
        ledger.record_view("4").await;

        ledger.load().await;
        ledger.load().await;

        assert_eq!(ledger.snapshot().as_slice(), ["4"]);
    }

    #[tokio::test]
    async fn test_visitors_do_not_share_history() {
        let store = Arc::new(MemoryHistoryStore::new());
        let mut alice = memory_ledger(&store, "alice");
        alice.record_view("1").await;

        let mut bob = memory_ledger(&store, "bob");
        bob.load().await;

        assert!(bob.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_payload_falls_back_to_empty() {
        let store = Arc::new(MemoryHistoryStore::new());
        let slot = SlotKey::BrowsingHistory("alice".to_string());
        store.write(&slot, r#"{"not":"an array"}"#).await.unwrap();

        let mut ledger = memory_ledger(&store, "alice");
        ledger.load().await;

        assert!(ledger.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_read_failure_falls_back_to_empty() {
        let mut store = MockHistoryStore::new();
        store
            .expect_read()
            .returning(|_| Err(AppError::StorageUnavailable("disk gone".to_string())));
        store.expect_name().return_const("mock");

        let mut ledger = HistoryLedger::new(Arc::new(store), "alice");
        ledger.load().await;

        assert!(ledger.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_write_failure_keeps_in_memory_state() {
        let mut store = MockHistoryStore::new();
        store
            .expect_write()
            .times(2)
            .returning(|_, _| Err(AppError::StorageUnavailable("quota exceeded".to_string())));
        store.expect_name().return_const("mock");

        let mut ledger = HistoryLedger::new(Arc::new(store), "alice");
        ledger.record_view("1").await;
        ledger.record_view("2").await;

        assert_eq!(ledger.snapshot().as_slice(), ["2", "1"]);
    }

    #[tokio::test]
    async fn test_clear_persists_empty_array() {
        let store = Arc::new(MemoryHistoryStore::new());
        let mut ledger = memory_ledger(&store, "alice");
        ledger.record_view("1").await;
        ledger.clear().await;

        let slot = SlotKey::BrowsingHistory("alice".to_string());
        assert_eq!(store.read(&slot).await.unwrap().as_deref(), Some("[]"));
        assert!(ledger.snapshot().is_empty());
    }
}
