use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    error::AppResult,
    models::{BrowsingHistory, Item},
    services::{
        history::HistoryLedger, providers::CatalogProvider,
        recommendations::select_recommendations,
    },
};

/// One visitor's browsing session
///
/// Owns the history ledger and the catalog handle the UI talks to. The ledger
/// sits behind a mutex so a view being recorded and a selection reading the
/// history never interleave.
pub struct BrowsingSession {
    catalog: Arc<dyn CatalogProvider>,
    ledger: Mutex<HistoryLedger>,
}

impl BrowsingSession {
    pub fn new(catalog: Arc<dyn CatalogProvider>, ledger: HistoryLedger) -> Self {
        Self {
            catalog,
            ledger: Mutex::new(ledger),
        }
    }

    /// Creates a session and rehydrates its history from storage
    pub async fn start(catalog: Arc<dyn CatalogProvider>, mut ledger: HistoryLedger) -> Self {
        ledger.load().await;
        tracing::info!(catalog = catalog.name(), "Browsing session started");
        Self::new(catalog, ledger)
    }

    /// Full catalog, in catalog order
    pub async fn products(&self) -> AppResult<Vec<Item>> {
        self.catalog.list_all().await
    }

    /// Featured items, in catalog order
    pub async fn featured(&self) -> AppResult<Vec<Item>> {
        self.catalog.list_featured().await
    }

    /// Recommendations for the current history
    pub async fn get_recommendations(&self) -> AppResult<Vec<Item>> {
        let catalog = self.catalog.list_all().await?;
        let ledger = self.ledger.lock().await;
        Ok(select_recommendations(&catalog, ledger.snapshot()))
    }

    /// Recomputes recommendations on request
    ///
    /// Inputs are the same as [`get_recommendations`](Self::get_recommendations),
    /// so the output only changes when the history or the catalog did.
    pub async fn refresh(&self) -> AppResult<Vec<Item>> {
        tracing::info!("Refreshing recommendations");
        self.get_recommendations().await
    }

    /// Looks up a product and records the view when it exists.
    ///
    /// Unknown ids return `Ok(None)` and leave the history untouched.
    pub async fn view_product(&self, id: &str) -> AppResult<Option<Item>> {
        let Some(item) = self.catalog.get_by_id(id).await? else {
            tracing::info!(product_id = %id, "Viewed product not in catalog");
            return Ok(None);
        };

        self.ledger.lock().await.record_view(&item.id).await;
        Ok(Some(item))
    }

    /// Copy of the current history, most-recent-first
    pub async fn history(&self) -> BrowsingHistory {
        self.ledger.lock().await.snapshot().clone()
    }

    pub async fn clear_history(&self) {
        self.ledger.lock().await.clear().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryHistoryStore;
    use crate::error::AppError;
    use crate::services::providers::{MockCatalogProvider, StaticCatalog};

    async fn demo_session() -> BrowsingSession {
        let store = Arc::new(MemoryHistoryStore::new());
        BrowsingSession::start(
            Arc::new(StaticCatalog::demo()),
            HistoryLedger::new(store, "test"),
        )
        .await
    }

    fn ids(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_initial_recommendations_are_featured() {
        let session = demo_session().await;
        let picked = session.get_recommendations().await.unwrap();
        assert_eq!(ids(&picked), ["1", "4"]);
    }

    #[tokio::test]
    async fn test_viewing_audio_recommends_audio_first() {
        let session = demo_session().await;
        let item = session.view_product("2").await.unwrap().unwrap();
        assert_eq!(item.name, "Wireless Earbuds");

        let picked = session.get_recommendations().await.unwrap();
        assert_eq!(ids(&picked), ["6", "1", "3", "4"]);
    }

    #[tokio::test]
    async fn test_view_sequence_excludes_seen_items() {
        let session = demo_session().await;
        session.view_product("1").await.unwrap();
        session.view_product("3").await.unwrap();

        // Home has no other items; 1 and 3 were seen
        let picked = session.get_recommendations().await.unwrap();
        assert_eq!(ids(&picked), ["2", "4", "5", "6"]);
        assert_eq!(session.history().await.as_slice(), ["3", "1"]);
    }

    #[tokio::test]
    async fn test_unknown_product_is_absent_and_not_recorded() {
        let session = demo_session().await;
        assert_eq!(session.view_product("404").await.unwrap(), None);
        assert!(session.history().await.is_empty());
    }

    #[tokio::test]
    async fn test_refresh_matches_get_recommendations() {
        let session = demo_session().await;
        session.view_product("6").await.unwrap();
        let first = session.get_recommendations().await.unwrap();
        let refreshed = session.refresh().await.unwrap();
        assert_eq!(first, refreshed);
    }

    #[tokio::test]
    async fn test_clear_history_restores_featured() {
        let session = demo_session().await;
        session.view_product("8").await.unwrap();
        session.clear_history().await;
        let picked = session.get_recommendations().await.unwrap();
        assert_eq!(ids(&picked), ["1", "4"]);
    }

    #[tokio::test]
    async fn test_history_survives_restart() {
        let store = Arc::new(MemoryHistoryStore::new());
        let catalog = Arc::new(StaticCatalog::demo());

        let session =
            BrowsingSession::start(catalog.clone(), HistoryLedger::new(store.clone(), "v")).await;
        session.view_product("5").await.unwrap();
        session.view_product("7").await.unwrap();
        drop(session);

        let restarted = BrowsingSession::start(catalog, HistoryLedger::new(store, "v")).await;
        assert_eq!(restarted.history().await.as_slice(), ["7", "5"]);
    }

    #[tokio::test]
    async fn test_catalog_failure_is_upstream_unavailable() {
        let mut catalog = MockCatalogProvider::new();
        catalog
            .expect_list_all()
            .returning(|| Err(AppError::UpstreamUnavailable("connection refused".to_string())));
        catalog.expect_name().return_const("mock");

        let store = Arc::new(MemoryHistoryStore::new());
        let session =
            BrowsingSession::start(Arc::new(catalog), HistoryLedger::new(store, "v")).await;

        let result = session.get_recommendations().await;
        assert!(matches!(result, Err(AppError::UpstreamUnavailable(_))));
    }

    #[tokio::test]
    async fn test_concurrent_views_keep_ledger_consistent() {
        let session = Arc::new(demo_session().await);
        let mut tasks = Vec::new();
        for _ in 0..5 {
            for id in ["1", "2", "3", "4", "5", "6", "7", "8"] {
                let session = session.clone();
                tasks.push(tokio::spawn(async move { session.view_product(id).await }));
            }
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let history = session.history().await;
        assert_eq!(history.len(), 8);
        let mut sorted: Vec<&str> = history.as_slice().iter().map(String::as_str).collect();
        sorted.sort();
        assert_eq!(sorted, ["1", "2", "3", "4", "5", "6", "7", "8"]);
    }
}
