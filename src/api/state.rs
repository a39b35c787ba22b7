use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::db::{
    create_redis_client, FileHistoryStore, HistoryStore, MemoryHistoryStore, RedisHistoryStore,
};
use crate::services::providers::{CatalogProvider, HttpCatalogProvider, StaticCatalog};
use crate::services::{BrowsingSession, HistoryLedger};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<BrowsingSession>,
}

impl AppState {
    pub fn new(session: BrowsingSession) -> Self {
        Self {
            session: Arc::new(session),
        }
    }

    /// Wires the catalog provider and history store named by `config` and
    /// loads the visitor's history
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let catalog = catalog_from_config(config)?;
        let store = store_from_config(config)?;

        tracing::info!(
            catalog = catalog.name(),
            store = store.name(),
            visitor_id = %config.visitor_id,
            "Initializing browsing session"
        );

        let ledger = HistoryLedger::new(store, config.visitor_id.clone());
        Ok(Self::new(BrowsingSession::start(catalog, ledger).await))
    }
}

fn catalog_from_config(config: &Config) -> anyhow::Result<Arc<dyn CatalogProvider>> {
    match &config.catalog_url {
        Some(url) => {
            let timeout = Duration::from_secs(config.catalog_timeout_secs);
            Ok(Arc::new(HttpCatalogProvider::new(url.clone(), timeout)?))
        }
        None => {
            let latency = Duration::from_millis(config.catalog_latency_ms);
            Ok(Arc::new(StaticCatalog::demo().with_latency(latency)))
        }
    }
}

fn store_from_config(config: &Config) -> anyhow::Result<Arc<dyn HistoryStore>> {
    if !config.persist_history {
        return Ok(Arc::new(MemoryHistoryStore::new()));
    }

    match &config.redis_url {
        Some(url) => Ok(Arc::new(RedisHistoryStore::new(create_redis_client(url)?))),
        None => Ok(Arc::new(FileHistoryStore::new(&config.history_dir))),
    }
}
