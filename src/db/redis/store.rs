use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use redis::Client;

use crate::db::{HistoryStore, SlotKey};
use crate::error::{AppError, AppResult};

/// Creates a Redis client for history slots
///
/// Connections are opened lazily on first use, so an unreachable server only
/// surfaces when a slot is read or written.
pub fn create_redis_client(redis_url: &str) -> anyhow::Result<Client> {
    let client = Client::open(redis_url)?;
    Ok(client)
}

/// Slot storage backed by Redis string keys
///
/// Slots are written without a TTL: browsing history is meant to outlive the
/// process, not expire like a cache entry.
#[derive(Clone)]
pub struct RedisHistoryStore {
    redis_client: Client,
}

impl RedisHistoryStore {
    pub fn new(redis_client: Client) -> Self {
        Self { redis_client }
    }

    async fn connection(&self) -> AppResult<MultiplexedConnection> {
        self.redis_client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| AppError::StorageUnavailable(format!("redis connect: {}", e)))
    }
}

#[async_trait::async_trait]
impl HistoryStore for RedisHistoryStore {
    async fn read(&self, slot: &SlotKey) -> AppResult<Option<String>> {
        let mut conn = self.connection().await?;
        let payload: Option<String> = conn.get(slot.to_string()).await.map_err(|e| {
            tracing::warn!(error = %e, slot = %slot, "Redis get failed");
            AppError::StorageUnavailable(format!("redis get {}: {}", slot, e))
        })?;
        Ok(payload)
    }

    async fn write(&self, slot: &SlotKey, payload: &str) -> AppResult<()> {
        let mut conn = self.connection().await?;
        let _: () = conn.set(slot.to_string(), payload).await.map_err(|e| {
            tracing::warn!(error = %e, slot = %slot, "Redis set failed");
            AppError::StorageUnavailable(format!("redis set {}: {}", slot, e))
        })?;
        tracing::debug!(slot = %slot, "History slot written");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}
