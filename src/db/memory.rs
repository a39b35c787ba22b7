use std::collections::HashMap;

use tokio::sync::RwLock;

use super::{HistoryStore, SlotKey};
use crate::error::AppResult;

/// Process-local slot storage. Contents are lost on restart
#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn read(&self, slot: &SlotKey) -> AppResult<Option<String>> {
        Ok(self.slots.read().await.get(&slot.to_string()).cloned())
    }

    async fn write(&self, slot: &SlotKey, payload: &str) -> AppResult<()> {
        self.slots
            .write()
            .await
            .insert(slot.to_string(), payload.to_string());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
