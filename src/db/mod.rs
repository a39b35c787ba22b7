use std::fmt::Display;

use crate::error::AppResult;

pub mod file;
pub mod memory;
pub mod redis;

pub use file::FileHistoryStore;
pub use memory::MemoryHistoryStore;
pub use self::redis::{create_redis_client, RedisHistoryStore};

/// Name of a durable slot
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SlotKey {
    /// Browsing history for one visitor scope
    BrowsingHistory(String),
}

impl Display for SlotKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlotKey::BrowsingHistory(visitor) => write!(f, "history:{}", visitor),
        }
    }
}

/// Durable key-value storage for serialized history
///
/// Implementations report every failure as `AppError::StorageUnavailable`;
/// callers decide whether to degrade.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait HistoryStore: Send + Sync {
    /// Reads the raw payload held in `slot`, if any
    async fn read(&self, slot: &SlotKey) -> AppResult<Option<String>>;

    /// Replaces the payload held in `slot`
    async fn write(&self, slot: &SlotKey, payload: &str) -> AppResult<()>;

    /// Store name for logging and debugging
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_key_display_browsing_history() {
        let key = SlotKey::BrowsingHistory("alice".to_string());
        assert_eq!(format!("{}", key), "history:alice");
    }

    #[test]
    fn test_slot_key_keeps_visitor_case() {
        let key = SlotKey::BrowsingHistory("Visitor-42".to_string());
        assert_eq!(key.to_string(), "history:Visitor-42");
    }
}
