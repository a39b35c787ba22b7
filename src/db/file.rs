use std::path::PathBuf;

use super::{HistoryStore, SlotKey};
use crate::error::{AppError, AppResult};

/// Slot storage backed by one JSON file per slot
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// crash mid-write leaves the previous payload intact.
#[derive(Debug, Clone)]
pub struct FileHistoryStore {
    dir: PathBuf,
}

impl FileHistoryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File holding `slot`. Characters outside `[A-Za-z0-9_-]` are replaced
    /// so visitor ids cannot escape the directory.
    fn slot_path(&self, slot: &SlotKey) -> PathBuf {
        let name: String = slot
            .to_string()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", name))
    }
}

#[async_trait::async_trait]
impl HistoryStore for FileHistoryStore {
    async fn read(&self, slot: &SlotKey) -> AppResult<Option<String>> {
        let path = self.slot_path(slot);
        match tokio::fs::read_to_string(&path).await {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::StorageUnavailable(format!(
                "failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn write(&self, slot: &SlotKey, payload: &str) -> AppResult<()> {
        let path = self.slot_path(slot);
        let tmp = path.with_extension("json.tmp");

        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            AppError::StorageUnavailable(format!(
                "failed to create {}: {}",
                self.dir.display(),
                e
            ))
        })?;
        tokio::fs::write(&tmp, payload).await.map_err(|e| {
            AppError::StorageUnavailable(format!("failed to write {}: {}", tmp.display(), e))
        })?;
        tokio::fs::rename(&tmp, &path).await.map_err(|e| {
            AppError::StorageUnavailable(format!("failed to replace {}: {}", path.display(), e))
        })?;

        tracing::debug!(slot = %slot, path = %path.display(), "History slot written");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
