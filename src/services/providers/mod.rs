use crate::{error::AppResult, models::Item};

pub mod http;
pub mod static_catalog;

pub use http::HttpCatalogProvider;
pub use static_catalog::StaticCatalog;

/// Catalog data source abstraction
///
/// Every call is a point-in-time read. Callers hold the returned items for
/// the length of one computation and fetch again next time.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// All items, in catalog order
    async fn list_all(&self) -> AppResult<Vec<Item>>;

    /// Featured items, in catalog order
    async fn list_featured(&self) -> AppResult<Vec<Item>> {
        let items = self.list_all().await?;
        Ok(items.into_iter().filter(|item| item.featured).collect())
    }

    /// Looks up a single item. `Ok(None)` means the id is not in the catalog
    async fn get_by_id(&self, id: &str) -> AppResult<Option<Item>> {
        let items = self.list_all().await?;
        Ok(items.into_iter().find(|item| item.id == id))
    }

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
