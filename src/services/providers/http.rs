//! Remote catalog provider
//!
//! Reads the catalog from `GET {base}/products`, which must answer with a JSON
//! array of items. Every failure to reach or decode the upstream surfaces as
//! `AppError::UpstreamUnavailable` so the UI can offer a retry instead of
//! rendering an empty shelf.
use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::Item,
    services::providers::CatalogProvider,
};

#[derive(Clone)]
pub struct HttpCatalogProvider {
    http_client: HttpClient,
    api_url: String,
}

impl HttpCatalogProvider {
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_url: api_url.into(),
        })
    }

    fn products_url(&self) -> String {
        format!("{}/products", self.api_url.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl CatalogProvider for HttpCatalogProvider {
    async fn list_all(&self) -> AppResult<Vec<Item>> {
        let url = self.products_url();
        tracing::debug!(url = %url, "Fetching catalog");

        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                body = %body,
                "Catalog request failed"
            );
            return Err(AppError::UpstreamUnavailable(format!(
                "Catalog returned status {}",
                status
            )));
        }

        let items: Vec<Item> = response.json().await?;
        let total = items.len();
        let items = keep_valid(items);

        tracing::info!(
            fetched = total,
            kept = items.len(),
            "Fetched catalog from upstream"
        );

        Ok(items)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

/// Drops records that violate the item ranges, keeping catalog order
fn keep_valid(items: Vec<Item>) -> Vec<Item> {
    items
        .into_iter()
        .filter(|item| match item.validate() {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, item_id = %item.id, "Dropping invalid catalog item");
                false
            }
        })
        .collect()
}
