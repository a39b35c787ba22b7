use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::request_id::RequestId;
use crate::models::{Item, HISTORY_CAPACITY};

use super::AppState;

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    /// Viewed product ids, most recent first
    pub entries: Vec<String>,
    pub capacity: usize,
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Full catalog
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Item>>> {
    Ok(Json(state.session.products().await?))
}

/// Featured products
pub async fn list_featured(State(state): State<AppState>) -> AppResult<Json<Vec<Item>>> {
    Ok(Json(state.session.featured().await?))
}

/// Product detail. Viewing a product records it in the browsing history
pub async fn view_product(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> AppResult<Json<Item>> {
    match state.session.view_product(&id).await? {
        Some(item) => {
            tracing::info!(
                request_id = %request_id,
                product_id = %item.id,
                category = %item.category,
                "Product viewed"
            );
            Ok(Json(item))
        }
        None => Err(AppError::NotFound(format!("product {}", id))),
    }
}

/// Recommendations for the current browsing history
pub async fn get_recommendations(State(state): State<AppState>) -> AppResult<Json<Vec<Item>>> {
    Ok(Json(state.session.get_recommendations().await?))
}

/// Recomputes recommendations on demand
pub async fn refresh_recommendations(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<Vec<Item>>> {
    let items = state.session.refresh().await?;
    tracing::info!(request_id = %request_id, count = items.len(), "Recommendations refreshed");
    Ok(Json(items))
}

/// Browsing history snapshot
pub async fn get_history(State(state): State<AppState>) -> Json<HistoryResponse> {
    let history = state.session.history().await;
    Json(HistoryResponse {
        entries: history.as_slice().to_vec(),
        capacity: HISTORY_CAPACITY,
    })
}

/// Forgets the browsing history
pub async fn clear_history(State(state): State<AppState>) -> StatusCode {
    state.session.clear_history().await;
    StatusCode::NO_CONTENT
}
