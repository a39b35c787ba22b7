use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Highest rating a catalog item can carry
pub const MAX_RATING: f64 = 5.0;

/// An immutable catalog record, owned by the catalog provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier within the catalog
    pub id: String,
    pub name: String,
    pub description: String,
    /// Non-negative price
    pub price: f64,
    pub category: String,
    /// Image URL
    pub image: String,
    /// Average rating between 0 and 5
    pub rating: f64,
    /// Number of reviews behind the rating
    pub reviews: u32,
    /// Promoted items, shown when there is no browsing history
    #[serde(default)]
    pub featured: bool,
}

impl Item {
    /// Checks the numeric ranges a catalog record must respect
    pub fn validate(&self) -> AppResult<()> {
        if self.id.is_empty() {
            return Err(AppError::InvalidInput("item id must not be empty".to_string()));
        }
        if self.price.is_nan() || self.price < 0.0 {
            return Err(AppError::InvalidInput(format!(
                "item {} has negative price {}",
                self.id, self.price
            )));
        }
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(AppError::InvalidInput(format!(
                "item {} has rating {} outside 0-{}",
                self.id, self.rating, MAX_RATING
            )));
        }
        Ok(())
    }
}
