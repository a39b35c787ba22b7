pub mod browsing;
pub mod history;
pub mod providers;
pub mod recommendations;

pub use browsing::BrowsingSession;
pub use history::HistoryLedger;
pub use providers::CatalogProvider;
pub use recommendations::{select_recommendations, RECOMMENDATION_LIMIT};
