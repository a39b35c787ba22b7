//! Recommendation service for a product catalog browsing experience.
//!
//! A visitor's recently viewed products are kept in a bounded, deduplicated
//! [`BrowsingHistory`](models::BrowsingHistory) that survives restarts. The
//! [`select_recommendations`](services::select_recommendations) heuristic
//! turns that history plus a catalog snapshot into what to show next.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
