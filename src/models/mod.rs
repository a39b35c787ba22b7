pub mod history;
pub mod item;

pub use history::{BrowsingHistory, HISTORY_CAPACITY};
pub use item::Item;
