use crate::models::{BrowsingHistory, Item};

/// Maximum number of recommendations shown at once
pub const RECOMMENDATION_LIMIT: usize = 4;

/// Which rule produced a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionBasis {
    /// No history: the featured items
    Featured,
    /// The last viewed item is gone from the catalog: the head of the catalog
    CatalogHead,
    /// Items sharing the last viewed item's category, padded with unseen items
    /// from other categories
    CategoryAffinity,
}

/// Picks what to show next from the catalog and the browsing history
///
/// Category affinity on the most recently viewed item:
/// 1. empty history returns every featured item, uncapped
/// 2. a last-viewed id missing from the catalog returns the first
///    [`RECOMMENDATION_LIMIT`] catalog items
/// 3. otherwise same-category items (excluding the viewed one) come first,
///    followed by items from other categories that are nowhere in the history
///
/// Catalog order is preserved in every branch and neither input is modified.
pub fn select_recommendations(catalog: &[Item], history: &BrowsingHistory) -> Vec<Item> {
    let (basis, items) = select_with_basis(catalog, history);
    tracing::debug!(
        basis = ?basis,
        count = items.len(),
        most_recent = ?history.most_recent(),
        "Selected recommendations"
    );
    items
}

/// Same as [`select_recommendations`], also reporting the rule that applied
pub fn select_with_basis(
    catalog: &[Item],
    history: &BrowsingHistory,
) -> (SelectionBasis, Vec<Item>) {
    let Some(last_viewed_id) = history.most_recent() else {
        let featured = catalog.iter().filter(|item| item.featured).cloned().collect();
        return (SelectionBasis::Featured, featured);
    };

    let Some(last_viewed) = catalog.iter().find(|item| item.id == last_viewed_id) else {
        let head = catalog.iter().take(RECOMMENDATION_LIMIT).cloned().collect();
        return (SelectionBasis::CatalogHead, head);
    };

    let same_category = catalog
        .iter()
        .filter(|item| item.category == last_viewed.category && item.id != last_viewed.id);

    let unseen_elsewhere = catalog
        .iter()
        .filter(|item| item.category != last_viewed.category && !history.contains(&item.id));

    let items = same_category
        .chain(unseen_elsewhere)
        .take(RECOMMENDATION_LIMIT)
        .cloned()
        .collect();

    (SelectionBasis::CategoryAffinity, items)
}
