use crate::types::{Category, SearchResultItem};

/// Scores one kind of record against a query.
///
/// Implementations return only items with a score strictly above zero,
/// sorted by score descending. Records with equal scores keep the order
/// they had in `records`.
pub trait EntityMatcher: Send + Sync {
    type Record;

    fn category(&self) -> Category;

    fn match_all(&self, query: &str, records: &[Self::Record]) -> Vec<SearchResultItem>;
}
