//! Entity matchers.
//!
//! Each matcher declares its searchable fields with a weight and a projection
//! from record to [`SearchResultItem`]. The scoring loop itself is shared.

mod account;
mod location;
mod menu;

pub use account::AccountMatcher;
pub use location::LocationMatcher;
pub use menu::{default_catalog, MenuMatcher};

use globalsearch_core::SearchResultItem;
use globalsearch_text::score;

/// A searchable field of record type `R`.
pub struct Field<R> {
    pub name: &'static str,
    pub weight: f64,
    /// `None` for absent optional fields; scored as an empty string.
    pub extract: fn(&R) -> Option<&str>,
}

/// Aggregate score of one record.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordScore {
    pub total: f64,
    pub matched_fields: Vec<String>,
}

/// Sums every field's score; `None` when nothing matched.
pub fn score_record<R>(query: &str, record: &R, fields: &[Field<R>]) -> Option<RecordScore> {
    let mut total = 0.0;
    let mut matched_fields = Vec::new();
    for field in fields {
        let value = (field.extract)(record).unwrap_or("");
        let s = score(query, value, field.weight);
        if s > 0.0 {
            total += s;
            matched_fields.push(field.name.to_string());
        }
    }
    (total > 0.0).then_some(RecordScore { total, matched_fields })
}

/// Scores `records`, projects the hits and ranks them.
pub(crate) fn match_records<R>(
    query: &str,
    records: &[R],
    fields: &[Field<R>],
    project: impl Fn(&R, RecordScore) -> SearchResultItem,
) -> Vec<SearchResultItem> {
    let mut items: Vec<SearchResultItem> = records
        .iter()
        .filter_map(|r| score_record(query, r, fields).map(|s| project(r, s)))
        .collect();
    rank(&mut items);
    items
}

/// Sorts by score descending. `sort_by` is stable, so ties keep input order.
pub fn rank(items: &mut [SearchResultItem]) {
    items.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
}

/// Trims and treats blank strings as absent.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
