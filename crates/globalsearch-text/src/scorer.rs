//! Tiered field scoring.
//!
//! A query is compared with one field value and classified into a single
//! [`MatchTier`]; the tier multiplier times the field weight is the score.
//! Tiers are checked best-first and the first one that applies wins.

use crate::normalize::normalize;

/// Match class of a query against a field value, best first.
///
/// | Tier        | Multiplier | Condition                                   |
/// |-------------|------------|---------------------------------------------|
/// | `Exact`     | 1.0        | field equals query                          |
/// | `Prefix`    | 0.8        | field starts with query                     |
/// | `WholeWord` | 0.7        | query occurs delimited by spaces or the field edges |
/// | `Substring` | 0.5        | query occurs anywhere                       |
/// | `None`      | 0.0        | no occurrence                               |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
    None,
    Substring,
    WholeWord,
    Prefix,
    Exact,
}

impl MatchTier {
    pub fn multiplier(self) -> f64 {
        match self {
            MatchTier::Exact => 1.0,
            MatchTier::Prefix => 0.8,
            MatchTier::WholeWord => 0.7,
            MatchTier::Substring => 0.5,
            MatchTier::None => 0.0,
        }
    }
}

/// Classifies raw `query` against raw `field_value`. Both sides are normalized.
pub fn classify(query: &str, field_value: &str) -> MatchTier {
    classify_normalized(&normalize(query), &normalize(field_value))
}

/// Score of `field_value` for `query`: `tier multiplier * weight`.
///
/// Safe to call with raw text; both sides are normalized here. An empty query
/// never matches anything.
pub fn score(query: &str, field_value: &str, weight: f64) -> f64 {
    classify(query, field_value).multiplier() * weight
}

fn classify_normalized(query: &str, field: &str) -> MatchTier {
    if query.is_empty() || field.is_empty() {
        return MatchTier::None;
    }
    if field == query {
        MatchTier::Exact
    } else if field.starts_with(query) {
        MatchTier::Prefix
    } else if contains_whole_word(field, query) {
        MatchTier::WholeWord
    } else if field.contains(query) {
        MatchTier::Substring
    } else {
        MatchTier::None
    }
}

// Field start and end count as boundaries, so "sector garcia" holds "garcia"
// as a whole word even without a trailing space.
fn contains_whole_word(field: &str, query: &str) -> bool {
    field.match_indices(query).any(|(start, _)| {
        let end = start + query.len();
        let open = start == 0 || field[..start].ends_with(' ');
        let close = end == field.len() || field[end..].starts_with(' ');
        open && close
    }) || overlapping_whole_word(field, query)
}

// `match_indices` skips overlapping occurrences ("aa aa" in "aa aa aa" at 3).
fn overlapping_whole_word(field: &str, query: &str) -> bool {
    field
        .char_indices()
        .filter(|(i, c)| *c == ' ' && field[i + 1..].starts_with(query))
        .any(|(i, _)| {
            let end = i + 1 + query.len();
            end == field.len() || field[end..].starts_with(' ')
        })
}
