use std::time::Instant;

use globalsearch_core::traits::EntityMatcher;
use globalsearch_core::{
    Category, DataBundle, Error, Result, SearchResponse, SearchResultItem, SearchResults,
};

use crate::matchers::{rank, AccountMatcher, LocationMatcher, MenuMatcher};

/// Orchestrates the per-category matchers.
///
/// Holds no per-query state; one instance can serve any number of concurrent
/// callers.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    locations: LocationMatcher,
    accounts: AccountMatcher,
    menu: MenuMatcher,
}

impl SearchEngine {
    pub fn new() -> Self { Self::default() }

    /// Uses `menu` instead of the built-in configuration catalog.
    pub fn with_menu(menu: MenuMatcher) -> Self {
        Self { menu, ..Self::default() }
    }

    /// Runs `query` against every collection in `data`.
    ///
    /// Each category list is ranked and then cut to `max_results_per_category`.
    /// A blank query yields empty lists; collections absent from `data` yield
    /// empty lists. Fails only when `max_results_per_category` is zero.
    pub fn search(&self, query: &str, data: &DataBundle, max_results_per_category: usize) -> Result<SearchResults> {
        if max_results_per_category == 0 {
            return Err(Error::InvalidArgument("max_results_per_category must be greater than 0".to_string()));
        }
        let mut results = SearchResults::empty();
        let query = query.trim();
        if query.is_empty() {
            tracing::debug!("blank query; returning empty results");
            return Ok(results);
        }

        let started = Instant::now();
        if let Some(locations) = &data.locations {
            results.insert(Category::Location, run(&self.locations, query, locations, max_results_per_category));
        }
        if let Some(accounts) = &data.accounts {
            results.insert(Category::Account, run(&self.accounts, query, accounts, max_results_per_category));
        }
        results.insert(Category::Configuration, run(&self.menu, query, self.menu.catalog(), max_results_per_category));

        tracing::debug!(
            query,
            total = results.total(),
            elapsed_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
            "search complete"
        );
        Ok(results)
    }

    /// [`search`](Self::search) plus the merged list, packaged for hosts.
    pub fn search_combined(
        &self,
        query: &str,
        data: &DataBundle,
        max_results_per_category: usize,
    ) -> Result<SearchResponse> {
        let results = self.search(query, data, max_results_per_category)?;
        let merged = combined(&results);
        Ok(SearchResponse { results, combined: Some(merged) })
    }
}

fn run<M: EntityMatcher>(matcher: &M, query: &str, records: &[M::Record], limit: usize) -> Vec<SearchResultItem> {
    let mut items = matcher.match_all(query, records);
    let matched = items.len();
    items.truncate(limit);
    tracing::debug!(
        category = %matcher.category(),
        candidates = records.len(),
        matched,
        kept = items.len(),
        "scored category"
    );
    for item in &items {
        tracing::trace!(id = %item.id, score = item.match_score, fields = ?item.matched_fields, "hit");
    }
    items
}

/// Every item of `results` in one list, best first.
///
/// Ties keep category order (Location, Account, Configuration) and then their
/// position within the category. No rescoring happens here.
pub fn combined(results: &SearchResults) -> Vec<SearchResultItem> {
    let mut all: Vec<SearchResultItem> = results.iter().flat_map(|(_, items)| items.iter().cloned()).collect();
    rank(&mut all);
    all
}
