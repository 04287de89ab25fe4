//! Domain types shared by the matchers, the engine and its hosts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Entity partition a matcher and its results belong to.
///
/// The declaration order is also the order categories appear in
/// [`SearchResults`] and the tie-break order of the combined list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Location,
    Account,
    Configuration,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Location, Category::Account, Category::Configuration];

    pub fn label(self) -> &'static str {
        match self {
            Category::Location => "Locations",
            Category::Account => "Accounts",
            Category::Configuration => "Configuration",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A location or administrative entity (sector, municipality, region...).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_region_name: Option<String>,
    /// Administrative level, e.g. "Sector" or "Municipality".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Explicit navigation target; derived from `id` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// A user account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// An entry of the static configuration menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub path: String,
}

/// The collections a caller currently holds in memory.
///
/// `None` means the collection was not loaded; its category yields no results.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<Location>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounts: Option<Vec<Account>>,
}

impl DataBundle {
    pub fn with_locations(mut self, locations: Vec<Location>) -> Self {
        self.locations = Some(locations);
        self
    }

    pub fn with_accounts(mut self, accounts: Vec<Account>) -> Self {
        self.accounts = Some(accounts);
        self
    }
}

/// One ranked hit.
///
/// `title`, `subtitle` and `description` are presentational only; ranking
/// uses `match_score` alone. `matched_fields` lists the fields that scored
/// above zero, in the matcher's declaration order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultItem {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: Category,
    pub navigation_path: String,
    pub match_score: f64,
    pub matched_fields: Vec<String>,
}

/// Ranked hits grouped by category. Every category has an entry, possibly empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct SearchResults {
    by_category: BTreeMap<Category, Vec<SearchResultItem>>,
}

impl Default for SearchResults {
    fn default() -> Self {
        Self::empty()
    }
}

impl SearchResults {
    pub fn empty() -> Self {
        let by_category = Category::ALL.iter().map(|c| (*c, Vec::new())).collect();
        Self { by_category }
    }

    pub fn insert(&mut self, category: Category, items: Vec<SearchResultItem>) {
        self.by_category.insert(category, items);
    }

    pub fn get(&self, category: Category) -> &[SearchResultItem] {
        self.by_category.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Iterates categories in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[SearchResultItem])> {
        self.by_category.iter().map(|(c, items)| (*c, items.as_slice()))
    }

    pub fn total(&self) -> usize {
        self.by_category.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchLimits {
    pub per_category: usize,
}

/// Query envelope accepted by hosts. `data` carries inline collections;
/// when absent the host supplies its pre-loaded bundle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub query: String,
    pub limits: SearchLimits,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<DataBundle>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub results: SearchResults,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combined: Option<Vec<SearchResultItem>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_results_have_every_category() {
        let results = SearchResults::empty();
        assert_eq!(results.iter().count(), Category::ALL.len());
        assert!(results.is_empty());
        for c in Category::ALL {
            assert!(results.get(c).is_empty());
        }
    }

    #[test]
    fn results_serialize_as_category_map() {
        let json = serde_json::to_value(SearchResults::empty()).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("location"));
        assert!(obj.contains_key("account"));
        assert!(obj.contains_key("configuration"));
    }

    #[test]
    fn request_parses_camel_case_without_data() {
        let req: SearchRequest =
            serde_json::from_str(r#"{"query":"centro","limits":{"perCategory":3}}"#).unwrap();
        assert_eq!(req.query, "centro");
        assert_eq!(req.limits.per_category, 3);
        assert!(req.data.is_none());
    }

    #[test]
    fn account_optional_fields_default_to_none() {
        let acc: Account =
            serde_json::from_str(r#"{"id":"7","email":"ana@example.com"}"#).unwrap();
        assert!(acc.full_name.is_none());
        assert!(acc.phone.is_none());
    }
}
