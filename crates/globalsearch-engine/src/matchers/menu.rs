use globalsearch_core::traits::EntityMatcher;
use globalsearch_core::{Category, MenuItem, SearchResultItem};

use super::{match_records, Field, RecordScore};

const FIELDS: [Field<MenuItem>; 2] = [
    Field { name: "name", weight: 1.0, extract: name },
    Field { name: "description", weight: 0.6, extract: description },
];

fn name(m: &MenuItem) -> Option<&str> { Some(&m.name) }
fn description(m: &MenuItem) -> Option<&str> { Some(&m.description) }

const CATALOG: &[(&str, &str, &str, &str)] = &[
    ("locations", "Locations", "Manage regions, sectors and other administrative areas", "/configuration/locations"),
    ("accounts", "Accounts", "Create, edit and deactivate user accounts", "/configuration/accounts"),
    ("roles", "Roles and permissions", "Define roles and the permissions granted to each", "/configuration/roles"),
    ("profile", "My profile", "Update your name, email and password", "/profile"),
    ("settings", "System settings", "General preferences, language and time zone", "/configuration/settings"),
    ("audit", "Audit log", "Review the history of changes made by users", "/configuration/audit"),
    ("notifications", "Notifications", "Choose which events send email alerts", "/configuration/notifications"),
];

/// The built-in configuration menu.
pub fn default_catalog() -> Vec<MenuItem> {
    CATALOG
        .iter()
        .map(|(id, name, description, path)| MenuItem {
            id: (*id).to_string(),
            name: (*name).to_string(),
            description: (*description).to_string(),
            path: (*path).to_string(),
        })
        .collect()
}

/// Matches the configuration menu. The catalog is owned by the matcher
/// rather than supplied per query.
#[derive(Debug, Clone)]
pub struct MenuMatcher {
    catalog: Vec<MenuItem>,
}

impl Default for MenuMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuMatcher {
    pub fn new() -> Self {
        Self::with_catalog(default_catalog())
    }

    pub fn with_catalog(catalog: Vec<MenuItem>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &[MenuItem] {
        &self.catalog
    }

    pub fn match_catalog(&self, query: &str) -> Vec<SearchResultItem> {
        self.match_all(query, &self.catalog)
    }

    fn project(m: &MenuItem, score: RecordScore) -> SearchResultItem {
        SearchResultItem {
            id: m.id.clone(),
            title: m.name.clone(),
            subtitle: Category::Configuration.label().to_string(),
            description: Some(m.description.clone()).filter(|d| !d.trim().is_empty()),
            category: Category::Configuration,
            navigation_path: m.path.clone(),
            match_score: score.total,
            matched_fields: score.matched_fields,
        }
    }
}

impl EntityMatcher for MenuMatcher {
    type Record = MenuItem;

    fn category(&self) -> Category { Category::Configuration }

    fn match_all(&self, query: &str, records: &[MenuItem]) -> Vec<SearchResultItem> {
        match_records(query, records, &FIELDS, Self::project)
    }
}
