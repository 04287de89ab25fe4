use globalsearch_core::traits::EntityMatcher;
use globalsearch_core::{Account, Category, SearchResultItem};

use super::{match_records, non_blank, Field, RecordScore};

const FIELDS: [Field<Account>; 4] = [
    Field { name: "fullName", weight: 1.0, extract: full_name },
    Field { name: "email", weight: 0.8, extract: email },
    Field { name: "documentNumber", weight: 0.6, extract: document_number },
    Field { name: "phone", weight: 0.5, extract: phone },
];

fn full_name(a: &Account) -> Option<&str> { a.full_name.as_deref() }
fn email(a: &Account) -> Option<&str> { Some(&a.email) }
fn document_number(a: &Account) -> Option<&str> { a.document_number.as_deref() }
fn phone(a: &Account) -> Option<&str> { a.phone.as_deref() }

/// Matches user accounts by name, email, document number and phone.
#[derive(Debug, Default, Clone, Copy)]
pub struct AccountMatcher;

impl AccountMatcher {
    fn project(a: &Account, score: RecordScore) -> SearchResultItem {
        let title = non_blank(a.full_name.as_deref()).unwrap_or(&a.email);
        SearchResultItem {
            id: a.id.clone(),
            title: title.to_string(),
            subtitle: a.email.clone(),
            description: non_blank(a.role.as_deref()).map(str::to_string),
            category: Category::Account,
            navigation_path: format!("/accounts/{}", a.id),
            match_score: score.total,
            matched_fields: score.matched_fields,
        }
    }
}

impl EntityMatcher for AccountMatcher {
    type Record = Account;

    fn category(&self) -> Category { Category::Account }

    fn match_all(&self, query: &str, records: &[Account]) -> Vec<SearchResultItem> {
        match_records(query, records, &FIELDS, Self::project)
    }
}
