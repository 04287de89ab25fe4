use proptest::prelude::*;

use globalsearch_core::{Account, Category, DataBundle, Location, SearchResultItem};
use globalsearch_engine::{combined, SearchEngine};

const WORDS: &[&str] = &["centro", "norte", "sur", "garcía", "plaza", "sector", "admin", "ana", "lópez", "roles"];

fn phrase() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 1..4).prop_map(|w| w.join(" "))
}

fn locations() -> impl Strategy<Value = Vec<Location>> {
    prop::collection::vec((phrase(), prop::option::of(phrase()), prop::option::of(phrase())), 0..25).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, description, parent))| Location {
                id: format!("l{i}"),
                name,
                description,
                parent_region_name: parent,
                ..Default::default()
            })
            .collect()
    })
}

fn accounts() -> impl Strategy<Value = Vec<Account>> {
    prop::collection::vec((prop::option::of(phrase()), phrase()), 0..25).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, email))| Account {
                id: format!("a{i}"),
                full_name: name,
                email: email.replace(' ', ".") + "@example.com",
                ..Default::default()
            })
            .collect()
    })
}

fn query() -> impl Strategy<Value = String> {
    prop_oneof![phrase(), prop::sample::select(WORDS).prop_map(|w| w.chars().take(2).collect::<String>())]
}

fn position(items: &[SearchResultItem], id: &str) -> Option<usize> {
    items.iter().position(|i| i.id == id)
}

proptest! {
    #[test]
    fn no_zero_scores_and_fields_never_empty(q in query(), locs in locations(), accs in accounts(), k in 1usize..10) {
        let data = DataBundle::default().with_locations(locs).with_accounts(accs);
        let results = SearchEngine::new().search(&q, &data, k).unwrap();
        for (_, items) in results.iter() {
            prop_assert!(items.len() <= k);
            for item in items {
                prop_assert!(item.match_score > 0.0);
                prop_assert!(!item.matched_fields.is_empty());
            }
            prop_assert!(items.windows(2).all(|w| w[0].match_score >= w[1].match_score));
        }
    }

    #[test]
    fn truncation_is_a_prefix_of_the_full_ranking(q in query(), locs in locations(), k in 1usize..10) {
        let data = DataBundle::default().with_locations(locs.clone());
        let full = SearchEngine::new().search(&q, &data, usize::MAX).unwrap();
        let cut = SearchEngine::new().search(&q, &data, k).unwrap();
        let full = full.get(Category::Location);
        let n = full.len().min(k);
        prop_assert_eq!(cut.get(Category::Location), &full[..n]);
    }

    #[test]
    fn ties_keep_input_order(q in query(), locs in locations()) {
        let data = DataBundle::default().with_locations(locs.clone());
        let results = SearchEngine::new().search(&q, &data, usize::MAX).unwrap();
        let items = results.get(Category::Location);
        for w in items.windows(2) {
            if w[0].match_score == w[1].match_score {
                let a = locs.iter().position(|l| l.id == w[0].id);
                let b = locs.iter().position(|l| l.id == w[1].id);
                prop_assert!(a < b);
            }
        }
    }

    #[test]
    fn combined_is_the_union_resorted(q in query(), locs in locations(), accs in accounts(), k in 1usize..10) {
        let data = DataBundle::default().with_locations(locs).with_accounts(accs);
        let results = SearchEngine::new().search(&q, &data, k).unwrap();
        let merged = combined(&results);
        prop_assert_eq!(merged.len(), results.total());
        for (category, items) in results.iter() {
            for item in items {
                let found = merged.iter().filter(|m| m.category == category && m.id == item.id).count();
                prop_assert_eq!(found, 1);
            }
            // relative order within a category survives the merge
            for w in items.windows(2) {
                let a = position(&merged, &w[0].id);
                let b = position(&merged, &w[1].id);
                prop_assert!(a < b);
            }
        }
        prop_assert!(merged.windows(2).all(|w| w[0].match_score >= w[1].match_score));
    }

    #[test]
    fn blank_queries_return_nothing(ws in "[ \t]{0,5}", locs in locations(), accs in accounts()) {
        let data = DataBundle::default().with_locations(locs).with_accounts(accs);
        let results = SearchEngine::new().search(&ws, &data, 5).unwrap();
        prop_assert!(results.is_empty());
    }
}
