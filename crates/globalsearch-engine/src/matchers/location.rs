use globalsearch_core::traits::EntityMatcher;
use globalsearch_core::{Category, Location, SearchResultItem};

use super::{match_records, non_blank, Field, RecordScore};

const FIELDS: [Field<Location>; 3] = [
    Field { name: "name", weight: 1.0, extract: name },
    Field { name: "description", weight: 0.7, extract: description },
    Field { name: "parentRegionName", weight: 0.6, extract: parent_region_name },
];

fn name(l: &Location) -> Option<&str> { Some(&l.name) }
fn description(l: &Location) -> Option<&str> { l.description.as_deref() }
fn parent_region_name(l: &Location) -> Option<&str> { l.parent_region_name.as_deref() }

/// Matches locations by name, description and parent region.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocationMatcher;

impl LocationMatcher {
    fn project(l: &Location, score: RecordScore) -> SearchResultItem {
        let subtitle = non_blank(l.parent_region_name.as_deref())
            .or_else(|| non_blank(l.kind.as_deref()))
            .unwrap_or("Location");
        SearchResultItem {
            id: l.id.clone(),
            title: l.name.clone(),
            subtitle: subtitle.to_string(),
            description: non_blank(l.description.as_deref()).map(str::to_string),
            category: Category::Location,
            navigation_path: non_blank(l.path.as_deref())
                .map_or_else(|| format!("/locations/{}", l.id), str::to_string),
            match_score: score.total,
            matched_fields: score.matched_fields,
        }
    }
}

impl EntityMatcher for LocationMatcher {
    type Record = Location;

    fn category(&self) -> Category { Category::Location }

    fn match_all(&self, query: &str, records: &[Location]) -> Vec<SearchResultItem> {
        match_records(query, records, &FIELDS, Self::project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(id: &str, name: &str) -> Location {
        Location { id: id.to_string(), name: name.to_string(), ..Default::default() }
    }

    #[test]
    fn name_outranks_parent_region() {
        let records = vec![
            Location { parent_region_name: Some("Norte".into()), ..loc("1", "Centro") },
            loc("2", "Norte"),
        ];
        let items = LocationMatcher.match_all("norte", &records);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "2");
        assert_eq!(items[0].matched_fields, vec!["name"]);
        assert_eq!(items[1].matched_fields, vec!["parentRegionName"]);
        assert!((items[1].match_score - 0.6).abs() < 1e-12);
    }

    #[test]
    fn scores_sum_across_fields() {
        let records = vec![Location {
            description: Some("Sector norte de la ciudad".into()),
            parent_region_name: Some("Norte".into()),
            ..loc("1", "Norte")
        }];
        let items = LocationMatcher.match_all("norte", &records);
        // exact name 1.0 + whole-word description 0.7*0.7 + exact region 0.6
        assert!((items[0].match_score - (1.0 + 0.49 + 0.6)).abs() < 1e-9);
        assert_eq!(items[0].matched_fields, vec!["name", "description", "parentRegionName"]);
    }

    #[test]
    fn projection_uses_region_then_kind() {
        let with_region = Location { parent_region_name: Some("Sur".into()), kind: Some("Sector".into()), ..loc("1", "Centro") };
        let with_kind = Location { kind: Some("Sector".into()), path: Some("/map/2".into()), ..loc("2", "Centro") };
        let items = LocationMatcher.match_all("centro", &[with_region, with_kind, loc("3", "Centro")]);
        assert_eq!(items[0].subtitle, "Sur");
        assert_eq!(items[0].navigation_path, "/locations/1");
        assert_eq!(items[1].subtitle, "Sector");
        assert_eq!(items[1].navigation_path, "/map/2");
        assert_eq!(items[2].subtitle, "Location");
        assert_eq!(items[2].category, Category::Location);
    }

    #[test]
    fn missing_optional_fields_do_not_fail() {
        let items = LocationMatcher.match_all("ciudad", &[loc("1", "Centro")]);
        assert!(items.is_empty());
    }
}
