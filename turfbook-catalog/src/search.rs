use chrono::NaiveDate;
use serde::Deserialize;
use turfbook_shared::form::{lenient_date, lenient_flag};
use turfbook_shared::Turf;

/// Shown by the listing when a search matches nothing
pub const EMPTY_SEARCH_MESSAGE: &str = "No turfs found matching your search.";

/// Query submitted by the search form.
///
/// Only `location` and `sport` narrow the result. `date`, `is_indoor` and
/// `has_lighting` are accepted but do not affect filtering; values that do
/// not parse are dropped rather than failing the search.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub sport: String,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub is_indoor: Option<bool>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub has_lighting: Option<bool>,
}

impl SearchFilters {
    pub fn new(location: impl Into<String>, sport: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            sport: sport.into(),
            ..Self::default()
        }
    }

    fn has_unapplied_fields(&self) -> bool {
        self.date.is_some() || self.is_indoor.is_some() || self.has_lighting.is_some()
    }
}

/// Keep turfs whose location contains the query location (case-insensitive)
/// and whose sport equals the query sport, if one is given. Catalog order is kept.
pub fn filter<'a>(turfs: &'a [Turf], query: &SearchFilters) -> Vec<&'a Turf> {
    if query.has_unapplied_fields() {
        tracing::debug!(
            date = ?query.date,
            is_indoor = ?query.is_indoor,
            has_lighting = ?query.has_lighting,
            "Search fields supplied that do not narrow results"
        );
    }

    let needle = query.location.to_lowercase();

    turfs
        .iter()
        .filter(|turf| turf.location.to_lowercase().contains(&needle))
        .filter(|turf| query.sport.is_empty() || turf.sport == query.sport)
        .collect()
}
