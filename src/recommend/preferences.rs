use crate::catalog::Catalog;
use crate::input::RawPreference;

use super::types::{PreferenceVector, ResolvedPreferences};

/// Resolve raw titles against the catalog.
///
/// Titles with no exact match after normalization carry no signal and are
/// dropped; they are returned alongside the vector so callers can report
/// partial matches.
pub fn resolve_preferences(catalog: &Catalog, raw: &[RawPreference]) -> ResolvedPreferences {
    let mut pairs = Vec::new();
    let mut dropped_titles = Vec::new();

    for preference in raw {
        match catalog.resolve_title(&preference.title) {
            Some(movie_id) => pairs.push((movie_id, preference.rating)),
            None => dropped_titles.push(preference.title.clone()),
        }
    }

    ResolvedPreferences {
        vector: PreferenceVector::from_pairs(pairs),
        dropped_titles,
    }
}
