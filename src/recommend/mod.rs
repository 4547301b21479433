mod aggregate;
mod neighbors;
mod preferences;
mod similarity;
pub mod types;

pub use preferences::resolve_preferences;
pub use types::{Candidate, PreferenceVector, Recommendation, ResolvedPreferences, SimilarityScore};

use log::warn;

use crate::catalog::Catalog;
use crate::input::RawPreference;

/// Run the full pipeline: resolve preferences, select the candidate pool,
/// score similarities, aggregate and rank.
///
/// Pure apart from logging; every derived structure is rebuilt per call,
/// so identical inputs always produce identical output.
pub fn recommend(catalog: &Catalog, raw: &[RawPreference]) -> Vec<Recommendation> {
    let resolved = resolve_preferences(catalog, raw);

    if !resolved.dropped_titles.is_empty() {
        warn!(
            "No catalog match for: {}",
            resolved.dropped_titles.join(", ")
        );
    }

    if resolved.vector.is_empty() {
        return Vec::new();
    }

    let pool = neighbors::select_candidates(catalog, &resolved.vector);
    let scores = similarity::score_candidates(&resolved.vector, &pool);

    aggregate::rank_recommendations(catalog, &scores)
}
