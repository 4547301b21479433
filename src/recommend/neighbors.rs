use log::info;
use std::cmp::Ordering;

use crate::catalog::{Catalog, Rating, UserId};

use super::types::{Candidate, PreferenceVector};

const MAX_CANDIDATES: usize = 100;

/// Select the candidate pool: every historical user with at least one
/// rating on a movie the active user rated, ordered by co-rated count
/// descending (user id ascending on ties) and capped at 100.
///
/// The cap bounds similarity work per request; users with little overlap
/// carry weak signal and fall off the end structurally.
pub fn select_candidates(catalog: &Catalog, preferences: &PreferenceVector) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = catalog
        .users()
        .filter_map(|(user_id, ratings)| build_candidate(user_id, ratings, preferences))
        .collect();

    candidates.sort_by(compare_candidates);
    candidates.truncate(MAX_CANDIDATES);

    info!("Candidate pool: {} users", candidates.len());
    candidates
}

fn build_candidate(
    user_id: UserId,
    ratings: &[Rating],
    preferences: &PreferenceVector,
) -> Option<Candidate> {
    let co_ratings: Vec<_> = ratings
        .iter()
        .filter(|rating| preferences.contains(rating.movie_id))
        .map(|rating| (rating.movie_id, rating.value))
        .collect();

    if co_ratings.is_empty() {
        return None;
    }

    Some(Candidate { user_id, co_ratings })
}

fn compare_candidates(a: &Candidate, b: &Candidate) -> Ordering {
    b.overlap()
        .cmp(&a.overlap())
        .then(a.user_id.cmp(&b.user_id))
}
