use crate::catalog::{MovieId, RatingValue, UserId};

/// The active user's resolved preferences, sorted by movie id.
///
/// Kept sorted so that co-rated subsets line up by key, never by input
/// position.
#[derive(Debug, Clone, Default)]
pub struct PreferenceVector {
    entries: Vec<(MovieId, RatingValue)>,
}

impl PreferenceVector {
    pub fn from_pairs(mut pairs: Vec<(MovieId, RatingValue)>) -> Self {
        pairs.sort_by_key(|&(movie_id, _)| movie_id);
        // First occurrence wins when the same movie is listed twice
        pairs.dedup_by_key(|&mut (movie_id, _)| movie_id);

        Self { entries: pairs }
    }

    pub fn rating_for(&self, movie_id: MovieId) -> Option<RatingValue> {
        self.entries
            .binary_search_by_key(&movie_id, |&(id, _)| id)
            .ok()
            .map(|idx| self.entries[idx].1)
    }

    pub fn contains(&self, movie_id: MovieId) -> bool {
        self.rating_for(movie_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolver output: the preference vector plus the titles it had to drop
#[derive(Debug, Clone, Default)]
pub struct ResolvedPreferences {
    pub vector: PreferenceVector,
    pub dropped_titles: Vec<String>,
}

/// One candidate user and their ratings on the active user's movies,
/// sorted by movie id
#[derive(Debug, Clone)]
pub struct Candidate {
    pub user_id: UserId,
    pub co_ratings: Vec<(MovieId, RatingValue)>,
}

impl Candidate {
    pub fn overlap(&self) -> usize {
        self.co_ratings.len()
    }
}

/// Pearson-style taste similarity in [-1, 1]
#[derive(Debug, Clone, Copy)]
pub struct SimilarityScore {
    pub user_id: UserId,
    pub score: f64,
}

/// Final ranked output entry
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub movie_id: MovieId,
    pub title: String,
    pub score: f64,
}
