use anyhow::Result;
use std::collections::HashMap;

use super::models::{Movie, MovieId, Rating, UserId};
use super::normalization::TitleNormalizer;

/// Immutable movie catalog and historical rating log, indexed for lookup.
///
/// Built once at load time and never mutated afterwards, so it can be
/// shared freely across recommendation requests.
#[derive(Debug)]
pub struct Catalog {
    titles_by_id: HashMap<MovieId, String>,
    ids_by_title: HashMap<String, MovieId>,
    ratings_by_user: HashMap<UserId, Vec<Rating>>,
    rating_count: usize,
    normalizer: TitleNormalizer,
}

impl Catalog {
    pub fn new(movies: Vec<Movie>, ratings: Vec<Rating>) -> Result<Self> {
        let normalizer = TitleNormalizer::new()?;
        let titles_by_id = index_titles_by_id(&movies);
        let ids_by_title = index_ids_by_title(movies);
        let rating_count = ratings.len();
        let ratings_by_user = group_ratings_by_user(ratings);

        Ok(Self {
            titles_by_id,
            ids_by_title,
            ratings_by_user,
            rating_count,
            normalizer,
        })
    }

    /// Resolve a free-form title to a movie id via exact match after
    /// normalization
    pub fn resolve_title(&self, raw_title: &str) -> Option<MovieId> {
        let normalized = self.normalizer.normalize(raw_title);
        self.ids_by_title.get(&normalized).copied()
    }

    pub fn title_of(&self, movie_id: MovieId) -> Option<&str> {
        self.titles_by_id.get(&movie_id).map(String::as_str)
    }

    /// All ratings of one historical user, sorted by movie id
    pub fn ratings_of(&self, user_id: UserId) -> &[Rating] {
        self.ratings_by_user
            .get(&user_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate over all historical users and their ratings
    pub fn users(&self) -> impl Iterator<Item = (UserId, &[Rating])> {
        self.ratings_by_user
            .iter()
            .map(|(&user_id, ratings)| (user_id, ratings.as_slice()))
    }

    pub fn movie_count(&self) -> usize {
        self.titles_by_id.len()
    }

    pub fn rating_count(&self) -> usize {
        self.rating_count
    }

    pub fn user_count(&self) -> usize {
        self.ratings_by_user.len()
    }
}

fn index_titles_by_id(movies: &[Movie]) -> HashMap<MovieId, String> {
    movies
        .iter()
        .map(|movie| (movie.id, movie.title.clone()))
        .collect()
}

fn index_ids_by_title(movies: Vec<Movie>) -> HashMap<String, MovieId> {
    let mut index = HashMap::new();

    for movie in movies {
        // First occurrence wins for duplicate normalized titles
        index.entry(movie.title).or_insert(movie.id);
    }

    index
}

fn group_ratings_by_user(ratings: Vec<Rating>) -> HashMap<UserId, Vec<Rating>> {
    let mut grouped: HashMap<UserId, Vec<Rating>> = HashMap::new();

    for rating in ratings {
        grouped.entry(rating.user_id).or_default().push(rating);
    }

    for user_ratings in grouped.values_mut() {
        user_ratings.sort_by_key(|rating| rating.movie_id);
    }

    grouped
}
