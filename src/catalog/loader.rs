use anyhow::Result;
use log::info;
use serde::de::DeserializeOwned;
use std::path::Path;

use super::collection::Catalog;
use super::models::{Movie, Rating};
use super::normalization::TitleNormalizer;
use crate::errors::{with_load_context, with_row_context};

const MOVIES_FILE: &str = "movies.csv";
const RATINGS_FILE: &str = "ratings.csv";

/// Load the movie table and rating log from a catalog directory
pub fn load_catalog(dir: &Path) -> Result<Catalog> {
    let movies = load_movies(&dir.join(MOVIES_FILE))?;
    let ratings = load_ratings(&dir.join(RATINGS_FILE))?;

    info!(
        "Loaded catalog: {} movies, {} ratings",
        movies.len(),
        ratings.len()
    );

    Catalog::new(movies, ratings)
}

fn load_movies(path: &Path) -> Result<Vec<Movie>> {
    let normalizer = TitleNormalizer::new()?;
    let mut movies: Vec<Movie> = read_table(path, "movie table")?;

    for movie in movies.iter_mut() {
        movie.title = normalizer.normalize(&movie.title);
    }

    Ok(movies)
}

fn load_ratings(path: &Path) -> Result<Vec<Rating>> {
    read_table(path, "rating log")
}

fn read_table<T: DeserializeOwned>(path: &Path, table: &str) -> Result<Vec<T>> {
    let mut reader = with_load_context(csv::Reader::from_path(path), path)?;
    let mut records = Vec::new();

    for (idx, record) in reader.deserialize().enumerate() {
        let parsed = with_row_context(record, table, idx + 1)?;
        records.push(parsed);
    }

    Ok(records)
}
