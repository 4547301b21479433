use log::info;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::catalog::{Catalog, MovieId};

use super::types::{Recommendation, SimilarityScore};

const TOP_USERS: usize = 50;
const TOP_RECOMMENDATIONS: usize = 20;
const MIN_SIMILARITY_WEIGHT: f64 = 1e-9;

#[derive(Default)]
struct WeightedTotal {
    weight: f64,
    weighted_rating: f64,
}

/// Aggregate the most similar users' full rating histories into a ranked
/// recommendation list.
///
/// Keeps the 50 highest-similarity users, computes each movie's
/// similarity-weighted mean rating across them, drops movies whose total
/// similarity weight is (near) zero, and returns the top 20 by score.
pub fn rank_recommendations(
    catalog: &Catalog,
    scores: &[SimilarityScore],
) -> Vec<Recommendation> {
    let top_users = select_top_users(scores);
    let totals = accumulate_totals(catalog, &top_users);
    let mut recommendations = build_recommendations(catalog, totals);

    recommendations.sort_by(compare_recommendations);
    recommendations.truncate(TOP_RECOMMENDATIONS);

    info!("Ranked {} recommendations", recommendations.len());
    recommendations
}

fn select_top_users(scores: &[SimilarityScore]) -> Vec<SimilarityScore> {
    let mut top = scores.to_vec();

    top.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(a.user_id.cmp(&b.user_id))
    });
    top.truncate(TOP_USERS);

    top
}

fn accumulate_totals(
    catalog: &Catalog,
    top_users: &[SimilarityScore],
) -> HashMap<MovieId, WeightedTotal> {
    let mut totals: HashMap<MovieId, WeightedTotal> = HashMap::new();

    for user in top_users {
        for rating in catalog.ratings_of(user.user_id) {
            let total = totals.entry(rating.movie_id).or_default();
            total.weight += user.score;
            total.weighted_rating += user.score * rating.value;
        }
    }

    totals
}

fn build_recommendations(
    catalog: &Catalog,
    totals: HashMap<MovieId, WeightedTotal>,
) -> Vec<Recommendation> {
    totals
        .into_iter()
        .filter(|(_, total)| has_usable_weight(total))
        .filter_map(|(movie_id, total)| build_recommendation(catalog, movie_id, &total))
        .collect()
}

/// Movies rated only by zero-similarity users have nothing to divide by
fn has_usable_weight(total: &WeightedTotal) -> bool {
    total.weight.abs() > MIN_SIMILARITY_WEIGHT
}

fn build_recommendation(
    catalog: &Catalog,
    movie_id: MovieId,
    total: &WeightedTotal,
) -> Option<Recommendation> {
    let title = catalog.title_of(movie_id)?;

    Some(Recommendation {
        movie_id,
        title: title.to_string(),
        score: total.weighted_rating / total.weight,
    })
}

fn compare_recommendations(a: &Recommendation, b: &Recommendation) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then(a.movie_id.cmp(&b.movie_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Movie, Rating, UserId};

    fn movie(id: MovieId, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
        }
    }

    fn rating(user_id: UserId, movie_id: MovieId, value: f64) -> Rating {
        Rating {
            user_id,
            movie_id,
            value,
        }
    }

    fn score(user_id: UserId, value: f64) -> SimilarityScore {
        SimilarityScore {
            user_id,
            score: value,
        }
    }

    #[test]
    fn computes_similarity_weighted_mean_per_movie() {
        let movies = vec![movie(2, "Jumanji")];
        let ratings = vec![rating(1, 2, 4.0), rating(2, 2, 2.0)];
        let catalog = Catalog::new(movies, ratings).unwrap();

        let recs = rank_recommendations(&catalog, &[score(1, 1.0), score(2, 0.5)]);

        assert_eq!(recs.len(), 1);
        // (1.0 * 4.0 + 0.5 * 2.0) / 1.5
        assert!((recs[0].score - 10.0 / 3.0).abs() < 1e-12);
        assert_eq!(recs[0].title, "Jumanji");
    }

    #[test]
    fn excludes_movies_with_zero_total_weight() {
        let movies = vec![movie(2, "Jumanji")];
        let ratings = vec![rating(1, 2, 4.0)];
        let catalog = Catalog::new(movies, ratings).unwrap();

        assert!(rank_recommendations(&catalog, &[score(1, 0.0)]).is_empty());
    }

    #[test]
    fn excludes_movies_whose_weights_cancel_out() {
        let movies = vec![movie(2, "Jumanji")];
        let ratings = vec![rating(1, 2, 4.0), rating(2, 2, 5.0)];
        let catalog = Catalog::new(movies, ratings).unwrap();

        assert!(rank_recommendations(&catalog, &[score(1, 0.7), score(2, -0.7)]).is_empty());
    }

    #[test]
    fn skips_movies_missing_from_the_catalog() {
        let ratings = vec![rating(1, 42, 5.0)];
        let catalog = Catalog::new(vec![], ratings).unwrap();

        assert!(rank_recommendations(&catalog, &[score(1, 1.0)]).is_empty());
    }

    #[test]
    fn sorts_by_score_then_movie_id_and_truncates() {
        let movies: Vec<Movie> = (1..=30).map(|id| movie(id, &format!("Movie {}", id))).collect();
        let mut ratings = Vec::new();
        for id in 1..=30 {
            // Movies 1 and 2 tie; the rest descend
            let value = if id <= 2 { 5.0 } else { 5.0 - id as f64 * 0.1 };
            ratings.push(rating(1, id, value));
        }
        let catalog = Catalog::new(movies, ratings).unwrap();

        let recs = rank_recommendations(&catalog, &[score(1, 1.0)]);

        assert_eq!(recs.len(), 20);
        assert_eq!(recs[0].movie_id, 1);
        assert_eq!(recs[1].movie_id, 2);
        for pair in recs.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn only_the_fifty_most_similar_users_contribute() {
        let movies = vec![movie(1, "Common"), movie(2, "Fringe")];
        let mut ratings = Vec::new();
        let mut scores = Vec::new();
        for user_id in 1..=50 {
            ratings.push(rating(user_id, 1, 5.0));
            scores.push(score(user_id, 0.9));
        }
        // User 51 ranks below the cutoff and rates a movie nobody else rated
        ratings.push(rating(51, 2, 5.0));
        scores.push(score(51, 0.1));

        let catalog = Catalog::new(movies, ratings).unwrap();
        let recs = rank_recommendations(&catalog, &scores);

        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].title, "Common");
    }
}
