use log::debug;

use super::types::{Candidate, PreferenceVector, SimilarityScore};

/// Score every candidate against the active user's preference vector
pub fn score_candidates(
    preferences: &PreferenceVector,
    candidates: &[Candidate],
) -> Vec<SimilarityScore> {
    let scores: Vec<SimilarityScore> = candidates
        .iter()
        .map(|candidate| SimilarityScore {
            user_id: candidate.user_id,
            score: score_candidate(preferences, candidate),
        })
        .collect();

    debug!("Scored {} candidates", scores.len());
    scores
}

fn score_candidate(preferences: &PreferenceVector, candidate: &Candidate) -> f64 {
    let (active, other) = align_by_movie(preferences, candidate);
    pearson(&active, &other)
}

/// Join the two rating vectors on movie id.
///
/// Both sides must line up key by key before any sums are taken; pairing
/// by position would silently correlate unrelated ratings.
fn align_by_movie(preferences: &PreferenceVector, candidate: &Candidate) -> (Vec<f64>, Vec<f64>) {
    candidate
        .co_ratings
        .iter()
        .filter_map(|&(movie_id, other)| {
            preferences
                .rating_for(movie_id)
                .map(|active| (active, other))
        })
        .unzip()
}

/// Pearson correlation over a co-rated subset.
///
/// Zero variance on either side (including the single-movie case) yields
/// exactly 0 rather than a NaN or a division fault; constant raters carry
/// no usable signal.
fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len();
    if n == 0 {
        return 0.0;
    }

    let count = n as f64;
    let sum_x: f64 = xs.iter().sum();
    let sum_y: f64 = ys.iter().sum();
    let sum_xx: f64 = xs.iter().map(|x| x * x).sum();
    let sum_yy: f64 = ys.iter().map(|y| y * y).sum();
    let sum_xy: f64 = xs.iter().zip(ys).map(|(x, y)| x * y).sum();

    let sxx = sum_xx - sum_x * sum_x / count;
    let syy = sum_yy - sum_y * sum_y / count;
    let sxy = sum_xy - sum_x * sum_y / count;

    // Rounding can push a constant vector's variance a hair below zero
    if sxx <= 0.0 || syy <= 0.0 {
        return 0.0;
    }

    (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0)
}
