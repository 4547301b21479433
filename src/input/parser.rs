use anyhow::{Context, Result, bail};

use crate::catalog::RatingValue;
use crate::errors::input_context;

/// One (title, rating) pair as supplied by the active user
#[derive(Debug, Clone, PartialEq)]
pub struct RawPreference {
    pub title: String,
    pub rating: RatingValue,
}

/// Parse two parallel text blocks into preference pairs.
///
/// Each block holds one line per group; entries within a line are
/// comma-separated, and line `i` of the rating block must carry exactly
/// as many entries as line `i` of the movie block. Any structural
/// mismatch or non-numeric rating aborts the whole parse.
pub fn parse_preferences(movies: &str, ratings: &str) -> Result<Vec<RawPreference>> {
    let movie_lines = split_lines(movies);
    let rating_lines = split_lines(ratings);

    if movie_lines.len() != rating_lines.len() {
        bail!(
            "Expected the same number of movie and rating lines, got {} movie lines and {} rating lines",
            movie_lines.len(),
            rating_lines.len()
        );
    }

    let mut preferences = Vec::new();

    for (idx, (movie_line, rating_line)) in movie_lines.iter().zip(&rating_lines).enumerate() {
        let pairs = parse_line(movie_line, rating_line, idx + 1)?;
        preferences.extend(pairs);
    }

    Ok(preferences)
}

fn split_lines(block: &str) -> Vec<&str> {
    block.trim().lines().collect()
}

fn parse_line(movie_line: &str, rating_line: &str, line_no: usize) -> Result<Vec<RawPreference>> {
    let titles = split_entries(movie_line);
    let values = parse_rating_entries(rating_line, line_no)?;

    if titles.len() != values.len() {
        bail!(
            "Line {}: {} movie entries but {} rating entries",
            line_no,
            titles.len(),
            values.len()
        );
    }

    let pairs = titles
        .into_iter()
        .zip(values)
        .map(|(title, rating)| RawPreference { title, rating })
        .collect();

    Ok(pairs)
}

fn split_entries(line: &str) -> Vec<String> {
    line.split(',').map(|entry| entry.trim().to_string()).collect()
}

fn parse_rating_entries(line: &str, line_no: usize) -> Result<Vec<RatingValue>> {
    line.split(',')
        .map(|entry| parse_rating(entry, line_no))
        .collect()
}

fn parse_rating(entry: &str, line_no: usize) -> Result<RatingValue> {
    let trimmed = entry.trim();

    trimmed
        .parse::<RatingValue>()
        .with_context(|| format!("{}: rating '{}' is not a number", input_context(line_no), trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_pairs_per_line() {
        let parsed = parse_preferences("Toy Story, Jumanji\nHeat", "4.5, 3.0\n5").unwrap();

        assert_eq!(
            parsed,
            vec![
                RawPreference {
                    title: "Toy Story".to_string(),
                    rating: 4.5
                },
                RawPreference {
                    title: "Jumanji".to_string(),
                    rating: 3.0
                },
                RawPreference {
                    title: "Heat".to_string(),
                    rating: 5.0
                },
            ]
        );
    }

    #[test]
    fn rejects_line_count_mismatch() {
        let err = parse_preferences("Toy Story\nJumanji", "4.5").unwrap_err();
        assert!(err.to_string().contains("movie lines"));
    }

    #[test]
    fn rejects_pair_count_mismatch_within_a_line() {
        let err = parse_preferences("Toy Story, Jumanji", "4.5").unwrap_err();
        assert!(err.to_string().contains("Line 1"));
    }

    #[test]
    fn rejects_non_numeric_rating() {
        let err = parse_preferences("Toy Story", "great").unwrap_err();
        assert!(format!("{:#}", err).contains("'great'"));
    }

    #[test]
    fn reports_the_offending_line_number() {
        let err = parse_preferences("Toy Story\nJumanji", "4.5\noops").unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));
    }
}
