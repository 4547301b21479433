use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::recommend::Recommendation;

const TITLE_HEADER: &str = "TITLE";
const SCORE_HEADER: &str = "SCORE";

/// Render the recommendation list in the requested format
pub fn render(recommendations: &[Recommendation], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(recommendations)),
        OutputFormat::Json => render_json(recommendations),
    }
}

fn render_table(recommendations: &[Recommendation]) -> String {
    if recommendations.is_empty() {
        return "No recommendations found.".to_string();
    }

    let title_width = column_width(recommendations);
    let mut lines = vec![header_line(title_width)];

    for (rank, recommendation) in recommendations.iter().enumerate() {
        lines.push(row_line(rank + 1, recommendation, title_width));
    }

    lines.join("\n")
}

fn column_width(recommendations: &[Recommendation]) -> usize {
    recommendations
        .iter()
        .map(|r| r.title.len())
        .max()
        .unwrap_or(0)
        .max(TITLE_HEADER.len())
}

fn header_line(title_width: usize) -> String {
    // Pad before colorizing so escape codes don't skew the column widths
    let header = format!(
        "{:>4}  {:<title_width$}  {}",
        "#", TITLE_HEADER, SCORE_HEADER
    );
    header.bold().green().to_string()
}

fn row_line(rank: usize, recommendation: &Recommendation, title_width: usize) -> String {
    format!(
        "{:>4}  {:<title_width$}  {:.2}",
        rank, recommendation.title, recommendation.score
    )
}

fn render_json(recommendations: &[Recommendation]) -> Result<String> {
    let rows: Vec<JsonRow> = recommendations.iter().map(JsonRow::from).collect();
    serde_json::to_string_pretty(&rows).context("Failed to serialize recommendations")
}

#[derive(Serialize)]
struct JsonRow<'a> {
    title: &'a str,
    score: f64,
}

impl<'a> From<&'a Recommendation> for JsonRow<'a> {
    fn from(recommendation: &'a Recommendation) -> Self {
        Self {
            title: &recommendation.title,
            score: recommendation.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recommendation(title: &str, score: f64) -> Recommendation {
        Recommendation {
            movie_id: 1,
            title: title.to_string(),
            score,
        }
    }

    #[test]
    fn table_lists_rows_in_order() {
        let recs = vec![recommendation("Jumanji", 4.5), recommendation("Heat", 3.25)];
        let table = render(&recs, OutputFormat::Table).unwrap();

        let jumanji = table.find("Jumanji").unwrap();
        let heat = table.find("Heat").unwrap();
        assert!(jumanji < heat);
        assert!(table.contains("4.50"));
    }

    #[test]
    fn empty_list_renders_a_placeholder() {
        let table = render(&[], OutputFormat::Table).unwrap();
        assert!(table.contains("No recommendations"));
    }

    #[test]
    fn json_carries_title_and_score_only() {
        let recs = vec![recommendation("Jumanji", 4.5)];
        let json = render(&recs, OutputFormat::Json).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["title"], "Jumanji");
        assert_eq!(parsed[0]["score"], 4.5);
        assert!(parsed[0].get("movie_id").is_none());
    }
}
