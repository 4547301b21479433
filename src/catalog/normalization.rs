use anyhow::{Context, Result};
use regex::Regex;

/// Strips release-year suffixes such as "Toy Story (1995)" before matching
#[derive(Debug)]
pub struct TitleNormalizer {
    year_suffix: Regex,
}

impl TitleNormalizer {
    pub fn new() -> Result<Self> {
        let year_suffix = compile_year_suffix_regex()?;
        Ok(Self { year_suffix })
    }

    pub fn normalize(&self, raw: &str) -> String {
        let stripped = self.year_suffix.replace(raw, "");
        stripped.trim().to_string()
    }
}

fn compile_year_suffix_regex() -> Result<Regex> {
    Regex::new(r"\s*\(\d{4}\)\s*$").context("Failed to compile title year regex")
}
