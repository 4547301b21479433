pub mod catalog;
pub mod cli;
pub mod errors;
pub mod input;
pub mod output;
pub mod recommend;

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::fs;
use std::io;
use std::path::Path;

use crate::cli::{BINARY_NAME, Cli, Command, RecommendArgs};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_recommend(args: &RecommendArgs) -> Result<()> {
    let movies_text = read_block(args.movies.as_deref(), args.movies_file.as_deref(), "movie")?;
    let ratings_text = read_block(args.ratings.as_deref(), args.ratings_file.as_deref(), "rating")?;

    // Reject malformed input before touching the catalog
    let raw = input::parse_preferences(&movies_text, &ratings_text)?;

    let catalog = catalog::load_catalog(&args.catalog_dir)?;
    let recommendations = recommend::recommend(&catalog, &raw);
    let rendered = output::render(&recommendations, args.format)?;

    println!("{}", rendered);
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    clap_complete::generate(shell, &mut command, BINARY_NAME, &mut io::stdout());
    Ok(())
}

fn read_block(inline: Option<&str>, file: Option<&Path>, kind: &str) -> Result<String> {
    match (inline, file) {
        (Some(text), _) => Ok(text.to_string()),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {} block from: {}", kind, path.display())),
        (None, None) => bail!("Missing {} block: pass --{}s or --{}s-file", kind, kind, kind),
    }
}
