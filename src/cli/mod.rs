use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

pub const BINARY_NAME: &str = "movie-genie";

#[derive(Parser)]
#[command(name = BINARY_NAME, version, about = "Collaborative movie recommender")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Recommend movies from a set of rated preferences
    Recommend(RecommendArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct RecommendArgs {
    /// Movie titles: one group per line, comma-separated within a line
    #[arg(long, conflicts_with = "movies_file")]
    pub movies: Option<String>,

    /// Read the movie block from a file instead
    #[arg(long)]
    pub movies_file: Option<PathBuf>,

    /// Ratings: same line and entry layout as the movie block
    #[arg(long, conflicts_with = "ratings_file")]
    pub ratings: Option<String>,

    /// Read the rating block from a file instead
    #[arg(long)]
    pub ratings_file: Option<PathBuf>,

    /// Directory containing movies.csv and ratings.csv
    #[arg(long, default_value = "data")]
    pub catalog_dir: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
