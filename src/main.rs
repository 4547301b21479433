use anyhow::Result;
use movie_genie::cli::Command;
use movie_genie::{handle_completions, handle_recommend, interpret};

fn main() -> Result<()> {
    sensible_env_logger::init!();

    match interpret() {
        Command::Recommend(args) => handle_recommend(&args),
        Command::Completions { shell } => handle_completions(shell),
    }
}
