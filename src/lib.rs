#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod fetch;
pub mod helpers;
pub mod models;
pub mod output;
pub mod resolver;
pub mod sentiment;
pub mod youtube;

use anyhow::Result;

use cli::{Cli, Commands};
use config::Config;
use output::Output;

pub use error::Error;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            video,
            max_comments,
            words,
            csv,
            json,
        } => {
            let config = Config::load(cli.config.as_deref())?;
            let report =
                commands::analyze::run(video, max_comments, words, csv.as_deref(), &config)?;
            Output::new(json).report(&report)
        }
        Commands::Score { text, json } => {
            let result = commands::score::run(&text);
            Output::new(json).score(&result)
        }
        Commands::Resolve { input } => {
            let video_id = commands::resolve::run(&input)?;
            Output::new(false).resolved(&video_id)
        }
    }
}
