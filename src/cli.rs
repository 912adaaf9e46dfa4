use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ytm", version)]
#[command(about = "Sentiment summaries for YouTube video comments", long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file (defaults to ./ytmood.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a video's comments and summarize their sentiment
    Analyze {
        /// YouTube video URL or 11-character video ID
        video: String,

        /// Maximum number of comments to fetch (capped at 200)
        #[arg(long, short = 'n', value_parser = clap::value_parser!(u32).range(1..))]
        max_comments: Option<u32>,

        /// Number of words to show in the word cloud
        #[arg(long)]
        words: Option<usize>,

        /// Also write every scored comment to this CSV file
        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score the sentiment of a piece of text
    Score {
        /// The text to score
        text: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the video ID contained in a URL
    Resolve {
        /// YouTube video URL or ID
        input: String,
    },
}
