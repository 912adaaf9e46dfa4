use std::path::Path;

use anyhow::Result;

use crate::analysis;
use crate::config::Config;
use crate::export;
use crate::models::AnalysisReport;
use crate::resolver;
use crate::youtube::YouTubeClient;

pub fn run(
    video: String,
    max_comments: Option<u32>,
    words: Option<usize>,
    csv: Option<&Path>,
    config: &Config,
) -> Result<AnalysisReport> {
    // Resolved before the client so a bad reference wins over a missing API key.
    let video_id = resolver::resolve(&video)?;

    let client = YouTubeClient::new(&config.api)?;

    let mut analysis_config = config.analysis.clone();
    if let Some(words) = words {
        analysis_config.top_words = words;
    }
    let max_comments = max_comments.unwrap_or(analysis_config.default_max_comments);

    let analysis = analysis::analyze_video(&client, video_id, max_comments, &analysis_config)?;

    if let Some(path) = csv {
        export::write_comments_to_file(path, &analysis.comments)?;
    }

    Ok(analysis.report)
}
