//! CSV export of scored comments.

use std::{fs::File, io, path::Path};

use anyhow::{Context, Result};
use jiff::Timestamp;
use serde::Serialize;

use crate::helpers::preprocess;
use crate::models::{Category, ScoredComment};

#[derive(Debug, Serialize)]
struct CommentRecord<'a> {
    #[serde(rename = "Comment")]
    comment: &'a str,
    processed_comment: String,
    sentiment: f64,
    sentiment_category: Category,
    #[serde(rename = "Author")]
    author: &'a str,
    #[serde(rename = "Likes")]
    likes: u64,
    #[serde(rename = "Published")]
    published: Timestamp,
}

impl<'a> From<&'a ScoredComment> for CommentRecord<'a> {
    fn from(scored: &'a ScoredComment) -> Self {
        let comment = &scored.comment;
        Self {
            comment: comment.text(),
            processed_comment: preprocess(comment.text()),
            sentiment: scored.sentiment,
            sentiment_category: scored.sentiment_category,
            author: comment.author(),
            likes: comment.like_count(),
            published: comment.published_at(),
        }
    }
}

/// Writes one row per comment, with a header row, in fetch order.
pub fn write_comments<W: io::Write>(writer: W, comments: &[ScoredComment]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in comments.iter().map(CommentRecord::from) {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_comments_to_file(path: &Path, comments: &[ScoredComment]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create CSV file {}", path.display()))?;
    write_comments(file, comments)
        .with_context(|| format!("Failed to write CSV file {}", path.display()))?;
    log::info!("Wrote {} comments to {}", comments.len(), path.display());
    Ok(())
}
