use thiserror::Error;

use crate::models::VideoId;

/// Failures of a fetch-and-analyze cycle. None of them are retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid YouTube URL or video ID: {0:?}")]
    InvalidReference(String),

    #[error("YouTube API access denied (invalid API key or quota exceeded): {0}")]
    AccessDenied(String),

    #[error("Video not found or comments are disabled: {0}")]
    NotFound(String),

    #[error("Network error: unable to reach the YouTube API: {0}")]
    NetworkFailure(String),

    #[error("No comments found for video {0}. The video might have comments disabled or be private.")]
    EmptyResult(VideoId),

    #[error("Unexpected response from the YouTube API: {0}")]
    UnexpectedResponse(String),
}
