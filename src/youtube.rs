//! Blocking client for the YouTube Data API v3 `commentThreads` listing.

use anyhow::{Context, Result};
use jiff::Timestamp;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::ApiConfig;
use crate::error::Error;
use crate::fetch::{CommentPage, CommentSource};
use crate::models::{Comment, VideoId};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentThreadListResponse {
    #[serde(default)]
    items: Vec<CommentThread>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommentThread {
    snippet: ThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThreadSnippet {
    top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
struct TopLevelComment {
    snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentSnippet {
    text_display: String,
    author_display_name: String,
    #[serde(default)]
    like_count: u64,
    published_at: Timestamp,
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    error: ApiError,
}

#[derive(Debug, Default, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    reason: String,
}

/// Reasons the API reports with a 403 that really mean "nothing to list".
const NOT_FOUND_REASONS: &[&str] = &["commentsDisabled", "videoNotFound"];

fn truncate_chars(mut text: String, max: usize) -> String {
    if let Some((idx, _)) = text.char_indices().nth(max) {
        text.truncate(idx);
    }
    text
}

/// Maps a non-success response to the error taxonomy.
fn error_for_status(status: StatusCode, body: &str) -> Error {
    let api_error = serde_json::from_str::<ApiErrorBody>(body)
        .map(|body| body.error)
        .unwrap_or_default();
    let reason = api_error
        .errors
        .first()
        .map(|detail| detail.reason.as_str())
        .unwrap_or_default();
    let detail = if api_error.message.is_empty() {
        status.to_string()
    } else {
        format!("{status}: {}", api_error.message)
    };

    if NOT_FOUND_REASONS.contains(&reason) {
        return Error::NotFound(detail);
    }

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::AccessDenied(detail),
        StatusCode::NOT_FOUND => Error::NotFound(detail),
        _ => Error::UnexpectedResponse(detail),
    }
}

pub struct YouTubeClient {
    client: Client,
    base_url: String,
    api_key: String,
    max_text_len: usize,
    max_author_len: usize,
}

impl YouTubeClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let api_key = config.api_key()?.to_owned();
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            api_key,
            max_text_len: config.max_text_len,
            max_author_len: config.max_author_len,
        })
    }

    fn build_page(&self, response: CommentThreadListResponse) -> CommentPage {
        let comments = response
            .items
            .into_iter()
            .map(|thread| {
                let snippet = thread.snippet.top_level_comment.snippet;
                Comment::new(
                    truncate_chars(snippet.text_display, self.max_text_len),
                    truncate_chars(snippet.author_display_name, self.max_author_len),
                    snippet.like_count,
                    snippet.published_at,
                )
            })
            .collect();

        CommentPage {
            comments,
            next_page_token: response.next_page_token,
        }
    }
}

impl CommentSource for YouTubeClient {
    fn fetch_page(
        &self,
        video_id: &VideoId,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<CommentPage, Error> {
        let url = format!("{}/commentThreads", self.base_url);
        let max_results = page_size.to_string();
        let mut query = vec![
            ("part", "snippet"),
            ("videoId", video_id.as_str()),
            ("key", self.api_key.as_str()),
            ("maxResults", max_results.as_str()),
            ("order", "relevance"),
            ("textFormat", "plainText"),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }

        log::debug!("GET {url} videoId={video_id} maxResults={page_size} pageToken={page_token:?}");

        // Errors are stripped of their URL since the query carries the API key.
        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .map_err(|err| Error::NetworkFailure(err.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            log::debug!("YouTube API responded with {status}: {body}");
            return Err(error_for_status(status, &body));
        }

        let listing: CommentThreadListResponse = response.json().map_err(|err| {
            if err.is_timeout() {
                Error::NetworkFailure(err.without_url().to_string())
            } else {
                Error::UnexpectedResponse(err.without_url().to_string())
            }
        })?;

        Ok(self.build_page(listing))
    }
}
