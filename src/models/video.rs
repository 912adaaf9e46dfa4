use std::fmt;

use serde::Serialize;

/// Upper bound on how many comments a single analysis may request.
pub const MAX_COMMENTS_CEILING: u32 = 200;

/// The 11-character token naming a video on YouTube.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub const LEN: usize = 11;

    /// Accepts only an exact 11-character token of `[A-Za-z0-9_-]`.
    pub fn parse(raw: &str) -> Option<Self> {
        let valid = raw.len() == Self::LEN
            && raw
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
        valid.then(|| Self(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct FetchRequest {
    video_id: VideoId,
    max_comments: u32,
}

impl FetchRequest {
    /// The maximum is clamped into `1..=MAX_COMMENTS_CEILING`.
    pub fn new(video_id: VideoId, max_comments: u32) -> Self {
        Self {
            video_id,
            max_comments: max_comments.clamp(1, MAX_COMMENTS_CEILING),
        }
    }

    pub fn video_id(&self) -> &VideoId {
        &self.video_id
    }

    pub fn max_comments(&self) -> u32 {
        self.max_comments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_id_parse() {
        assert!(VideoId::parse("dQw4w9WgXcQ").is_some());
        assert!(VideoId::parse("a-b_c-d_e-f").is_some());
        assert!(VideoId::parse("dQw4w9WgXc").is_none());
        assert!(VideoId::parse("dQw4w9WgXcQQ").is_none());
        assert!(VideoId::parse("dQw4w9WgX!Q").is_none());
        assert!(VideoId::parse("").is_none());
    }

    #[test]
    fn test_fetch_request_clamps_maximum() {
        let id = VideoId::parse("dQw4w9WgXcQ").unwrap();
        assert_eq!(FetchRequest::new(id.clone(), 0).max_comments(), 1);
        assert_eq!(FetchRequest::new(id.clone(), 50).max_comments(), 50);
        assert_eq!(
            FetchRequest::new(id, 10_000).max_comments(),
            MAX_COMMENTS_CEILING
        );
    }
}
