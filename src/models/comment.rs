use jiff::Timestamp;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    text: String,
    author: String,
    like_count: u64,
    published_at: Timestamp,
}

impl Comment {
    pub fn new(text: String, author: String, like_count: u64, published_at: Timestamp) -> Self {
        Self {
            text,
            author,
            like_count,
            published_at,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn like_count(&self) -> u64 {
        self.like_count
    }

    pub fn published_at(&self) -> Timestamp {
        self.published_at
    }
}
