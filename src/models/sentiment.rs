use serde::Serialize;
use strum::{EnumIter, IntoStaticStr};

/// Scores strictly above this are positive, strictly below its negation negative.
pub const NEUTRAL_BAND: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, IntoStaticStr, EnumIter)]
pub enum Category {
    Positive,
    Neutral,
    Negative,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn from_score(score: f64) -> Self {
        if score > NEUTRAL_BAND {
            Self::Positive
        } else if score < -NEUTRAL_BAND {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentResult {
    pub score: f64,
    pub category: Category,
}

impl SentimentResult {
    pub fn new(score: f64) -> Self {
        Self {
            score,
            category: Category::from_score(score),
        }
    }

    pub fn neutral() -> Self {
        Self::new(0.0)
    }
}
