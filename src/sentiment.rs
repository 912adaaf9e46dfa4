//! Keyword-based polarity scoring.
//!
//! Keywords are matched as substrings of the lower-cased text, so a keyword
//! embedded in a longer word ("badge" contains "bad") still counts. Each
//! keyword counts at most once per text.

use crate::models::SentimentResult;

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "awesome",
    "amazing",
    "love",
    "excellent",
    "perfect",
    "wonderful",
    "fantastic",
    "best",
    "nice",
    "beautiful",
    "incredible",
    "outstanding",
    "brilliant",
    "superb",
    "marvelous",
    "terrific",
    "fabulous",
    "cool",
    "sweet",
    "epic",
    "legendary",
    "masterpiece",
    "genius",
    "flawless",
    "stunning",
    "breathtaking",
    "magnificent",
    "spectacular",
    "phenomenal",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "hate",
    "worst",
    "horrible",
    "disgusting",
    "stupid",
    "boring",
    "sucks",
    "pathetic",
    "useless",
    "garbage",
    "trash",
    "annoying",
    "disappointing",
    "frustrating",
    "ridiculous",
    "nonsense",
    "lame",
    "cringe",
    "fail",
    "disaster",
    "nightmare",
    "toxic",
    "waste",
];

const INTENSIFIERS: &[&str] = &[
    "very",
    "really",
    "extremely",
    "absolutely",
    "totally",
    "completely",
];

/// Score contributed by one net keyword hit.
const KEYWORD_WEIGHT: f64 = 0.3;
/// Extra multiplier per intensifier present.
const INTENSIFIER_BOOST: f64 = 0.2;
pub const MAX_POLARITY: f64 = 0.9;

fn count_present(text: &str, words: &[&str]) -> usize {
    words.iter().filter(|word| text.contains(*word)).count()
}

#[allow(clippy::cast_precision_loss)]
pub fn score(text: &str) -> SentimentResult {
    if text.trim().is_empty() {
        return SentimentResult::neutral();
    }

    let text = text.to_lowercase();
    let positive = count_present(&text, POSITIVE_WORDS);
    let negative = count_present(&text, NEGATIVE_WORDS);
    let intensifiers = count_present(&text, INTENSIFIERS);

    let mut base = positive as f64 - negative as f64;
    if intensifiers > 0 {
        base *= 1.0 + intensifiers as f64 * INTENSIFIER_BOOST;
    }

    SentimentResult::new((base * KEYWORD_WEIGHT).clamp(-MAX_POLARITY, MAX_POLARITY))
}
