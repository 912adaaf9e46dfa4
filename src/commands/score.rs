use crate::models::SentimentResult;
use crate::sentiment;

pub fn run(text: &str) -> SentimentResult {
    sentiment::score(text)
}
