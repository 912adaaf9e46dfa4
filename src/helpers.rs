use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::models::WordCount;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?\S+|www\S+").unwrap_or_else(|err| panic!("bad url pattern: {err}"))
});

static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
        "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
        "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
        "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
        "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
        "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
        "for", "with", "about", "against", "between", "into", "through", "during", "before",
        "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
        "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
        "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
        "nor", "not", "only", "own", "same", "so", "than", "too", "very", "can", "will", "just",
        "don", "should", "now", "dont", "doesnt", "didnt", "isnt", "wasnt", "arent", "cant",
        "wont", "youre", "thats", "its", "ive", "im",
    ]
    .into_iter()
    .collect()
});

/// Normalizes a comment for word counting: lower-cases, strips URLs and
/// anything that is not an ASCII letter, then drops stopwords and words of
/// two letters or fewer.
pub fn preprocess(text: &str) -> String {
    let lowered = text.to_lowercase();
    let without_urls = URL_PATTERN.replace_all(&lowered, "");
    let letters: String = without_urls
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect();

    letters
        .split_whitespace()
        .filter(|word| word.len() > 2 && !STOPWORDS.contains(*word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Ranks the most frequent preprocessed words across `texts`.
/// Ties are broken alphabetically so the ranking is stable.
pub fn top_words<'a, I>(texts: I, limit: usize) -> Vec<WordCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for text in texts {
        for word in preprocess(text).split_whitespace() {
            *counts.entry(word.to_owned()).or_default() += 1;
        }
    }

    let mut ranked: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    ranked.truncate(limit);
    ranked
}
