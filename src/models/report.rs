use serde::Serialize;

use super::{Category, Comment, SentimentResult, VideoId};

pub const HISTOGRAM_BINS: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SentimentCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentCounts {
    pub fn record(&mut self, category: Category) {
        match category {
            Category::Positive => self.positive += 1,
            Category::Neutral => self.neutral += 1,
            Category::Negative => self.negative += 1,
        }
    }

    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Positive => self.positive,
            Category::Neutral => self.neutral,
            Category::Negative => self.negative,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

/// A fetched comment with its sentiment attached.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredComment {
    #[serde(flatten)]
    pub comment: Comment,
    pub sentiment: f64,
    pub sentiment_category: Category,
}

impl ScoredComment {
    pub fn new(comment: Comment, result: SentimentResult) -> Self {
        Self {
            comment,
            sentiment: result.score,
            sentiment_category: result.category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Polarity distribution over `[-1, 1]` in equal-width bins.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
}

impl Histogram {
    pub fn from_scores(scores: &[f64]) -> Self {
        let width = 2.0 / HISTOGRAM_BINS as f64;
        let mut bins: Vec<HistogramBin> = (0..HISTOGRAM_BINS)
            .map(|i| HistogramBin {
                lower: -1.0 + i as f64 * width,
                upper: -1.0 + (i + 1) as f64 * width,
                count: 0,
            })
            .collect();

        for score in scores {
            let offset = ((score + 1.0) / width).floor().max(0.0);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let index = (offset as usize).min(HISTOGRAM_BINS - 1);
            bins[index].count += 1;
        }

        Self { bins }
    }

    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub video_id: VideoId,
    pub total_comments: usize,
    pub sentiment_counts: SentimentCounts,
    /// Mean polarity over every fetched comment, rounded to three decimals.
    pub average_sentiment: f64,
    pub median_sentiment: f64,
    pub histogram: Histogram,
    pub top_words: Vec<WordCount>,
    pub sample_comments: Vec<ScoredComment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_serialize_with_category_names() {
        let mut counts = SentimentCounts::default();
        counts.record(Category::Positive);
        counts.record(Category::Positive);
        counts.record(Category::Negative);

        let json = serde_json::to_value(counts).unwrap();
        assert_eq!(json["Positive"], 2);
        assert_eq!(json["Neutral"], 0);
        assert_eq!(json["Negative"], 1);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_histogram_places_extremes_in_edge_bins() {
        let histogram = Histogram::from_scores(&[-0.9, -0.9, 0.9, 1.0]);
        let bins = histogram.bins();

        assert_eq!(bins.len(), HISTOGRAM_BINS);
        assert_eq!(bins[0].count, 2);
        assert_eq!(bins[HISTOGRAM_BINS - 1].count, 2);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 4);
        assert_eq!(histogram.max_count(), 2);
    }

    #[test]
    fn test_empty_histogram() {
        let histogram = Histogram::from_scores(&[]);
        assert_eq!(histogram.max_count(), 0);
        assert!((histogram.bins()[0].lower + 1.0).abs() < 1e-9);
        assert!((histogram.bins()[HISTOGRAM_BINS - 1].upper - 1.0).abs() < 1e-9);
    }
}
