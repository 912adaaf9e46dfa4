use crate::config::AnalysisConfig;
use crate::error::Error;
use crate::fetch::{CommentSource, fetch_comments};
use crate::helpers::top_words;
use crate::models::{
    AnalysisReport, Comment, FetchRequest, Histogram, ScoredComment, SentimentCounts, VideoId,
};
use crate::{resolver, sentiment};

/// What the presentation layer asks for.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub video_url_or_id: String,
    pub max_comments: u32,
}

/// A report together with every comment it was computed from.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub report: AnalysisReport,
    pub comments: Vec<ScoredComment>,
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[allow(clippy::cast_precision_loss)]
fn mean(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}

fn median(scores: &[f64]) -> f64 {
    let mut sorted = scores.to_vec();
    sorted.sort_by(f64::total_cmp);
    match sorted.len() {
        0 => 0.0,
        n if n % 2 == 1 => sorted[n / 2],
        n => (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0,
    }
}

/// Resolves the video, fetches its comments and scores them.
///
/// The average covers every fetched comment, not only the samples.
pub fn analyze<S>(
    source: &S,
    request: &AnalysisRequest,
    config: &AnalysisConfig,
) -> Result<AnalysisReport, Error>
where
    S: CommentSource + ?Sized,
{
    let video_id = resolver::resolve(&request.video_url_or_id)?;
    analyze_video(source, video_id, request.max_comments, config).map(|analysis| analysis.report)
}

/// Fetches and scores up to `max_comments` comments of an already resolved video.
pub fn analyze_video<S>(
    source: &S,
    video_id: VideoId,
    max_comments: u32,
    config: &AnalysisConfig,
) -> Result<Analysis, Error>
where
    S: CommentSource + ?Sized,
{
    let fetch_request = FetchRequest::new(video_id.clone(), max_comments);
    let comments = fetch_comments(source, &fetch_request)?;

    if comments.is_empty() {
        return Err(Error::EmptyResult(video_id));
    }

    Ok(summarize(video_id, comments, config))
}

fn summarize(video_id: VideoId, comments: Vec<Comment>, config: &AnalysisConfig) -> Analysis {
    let top_words = top_words(comments.iter().map(Comment::text), config.top_words);

    let mut sentiment_counts = SentimentCounts::default();
    let mut scores = Vec::with_capacity(comments.len());
    let mut scored = Vec::with_capacity(comments.len());

    for comment in comments {
        let result = sentiment::score(comment.text());
        sentiment_counts.record(result.category);
        scores.push(result.score);
        scored.push(ScoredComment::new(comment, result));
    }

    let total_comments = scored.len();
    log::debug!("Scored {total_comments} comments: {sentiment_counts:?}");

    let report = AnalysisReport {
        video_id,
        total_comments,
        sentiment_counts,
        average_sentiment: round3(mean(&scores)),
        median_sentiment: round3(median(&scores)),
        histogram: Histogram::from_scores(&scores),
        top_words,
        sample_comments: scored.iter().take(config.sample_size).cloned().collect(),
    };

    Analysis {
        report,
        comments: scored,
    }
}
