mod comment;
mod report;
mod sentiment;
mod video;

pub use comment::Comment;
pub use report::{
    AnalysisReport, HISTOGRAM_BINS, Histogram, HistogramBin, ScoredComment, SentimentCounts,
    WordCount,
};
pub use sentiment::{Category, NEUTRAL_BAND, SentimentResult};
pub use video::{FetchRequest, MAX_COMMENTS_CEILING, VideoId};
