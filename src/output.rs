use anyhow::Result;
use console::{StyledObject, Term, style};
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::models::{AnalysisReport, Category, ScoredComment, SentimentResult, VideoId};

const BAR_WIDTH: usize = 30;
const MIN_WRAP_WIDTH: usize = 40;

fn category_style(category: Category) -> StyledObject<&'static str> {
    let label = style(category.as_str());
    match category {
        Category::Positive => label.green(),
        Category::Neutral => label.dim(),
        Category::Negative => label.red(),
    }
}

fn bar(count: usize, max: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (count * BAR_WIDTH).div_ceil(max)
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

#[allow(clippy::cast_precision_loss)]
fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

pub struct Output {
    term: Term,
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self {
            term: Term::stdout(),
            json,
        }
    }

    fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let output = serde_json::to_string_pretty(value)?;
        self.term.write_line(&output)?;
        Ok(())
    }

    fn wrap_width(&self) -> usize {
        usize::from(self.term.size().1).max(MIN_WRAP_WIDTH)
    }

    pub fn resolved(&self, video_id: &VideoId) -> Result<()> {
        self.term.write_line(video_id.as_str())?;
        Ok(())
    }

    pub fn score(&self, result: &SentimentResult) -> Result<()> {
        if self.json {
            return self.print_json(result);
        }

        self.term.write_line(&format!(
            "{} ({:+.2})",
            category_style(result.category).bold(),
            result.score
        ))?;
        Ok(())
    }

    pub fn report(&self, report: &AnalysisReport) -> Result<()> {
        if self.json {
            return self.print_json(report);
        }

        self.term.write_line(&format!(
            "Video: {}",
            style(&report.video_id).cyan().bold()
        ))?;
        self.term
            .write_line(&format!("  Comments analyzed: {}", report.total_comments))?;
        self.term.write_line(&format!(
            "  Average sentiment: {} ({})",
            style(format!("{:+.3}", report.average_sentiment)).bold(),
            category_style(Category::from_score(report.average_sentiment))
        ))?;
        self.term.write_line(&format!(
            "  Median sentiment: {:+.3}",
            report.median_sentiment
        ))?;
        self.term.write_line("")?;

        self.distribution(report)?;
        self.histogram(report)?;
        self.word_cloud(report)?;
        self.samples(&report.sample_comments)
    }

    fn distribution(&self, report: &AnalysisReport) -> Result<()> {
        let counts = &report.sentiment_counts;
        let max = Category::iter().map(|c| counts.get(c)).max().unwrap_or(0);

        self.term
            .write_line(&style("Sentiment distribution:").bold().to_string())?;
        for category in Category::iter() {
            let count = counts.get(category);
            let line = bar(count, max);
            let line = match category {
                Category::Positive => style(line).green(),
                Category::Neutral => style(line).dim(),
                Category::Negative => style(line).red(),
            };
            self.term.write_line(&format!(
                "  {:<8} {} {:>4} ({:.1}%)",
                category.as_str(),
                line,
                count,
                percent(count, report.total_comments)
            ))?;
        }
        self.term.write_line("")?;
        Ok(())
    }

    fn histogram(&self, report: &AnalysisReport) -> Result<()> {
        let max = report.histogram.max_count();

        self.term
            .write_line(&style("Polarity histogram:").bold().to_string())?;
        for bin in report.histogram.bins() {
            self.term.write_line(&format!(
                "  [{:+.1}, {:+.1}) {} {}",
                bin.lower,
                bin.upper,
                style(bar(bin.count, max)).blue(),
                bin.count
            ))?;
        }
        self.term.write_line("")?;
        Ok(())
    }

    fn word_cloud(&self, report: &AnalysisReport) -> Result<()> {
        self.term
            .write_line(&style("Top words:").bold().to_string())?;

        if report.top_words.is_empty() {
            self.term
                .write_line(&format!("  {}", style("(no text available)").dim()))?;
            self.term.write_line("")?;
            return Ok(());
        }

        let cloud = report
            .top_words
            .iter()
            .map(|w| format!("{} {}", w.word, w.count))
            .collect::<Vec<_>>()
            .join("  ·  ");
        let options = textwrap::Options::new(self.wrap_width())
            .initial_indent("  ")
            .subsequent_indent("  ");
        self.term.write_line(&textwrap::fill(&cloud, options))?;
        self.term.write_line("")?;
        Ok(())
    }

    fn samples(&self, samples: &[ScoredComment]) -> Result<()> {
        self.term.write_line(&format!(
            "{} ({})",
            style("Sample comments:").bold(),
            samples.len()
        ))?;

        let options = textwrap::Options::new(self.wrap_width())
            .initial_indent("    ")
            .subsequent_indent("    ");
        for sample in samples {
            let comment = &sample.comment;
            self.term.write_line(&format!(
                "  [{} {:+.2}] {} · {} likes · {}",
                category_style(sample.sentiment_category),
                sample.sentiment,
                style(comment.author()).cyan(),
                comment.like_count(),
                style(comment.published_at()).dim()
            ))?;
            self.term
                .write_line(&textwrap::fill(comment.text(), &options))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_scales_to_max() {
        assert_eq!(bar(0, 0).chars().filter(|c| *c == '█').count(), 0);
        assert_eq!(bar(10, 10).chars().filter(|c| *c == '█').count(), BAR_WIDTH);
        assert_eq!(bar(5, 10).chars().filter(|c| *c == '█').count(), BAR_WIDTH / 2);
        // any non-zero count is visible
        assert_eq!(bar(1, 1000).chars().filter(|c| *c == '█').count(), 1);
        assert_eq!(bar(3, 7).chars().count(), BAR_WIDTH);
    }

    #[test]
    fn test_category_style_uses_category_name() {
        for category in Category::iter() {
            assert!(category_style(category).to_string().contains(category.as_str()));
        }
    }

    #[test]
    fn test_percent() {
        assert!((percent(1, 4) - 25.0).abs() < 1e-9);
        assert!((percent(0, 0) - 0.0).abs() < 1e-9);
    }
}
