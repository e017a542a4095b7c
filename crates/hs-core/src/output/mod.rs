//! Report structs and rendering.
//!
//! stdout carries exactly one rendered report per command; logs and
//! warnings go to stderr.

use chrono::{DateTime, Utc};
use hs_common::{AnalysisRecord, BatchId, OutputFormat, Result, SCHEMA_VERSION};
use serde::Serialize;

use crate::aggregate::{LabelCounts, LabelPercentages};

/// One record as it appears in reports.
#[derive(Debug, Clone, Serialize)]
pub struct RecordRow {
    pub headline: String,
    pub sentiment: String,
    pub compound: f64,
    pub pos: f64,
    pub neu: f64,
    pub neg: f64,
    pub timestamp: DateTime<Utc>,
}

impl From<&AnalysisRecord> for RecordRow {
    fn from(record: &AnalysisRecord) -> Self {
        RecordRow {
            headline: record.headline.clone(),
            sentiment: record.label.as_str().to_string(),
            compound: record.scores.compound,
            pos: record.scores.pos,
            neu: record.scores.neu,
            neg: record.scores.neg,
            timestamp: record.timestamp,
        }
    }
}

/// Report for a single classified headline.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub schema_version: &'static str,
    pub scorer: &'static str,
    pub record: RecordRow,
}

impl AnalysisReport {
    pub fn new(scorer: &'static str, record: &AnalysisRecord) -> Self {
        AnalysisReport {
            schema_version: SCHEMA_VERSION,
            scorer,
            record: RecordRow::from(record),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Md => Ok(render_records_md(std::slice::from_ref(&self.record))),
            OutputFormat::Summary => Ok(format!(
                "{}: {} (compound {:+.4})",
                self.record.headline, self.record.sentiment, self.record.compound
            )),
        }
    }
}

/// Report for a classified batch (typed text or fetched feed).
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub schema_version: &'static str,
    pub batch_id: BatchId,
    pub scorer: &'static str,
    pub total: usize,
    pub counts: LabelCounts,
    pub percentages: LabelPercentages,
    pub records: Vec<RecordRow>,

    /// Feed URL, present on the feed path only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_url: Option<String>,

    /// Error surfaced when a feed fetch collapsed to an empty result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_error: Option<String>,
}

impl BatchReport {
    pub fn new(scorer: &'static str, records: &[AnalysisRecord]) -> Self {
        let counts = LabelCounts::aggregate(records);
        BatchReport {
            schema_version: SCHEMA_VERSION,
            batch_id: BatchId::new(),
            scorer,
            total: counts.total(),
            counts,
            percentages: counts.percentages(),
            records: records.iter().map(RecordRow::from).collect(),
            feed_url: None,
            feed_error: None,
        }
    }

    pub fn with_feed_url(mut self, url: &str) -> Self {
        self.feed_url = Some(url.to_string());
        self
    }

    pub fn with_feed_error(mut self, message: String) -> Self {
        self.feed_error = Some(message);
        self
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Md => Ok(self.render_md()),
            OutputFormat::Summary => Ok(self.render_summary()),
        }
    }

    fn render_md(&self) -> String {
        let mut out = String::new();
        if let Some(url) = &self.feed_url {
            out.push_str(&format!("# Feed: {}\n\n", url));
        }
        if let Some(error) = &self.feed_error {
            out.push_str(&format!("> Fetch failed: {}\n\n", error));
        }

        out.push_str(&render_records_md(&self.records));
        out.push('\n');
        out.push_str("| Sentiment | Count | Share |\n");
        out.push_str("|-----------|-------|-------|\n");
        out.push_str(&format!(
            "| Positive | {} | {:.1}% |\n",
            self.counts.positive, self.percentages.positive
        ));
        out.push_str(&format!(
            "| Neutral | {} | {:.1}% |\n",
            self.counts.neutral, self.percentages.neutral
        ));
        out.push_str(&format!(
            "| Negative | {} | {:.1}% |\n",
            self.counts.negative, self.percentages.negative
        ));
        out
    }

    fn render_summary(&self) -> String {
        let mut line = format!(
            "{}: {} headlines → {} Positive / {} Neutral / {} Negative",
            self.batch_id,
            self.total,
            self.counts.positive,
            self.counts.neutral,
            self.counts.negative
        );
        if let Some(error) = &self.feed_error {
            line.push_str(&format!(" (feed error: {})", error));
        }
        line
    }
}

fn render_records_md(records: &[RecordRow]) -> String {
    let mut out = String::new();
    out.push_str("| Headline | Sentiment | Compound |\n");
    out.push_str("|----------|-----------|----------|\n");
    for row in records {
        out.push_str(&format!(
            "| {} | {} | {:+.4} |\n",
            row.headline.replace('|', "\\|"),
            row.sentiment,
            row.compound
        ));
    }
    out
}
