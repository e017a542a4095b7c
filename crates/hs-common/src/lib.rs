//! Headline Sentiment common types, IDs, and errors.
//!
//! This crate provides foundational types shared across hs-* crates:
//! - The three-way sentiment `Label` and the `ScoreBundle` it is derived from
//! - Immutable `AnalysisRecord`s and their identity types
//! - The `SentimentScorer` capability trait both scorer backends implement
//! - Common error types with stable codes
//! - Output format specifications

pub mod error;
pub mod id;
pub mod label;
pub mod output;
pub mod record;
pub mod schema;
pub mod score;
pub mod scorer;
pub mod text;

pub use error::{Error, Result};
pub use id::{BatchId, RecordId};
pub use label::Label;
pub use output::OutputFormat;
pub use record::AnalysisRecord;
pub use schema::SCHEMA_VERSION;
pub use score::ScoreBundle;
pub use scorer::SentimentScorer;
