//! Pre-trained sentiment scoring from persisted artifacts.
//!
//! This crate loads two JSON artifacts exported from a training run, a
//! TF-IDF vectorizer (vocabulary + idf weights) and a three-class linear
//! classifier (weight matrix + intercepts), and exposes them through the
//! same [`hs_common::SentimentScorer`] trait as the lexicon backend. Class
//! probabilities are folded into a [`hs_common::ScoreBundle`] so the fixed
//! threshold classifier downstream stays the single labeling authority.

pub mod model;
pub mod scorer;
pub mod vectorizer;

pub use model::LinearModel;
pub use scorer::ModelScorer;
pub use vectorizer::TfidfVectorizer;
