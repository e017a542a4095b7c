//! Lexicon-based sentiment scoring.
//!
//! A fixed dictionary of word-to-valence weights plus heuristic modifiers
//! (negations, boosters) produces a [`hs_common::ScoreBundle`] for any text,
//! with no training required. The compound score is a normalized sum of
//! token valences; the pos/neu/neg fields are mass proportions that sum to
//! one for every bundle this scorer emits.

pub mod lexicon;
pub mod scorer;

pub use hs_common::text::tokenize;
pub use lexicon::Lexicon;
pub use scorer::LexiconScorer;
