//! Rule-based scoring over the lexicon.

use hs_common::text::tokenize;
use hs_common::{Result, ScoreBundle, SentimentScorer};
use std::borrow::Cow;
use std::path::Path;

use crate::lexicon::{self, Lexicon};

/// Normalization constant for the compound score: `s / sqrt(s² + ALPHA)`.
const ALPHA: f64 = 15.0;

/// Negation flips and dampens the following valence.
const NEGATION_SCALAR: f64 = -0.74;

/// How many preceding tokens are scanned for negations and boosters.
const MODIFIER_WINDOW: usize = 3;

/// Distance damping for boosters one, two, three tokens back.
const BOOSTER_DAMPING: [f64; MODIFIER_WINDOW] = [1.0, 0.95, 0.9];

/// Lexicon-based implementation of [`SentimentScorer`].
pub struct LexiconScorer {
    lexicon: Cow<'static, Lexicon>,
}

impl LexiconScorer {
    /// Scorer over the built-in lexicon (shared, constructed once).
    pub fn new() -> Self {
        LexiconScorer {
            lexicon: Cow::Borrowed(lexicon::builtin()),
        }
    }

    /// Scorer over a caller-supplied lexicon.
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        LexiconScorer {
            lexicon: Cow::Owned(lexicon),
        }
    }

    /// Scorer over the built-in lexicon with a JSON overlay merged in.
    pub fn with_overlay(path: &Path) -> Result<Self> {
        let mut lexicon = lexicon::builtin().clone();
        lexicon.merge_overlay(path)?;
        Ok(Self::with_lexicon(lexicon))
    }

    /// Score one text. Total: every input yields a valid bundle.
    ///
    /// Token-free text (empty, whitespace, pure punctuation) scores fully
    /// neutral so the `pos + neu + neg ≈ 1` invariant holds for every
    /// bundle this scorer emits.
    pub fn score_text(&self, text: &str) -> ScoreBundle {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return ScoreBundle::neutral();
        }

        let mut sum = 0.0_f64;
        let mut pos_mass = 0.0_f64;
        let mut neg_mass = 0.0_f64;
        let mut neutral_count = 0_usize;

        for (i, token) in tokens.iter().enumerate() {
            // Modifiers do not score on their own; they act on the next
            // valenced word within the window.
            if self.lexicon.booster(token).is_some() || self.lexicon.is_negation(token) {
                continue;
            }

            let Some(base) = self.lexicon.valence(token) else {
                neutral_count += 1;
                continue;
            };

            let valence = self.apply_modifiers(base, &tokens, i);
            sum += valence;
            if valence > 0.0 {
                pos_mass += valence + 1.0;
            } else if valence < 0.0 {
                neg_mass += valence.abs() + 1.0;
            } else {
                neutral_count += 1;
            }
        }

        let total_mass = pos_mass + neg_mass + neutral_count as f64;
        if total_mass == 0.0 {
            return ScoreBundle::neutral();
        }

        let compound = (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0);
        ScoreBundle {
            pos: pos_mass / total_mass,
            neu: neutral_count as f64 / total_mass,
            neg: neg_mass / total_mass,
            compound,
        }
    }

    /// Apply booster and negation modifiers from the preceding window.
    fn apply_modifiers(&self, base: f64, tokens: &[String], index: usize) -> f64 {
        let mut valence = base;
        let mut negated = false;

        for offset in 1..=MODIFIER_WINDOW.min(index) {
            let word = &tokens[index - offset];
            if let Some(increment) = self.lexicon.booster(word) {
                let damped = increment * BOOSTER_DAMPING[offset - 1];
                if valence > 0.0 {
                    valence += damped;
                } else if valence < 0.0 {
                    valence -= damped;
                }
            }
            if self.lexicon.is_negation(word) {
                negated = true;
            }
        }

        if negated {
            valence *= NEGATION_SCALAR;
        }
        valence
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<ScoreBundle> {
        Ok(self.score_text(text))
    }

    fn name(&self) -> &'static str {
        "lexicon"
    }
}
