//! Word valence dictionary with negations and boosters.

use hs_common::{Error, Result};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::OnceLock;

/// Valences outside this range indicate a corrupt overlay file.
pub const MAX_VALENCE: f64 = 4.0;

/// Built-in word valences, roughly on a [-4, 4] intensity scale.
///
/// General news vocabulary: markets, disasters, politics, crime, health,
/// sport. Inflected forms are listed explicitly; there is no stemming.
const BUILTIN_VALENCES: &[(&str, f64)] = &[
    // Markets and business
    ("rally", 2.0),
    ("rallies", 2.0),
    ("surge", 2.2),
    ("surges", 2.2),
    ("soar", 2.4),
    ("soars", 2.4),
    ("boom", 2.1),
    ("gain", 1.6),
    ("gains", 1.6),
    ("profit", 1.7),
    ("profits", 1.7),
    ("growth", 1.6),
    ("record", 1.4),
    ("high", 1.0),
    ("highs", 1.2),
    ("rebound", 1.5),
    ("recovery", 1.6),
    ("rise", 1.3),
    ("rises", 1.3),
    ("fall", -1.3),
    ("falls", -1.3),
    ("drop", -1.4),
    ("drops", -1.4),
    ("upgrade", 1.5),
    ("beat", 1.3),
    ("beats", 1.3),
    ("strong", 1.4),
    ("bullish", 2.0),
    ("crash", -2.9),
    ("crashes", -2.9),
    ("plunge", -2.5),
    ("plunges", -2.5),
    ("slump", -2.0),
    ("slumps", -2.0),
    ("tumble", -1.9),
    ("tumbles", -1.9),
    ("loss", -1.7),
    ("losses", -1.7),
    ("low", -1.0),
    ("lows", -1.2),
    ("downgrade", -1.6),
    ("recession", -2.3),
    ("bankruptcy", -2.8),
    ("bankrupt", -2.7),
    ("layoffs", -2.2),
    ("default", -1.8),
    ("weak", -1.3),
    ("bearish", -2.0),
    ("miss", -1.4),
    ("misses", -1.4),
    ("fraud", -3.2),
    ("scandal", -2.6),
    ("collapse", -2.7),
    ("collapses", -2.7),
    // Disasters and conflict
    ("kill", -3.1),
    ("kills", -3.2),
    ("killed", -3.2),
    ("dead", -3.0),
    ("deaths", -3.0),
    ("dies", -2.9),
    ("disaster", -2.9),
    ("catastrophe", -3.2),
    ("devastates", -3.0),
    ("destroyed", -2.7),
    ("war", -2.9),
    ("attack", -2.6),
    ("attacks", -2.6),
    ("bombing", -3.1),
    ("violence", -2.7),
    ("crisis", -2.4),
    ("emergency", -1.9),
    ("evacuated", -1.6),
    ("injured", -2.2),
    ("wounded", -2.3),
    ("missing", -1.7),
    ("flood", -2.0),
    ("floods", -2.0),
    ("wildfire", -2.1),
    ("drought", -1.9),
    ("famine", -3.0),
    ("outbreak", -2.2),
    ("toll", -1.8),
    // Politics and society
    ("win", 1.8),
    ("wins", 1.8),
    ("victory", 2.1),
    ("peace", 2.3),
    ("agreement", 1.3),
    ("breakthrough", 2.2),
    ("reform", 1.0),
    ("progress", 1.5),
    ("success", 2.0),
    ("successful", 2.0),
    ("celebrates", 1.9),
    ("historic", 1.2),
    ("hope", 1.5),
    ("hopes", 1.5),
    ("lose", -1.6),
    ("loses", -1.6),
    ("defeat", -1.8),
    ("corruption", -2.8),
    ("protest", -1.2),
    ("protests", -1.2),
    ("riot", -2.4),
    ("riots", -2.4),
    ("sanctions", -1.5),
    ("impeachment", -1.9),
    ("resigns", -1.4),
    ("ban", -1.3),
    ("bans", -1.3),
    ("threat", -2.0),
    ("threatens", -2.1),
    ("warning", -1.5),
    ("warns", -1.5),
    ("fears", -1.9),
    ("fear", -1.9),
    ("concern", -1.2),
    ("concerns", -1.2),
    ("tension", -1.5),
    ("tensions", -1.5),
    // Crime and justice
    ("murder", -3.3),
    ("arrested", -1.8),
    ("charged", -1.5),
    ("guilty", -2.1),
    ("convicted", -2.0),
    ("acquitted", 1.0),
    ("theft", -2.0),
    ("robbery", -2.3),
    ("kidnapping", -3.0),
    // Health and science
    ("cure", 2.4),
    ("cures", 2.4),
    ("vaccine", 1.1),
    ("epidemic", -2.5),
    ("pandemic", -2.6),
    ("cancer", -2.3),
    ("saves", 2.2),
    ("saved", 2.2),
    ("discovery", 1.7),
    ("innovation", 1.6),
    // Generic sentiment
    ("good", 1.9),
    ("great", 3.1),
    ("best", 3.2),
    ("excellent", 2.7),
    ("amazing", 2.8),
    ("bad", -2.5),
    ("worst", -3.1),
    ("terrible", -2.1),
    ("horrific", -3.0),
    ("tragic", -2.8),
    ("tragedy", -2.8),
];

/// Booster increments, applied sign-aware to the following valenced word.
const BUILTIN_BOOSTERS: &[(&str, f64)] = &[
    ("very", 0.293),
    ("extremely", 0.293),
    ("hugely", 0.293),
    ("massively", 0.293),
    ("sharply", 0.293),
    ("dramatically", 0.293),
    ("significantly", 0.293),
    ("record-breaking", 0.293),
    ("slightly", -0.293),
    ("somewhat", -0.293),
    ("marginally", -0.293),
    ("barely", -0.293),
];

/// Negation markers checked in a three-token window before a valenced word.
const BUILTIN_NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "none", "nobody", "nothing", "cannot", "can't", "won't",
    "don't", "doesn't", "didn't", "isn't", "aren't", "wasn't", "weren't", "without", "hardly",
    "scarcely",
];

/// A word-valence dictionary plus heuristic modifier tables.
#[derive(Debug, Clone)]
pub struct Lexicon {
    valences: HashMap<String, f64>,
    boosters: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl Lexicon {
    /// Build the built-in lexicon.
    pub fn new() -> Self {
        Lexicon {
            valences: BUILTIN_VALENCES
                .iter()
                .map(|(w, v)| (w.to_string(), *v))
                .collect(),
            boosters: BUILTIN_BOOSTERS
                .iter()
                .map(|(w, v)| (w.to_string(), *v))
                .collect(),
            negations: BUILTIN_NEGATIONS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Valence for a word, if it carries one.
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(word).copied()
    }

    /// Booster increment for a word, if it is a booster.
    pub fn booster(&self, word: &str) -> Option<f64> {
        self.boosters.get(word).copied()
    }

    /// Whether a word negates a following valenced word.
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }

    /// Number of valenced words.
    pub fn len(&self) -> usize {
        self.valences.len()
    }

    /// Whether the valence table is empty.
    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }

    /// Insert or replace one word valence.
    pub fn insert(&mut self, word: &str, valence: f64) {
        self.valences.insert(word.to_lowercase(), valence);
    }

    /// Merge a JSON overlay file (`{"word": valence, ...}`) over this
    /// lexicon. Overlay entries replace built-in entries for the same word.
    /// Returns the number of entries merged.
    pub fn merge_overlay(&mut self, path: &Path) -> Result<usize> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::InvalidLexicon(format!("{}: {}", path.display(), e)))?;
        let entries: HashMap<String, f64> = serde_json::from_str(&content)
            .map_err(|e| Error::InvalidLexicon(format!("{}: {}", path.display(), e)))?;

        for (word, valence) in &entries {
            if !valence.is_finite() || valence.abs() > MAX_VALENCE {
                return Err(Error::InvalidLexicon(format!(
                    "valence for '{}' must be finite and within ±{}, got {}",
                    word, MAX_VALENCE, valence
                )));
            }
            if word.trim().is_empty() {
                return Err(Error::InvalidLexicon("blank word key".to_string()));
            }
        }

        let count = entries.len();
        for (word, valence) in entries {
            self.valences.insert(word.to_lowercase(), valence);
        }
        Ok(count)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

static BUILTIN: OnceLock<Lexicon> = OnceLock::new();

/// The built-in lexicon, constructed once per process.
pub fn builtin() -> &'static Lexicon {
    BUILTIN.get_or_init(Lexicon::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_polarity() {
        let lex = Lexicon::new();
        assert!(lex.valence("rally").unwrap() > 0.0);
        assert!(lex.valence("kills").unwrap() < 0.0);
        assert!(lex.valence("tuesday").is_none());
    }

    #[test]
    fn test_builtin_valences_in_range() {
        let lex = Lexicon::new();
        for (word, _) in BUILTIN_VALENCES {
            let v = lex.valence(word).unwrap();
            assert!(
                v.is_finite() && v.abs() <= MAX_VALENCE,
                "builtin valence for '{word}' out of range: {v}"
            );
        }
    }

    #[test]
    fn test_negations_and_boosters() {
        let lex = Lexicon::new();
        assert!(lex.is_negation("not"));
        assert!(lex.is_negation("won't"));
        assert!(!lex.is_negation("rally"));
        assert!(lex.booster("very").unwrap() > 0.0);
        assert!(lex.booster("slightly").unwrap() < 0.0);
    }

    #[test]
    fn test_merge_overlay() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"moonshot": 2.5, "rally": 0.5}}"#).unwrap();

        let mut lex = Lexicon::new();
        let merged = lex.merge_overlay(file.path()).unwrap();
        assert_eq!(merged, 2);
        assert_eq!(lex.valence("moonshot"), Some(2.5));
        // Overlay replaces the builtin entry
        assert_eq!(lex.valence("rally"), Some(0.5));
    }

    #[test]
    fn test_merge_overlay_rejects_out_of_range() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"broken": 99.0}}"#).unwrap();

        let mut lex = Lexicon::new();
        assert!(matches!(
            lex.merge_overlay(file.path()),
            Err(Error::InvalidLexicon(_))
        ));
    }

    #[test]
    fn test_merge_overlay_rejects_non_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "valence: 1").unwrap();

        let mut lex = Lexicon::new();
        assert!(lex.merge_overlay(file.path()).is_err());
    }

    #[test]
    fn test_builtin_singleton() {
        let a = builtin() as *const Lexicon;
        let b = builtin() as *const Lexicon;
        assert_eq!(a, b);
    }
}
