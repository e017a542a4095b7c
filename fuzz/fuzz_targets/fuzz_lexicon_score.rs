#![no_main]

use hs_lexicon::LexiconScorer;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    let scorer = LexiconScorer::new();
    let bundle = scorer.score_text(text);
    assert!(bundle.validate().is_ok());
    assert!(bundle.mass_consistent());
});
