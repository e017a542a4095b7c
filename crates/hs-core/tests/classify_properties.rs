//! Property-based tests for classification and aggregation invariants.

use hs_common::{AnalysisRecord, Label, ScoreBundle};
use hs_core::aggregate::LabelCounts;
use hs_core::batch::split_headlines;
use hs_core::classify::{classify, try_classify, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
use proptest::prelude::*;

fn label_strategy() -> impl Strategy<Value = Label> {
    prop_oneof![
        Just(Label::Positive),
        Just(Label::Neutral),
        Just(Label::Negative),
    ]
}

fn record(label: Label) -> AnalysisRecord {
    AnalysisRecord::new("headline", label, ScoreBundle::neutral())
}

proptest! {
    /// classify(c) is Positive iff c >= 0.05, Negative iff c <= -0.05,
    /// Neutral otherwise, over the whole valid compound range.
    #[test]
    fn prop_threshold_policy(compound in -1.0f64..=1.0) {
        let label = classify(compound);
        if compound >= POSITIVE_THRESHOLD {
            prop_assert_eq!(label, Label::Positive);
        } else if compound <= NEGATIVE_THRESHOLD {
            prop_assert_eq!(label, Label::Negative);
        } else {
            prop_assert_eq!(label, Label::Neutral);
        }
    }

    /// classify is pure: the same input always yields the same output,
    /// independent of call order.
    #[test]
    fn prop_classify_pure(compound in -1.0f64..=1.0, noise in proptest::collection::vec(-1.0f64..=1.0, 0..20)) {
        let before = classify(compound);
        for n in noise {
            let _ = classify(n);
        }
        prop_assert_eq!(classify(compound), before);
    }

    /// try_classify agrees with classify on every valid compound.
    #[test]
    fn prop_try_classify_agrees(compound in -1.0f64..=1.0) {
        prop_assert_eq!(try_classify(compound).unwrap(), classify(compound));
    }

    /// try_classify rejects every out-of-range magnitude.
    #[test]
    fn prop_try_classify_rejects_out_of_range(magnitude in 1.0000001f64..1e6) {
        prop_assert!(try_classify(magnitude).is_err());
        prop_assert!(try_classify(-magnitude).is_err());
    }

    /// Aggregate counts sum to the input length for any label sequence,
    /// including the empty one.
    #[test]
    fn prop_counts_sum_to_len(labels in proptest::collection::vec(label_strategy(), 0..50)) {
        let records: Vec<AnalysisRecord> = labels.iter().map(|&l| record(l)).collect();
        let counts = LabelCounts::aggregate(&records);
        prop_assert_eq!(counts.total(), records.len());
    }

    /// Aggregation is order-independent.
    #[test]
    fn prop_counts_order_independent(labels in proptest::collection::vec(label_strategy(), 0..50)) {
        let records: Vec<AnalysisRecord> = labels.iter().map(|&l| record(l)).collect();
        let forward = LabelCounts::aggregate(&records);
        let mut reversed = records;
        reversed.reverse();
        prop_assert_eq!(forward, LabelCounts::aggregate(&reversed));
    }

    /// Percentages sum to 100 for non-empty batches and are all zero for
    /// the empty batch.
    #[test]
    fn prop_percentage_policy(labels in proptest::collection::vec(label_strategy(), 0..50)) {
        let records: Vec<AnalysisRecord> = labels.iter().map(|&l| record(l)).collect();
        let pct = LabelCounts::aggregate(&records).percentages();
        let sum = pct.positive + pct.neutral + pct.negative;
        if records.is_empty() {
            prop_assert_eq!(sum, 0.0);
        } else {
            prop_assert!((sum - 100.0).abs() < 1e-9);
        }
    }

    /// Batch splitting never yields blank headlines and never reorders.
    #[test]
    fn prop_split_drops_blanks_keeps_order(lines in proptest::collection::vec("[ a-z]{0,12}", 0..20)) {
        let blob = lines.join("\n");
        let headlines = split_headlines(&blob);

        for headline in &headlines {
            prop_assert!(!headline.trim().is_empty());
            prop_assert_eq!(*headline, headline.trim());
        }

        let expected: Vec<&str> = lines
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .collect();
        prop_assert_eq!(headlines, expected);
    }
}
