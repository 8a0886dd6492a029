//! Property-based tests for report rendering
//!
//! - every `pct*` statistic is printed, and nothing else in that section
//! - the breed section never lists a record whose labels match

mod common;

use common::{full_stats, render};
use petreport::{ReportOptions, ResultRecord, ResultsTable};
use proptest::prelude::*;

fn stat_name() -> impl Strategy<Value = String> {
    prop_oneof!["pct_[a-z]{1,12}", "n_[a-z]{1,12}", "[a-z]{1,12}"]
}

fn record() -> impl Strategy<Value = ResultRecord> {
    (
        "[a-z]{1,10}",
        "[a-z]{1,10}",
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(pet, classifier, labels_match, pet_is_dog, says_dog)| {
            ResultRecord::new(pet, classifier, labels_match, pet_is_dog, says_dog)
        })
}

proptest! {
    #[test]
    fn prop_percentage_section_matches_pct_keys(
        extra in prop::collection::vec((stat_name(), 0.0f64..100.0), 0..12)
    ) {
        let mut stats = full_stats(10, 5, 5, 5, 5, 5);
        for (name, value) in &extra {
            // keep the required counts intact
            if stats.get(name).is_none() {
                stats = stats.with_percent(name.clone(), *value);
            }
        }

        let output = render(&ResultsTable::new(), &stats, "vgg", ReportOptions::default()).unwrap();
        let printed: Vec<String> = output
            .lines()
            .skip_while(|line| !line.starts_with("Summary statistics"))
            .skip(1)
            .take_while(|line| !line.is_empty())
            .map(|line| line.split(':').next().unwrap().trim_end().to_string())
            .collect();

        let expected: Vec<String> = stats
            .percentages()
            .map(|(name, _)| name.to_string())
            .collect();
        prop_assert_eq!(printed, expected);
    }

    #[test]
    fn prop_breed_section_excludes_matching_labels(
        records in prop::collection::vec(record(), 0..20)
    ) {
        let mut results = ResultsTable::new();
        for (i, record) in records.iter().enumerate() {
            results.insert(format!("img_{i:03}.jpg"), record.clone()).unwrap();
        }

        let output = render(
            &results,
            &full_stats(20, 10, 10, 10, 10, 9),
            "vgg",
            ReportOptions::new(false, true),
        )
        .unwrap();

        for (i, record) in records.iter().enumerate() {
            let listed = output.contains(&format!("img_{i:03}.jpg:"));
            let expected = record.pet_is_dog && record.classifier_says_dog && !record.labels_match;
            prop_assert_eq!(listed, expected);
        }
    }
}
