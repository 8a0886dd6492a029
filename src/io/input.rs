//! Loading a classification run written by the pipeline.
//!
//! The input is a JSON document with two objects:
//!
//! ```json
//! {
//!   "results": { "Beagle_01141.jpg": ["beagle", "beagle", 1, 1, 1] },
//!   "stats": { "n_images": 1, "pct_match": 100.0 }
//! }
//! ```
//!
//! Key order of both objects is preserved.

use crate::core::{ClassificationRun, OrderedEntries, ResultsTable, StatsTable};
use crate::errors::{ReportError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRun {
    #[serde(default)]
    results: OrderedEntries<Value>,
    stats: StatsTable,
}

pub fn parse_run(contents: &str) -> Result<ClassificationRun> {
    let raw: RawRun =
        serde_json::from_str(contents).map_err(|e| ReportError::Input(e.to_string()))?;
    let results = ResultsTable::from_raw(raw.results.into_inner())?;
    Ok(ClassificationRun {
        results,
        stats: raw.stats,
    })
}

pub fn load_run(path: &Path) -> Result<ClassificationRun> {
    let contents = fs::read_to_string(path)?;
    let run = parse_run(&contents)?;
    log::debug!(
        "Loaded {} records and {} statistics from {}",
        run.results.len(),
        run.stats.len(),
        path.display()
    );
    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StatValue;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_run() {
        let run = parse_run(indoc! {r#"
            {
              "results": {
                "Dalmatian_04017.jpg": ["dalmatian", "dalmatian, coach dog", 1, 1, 1],
                "cat_02.jpg": ["cat", "tiger cat", true, false, false]
              },
              "stats": { "n_images": 2, "pct_match": 100.0 }
            }
        "#})
        .unwrap();

        assert_eq!(run.results.len(), 2);
        let dalmatian = run.results.get("Dalmatian_04017.jpg").unwrap();
        assert_eq!(dalmatian.classifier_label, "dalmatian, coach dog");
        assert_eq!(run.stats.get("n_images"), Some(StatValue::Count(2)));
    }

    #[test]
    fn test_parse_run_without_results() {
        let run = parse_run(r#"{"stats": {"n_images": 0}}"#).unwrap();
        assert!(run.results.is_empty());
    }

    #[test]
    fn test_parse_run_malformed_record() {
        let err =
            parse_run(r#"{"results": {"x.jpg": ["a", "b", 1]}, "stats": {}}"#).unwrap_err();
        assert!(
            matches!(err, ReportError::MalformedRecord { ref filename, .. } if filename == "x.jpg")
        );
    }

    #[test]
    fn test_parse_run_non_array_records() {
        for record in [r#""beagle""#, r#"{"pet_label": "beagle"}"#] {
            let contents = format!(r#"{{"results": {{"a.jpg": {record}}}, "stats": {{}}}}"#);
            match parse_run(&contents).unwrap_err() {
                ReportError::MalformedRecord { filename, .. } => assert_eq!(filename, "a.jpg"),
                other => panic!("unexpected error for {record}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_run_duplicate_filename() {
        let err = parse_run(
            r#"{"results": {"x.jpg": ["a", "a", 1, 0, 0], "x.jpg": ["b", "b", 1, 0, 0]}, "stats": {}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate filename"));
    }

    #[test]
    fn test_parse_run_invalid_json() {
        let err = parse_run("{ not json").unwrap_err();
        assert!(matches!(err, ReportError::Input(_)));
    }

    #[test]
    fn test_parse_run_requires_stats() {
        assert!(matches!(
            parse_run(r#"{"results": {}}"#),
            Err(ReportError::Input(_))
        ));
    }

    #[test]
    fn test_load_run_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_run(&temp_dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ReportError::Io(_)));
    }
}
