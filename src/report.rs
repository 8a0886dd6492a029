//! Building the classification summary.
//!
//! [`ClassificationReport::build`] turns the results and statistics tables
//! into a complete description of what gets printed. It does no I/O, so every
//! statistic lookup happens (and can fail) before a single line is written.
//! Rendering is left to an [`OutputWriter`].

use crate::config::ReportConfig;
use crate::core::stats::{
    N_CORRECT_BREED, N_CORRECT_DOGS, N_CORRECT_NOTDOGS, N_DOGS_IMG, N_IMAGES, N_NOTDOGS_IMG,
};
use crate::core::{ResultRecord, ResultsTable, StatsTable};
use crate::errors::Result;
use crate::formatting::FormattingConfig;
use crate::io::output::OutputWriter;
use crate::io::writers::TerminalWriter;
use serde::Serialize;

/// Which optional misclassification listings to include.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub show_incorrect_dogs: bool,
    pub show_incorrect_breeds: bool,
}

impl ReportOptions {
    pub fn new(show_incorrect_dogs: bool, show_incorrect_breeds: bool) -> Self {
        Self {
            show_incorrect_dogs,
            show_incorrect_breeds,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageCounts {
    pub n_images: u64,
    pub n_dogs_img: u64,
    pub n_notdogs_img: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PercentageRow {
    pub name: String,
    pub value: f64,
}

/// A record listed in one of the misclassification sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Misclassification {
    pub filename: String,
    pub pet_label: String,
    pub classifier_label: String,
}

impl Misclassification {
    fn from_record(filename: &str, record: &ResultRecord) -> Self {
        Self {
            filename: filename.to_string(),
            pet_label: record.pet_label.clone(),
            classifier_label: record.classifier_label.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationReport {
    /// Architecture name as shown in the header (uppercased).
    pub model: String,
    pub counts: ImageCounts,
    pub percentages: Vec<PercentageRow>,
    /// Correct dog plus not-dog classifications account for every image.
    pub dog_assignments_correct: bool,
    /// Every correctly identified dog also got the right breed.
    pub breed_assignments_correct: bool,
    /// `None` when the section is not printed.
    pub incorrect_dogs: Option<Vec<Misclassification>>,
    pub incorrect_breeds: Option<Vec<Misclassification>>,
}

impl ClassificationReport {
    pub fn build(
        results: &ResultsTable,
        stats: &StatsTable,
        model_name: &str,
        options: &ReportOptions,
    ) -> Result<Self> {
        let n_images = stats.count(N_IMAGES)?;
        let n_dogs_img = stats.count(N_DOGS_IMG)?;
        let n_notdogs_img = stats.count(N_NOTDOGS_IMG)?;
        let n_correct_dogs = stats.count(N_CORRECT_DOGS)?;
        let n_correct_notdogs = stats.count(N_CORRECT_NOTDOGS)?;
        let n_correct_breed = stats.count(N_CORRECT_BREED)?;

        let dog_assignments_correct =
            n_correct_dogs.checked_add(n_correct_notdogs) == Some(n_images);
        let breed_assignments_correct = n_correct_dogs == n_correct_breed;

        let incorrect_dogs = (options.show_incorrect_dogs && !dog_assignments_correct)
            .then(|| collect_matching(results, ResultRecord::is_dog_mismatch));
        let incorrect_breeds = (options.show_incorrect_breeds && !breed_assignments_correct)
            .then(|| collect_matching(results, ResultRecord::is_breed_mismatch));

        log::debug!(
            "Built {} report: {} records, {} percentages, {} dog / {} breed mismatches",
            model_name,
            results.len(),
            stats.percentages().count(),
            incorrect_dogs.as_ref().map_or(0, Vec::len),
            incorrect_breeds.as_ref().map_or(0, Vec::len),
        );

        Ok(Self {
            model: model_name.to_uppercase(),
            counts: ImageCounts {
                n_images,
                n_dogs_img,
                n_notdogs_img,
            },
            percentages: stats
                .percentages()
                .map(|(name, value)| PercentageRow {
                    name: name.to_string(),
                    value,
                })
                .collect(),
            dog_assignments_correct,
            breed_assignments_correct,
            incorrect_dogs,
            incorrect_breeds,
        })
    }
}

fn collect_matching(
    results: &ResultsTable,
    predicate: fn(&ResultRecord) -> bool,
) -> Vec<Misclassification> {
    results
        .iter()
        .filter(|(_, record)| predicate(record))
        .map(|(filename, record)| Misclassification::from_record(filename, record))
        .collect()
}

/// Build the report and hand it to `writer`.
pub fn report_to(
    writer: &mut dyn OutputWriter,
    results: &ResultsTable,
    stats: &StatsTable,
    model_name: &str,
    options: &ReportOptions,
) -> Result<()> {
    let report = ClassificationReport::build(results, stats, model_name, options)?;
    writer.write_report(&report)
}

/// Print the summary for a classification run to standard output.
///
/// Fails with `MissingStatistic` before printing anything if one of the
/// required `n_*` counts is absent.
pub fn report(
    results: &ResultsTable,
    stats: &StatsTable,
    model_name: &str,
    show_incorrect_dogs: bool,
    show_incorrect_breeds: bool,
) -> Result<()> {
    let config = ReportConfig::default();
    let mut writer = TerminalWriter::new(
        std::io::stdout().lock(),
        FormattingConfig::from_env(),
        &config,
    );
    report_to(
        &mut writer,
        results,
        stats,
        model_name,
        &ReportOptions::new(show_incorrect_dogs, show_incorrect_breeds),
    )
}
