#![allow(dead_code)]

use petreport::config::ReportConfig;
use petreport::formatting::FormattingConfig;
use petreport::io::writers::TerminalWriter;
use petreport::{report_to, ReportError, ReportOptions, ResultRecord, ResultsTable, StatsTable};

/// Render a report as plain text.
pub fn render(
    results: &ResultsTable,
    stats: &StatsTable,
    model: &str,
    options: ReportOptions,
) -> Result<String, ReportError> {
    let config = ReportConfig::default();
    let mut writer = TerminalWriter::new(Vec::new(), FormattingConfig::plain(), &config);
    report_to(&mut writer, results, stats, model, &options)?;
    Ok(String::from_utf8(writer.into_inner()).unwrap())
}

/// Stats table with every required count.
pub fn full_stats(
    n_images: u64,
    n_dogs_img: u64,
    n_notdogs_img: u64,
    n_correct_dogs: u64,
    n_correct_notdogs: u64,
    n_correct_breed: u64,
) -> StatsTable {
    StatsTable::new()
        .with_count("n_images", n_images)
        .with_count("n_dogs_img", n_dogs_img)
        .with_count("n_notdogs_img", n_notdogs_img)
        .with_count("n_correct_dogs", n_correct_dogs)
        .with_count("n_correct_notdogs", n_correct_notdogs)
        .with_count("n_correct_breed", n_correct_breed)
}

pub fn table(records: Vec<(&str, ResultRecord)>) -> ResultsTable {
    let mut table = ResultsTable::new();
    for (filename, record) in records {
        table.insert(filename, record).unwrap();
    }
    table
}
