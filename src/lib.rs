// Export modules for library usage
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod report;

// Re-export commonly used types
pub use crate::core::{
    ClassificationRun, ModelArchitecture, ResultRecord, ResultsTable, StatValue, StatsTable,
};

pub use crate::errors::ReportError;

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::report::{
    report, report_to, ClassificationReport, Misclassification, ReportOptions,
};
