use crate::config::ReportConfig;
use crate::errors::Result;
use crate::formatting::FormattingConfig;
use crate::io::writers::{JsonWriter, TerminalWriter};
use crate::report::ClassificationReport;
use clap::ValueEnum;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width text summary
    #[default]
    Terminal,
    /// Structured JSON document
    Json,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &ClassificationReport) -> Result<()>;
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    formatting: FormattingConfig,
    config: &ReportConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting, config)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
    }
}
