use crate::config::{DisplayConfig, MessagesConfig, ReportConfig};
use crate::errors::Result;
use crate::formatting::{ColoredFormatter, FormattingConfig, OutputFormatter};
use crate::io::output::OutputWriter;
use crate::report::{ClassificationReport, Misclassification};
use std::io::Write;

const DOG_SECTION_TITLE: &str = "INCORRECT Dog/NOT Dog Assignments:";
const BREED_SECTION_TITLE: &str = "INCORRECT Dog Breed Assignment:";

type SectionPrinter<W> = fn(&mut TerminalWriter<W>, &ClassificationReport) -> Result<()>;

/// Fixed-width text rendering of a [`ClassificationReport`].
pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: ColoredFormatter,
    display: DisplayConfig,
    messages: MessagesConfig,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig, config: &ReportConfig) -> Self {
        Self {
            writer,
            formatter: ColoredFormatter::new(formatting),
            display: config.display.clone(),
            messages: config.messages.clone(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn print_header(&mut self, report: &ClassificationReport) -> Result<()> {
        let title = format!(
            "*** Results Summary for CNN Model Architecture {} ***",
            report.model
        );
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", self.formatter.header(&title))?;
        Ok(())
    }

    fn print_counts(&mut self, report: &ClassificationReport) -> Result<()> {
        let counts = [
            ("N Images", report.counts.n_images),
            ("N Dog Images", report.counts.n_dogs_img),
            ("N Not-Dog Images", report.counts.n_notdogs_img),
        ];
        let width = self.display.count_label_width;
        for (label, value) in counts {
            writeln!(self.writer, "{label:<width$}: {value:>3}")?;
        }
        Ok(())
    }

    fn print_percentages(&mut self, report: &ClassificationReport) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{}",
            self.formatter
                .section("Summary statistics (percentages) on Model Run")
        )?;

        let width = self.display.count_label_width;
        let precision = self.display.percent_precision;
        // room for "100." plus the fraction digits
        let value_width = 4 + precision;
        for row in &report.percentages {
            writeln!(
                self.writer,
                "{:<width$}: {:>value_width$.precision$}",
                row.name, row.value
            )?;
        }
        Ok(())
    }

    fn print_incorrect_dogs(&mut self, report: &ClassificationReport) -> Result<()> {
        match &report.incorrect_dogs {
            Some(rows) => self.print_misclassifications(DOG_SECTION_TITLE, rows),
            None if report.dog_assignments_correct => {
                let message = self.messages.dog_assignments_ok.clone();
                self.print_message(message.as_deref())
            }
            None => Ok(()),
        }
    }

    fn print_incorrect_breeds(&mut self, report: &ClassificationReport) -> Result<()> {
        match &report.incorrect_breeds {
            Some(rows) => self.print_misclassifications(BREED_SECTION_TITLE, rows),
            None if report.breed_assignments_correct => {
                let message = self.messages.breed_assignments_ok.clone();
                self.print_message(message.as_deref())
            }
            None => Ok(()),
        }
    }

    fn print_misclassifications(&mut self, title: &str, rows: &[Misclassification]) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", self.formatter.section(title))?;

        let pet_width = self.display.pet_label_width;
        let classifier_width = self.display.classifier_label_width;
        for row in rows {
            writeln!(
                self.writer,
                "{}:  Real: {:>pet_width$}   Classifier: {:>classifier_width$}",
                row.filename, row.pet_label, row.classifier_label
            )?;
        }
        Ok(())
    }

    fn print_message(&mut self, message: Option<&str>) -> Result<()> {
        if let Some(message) = message {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", self.formatter.success(message))?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &ClassificationReport) -> Result<()> {
        let printers: [SectionPrinter<W>; 5] = [
            Self::print_header,
            Self::print_counts,
            Self::print_percentages,
            Self::print_incorrect_dogs,
            Self::print_incorrect_breeds,
        ];

        for printer in printers {
            printer(self, report)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
