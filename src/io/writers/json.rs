use crate::errors::Result;
use crate::io::output::OutputWriter;
use crate::report::ClassificationReport;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &ClassificationReport) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ImageCounts, Misclassification, PercentageRow};
    use serde_json::Value;

    fn sample_report() -> ClassificationReport {
        ClassificationReport {
            model: "VGG".to_string(),
            counts: ImageCounts {
                n_images: 2,
                n_dogs_img: 1,
                n_notdogs_img: 1,
            },
            percentages: vec![PercentageRow {
                name: "pct_match".to_string(),
                value: 50.0,
            }],
            dog_assignments_correct: false,
            breed_assignments_correct: true,
            incorrect_dogs: Some(vec![Misclassification {
                filename: "Collie_03.jpg".to_string(),
                pet_label: "collie".to_string(),
                classifier_label: "fox".to_string(),
            }]),
            incorrect_breeds: None,
        }
    }

    #[test]
    fn test_writes_report_as_json() {
        let mut writer = JsonWriter::new(Vec::new());
        writer.write_report(&sample_report()).unwrap();

        let json: Value = serde_json::from_slice(&writer.into_inner()).unwrap();
        assert_eq!(json["model"], "VGG");
        assert_eq!(json["counts"]["n_images"], 2);
        assert_eq!(json["percentages"][0]["name"], "pct_match");
        assert_eq!(json["incorrect_dogs"][0]["classifier_label"], "fox");
        assert!(json["incorrect_breeds"].is_null());
    }
}
