use serde::{Deserialize, Serialize};

const MAX_PRECISION: usize = 10;

/// Layout of the terminal report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Width of the label column for counts and percentages (default: 20)
    #[serde(default = "default_count_label_width")]
    pub count_label_width: usize,

    /// Digits after the decimal point for percentages (default: 1)
    #[serde(default = "default_percent_precision")]
    pub percent_precision: usize,

    /// Right-aligned width of the pet label in misclassification rows
    #[serde(default = "default_pet_label_width")]
    pub pet_label_width: usize,

    /// Right-aligned width of the classifier label in misclassification rows
    #[serde(default = "default_classifier_label_width")]
    pub classifier_label_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            count_label_width: default_count_label_width(),
            percent_precision: default_percent_precision(),
            pet_label_width: default_pet_label_width(),
            classifier_label_width: default_classifier_label_width(),
        }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.percent_precision > MAX_PRECISION {
            return Err(format!(
                "percent_precision must be at most {MAX_PRECISION}, got {}",
                self.percent_precision
            ));
        }
        Ok(())
    }
}

fn default_count_label_width() -> usize {
    20
}

fn default_percent_precision() -> usize {
    1
}

fn default_pet_label_width() -> usize {
    26
}

fn default_classifier_label_width() -> usize {
    30
}

/// Messages for sections whose counts show no misclassification.
/// Unset messages print nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessagesConfig {
    #[serde(default)]
    pub dog_assignments_ok: Option<String>,

    #[serde(default)]
    pub breed_assignments_ok: Option<String>,
}
