use serde::{Deserialize, Serialize};

use super::display::{DisplayConfig, MessagesConfig};
use crate::formatting::ColorMode;

/// Settings read from `.petreport.toml`.
///
/// Every section is optional; missing values fall back to the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportConfig {
    /// Color output (auto/always/never)
    #[serde(default)]
    pub color: ColorMode,

    /// Column widths and number formatting
    #[serde(default)]
    pub display: DisplayConfig,

    /// Optional messages printed when a section has nothing to list
    #[serde(default)]
    pub messages: MessagesConfig,
}

impl ReportConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.display.validate()
    }
}
