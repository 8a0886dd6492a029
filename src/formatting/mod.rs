use colored::*;
use serde::{Deserialize, Serialize};
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto, // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    /// Start from `color` and let the environment override it.
    pub fn from_env_with(color: ColorMode) -> Self {
        let mut config = Self::new(color);

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    pub fn from_env() -> Self {
        Self::from_env_with(ColorMode::Auto)
    }

    /// Plain output, no escape codes
    pub fn plain() -> Self {
        Self::new(ColorMode::Never)
    }
}

pub trait OutputFormatter {
    fn header(&self, text: &str) -> String;
    fn section(&self, text: &str) -> String;
    fn success(&self, text: &str) -> String;
}

pub struct ColoredFormatter {
    use_color: bool,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        let use_color = config.color.should_use_color();
        // Explicit modes override colored's own tty detection
        if config.color != ColorMode::Auto {
            colored::control::set_override(use_color);
        }
        Self { use_color }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn header(&self, text: &str) -> String {
        if self.use_color {
            text.blue().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn section(&self, text: &str) -> String {
        if self.use_color {
            text.yellow().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn success(&self, text: &str) -> String {
        if self.use_color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }
}

fn detect_color_support() -> bool {
    std::io::stdout().is_terminal() && env::var("TERM").map(|t| t != "dumb").unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_formatter_leaves_text_alone() {
        let formatter = ColoredFormatter::new(FormattingConfig::plain());
        assert_eq!(formatter.header("Header"), "Header");
        assert_eq!(formatter.section("Section"), "Section");
        assert_eq!(formatter.success("ok"), "ok");
    }

    #[test]
    fn test_plain_config() {
        assert_eq!(FormattingConfig::plain().color, ColorMode::Never);
        assert!(!ColorMode::Never.should_use_color());
        assert!(ColorMode::Always.should_use_color());
    }
}
