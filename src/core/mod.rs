pub mod ordered;
pub mod records;
pub mod stats;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use ordered::OrderedEntries;
pub use records::{ResultRecord, ResultsTable};
pub use stats::{StatValue, StatsTable};

/// Classifier architectures the pipeline knows how to run.
///
/// The reporter only prints the name, so library callers may pass any
/// string; this enum exists for the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModelArchitecture {
    Resnet,
    Alexnet,
    Vgg,
}

impl ModelArchitecture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resnet => "resnet",
            Self::Alexnet => "alexnet",
            Self::Vgg => "vgg",
        }
    }
}

impl fmt::Display for ModelArchitecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classification run as handed over by the pipeline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassificationRun {
    pub results: ResultsTable,
    pub stats: StatsTable,
}
