use crate::core::ModelArchitecture;
use crate::io::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "petreport")]
#[command(about = "Summarize a pet image classification run", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON file holding the results and stats tables
    pub input: PathBuf,

    /// Classifier architecture shown in the header
    #[arg(short, long, value_enum, default_value = "vgg")]
    pub arch: ModelArchitecture,

    /// List images whose dog/not-dog classification was wrong
    #[arg(long = "incorrect-dogs")]
    pub incorrect_dogs: bool,

    /// List dogs whose breed was classified wrong
    #[arg(long = "incorrect-breeds")]
    pub incorrect_breeds: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Configuration file (defaults to the nearest .petreport.toml)
    #[arg(short, long, env = "PETREPORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub plain: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}
