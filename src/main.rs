use anyhow::{Context, Result};
use clap::Parser;
use petreport::cli::Cli;
use petreport::config::{self, ReportConfig};
use petreport::formatting::FormattingConfig;
use petreport::io::{create_writer, load_run};
use petreport::report::{report_to, ReportOptions};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let config = load_report_config(&cli)?;
    let formatting = create_formatting_config(cli.plain, &config);

    let run = load_run(&cli.input).with_context(|| {
        format!(
            "Failed to load classification run from {}",
            cli.input.display()
        )
    })?;

    let stdout = std::io::stdout();
    let mut writer = create_writer(cli.format, stdout.lock(), formatting, &config);
    report_to(
        writer.as_mut(),
        &run.results,
        &run.stats,
        cli.arch.as_str(),
        &ReportOptions::new(cli.incorrect_dogs, cli.incorrect_breeds),
    )
    .context("Failed to write report")?;

    Ok(())
}

// RUST_LOG wins over -v when set
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn load_report_config(cli: &Cli) -> Result<ReportConfig> {
    match &cli.config {
        Some(path) => config::load_config_from(path).map_err(anyhow::Error::msg),
        None => Ok(config::load_config()),
    }
}

// Pure function to create formatting configuration
fn create_formatting_config(plain: bool, config: &ReportConfig) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env_with(config.color)
    }
}
