use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use repotopics::config::{Config, DEFAULT_LOG_FILTER};
use repotopics::dataset::FileDatasetSource;
use repotopics::output::{Destination, OutputFormat, ReportOptions};
use repotopics::pipeline;
use repotopics::topics::FileModelSource;
use repotopics::PipelineError;

/// Run topic predictions for the Git track dataset.
///
/// Reads the dataset and the fitted topic model from their fixed locations,
/// predicts a topic for every repository, and writes the results.
#[derive(Parser)]
#[command(name = "repotopics", version, about)]
struct Cli {
    /// Output format of the results (json, jsonl, csv, markdown).
    /// Results are returned in JSON by default.
    #[arg(short, long, default_value = "json", value_parser = parse_format)]
    format: OutputFormat,

    /// File where the results will be saved. If omitted, results are written
    /// to the console instead.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn parse_format(value: &str) -> Result<OutputFormat, PipelineError> {
    value.parse()
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Parsing rejects an unknown --format before anything is loaded
    let cli = Cli::parse();

    // Logs go to stderr so console results on stdout stay clean
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::with_default(subscriber, || run(cli))
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load();
    let options = ReportOptions {
        format: cli.format,
        output: cli.output,
    };

    let datasets = FileDatasetSource::new(&config.dataset_path);
    let models = FileModelSource::new(&config.model_path);

    let mut stdout = std::io::stdout().lock();
    let summary = pipeline::run(&datasets, &models, &options, &mut stdout)?;

    if let Destination::File(path) = &summary.destination {
        eprintln!(
            "{} {} results ({}) to {}",
            "Wrote".green().bold(),
            summary.rows,
            summary.format,
            path.display().to_string().bold()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use repotopics::output::FORMAT_NAMES;

    #[test]
    fn test_defaults_to_json_on_console() {
        let cli = Cli::try_parse_from(["repotopics"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from(["repotopics", "-f", "csv", "-o", "out.csv"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Csv);
        assert_eq!(cli.output, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn test_unknown_format_rejected_at_parse_time() {
        let err = match Cli::try_parse_from(["repotopics", "--format", "xml"]) {
            Ok(_) => panic!("xml should not parse"),
            Err(e) => e,
        };
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains(FORMAT_NAMES));
    }
}
