// Result reporting: pairing rows with topics and writing them out.
//
// Rendering is done entirely in memory first; only a fully rendered buffer
// ever reaches the destination.

pub mod render;
pub mod reporter;
pub mod view;
pub mod writer;

use std::fmt;
use std::str::FromStr;

use crate::error::PipelineError;

pub use reporter::{report, ReportOptions, ReportSummary};
pub use view::{ResultRow, ResultView};
pub use writer::Destination;

/// Accepted `--format` values, for help and error text.
pub const FORMAT_NAMES: &str = "json, jsonl, csv, markdown";

/// The closed set of output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// A JSON array of records. Pretty-printed on the console.
    #[default]
    Json,
    /// One compact JSON record per line.
    JsonLines,
    Csv,
    /// A pipe table.
    Markdown,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::JsonLines => "jsonl",
            OutputFormat::Csv => "csv",
            OutputFormat::Markdown => "markdown",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "jsonl" => Ok(OutputFormat::JsonLines),
            "csv" => Ok(OutputFormat::Csv),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(PipelineError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_formats() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("JSONL".parse::<OutputFormat>().unwrap(), OutputFormat::JsonLines);
        assert_eq!(" csv ".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
    }

    #[test]
    fn test_parse_unknown_format() {
        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, PipelineError::UnsupportedFormat(ref f) if f == "xml"));
        assert!(err.to_string().contains(FORMAT_NAMES));
    }

    #[test]
    fn test_every_format_name_parses_back() {
        for format in [
            OutputFormat::Json,
            OutputFormat::JsonLines,
            OutputFormat::Csv,
            OutputFormat::Markdown,
        ] {
            assert_eq!(format.name().parse::<OutputFormat>().unwrap(), format);
            assert!(FORMAT_NAMES.contains(format.name()));
        }
    }
}
