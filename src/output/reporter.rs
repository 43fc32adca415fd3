use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use super::render::{render, Style};
use super::view::ResultView;
use super::writer::{write_console, write_file_atomically, Destination};
use super::OutputFormat;
use crate::error::PipelineError;

/// Where and how results get reported.
///
/// `format` is an already-parsed [`OutputFormat`], so an unknown format name
/// is rejected when it is parsed (by [`ReportOptions::new`] or the CLI's
/// argument parser), before any loading or inference starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub format: OutputFormat,
    /// Results go to the console when unset.
    pub output: Option<PathBuf>,
}

impl ReportOptions {
    pub fn new(format: &str, output: Option<PathBuf>) -> Result<Self, PipelineError> {
        Ok(Self {
            format: format.parse()?,
            output,
        })
    }

    pub fn destination(&self) -> Destination {
        match &self.output {
            Some(path) => Destination::File(path.clone()),
            None => Destination::Console,
        }
    }
}

/// What a finished report wrote, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub rows: usize,
    pub format: OutputFormat,
    pub destination: Destination,
}

/// Render the view and write it to the configured destination exactly once.
///
/// Console output uses the pretty style so it stays readable; files get the
/// compact one.
pub fn report<W: Write>(
    view: &ResultView<'_>,
    options: &ReportOptions,
    console: &mut W,
) -> Result<ReportSummary, PipelineError> {
    let destination = options.destination();
    info!(
        rows = view.len(),
        format = %options.format,
        destination = %destination,
        "Writing results..."
    );

    let style = match destination {
        Destination::Console => Style::Pretty,
        Destination::File(_) => Style::Compact,
    };

    let write_failure = |source| PipelineError::WriteFailure {
        destination: destination.to_string(),
        source,
    };

    let bytes = render(view, options.format, style).map_err(write_failure)?;

    let written = match &destination {
        Destination::Console => write_console(console, &bytes),
        Destination::File(path) => write_file_atomically(path, &bytes),
    };
    written.map_err(write_failure)?;

    Ok(ReportSummary {
        rows: view.len(),
        format: options.format,
        destination,
    })
}
