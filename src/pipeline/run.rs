// Full pipeline run: dataset -> model -> inference -> report.
//
// Strictly sequential and synchronous. Report options arrive already
// validated, so an unknown format has failed before anything here runs.

use std::io::Write;

use tracing::info;

use crate::dataset::DatasetSource;
use crate::error::PipelineError;
use crate::output::{report, ReportOptions, ReportSummary, ResultView};
use crate::topics::ModelSource;

use super::inference::infer;

/// Run the pipeline once. `console` receives the results when no output file
/// is configured.
pub fn run<W: Write>(
    datasets: &dyn DatasetSource,
    models: &dyn ModelSource,
    options: &ReportOptions,
    console: &mut W,
) -> Result<ReportSummary, PipelineError> {
    let dataset = datasets.load()?;
    let model = models.load()?;

    let topics = infer(model.as_ref(), &dataset)?;
    let view = ResultView::pair(&dataset, &topics)?;

    let summary = report(&view, options, console)?;
    info!(
        rows = summary.rows,
        destination = %summary.destination,
        "Run complete"
    );
    Ok(summary)
}
