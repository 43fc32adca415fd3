// Renderers for each output format.
//
// Every format carries the same two fields per row, in the same order:
// `full_text`, then `topic`. Output is a pure function of the view and the
// style, so the same inputs always produce the same bytes.

use std::io;

use serde_json::Value;

use super::view::ResultView;
use super::OutputFormat;
use crate::topics::TopicResult;

const COLUMNS: [&str; 2] = ["full_text", "topic"];

/// How much room the renderer may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Meant to be read in a terminal.
    Pretty,
    /// Meant to be stored.
    Compact,
}

/// Render the whole view into a buffer.
pub fn render(view: &ResultView<'_>, format: OutputFormat, style: Style) -> io::Result<Vec<u8>> {
    match format {
        OutputFormat::Json => render_json(view, style),
        OutputFormat::JsonLines => render_json_lines(view),
        OutputFormat::Csv => render_csv(view),
        OutputFormat::Markdown => Ok(render_markdown(view).into_bytes()),
    }
}

fn render_json(view: &ResultView<'_>, style: Style) -> io::Result<Vec<u8>> {
    let mut buf = match style {
        Style::Pretty => serde_json::to_vec_pretty(view)?,
        Style::Compact => serde_json::to_vec(view)?,
    };
    buf.push(b'\n');
    Ok(buf)
}

fn render_json_lines(view: &ResultView<'_>) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    for row in view.rows() {
        serde_json::to_writer(&mut buf, row)?;
        buf.push(b'\n');
    }
    Ok(buf)
}

fn render_csv(view: &ResultView<'_>) -> io::Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(COLUMNS)?;
    for row in view.rows() {
        writer.write_record([row.full_text, topic_cell(row.topic).as_str()])?;
    }
    writer.into_inner().map_err(|e| io::Error::other(e.to_string()))
}

fn render_markdown(view: &ResultView<'_>) -> String {
    let mut out = format!("| {} | {} |\n| --- | --- |\n", COLUMNS[0], COLUMNS[1]);
    for row in view.rows() {
        out.push_str(&format!(
            "| {} | {} |\n",
            markdown_cell(row.full_text),
            markdown_cell(&topic_cell(row.topic))
        ));
    }
    out
}

/// Flatten a topic result into a single text cell: strings as-is, null as
/// empty, anything structured as compact JSON.
pub fn topic_cell(topic: &TopicResult) -> String {
    match topic {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn markdown_cell(text: &str) -> String {
    text.replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace(['\n', '\r'], "<br>")
}
