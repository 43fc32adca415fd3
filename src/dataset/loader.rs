use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Context, Result};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Schema};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::{Map, Value as JsonValue};

use super::model::{Dataset, Record};
use super::{CLEANED_TEXT_COLUMN, RAW_TEXT_COLUMN};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the dataset from a file, dispatching on extension.
///
/// Supported formats:
/// * `.json`            – records array, `df.to_json(orient="records")`
/// * `.jsonl` / `.ndjson` – one record object per line
/// * `.csv`             – header row with column names
/// * `.parquet` / `.pq` – string columns written by pandas or polars
///
/// Columns other than `full_text` and `full_text_cleaned` are ignored.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => load_json(path),
        "jsonl" | "ndjson" => load_json_lines(path),
        "csv" => load_csv(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported dataset file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// JSON loaders
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let rows = root.as_array().context("Expected top-level JSON array")?;

    let records = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let obj = row
                .as_object()
                .with_context(|| format!("Row {i} is not a JSON object"))?;
            json_record(obj, i)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Dataset::from_records(records))
}

fn load_json_lines(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path).context("opening JSON lines file")?;
    let mut records = Vec::new();

    for (line_no, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("reading line {}", line_no + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        let value: JsonValue = serde_json::from_str(&line)
            .with_context(|| format!("parsing line {}", line_no + 1))?;
        let obj = value
            .as_object()
            .with_context(|| format!("Line {} is not a JSON object", line_no + 1))?;
        records.push(json_record(obj, records.len())?);
    }

    Ok(Dataset::from_records(records))
}

fn json_record(obj: &Map<String, JsonValue>, row: usize) -> Result<Record> {
    Ok(Record {
        full_text: json_text(obj, RAW_TEXT_COLUMN, row)?,
        full_text_cleaned: json_text(obj, CLEANED_TEXT_COLUMN, row)?,
    })
}

fn json_text(obj: &Map<String, JsonValue>, col: &str, row: usize) -> Result<String> {
    match obj.get(col) {
        Some(JsonValue::String(s)) => Ok(s.clone()),
        Some(JsonValue::Null) => bail!("Row {row}: '{col}' is null"),
        Some(other) => bail!("Row {row}: '{col}' is not a string (got {other})"),
        None => bail!("Row {row}: missing '{col}' column"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers = reader.headers().context("reading CSV headers")?.clone();

    let raw_idx = headers
        .iter()
        .position(|h| h == RAW_TEXT_COLUMN)
        .with_context(|| format!("CSV missing '{RAW_TEXT_COLUMN}' column"))?;
    let cleaned_idx = headers
        .iter()
        .position(|h| h == CLEANED_TEXT_COLUMN)
        .with_context(|| format!("CSV missing '{CLEANED_TEXT_COLUMN}' column"))?;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        let cell = |idx: usize, col: &str| {
            row.get(idx)
                .map(str::to_string)
                .with_context(|| format!("CSV row {row_no}: missing '{col}' value"))
        };
        records.push(Record {
            full_text: cell(raw_idx, RAW_TEXT_COLUMN)?,
            full_text_cleaned: cell(cleaned_idx, CLEANED_TEXT_COLUMN)?,
        });
    }

    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file whose text columns are `Utf8` or `LargeUtf8`.
///
/// The schema is checked before any batch is read, so a zero-row file with
/// the wrong columns fails the same way a populated one does.
fn load_parquet(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;

    let schema = builder.schema();
    let raw_idx = text_column_index(schema, RAW_TEXT_COLUMN)?;
    let cleaned_idx = text_column_index(schema, CLEANED_TEXT_COLUMN)?;

    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let raw_col = batch.column(raw_idx);
        let cleaned_col = batch.column(cleaned_idx);

        for row in 0..batch.num_rows() {
            let global_row = records.len();
            records.push(Record {
                full_text: extract_string(raw_col, row)
                    .with_context(|| format!("Row {global_row}: failed to read '{RAW_TEXT_COLUMN}'"))?,
                full_text_cleaned: extract_string(cleaned_col, row).with_context(|| {
                    format!("Row {global_row}: failed to read '{CLEANED_TEXT_COLUMN}'")
                })?,
            });
        }
    }

    Ok(Dataset::from_records(records))
}

/// Position of a required text column in the file schema.
fn text_column_index(schema: &Schema, name: &str) -> Result<usize> {
    let idx = schema
        .index_of(name)
        .map_err(|_| anyhow::anyhow!("Parquet file missing '{name}' column"))?;
    match schema.field(idx).data_type() {
        DataType::Utf8 | DataType::LargeUtf8 => Ok(idx),
        other => bail!("Parquet column '{name}' is {other:?}, expected a string column"),
    }
}

fn extract_string(col: &ArrayRef, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value in text column");
    }
    match col.data_type() {
        DataType::Utf8 => Ok(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).to_string()),
        other => bail!("Expected a string column, got {other:?}"),
    }
}
