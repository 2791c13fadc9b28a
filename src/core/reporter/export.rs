//! Export of validation batches.
//!
//! Supports JSON (full report) and CSV (one row per record).

use crate::core::harness::{HarnessConfig, HarnessResult, Summary, TestRecord};
use crate::error::ReportError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use uuid::Uuid;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    /// Pick a format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(ExportFormat::Json),
            "csv" => Some(ExportFormat::Csv),
            _ => None,
        }
    }
}

/// Everything needed to archive or replay a batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub config: HarnessConfig,
    pub summary: Summary,
    pub duration_ms: u64,
    pub records: Vec<TestRecord>,
}

impl BatchReport {
    pub fn new(config: HarnessConfig, result: &HarnessResult) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            config,
            summary: result.summary,
            duration_ms: result.duration_ms,
            records: result.records.clone(),
        }
    }
}

/// Write the report as pretty-printed JSON
pub fn export_json<W: Write>(report: &BatchReport, writer: W) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(writer, report)
        .map_err(|e| ReportError::Serialize(e.to_string()))
}

/// Write one CSV row per record
///
/// CSV columns: Category, Index, Left, Right, Similarity, Outcome
pub fn export_csv<W: Write>(records: &[TestRecord], mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "Category,Index,Left,Right,Similarity,Outcome")?;

    for record in records {
        writeln!(
            writer,
            "{},{},{},{},{:.2},{}",
            record.category,
            record.index,
            csv_field(&record.left),
            csv_field(&record.right),
            record.similarity,
            record.outcome
        )?;
    }

    Ok(())
}

/// Write the report to `path`, choosing the format from its extension
pub fn export_to_path(report: &BatchReport, path: &Path) -> Result<(), ReportError> {
    let format = ExportFormat::from_path(path).ok_or_else(|| ReportError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let io_error = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);

    match format {
        ExportFormat::Json => export_json(report, &mut writer)?,
        ExportFormat::Csv => export_csv(&report.records, &mut writer).map_err(io_error)?,
    }
    writer.flush().map_err(io_error)?;

    tracing::debug!(path = %path.display(), records = report.records.len(), "exported report");
    Ok(())
}

fn csv_field(value: &str) -> String {
    if value.contains(&[',', '"', '\n'][..]) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
