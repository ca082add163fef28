use indexmap::IndexMap;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{InspectError, InspectResult};
use crate::excel::{Table, open_workbook};
use crate::normalize::{forward_fill, project_columns};
use crate::preview::{DEFAULT_PREVIEW_ROWS, PreviewRows, preview, render_text, rows_to_json};

pub const DEFAULT_DATE_COLUMN: &str = "일자";

pub const DEFAULT_EXPECTED_COLUMNS: [&str; 6] = ["일자", "운동명", "부위", "세트", "반복수", "중량"];

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// What to do when a single sheet cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SheetErrorPolicy {
    /// Report the error and stop the run. Output for earlier sheets stays.
    #[default]
    Stop,
    /// Report the error and go on with the next sheet.
    Continue,
}

#[derive(Debug, Clone)]
pub struct InspectConfig {
    pub date_column: String,
    pub expected_columns: Vec<String>,
    pub preview_rows: usize,
    pub format: OutputFormat,
    pub on_sheet_error: SheetErrorPolicy,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            date_column: DEFAULT_DATE_COLUMN.to_string(),
            expected_columns: DEFAULT_EXPECTED_COLUMNS
                .iter()
                .map(|c| c.to_string())
                .collect(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
            format: OutputFormat::default(),
            on_sheet_error: SheetErrorPolicy::default(),
        }
    }
}

/// One sheet's entry in the JSON report: its preview rows, or why it was skipped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SheetReport {
    Preview(PreviewRows),
    Skipped { skipped: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum InspectOutcome {
    Completed {
        sheets: Vec<String>,
        skipped: Vec<String>,
    },
    NotFound(PathBuf),
    Failed(String),
}

/// Inspect the workbook at `path` and write the report to `out`.
///
/// Every failure is turned into a message on `out` and an outcome value;
/// nothing is returned as an error.
pub fn run<W: Write>(path: &Path, config: &InspectConfig, out: &mut W) -> InspectOutcome {
    info!(path = %path.display(), "inspecting workbook");

    let outcome = match inspect(path, config, out) {
        Ok((sheets, skipped)) => InspectOutcome::Completed { sheets, skipped },
        Err(InspectError::NotFound(missing)) => {
            warn!(path = %missing.display(), "workbook not found");
            write_message(
                out,
                &format!(
                    "Error: file not found. Check that the path is correct. ({})",
                    missing.display()
                ),
            );
            InspectOutcome::NotFound(missing)
        }
        Err(err) => {
            warn!(error = %err, "inspection failed");
            write_message(
                out,
                &format!("Unexpected error while inspecting the workbook: {}", err),
            );
            InspectOutcome::Failed(err.to_string())
        }
    };

    if let Err(err) = out.flush() {
        warn!(error = %err, "failed to flush report");
    }

    outcome
}

fn write_message<W: Write>(out: &mut W, message: &str) {
    if let Err(err) = writeln!(out, "{}", message) {
        warn!(error = %err, "failed to write message");
    }
}

/// Fill the date column, then keep only the expected columns.
pub fn normalize_sheet(table: &Table, config: &InspectConfig) -> Table {
    let filled = forward_fill(table, &config.date_column);
    project_columns(&filled, &config.expected_columns)
}

fn inspect<W: Write>(
    path: &Path,
    config: &InspectConfig,
    out: &mut W,
) -> InspectResult<(Vec<String>, Vec<String>)> {
    let mut workbook = open_workbook(path)?;
    let sheet_names = workbook.sheet_names().to_vec();

    if config.format == OutputFormat::Text {
        writeln!(out, "--- Sheets ---")?;
        writeln!(out, "{:?}", sheet_names)?;
    }

    let mut json_report: IndexMap<String, SheetReport> =
        IndexMap::with_capacity(sheet_names.len());
    let mut skipped = Vec::new();

    for sheet_name in &sheet_names {
        let table = match workbook.read_sheet(sheet_name) {
            Ok(table) => table,
            Err(err) if config.on_sheet_error == SheetErrorPolicy::Continue => {
                warn!(sheet = %sheet_name, error = %err, "skipping unreadable sheet");
                match config.format {
                    OutputFormat::Text => {
                        writeln!(out, "\n>>> Sheet: {}", sheet_name)?;
                        writeln!(out, "Skipped: {}", err)?;
                    }
                    OutputFormat::Json => {
                        json_report.insert(
                            sheet_name.clone(),
                            SheetReport::Skipped {
                                skipped: err.to_string(),
                            },
                        );
                    }
                }
                skipped.push(sheet_name.clone());
                continue;
            }
            Err(err) => return Err(err),
        };

        let normalized = normalize_sheet(&table, config);
        let head = preview(&normalized, config.preview_rows);
        debug!(
            sheet = %sheet_name,
            columns = normalized.columns().len(),
            shown = head.len(),
            "previewing sheet"
        );

        match config.format {
            OutputFormat::Text => {
                writeln!(out, "\n>>> Sheet: {}", sheet_name)?;
                writeln!(out, "{}", render_text(normalized.columns(), head))?;
            }
            OutputFormat::Json => {
                json_report.insert(sheet_name.clone(), SheetReport::Preview(rows_to_json(head)));
            }
        }
    }

    if config.format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(&json_report)?)?;
    }

    Ok((sheet_names, skipped))
}
