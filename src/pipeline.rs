use anyhow::{Context, Result};
use std::{fs, path::PathBuf};
use tracing::{debug, info, warn};

use crate::clean::{clean_row, RowOutcome};

/// Configuration for one cleaning run. Injected rather than read from
/// process-wide state so tests can point at temporary locations.
#[derive(Debug, Clone)]
pub struct CleanConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Header written as line zero of the output, joined by `separator`.
    pub column_names: Vec<String>,
    pub separator: char,
    pub expected_columns: usize,
}

impl CleanConfig {
    /// Layout of the vaccination coverage export: four `;`-separated columns.
    pub fn vaxdata(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        CleanConfig {
            input_path: input_path.into(),
            output_path: output_path.into(),
            column_names: ["vaccine", "region", "year", "coverage"]
                .map(String::from)
                .to_vec(),
            separator: ';',
            expected_columns: 4,
        }
    }
}

/// Row totals for a completed run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanSummary {
    pub rows_written: u64,
    pub rows_skipped: u64,
    pub rows_malformed: u64,
}

/// Read the input file, clean every data row, and write the result to the
/// configured output path.
///
/// Line zero of the input is replaced by the configured header and never
/// passed to the cleaner. Malformed rows are reported via `warn!` and
/// dropped; rows without a coverage value are dropped silently. Only I/O
/// failures are fatal.
pub fn run(cfg: &CleanConfig) -> Result<CleanSummary> {
    let raw = fs::read_to_string(&cfg.input_path)
        .with_context(|| format!("failed to read input file {}", cfg.input_path.display()))?;
    // a BOM at the very start of the stream is encoding noise, not content
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(&raw);

    let sep = cfg.separator.to_string();
    let mut cleaned_lines: Vec<String> = Vec::new();
    let mut summary = CleanSummary::default();

    for (line_number, line) in raw.lines().enumerate() {
        if line_number == 0 {
            cleaned_lines.push(cfg.column_names.join(&sep));
            continue;
        }

        match clean_row(line, cfg.separator, cfg.expected_columns) {
            Ok(RowOutcome::Cleaned(cols)) => {
                cleaned_lines.push(cols.join(&sep));
                summary.rows_written += 1;
            }
            Ok(RowOutcome::Skip) => {
                debug!(line_number, "row has no coverage value, skipping");
                summary.rows_skipped += 1;
            }
            Err(err) => {
                warn!(line_number, %err, "dropping malformed row");
                summary.rows_malformed += 1;
            }
        }
    }

    if let Some(parent) = cfg.output_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory {}", parent.display()))?;
    }

    // `\n` line endings explicitly, regardless of platform
    let mut out = String::with_capacity(
        cleaned_lines.iter().map(|l| l.len() + 1).sum(),
    );
    for line in &cleaned_lines {
        out.push_str(line);
        out.push('\n');
    }
    fs::write(&cfg.output_path, out)
        .with_context(|| format!("failed to write output file {}", cfg.output_path.display()))?;

    info!(
        rows_written = summary.rows_written,
        rows_skipped = summary.rows_skipped,
        rows_malformed = summary.rows_malformed,
        "cleaned {} -> {}",
        cfg.input_path.display(),
        cfg.output_path.display()
    );

    Ok(summary)
}
