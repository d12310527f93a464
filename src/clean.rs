use thiserror::Error;

/// Row did not split into the expected number of columns.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unexpected number of columns: {columns}")]
pub struct MalformedRow {
    /// Column count actually observed after splitting.
    pub columns: usize,
}

/// Outcome of cleaning a single data row.
#[derive(Debug, PartialEq, Eq)]
pub enum RowOutcome {
    /// All fields cleaned, original order preserved.
    Cleaned(Vec<String>),
    /// Row carries no usable data (empty coverage); caller drops it.
    Skip,
}

/// Clean one raw data line into its fields.
///
/// Strips `"`, `*` and the BOM character from every field, then normalizes
/// the last field (coverage) from decimal-comma to decimal-point notation.
/// A truncated value like `12,` is repaired to `12.0`.
///
/// The comma substitution applies only to the coverage field; commas in the
/// other columns are left as-is.
pub fn clean_row(
    line: &str,
    sep: char,
    expected_columns: usize,
) -> Result<RowOutcome, MalformedRow> {
    let line = line.trim();
    let cols: Vec<&str> = line.split(sep).collect();

    if cols.len() != expected_columns {
        return Err(MalformedRow {
            columns: cols.len(),
        });
    }

    let mut cols: Vec<String> = cols
        .iter()
        .map(|c| c.replace('"', "").replace('*', "").replace('\u{feff}', ""))
        .collect();

    // split() yields at least one field, so cols is non-empty here
    let value = cols.last_mut().expect("column count checked above");

    if value.is_empty() {
        return Ok(RowOutcome::Skip);
    }
    if value.ends_with(',') {
        value.push('0');
    }
    *value = value.replace(',', ".");

    Ok(RowOutcome::Cleaned(cols))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleaned(line: &str) -> Vec<String> {
        match clean_row(line, ';', 4) {
            Ok(RowOutcome::Cleaned(cols)) => cols,
            other => panic!("expected cleaned row, got {:?}", other),
        }
    }

    #[test]
    fn converts_decimal_comma_in_coverage() {
        assert_eq!(cleaned("Pfizer;EU;2021;3,4"), ["Pfizer", "EU", "2021", "3.4"]);
    }

    #[test]
    fn repairs_truncated_decimal() {
        assert_eq!(cleaned("AstraZeneca;EU;2020;12,"), ["AstraZeneca", "EU", "2020", "12.0"]);
    }

    #[test]
    fn strips_quotes_asterisks_and_bom_from_every_field() {
        assert_eq!(
            cleaned("\u{feff}\"Pfizer\"*;E*U;\"2021\";\"95,5\""),
            ["Pfizer", "EU", "2021", "95.5"]
        );
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(cleaned("  Pfizer;EU;2021;95\r\n"), ["Pfizer", "EU", "2021", "95"]);
    }

    #[test]
    fn rejects_wrong_column_count() {
        let err = clean_row("Bad;Row;OnlyThree", ';', 4).unwrap_err();
        assert_eq!(err.columns, 3);
        assert_eq!(err.to_string(), "unexpected number of columns: 3");

        let err = clean_row("a;b;c;d;e", ';', 4).unwrap_err();
        assert_eq!(err.columns, 5);
    }

    #[test]
    fn skips_row_with_empty_coverage() {
        assert_eq!(clean_row("Moderna;EU;2021;", ';', 4).unwrap(), RowOutcome::Skip);
        // coverage that is only stripped characters counts as empty too
        assert_eq!(clean_row("Moderna;EU;2021;\"\"", ';', 4).unwrap(), RowOutcome::Skip);
    }

    #[test]
    fn leaves_commas_in_other_fields_alone() {
        // decimal-comma handling is deliberately limited to the coverage column
        assert_eq!(
            cleaned("Pfizer, Inc;EU;2021;3,4"),
            ["Pfizer, Inc", "EU", "2021", "3.4"]
        );
    }

    #[test]
    fn cleaning_is_idempotent() {
        let cols = cleaned("\"Pfizer\";EU;2021;12,");
        let rejoined = cols.join(";");
        assert_eq!(clean_row(&rejoined, ';', 4).unwrap(), RowOutcome::Cleaned(cols));
    }
}
