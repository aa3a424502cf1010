//! Rule confidence file loader.
//!
//! # File Format
//!
//! One entry per line, comma separated:
//!
//! ```text
//! # comment lines start with '#'
//! COMMA_PARENTHESIS_WHITESPACE,0.93
//! MORFOLOGIK_RULE_EN_US,0.71,extra,columns,are,ignored
//! ```
//!
//! The first field is the rule id, the second a float. Anything after the
//! second field is kept for debugging by whoever produced the file and is
//! ignored here. A single bad line rejects the whole file.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use crate::error::{CalibrationError, Result};
use crate::table::{ConfidenceEntry, ConfidenceTable};

/// Load the confidence table configured for a checker instance.
///
/// Without a path the table is empty, which is not an error.
pub fn load_confidence_table(path: Option<&Path>) -> Result<ConfidenceTable> {
    let Some(path) = path else {
        debug!("no rule confidence file configured");
        return Ok(ConfidenceTable::empty());
    };
    info!(path = %path.display(), "loading rule confidence map");
    let file = File::open(path).map_err(|source| CalibrationError::io(path, source))?;
    let table = read_confidence_table(file, path)?;
    info!(
        path = %path.display(),
        entries = table.len(),
        "loaded rule confidence map"
    );
    Ok(table)
}

/// Parse calibration lines from any reader; `path` is only used for errors.
pub fn read_confidence_table<R: Read>(reader: R, path: &Path) -> Result<ConfidenceTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| CalibrationError::csv(path, source))?;
        entries.push(parse_entry(&record, path)?);
    }
    Ok(ConfidenceTable::from_entries(
        entries,
        Some(path.to_path_buf()),
    ))
}

fn parse_entry(record: &StringRecord, path: &Path) -> Result<ConfidenceEntry> {
    // Trailing empty fields do not count: `RULE_A,` has only a rule id.
    let fields: Vec<&str> = record.iter().collect();
    let field_count = fields
        .iter()
        .rposition(|field| !field.is_empty())
        .map_or(0, |last| last + 1);
    let (rule_id, value) = match fields[..field_count] {
        [rule_id, value, ..] if !rule_id.is_empty() => (rule_id, value),
        _ => return Err(invalid_line(record, path)),
    };
    let confidence = value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|confidence| confidence.is_finite())
        .ok_or_else(|| CalibrationError::InvalidConfidence {
            path: path.to_path_buf(),
            line: original_line(record),
        })?;
    Ok(ConfidenceEntry {
        rule_id: rule_id.to_string(),
        confidence,
    })
}

fn invalid_line(record: &StringRecord, path: &Path) -> CalibrationError {
    CalibrationError::InvalidLine {
        path: path.to_path_buf(),
        line: original_line(record),
    }
}

// Quoting is off, so joining the fields restores the line as written.
fn original_line(record: &StringRecord) -> String {
    record.iter().collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<ConfidenceTable> {
        read_confidence_table(content.as_bytes(), Path::new("confidence.csv"))
    }

    #[test]
    fn skips_comments_and_ignores_extra_columns() {
        let table = parse("# header\nRULE_A,0.5\nRULE_B,0.25,debug,info\n").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("RULE_A"), Some(0.5));
        assert_eq!(table.get("RULE_B"), Some(0.25));
    }

    #[test]
    fn accepts_crlf_and_padded_numbers() {
        let table = parse("RULE_A, 0.75 \r\nRULE_B,1\r\n").unwrap();
        assert_eq!(table.get("RULE_A"), Some(0.75));
        assert_eq!(table.get("RULE_B"), Some(1.0));
    }

    #[test]
    fn rule_id_is_not_trimmed() {
        let table = parse(" RULE_A,0.5\n").unwrap();
        assert_eq!(table.get(" RULE_A"), Some(0.5));
        assert_eq!(table.get("RULE_A"), None);
    }

    #[test]
    fn single_field_line_fails() {
        let err = parse("RULE_A,0.5\nRULE_B\n").unwrap_err();
        assert!(matches!(
            err,
            CalibrationError::InvalidLine { ref line, .. } if line == "RULE_B"
        ));
    }

    #[test]
    fn empty_rule_id_fails() {
        let err = parse(",0.5\n").unwrap_err();
        assert!(matches!(err, CalibrationError::InvalidLine { .. }));
    }

    #[test]
    fn non_numeric_confidence_fails() {
        let err = parse("RULE_A,high\n").unwrap_err();
        assert!(matches!(
            err,
            CalibrationError::InvalidConfidence { ref line, .. } if line == "RULE_A,high"
        ));
    }

    #[test]
    fn non_finite_confidence_fails() {
        for line in ["RULE_A,inf\n", "RULE_A,-infinity\n", "RULE_A,NaN\n", "RULE_A,nan\n"] {
            let err = parse(line).unwrap_err();
            assert!(
                matches!(err, CalibrationError::InvalidConfidence { .. }),
                "{line:?}: {err}"
            );
        }
    }

    #[test]
    fn trailing_empty_confidence_is_an_invalid_line() {
        let err = parse("RULE_A,\n").unwrap_err();
        assert!(matches!(
            err,
            CalibrationError::InvalidLine { ref line, .. } if line == "RULE_A,"
        ));
        let err = parse("RULE_A,,0.5\n").unwrap_err();
        assert!(matches!(err, CalibrationError::InvalidConfidence { .. }));
    }

    #[test]
    fn missing_path_yields_empty_table() {
        let table = load_confidence_table(None).unwrap();
        assert!(table.is_empty());
        assert!(table.source().is_none());
    }
}
