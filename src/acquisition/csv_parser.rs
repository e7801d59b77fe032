//! CSV sample records
//!
//! Expected format: a header row naming the columns in any order
//! (case-insensitive), e.g.
//! `village,pH,turbidity,lead,arsenic,fluoride,bod`
//!
//! `name` is accepted in place of `village`. Missing columns and empty cells
//! take the record defaults. Quoted fields are unwrapped but embedded commas
//! are not supported.

use super::SourceError;
use crate::config::defaults;
use crate::types::Sample;

/// Column positions resolved from the header row.
#[derive(Debug, Default)]
struct Columns {
    label: usize,
    ph: Option<usize>,
    turbidity: Option<usize>,
    lead: Option<usize>,
    arsenic: Option<usize>,
    fluoride: Option<usize>,
    bod: Option<usize>,
}

impl Columns {
    fn from_header(header: &str) -> Result<Self, SourceError> {
        let mut label = None;
        let mut cols = Self::default();
        for (idx, raw) in split_fields(header).enumerate() {
            match raw.to_ascii_lowercase().as_str() {
                "village" | "name" => label = label.or(Some(idx)),
                "ph" => cols.ph = Some(idx),
                "turbidity" => cols.turbidity = Some(idx),
                "lead" => cols.lead = Some(idx),
                "arsenic" => cols.arsenic = Some(idx),
                "fluoride" => cols.fluoride = Some(idx),
                "bod" => cols.bod = Some(idx),
                other => tracing::debug!(column = %other, "Ignoring unknown CSV column"),
            }
        }
        cols.label = label.ok_or(SourceError::MissingLabelColumn)?;
        Ok(cols)
    }

    fn parse_row(&self, line: &str) -> Result<Sample, String> {
        let fields: Vec<&str> = split_fields(line).collect();
        let name = fields
            .get(self.label)
            .ok_or_else(|| format!("row has {} fields, no label column", fields.len()))?;

        Ok(Sample {
            name: (*name).to_string(),
            ph: cell(&fields, self.ph, "pH")?.unwrap_or(defaults::DEFAULT_SAMPLE_PH),
            turbidity: cell(&fields, self.turbidity, "turbidity")?.unwrap_or(0.0),
            lead: cell(&fields, self.lead, "lead")?.unwrap_or(0.0),
            arsenic: cell(&fields, self.arsenic, "arsenic")?.unwrap_or(0.0),
            fluoride: cell(&fields, self.fluoride, "fluoride")?.unwrap_or(0.0),
            bod: cell(&fields, self.bod, "bod")?.unwrap_or(0.0),
        })
    }
}

fn split_fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(',').map(|f| f.trim().trim_matches('"').trim())
}

/// Numeric cell at `idx`; `None` when the column or value is absent.
fn cell(fields: &[&str], idx: Option<usize>, column: &str) -> Result<Option<f64>, String> {
    match idx.and_then(|i| fields.get(i)) {
        None => Ok(None),
        Some(v) if v.is_empty() => Ok(None),
        Some(v) => v
            .parse::<f64>()
            .map(Some)
            .map_err(|e| format!("invalid {column} value '{v}': {e}")),
    }
}

/// Parse CSV text into samples.
///
/// A missing header or label column fails the whole batch. Individual rows
/// that cannot be parsed are logged and skipped; blank lines are ignored.
pub fn parse_csv(contents: &str) -> Result<Vec<Sample>, SourceError> {
    let mut lines = contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header) = lines.next().ok_or(SourceError::EmptyCsv)?;
    let columns = Columns::from_header(header)?;

    let mut samples = Vec::new();
    for (idx, line) in lines {
        match columns.parse_row(line) {
            Ok(sample) => samples.push(sample),
            Err(e) => {
                tracing::warn!(line = idx + 1, error = %e, "Skipping malformed CSV row");
            }
        }
    }
    Ok(samples)
}
