use std::collections::BTreeMap;

use crate::catalog::FieldCatalog;
use crate::error::Error;
use crate::model::{Field, Record};

/// Columns in a pasted row, timestamp first, in `Field::ALL` order.
pub const ROW_FIELDS: usize = Field::ALL.len();

/// Parse one tab-separated row exported from the survey spreadsheet.
///
/// Only line endings are stripped from the input, so empty trailing columns still
/// count towards the field total. Each column value is trimmed.
pub fn parse_row(line: &str) -> Result<Record, Error> {
    let line = line.trim_end_matches(['\r', '\n']);
    let columns: Vec<&str> = line.split('\t').collect();
    if columns.len() < ROW_FIELDS {
        return Err(Error::FieldCount {
            expected: ROW_FIELDS,
            actual: columns.len(),
        });
    }
    if columns.len() > ROW_FIELDS {
        log::warn!(
            "Row has {} columns; ignoring {} beyond the expected {ROW_FIELDS}",
            columns.len(),
            columns.len() - ROW_FIELDS
        );
    }

    Ok(Field::ALL
        .iter()
        .zip(columns)
        .map(|(field, value)| (*field, value.trim().to_string()))
        .collect())
}

/// Build a record from a JSON object of record key → string value.
pub fn record_from_json(json: &str) -> Result<Record, Error> {
    let raw: BTreeMap<String, String> = serde_json::from_str(json)?;
    raw.into_iter()
        .map(|(key, value)| {
            Field::from_key(&key)
                .map(|f| (f, value))
                .ok_or(Error::UnknownField(key))
        })
        .collect()
}

/// Lifecycle of one submission: `Empty → Filled → Validated → Rendered`.
/// Transitions happen only through explicit events; a failed event leaves the
/// state as it was.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Submission {
    #[default]
    Empty,
    Filled(Record),
    Validated(Record),
    Rendered { record: Record, pdf: Vec<u8> },
}

impl Submission {
    pub fn state_name(&self) -> &'static str {
        match self {
            Submission::Empty => "empty",
            Submission::Filled(_) => "filled",
            Submission::Validated(_) => "validated",
            Submission::Rendered { .. } => "rendered",
        }
    }

    pub fn record(&self) -> Option<&Record> {
        match self {
            Submission::Empty => None,
            Submission::Filled(r) | Submission::Validated(r) => Some(r),
            Submission::Rendered { record, .. } => Some(record),
        }
    }

    /// A fresh submit replaces whatever was held before.
    pub fn submit(&mut self, record: Record) {
        log::debug!("submission: {} -> filled", self.state_name());
        *self = Submission::Filled(record);
    }

    pub fn paste_row(&mut self, line: &str) -> Result<(), Error> {
        let record = parse_row(line)?;
        self.submit(record);
        Ok(())
    }

    pub fn validate(&mut self, catalog: &FieldCatalog) -> Result<(), Error> {
        let Submission::Filled(record) = self else {
            return Err(self.invalid("validate"));
        };
        catalog.validate(record)?;
        let record = std::mem::take(record);
        *self = Submission::Validated(record);
        log::debug!("submission: filled -> validated");
        Ok(())
    }

    /// Render a validated submission with `render`, keeping the bytes alongside the record.
    pub fn render(
        &mut self,
        render: impl FnOnce(&Record) -> Result<Vec<u8>, Error>,
    ) -> Result<&[u8], Error> {
        let Submission::Validated(record) = self else {
            return Err(self.invalid("render"));
        };
        let pdf = render(&*record)?;
        let record = std::mem::take(record);
        *self = Submission::Rendered { record, pdf };
        log::debug!("submission: validated -> rendered");
        Ok(self.pdf().unwrap_or_default())
    }

    pub fn pdf(&self) -> Option<&[u8]> {
        match self {
            Submission::Rendered { pdf, .. } => Some(pdf.as_slice()),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        *self = Submission::Empty;
    }

    fn invalid(&self, event: &'static str) -> Error {
        Error::InvalidTransition {
            from: self.state_name(),
            event,
        }
    }
}
