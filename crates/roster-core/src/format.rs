use crate::source::{FieldSource, RenderValue};
use crate::RosterError;

pub const DEFAULT_SEPARATOR: &str = ", ";

/// Joins a record's values, in field order, into one display string.
///
/// Field names never appear in the output. An empty record formats to the
/// empty string. Formatting is pure: the same record always yields the
/// same string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFormatter {
    separator: String,
}

impl Default for RecordFormatter {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl RecordFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn format<S: FieldSource + ?Sized>(&self, record: &S) -> String {
        let mut out = String::new();
        self.write_values(record, &mut out);
        out
    }

    /// Like [`RecordFormatter::format`], but an absent record is an error
    /// rather than an empty row.
    pub fn format_optional<S: FieldSource + ?Sized>(
        &self,
        record: Option<&S>,
    ) -> Result<String, RosterError> {
        record
            .map(|r| self.format(r))
            .ok_or_else(|| RosterError::InvalidInput("record is absent".into()))
    }

    /// Formats every record, one row each, preserving input order.
    pub fn format_all<'a, S, I>(&self, records: I) -> Vec<String>
    where
        S: FieldSource + ?Sized + 'a,
        I: IntoIterator<Item = &'a S>,
    {
        records.into_iter().map(|r| self.format(r)).collect()
    }

    pub(crate) fn write_values<S: FieldSource + ?Sized>(&self, record: &S, out: &mut String) {
        for (i, value) in record.field_values().enumerate() {
            if i > 0 {
                out.push_str(&self.separator);
            }
            value.render_into(self, out);
        }
    }
}

/// Formats with the default `", "` separator.
pub fn format_record<S: FieldSource + ?Sized>(record: &S) -> String {
    RecordFormatter::default().format(record)
}

pub fn format_optional<S: FieldSource + ?Sized>(record: Option<&S>) -> Result<String, RosterError> {
    RecordFormatter::default().format_optional(record)
}
