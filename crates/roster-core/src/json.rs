use std::path::Path;

use serde_json::Value;

use crate::format::RecordFormatter;
use crate::record::{FieldValue, Record};
use crate::RosterError;

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FieldValue::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    FieldValue::Unsigned(u)
                } else {
                    FieldValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => FieldValue::Text(s),
            Value::Array(items) => FieldValue::List(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => FieldValue::Nested(map.into_iter().collect()),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Converts a JSON value into a record. Anything other than an object is
/// rejected, including `null`.
pub fn record_from_value(value: Value) -> Result<Record, RosterError> {
    match value {
        Value::Object(map) => Ok(map.into_iter().collect()),
        other => Err(RosterError::InvalidInput(format!(
            "expected a JSON object, got {}",
            kind(&other)
        ))),
    }
}

pub fn parse_record(text: &str) -> Result<Record, RosterError> {
    let value: Value = serde_json::from_str(text).map_err(|e| RosterError::Json(e.to_string()))?;
    record_from_value(value)
}

/// Parses a JSON array of objects into records, keeping array order.
pub fn parse_records(text: &str) -> Result<Vec<Record>, RosterError> {
    let value: Value = serde_json::from_str(text).map_err(|e| RosterError::Json(e.to_string()))?;
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(RosterError::InvalidInput(format!(
                "expected a JSON array of records, got {}",
                kind(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(map) => Ok(map.into_iter().collect::<Record>()),
            other => Err(RosterError::InvalidInput(format!(
                "record {i}: expected a JSON object, got {}",
                kind(&other)
            ))),
        })
        .collect()
}

pub fn read_records(path: &Path) -> Result<Vec<Record>, RosterError> {
    let content = std::fs::read_to_string(path)?;
    let records = parse_records(&content)?;
    tracing::debug!("read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Formats a JSON value directly, without converting it to a [`Record`].
pub fn format_value(formatter: &RecordFormatter, value: &Value) -> Result<String, RosterError> {
    match value {
        Value::Object(map) => Ok(formatter.format(map)),
        Value::Null => Err(RosterError::InvalidInput("record is absent".into())),
        other => Err(RosterError::InvalidInput(format!(
            "expected a JSON object, got {}",
            kind(other)
        ))),
    }
}
