use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::format::RecordFormatter;
use crate::record::{FieldValue, Record};

/// Anything that can hand out its field values in a stable order.
pub trait FieldSource {
    type Value: RenderValue;

    fn field_values(&self) -> impl Iterator<Item = &Self::Value>;
}

/// Writes a single field value as display text.
pub trait RenderValue {
    fn render_into(&self, formatter: &RecordFormatter, out: &mut String);
}

impl FieldSource for Record {
    type Value = FieldValue;

    fn field_values(&self) -> impl Iterator<Item = &FieldValue> {
        self.values()
    }
}

impl FieldSource for Map<String, Value> {
    type Value = Value;

    fn field_values(&self) -> impl Iterator<Item = &Value> {
        self.values()
    }
}

impl<K, V: RenderValue> FieldSource for [(K, V)] {
    type Value = V;

    fn field_values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }
}

impl<K, V: RenderValue> FieldSource for Vec<(K, V)> {
    type Value = V;

    fn field_values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }
}

impl<K, V: RenderValue, const N: usize> FieldSource for [(K, V); N] {
    type Value = V;

    fn field_values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }
}

// Key order, not insertion order.
impl<K, V: RenderValue> FieldSource for BTreeMap<K, V> {
    type Value = V;

    fn field_values(&self) -> impl Iterator<Item = &V> {
        self.values()
    }
}

impl RenderValue for FieldValue {
    fn render_into(&self, formatter: &RecordFormatter, out: &mut String) {
        match self {
            FieldValue::Null => {}
            FieldValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            FieldValue::Integer(n) => out.push_str(&n.to_string()),
            FieldValue::Unsigned(n) => out.push_str(&n.to_string()),
            FieldValue::Float(f) => push_float(*f, out),
            FieldValue::Text(s) => out.push_str(s),
            FieldValue::List(items) => push_list(items, formatter, out),
            FieldValue::Nested(record) => push_nested(record, formatter, out),
        }
    }
}

impl RenderValue for Value {
    fn render_into(&self, formatter: &RecordFormatter, out: &mut String) {
        match self {
            Value::Null => {}
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => {
                if n.is_f64() {
                    push_float(n.as_f64().unwrap_or(f64::NAN), out);
                } else {
                    out.push_str(&n.to_string());
                }
            }
            Value::String(s) => out.push_str(s),
            Value::Array(items) => push_list(items, formatter, out),
            Value::Object(map) => push_nested(map, formatter, out),
        }
    }
}

impl RenderValue for str {
    fn render_into(&self, _formatter: &RecordFormatter, out: &mut String) {
        out.push_str(self);
    }
}

impl RenderValue for String {
    fn render_into(&self, _formatter: &RecordFormatter, out: &mut String) {
        out.push_str(self);
    }
}

impl RenderValue for bool {
    fn render_into(&self, _formatter: &RecordFormatter, out: &mut String) {
        out.push_str(if *self { "true" } else { "false" });
    }
}

impl RenderValue for f64 {
    fn render_into(&self, _formatter: &RecordFormatter, out: &mut String) {
        push_float(*self, out);
    }
}

impl<T: RenderValue> RenderValue for Option<T> {
    fn render_into(&self, formatter: &RecordFormatter, out: &mut String) {
        if let Some(v) = self {
            v.render_into(formatter, out);
        }
    }
}

impl<T: RenderValue + ?Sized> RenderValue for &T {
    fn render_into(&self, formatter: &RecordFormatter, out: &mut String) {
        (**self).render_into(formatter, out);
    }
}

macro_rules! render_integer {
    ($($t:ty),*) => {
        $(
            impl RenderValue for $t {
                fn render_into(&self, _formatter: &RecordFormatter, out: &mut String) {
                    out.push_str(&self.to_string());
                }
            }
        )*
    };
}

render_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

/// Floats print the way a JavaScript number stringifies: shortest form,
/// integral values without a fraction, `-0` as `0`, and exponent notation
/// outside `[1e-6, 1e21)`.
fn push_float(f: f64, out: &mut String) {
    if f.is_nan() {
        out.push_str("NaN");
    } else if f.is_infinite() {
        out.push_str(if f > 0.0 { "Infinity" } else { "-Infinity" });
    } else if f == 0.0 {
        out.push('0');
    } else if f.abs() >= 1e21 || f.abs() < 1e-6 {
        let sci = format!("{f:e}");
        match sci.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => {
                out.push_str(mantissa);
                out.push_str("e+");
                out.push_str(exp);
            }
            _ => out.push_str(&sci),
        }
    } else {
        out.push_str(&f.to_string());
    }
}

// Lists join with a bare comma.
fn push_list<T: RenderValue>(items: &[T], formatter: &RecordFormatter, out: &mut String) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        item.render_into(formatter, out);
    }
}

fn push_nested<S: FieldSource + ?Sized>(record: &S, formatter: &RecordFormatter, out: &mut String) {
    out.push('{');
    formatter.write_values(record, out);
    out.push('}');
}
