//! JSON bridge for [`Value`].
//!
//! JSON is the structured-text format the engine parses text with and
//! serializes non-text values to. Conversions here are total: values JSON
//! cannot express are folded into the nearest JSON shape.
//!
//! - tuples and sets become arrays
//! - map keys that are not text become their compact JSON text
//! - boxed values become their inner value
//! - non-finite floats become `null`
//! - text output escapes everything outside ASCII

use std::io;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map as JsonMap, Number, Value as JsonValue};

use crate::value::Value;

/// Separator style used when serializing values to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    /// `[1, 2]` and `{"a": 1}`.
    #[default]
    Spaced,
    /// `[1,2]` and `{"a":1}`.
    Compact,
}

impl TextStyle {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "spaced" => Some(TextStyle::Spaced),
            "compact" => Some(TextStyle::Compact),
            _ => None,
        }
    }
}

impl Value {
    /// Build a value from decoded JSON.
    ///
    /// Integral numbers that fit an `i64` become [`Value::Int`]; every other
    /// number becomes [`Value::Float`].
    pub fn from_json(json: JsonValue) -> Value {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    n.as_f64().map(Value::Float).unwrap_or(Value::Null)
                }
            }
            JsonValue::String(s) => Value::Str(s),
            JsonValue::Array(items) => Value::List(items.into_iter().map(Value::from_json).collect()),
            JsonValue::Object(obj) => Value::Map(
                obj.into_iter()
                    .map(|(k, v)| (Value::Str(k), Value::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Fold this value into JSON.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Int(n) => JsonValue::Number((*n).into()),
            Value::Float(f) => Number::from_f64(*f)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Value::Str(s) => JsonValue::String(s.clone()),
            Value::List(items) | Value::Tuple(items) => {
                JsonValue::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Set(items) => JsonValue::Array(items.iter().map(Value::to_json).collect()),
            Value::Map(entries) => {
                let mut obj = JsonMap::new();
                for (k, v) in entries {
                    obj.insert(json_key(k), v.to_json());
                }
                JsonValue::Object(obj)
            }
            Value::Boxed(inner) => inner.to_json(),
        }
    }
}

fn json_key(key: &Value) -> String {
    match key {
        Value::Str(s) => s.clone(),
        other => other.to_json().to_string(),
    }
}

/// Parse structured text into a value.
pub fn parse_text(text: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str::<JsonValue>(text).map(Value::from_json)
}

/// Serialize a value to structured text.
///
/// Output is ASCII: characters outside it are written as `\uXXXX` escapes
/// (UTF-16 surrogate pairs above the BMP).
pub fn to_text(value: &Value, style: TextStyle) -> String {
    let json = value.to_json();
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, TextFormatter { style });
    if json.serialize(&mut ser).is_err() {
        return json.to_string();
    }
    String::from_utf8(buf).unwrap_or_else(|_| json.to_string())
}

/// Single-line formatter with ASCII-only strings.
struct TextFormatter {
    style: TextStyle,
}

impl TextFormatter {
    fn separator(&self) -> &'static [u8] {
        match self.style {
            TextStyle::Spaced => b", ",
            TextStyle::Compact => b",",
        }
    }
}

impl serde_json::ser::Formatter for TextFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(self.separator())
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(self.separator())
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        match self.style {
            TextStyle::Spaced => writer.write_all(b": "),
            TextStyle::Compact => writer.write_all(b":"),
        }
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if c.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        JsonValue::deserialize(deserializer).map(Value::from_json)
    }
}
