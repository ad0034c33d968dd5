//! Candidate values handed to the resolver, plus the JSON boundary.
//!
//! The surrounding expression framework evaluates sub-expressions and hands
//! the results over as opaque values. Only the shapes below can ever become
//! a color; everything else is carried as [`Value::Other`] and rejected
//! during resolution.

use crate::color::Color;
use anyhow::{Context, Result, bail};
use camino::Utf8Path;

/// One already-evaluated element of the resolver's input sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Already a color; passed through unchanged.
    Color(Color),
    /// Ordered numeric elements, e.g. from a JSON array. Only lengths 3 and
    /// 4 can decode to a color.
    Array(Vec<f64>),
    /// A candidate string (`#RRGGBB`, `#RGB`, `rgb(...)`, `rgba(...)`).
    Text(String),
    /// Any other evaluated value. Never converts.
    Other,
}

impl Value {
    /// Map a JSON value onto the candidate shapes.
    ///
    /// Strings become [`Value::Text`]; arrays whose elements are all numbers
    /// become [`Value::Array`]. Everything else (numbers, booleans, null,
    /// objects, mixed arrays) is [`Value::Other`].
    pub fn from_json(value: &serde_json::Value) -> Value {
        match value {
            serde_json::Value::String(s) => Value::Text(s.clone()),
            serde_json::Value::Array(items) => {
                let numbers: Option<Vec<f64>> = items.iter().map(|v| v.as_f64()).collect();
                match numbers {
                    Some(values) => Value::Array(values),
                    None => Value::Other,
                }
            }
            _ => Value::Other,
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        Value::from_json(value)
    }
}

impl From<Color> for Value {
    fn from(color: Color) -> Self {
        Value::Color(color)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<Vec<f64>> for Value {
    fn from(values: Vec<f64>) -> Self {
        Value::Array(values)
    }
}

/// Parse a JSON document holding the candidate array.
///
/// The document must be a top-level JSON array; each element is mapped via
/// [`Value::from_json`].
pub fn parse_candidates(text: &str) -> Result<Vec<Value>> {
    let doc: serde_json::Value =
        serde_json::from_str(text).context("Failed to parse candidate JSON")?;
    match doc {
        serde_json::Value::Array(items) => Ok(items.iter().map(Value::from_json).collect()),
        other => bail!("Candidate document must be a JSON array, got {}", other),
    }
}

/// Read a candidate array from a JSON file.
pub fn load_candidates(path: impl AsRef<Utf8Path>) -> Result<Vec<Value>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path.as_str())
        .with_context(|| format!("Failed to read {}", path))?;
    parse_candidates(&text).with_context(|| format!("Invalid candidate document {}", path))
}
