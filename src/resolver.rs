//! First-match color resolution over evaluated style expression values.
//!
//! Accepted encodings, tried per candidate:
//!  - an already-resolved [`Color`], passed through unchanged
//!  - numeric arrays `[r, g, b]` / `[r, g, b, a]` with integer channels in
//!    0-255 and a fractional alpha in [0, 1]
//!  - hex strings `#RRGGBB`, plus the `#RGB` shorthand (digits duplicated)
//!  - functional strings `rgb(r,g,b)` / `rgba(r,g,b,a)`
//!
//! Candidates are evaluated in order and the first successful decode wins;
//! later candidates are never consulted. A candidate that fails to decode is
//! skipped silently. Only exhausting the whole sequence is an error
//! ([`NoConvertibleColor`]).

use crate::color::Color;
use crate::value::Value;
use std::fmt;

/// Name under which the conversion function is registered by the styling
/// framework.
pub const FUNCTION_NAME: &str = "toColor";

/// Terminal resolution failure: every candidate was tried and none decoded
/// to a color. Individual decode failures never surface; this is the only
/// error the resolver reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoConvertibleColor;

impl fmt::Display for NoConvertibleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no argument to \"{}\" can be converted to a color value",
            FUNCTION_NAME
        )
    }
}

impl std::error::Error for NoConvertibleColor {}

/// Resolve an ordered candidate list to the first value that can be
/// interpreted as a color.
pub fn resolve(candidates: &[Value]) -> Result<Color, NoConvertibleColor> {
    for candidate in candidates {
        if let Some(color) = decode_candidate(candidate) {
            return Ok(color);
        }
    }
    Err(NoConvertibleColor)
}

/// Resolve a function invocation argument list.
///
/// `args[0]` is the function-name/identity slot of the calling convention
/// and is never evaluated; the remaining elements are the candidates.
pub fn resolve_call(args: &[Value]) -> Result<Color, NoConvertibleColor> {
    resolve(args.get(1..).unwrap_or_default())
}

fn decode_candidate(value: &Value) -> Option<Color> {
    match value {
        Value::Color(color) => Some(*color),
        Value::Array(values) => decode_array(values),
        Value::Text(text) => decode_hex(text).or_else(|| decode_functional(text)),
        Value::Other => None,
    }
}

/// Decode `[r, g, b]` or `[r, g, b, a]`: integer channels, fractional alpha.
fn decode_array(values: &[f64]) -> Option<Color> {
    if values.len() != 3 && values.len() != 4 {
        return None;
    }
    let r = int_channel(values[0])?;
    let g = int_channel(values[1])?;
    let b = int_channel(values[2])?;
    if values.len() == 4 {
        Some(Color::rgba(r, g, b, alpha_channel(values[3])?))
    } else {
        Some(Color::rgb(r, g, b))
    }
}

/// Decode `#RRGGBB` (length 7) or the `#RGB` shorthand (length 4, each digit
/// duplicated). Other lengths fall through to the next branch.
fn decode_hex(s: &str) -> Option<Color> {
    if !s.starts_with('#') {
        return None;
    }
    match s.len() {
        7 => {
            // Every byte after '#' must be a plain hex digit: per-pair
            // `from_str_radix` would accept a leading sign, and all-ASCII
            // input keeps the fixed slices on char boundaries.
            if !s[1..].bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            let r = u8::from_str_radix(&s[1..3], 16).ok()?;
            let g = u8::from_str_radix(&s[3..5], 16).ok()?;
            let b = u8::from_str_radix(&s[5..7], 16).ok()?;
            Some(Color::rgb(r, g, b))
        }
        4 => {
            let mut expanded = String::with_capacity(7);
            expanded.push('#');
            for digit in s.chars().skip(1) {
                expanded.push(digit);
                expanded.push(digit);
            }
            decode_hex(&expanded)
        }
        _ => None,
    }
}

/// Decode `rgb(r,g,b)` / `rgba(r,g,b,a)` with integer channels and a
/// fractional alpha. Arguments are not trimmed; whitespace fails the parse.
///
/// `rgb(`-prefixed text is accepted without a closing parenthesis, while
/// `rgba(`-prefixed text requires one.
fn decode_functional(s: &str) -> Option<Color> {
    if !(s.starts_with("rgb(") || (s.starts_with("rgba(") && s.ends_with(')'))) {
        return None;
    }
    // Text between the first '(' and the next ')' (or the rest of the
    // string when no ')' follows), split on ','.
    let rest = s.split('(').nth(1)?;
    let args = rest.split(')').next()?;
    let parts: Vec<&str> = args.split(',').collect();
    match parts.len() {
        3 => {
            let r = parts[0].parse::<u8>().ok()?;
            let g = parts[1].parse::<u8>().ok()?;
            let b = parts[2].parse::<u8>().ok()?;
            Some(Color::rgb(r, g, b))
        }
        4 => {
            let r = parts[0].parse::<u8>().ok()?;
            let g = parts[1].parse::<u8>().ok()?;
            let b = parts[2].parse::<u8>().ok()?;
            let a = alpha_channel(parts[3].parse::<f64>().ok()?)?;
            Some(Color::rgba(r, g, b, a))
        }
        _ => None,
    }
}

/// A whole number in 0-255, or nothing.
fn int_channel(value: f64) -> Option<u8> {
    if value.fract() == 0.0 && (0.0..=255.0).contains(&value) {
        Some(value as u8)
    } else {
        None
    }
}

/// Convert a fractional alpha to a channel via `round(alpha * 255)`, half
/// away from zero. Validity is checked after rounding, so `1.001` still
/// rounds into range while `2.0` does not.
fn alpha_channel(alpha: f64) -> Option<u8> {
    let scaled = (alpha * 255.0).round();
    if (0.0..=255.0).contains(&scaled) {
        Some(scaled as u8)
    } else {
        None
    }
}
