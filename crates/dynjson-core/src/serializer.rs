//! Value → JSON text.
//!
//! Output is deterministic: array elements in index order, object entries in
//! insertion order. The default [`Style::Compact`] adds no whitespace at all;
//! [`Style::Pretty`] puts one element or entry per line.
//!
//! - Doubles use the shortest text that parses back to the same `f64`, and
//!   always contain a `.` or an exponent so they re-parse as `Double` rather
//!   than `Int`. NaN and the infinities have no JSON form and render as `null`.
//! - Strings escape `"`, `\` and the C0 control characters. Everything else,
//!   including non-ASCII, is written through as UTF-8.
//!
//! Serialization cannot fail and has no depth limit. The parser does: output
//! nested deeper than [`ParseOptions::DEFAULT_MAX_DEPTH`](crate::ParseOptions::DEFAULT_MAX_DEPTH)
//! levels only parses back with a larger
//! [`ParseOptions::with_max_depth`](crate::ParseOptions::with_max_depth).

use crate::value::{Map, Value};
use std::fmt;

/// Output layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Compact,
    /// One entry per line, nested levels indented by `indent` spaces.
    Pretty { indent: usize },
}

impl Style {
    pub const PRETTY: Style = Style::Pretty { indent: 2 };
}

/// Serialize a value in the given style.
pub fn to_string_with(value: &Value, style: Style) -> String {
    let mut out = String::new();
    write_value(value, style, 0, &mut out);
    out
}

impl Value {
    /// Serialize with two-space indentation.
    pub fn to_string_pretty(&self) -> String {
        to_string_with(self, Style::PRETTY)
    }

    pub fn to_string_with(&self, style: Style) -> String {
        to_string_with(self, style)
    }
}

/// Compact JSON. The alternate flag (`{:#}`) selects the pretty style.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = if f.alternate() {
            Style::PRETTY
        } else {
            Style::Compact
        };
        f.write_str(&to_string_with(self, style))
    }
}

fn write_value(value: &Value, style: Style, depth: usize, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Int(i) => out.push_str(&i.to_string()),
        Value::Double(d) => write_double(*d, out),
        Value::String(s) => write_string(s, out),
        Value::Array(items) => write_array(items, style, depth, out),
        Value::Object(map) => write_object(map, style, depth, out),
    }
}

fn write_double(d: f64, out: &mut String) {
    if !d.is_finite() {
        out.push_str("null");
        return;
    }
    // `{:?}` is the shortest round-trip form and keeps `.0` on whole numbers.
    out.push_str(&format!("{d:?}"));
}

fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            c if u32::from(c) < 0x20 => out.push_str(&format!("\\u{:04x}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push('"');
}

fn write_array(items: &[Value], style: Style, depth: usize, out: &mut String) {
    if items.is_empty() {
        out.push_str("[]");
        return;
    }
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        break_line(style, depth + 1, out);
        write_value(item, style, depth + 1, out);
    }
    break_line(style, depth, out);
    out.push(']');
}

fn write_object(map: &Map, style: Style, depth: usize, out: &mut String) {
    if map.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push('{');
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        break_line(style, depth + 1, out);
        write_string(key, out);
        out.push(':');
        if let Style::Pretty { .. } = style {
            out.push(' ');
        }
        write_value(value, style, depth + 1, out);
    }
    break_line(style, depth, out);
    out.push('}');
}

/// Newline plus indentation in pretty mode; nothing in compact mode.
fn break_line(style: Style, depth: usize, out: &mut String) {
    if let Style::Pretty { indent } = style {
        out.push('\n');
        out.extend(std::iter::repeat(' ').take(indent * depth));
    }
}
