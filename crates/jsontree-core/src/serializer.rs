//! Pretty printer: [`Value`] → text.
//!
//! Output layout:
//!
//! - Scalars render inline: `null`, `true`/`false`, decimal integers, doubles
//!   and double-quoted strings with `"`, `\`, backspace, form feed, newline,
//!   carriage return and tab re-escaped.
//! - Empty containers render as `[]` and `{}`.
//! - Non-empty containers open on the current line, put each child on its
//!   own line one indent unit deeper, separate children with `,` and close
//!   at the parent's indentation.
//!
//! Object members are written in the map's order, which is **sorted by key**,
//! not in the order they were inserted or parsed.
//!
//! ```
//! use jsontree_core::{to_string_pretty, Value};
//!
//! let v = Value::object([("b", Value::array([1, 2])), ("a", Value::from(true))]);
//! assert_eq!(
//!     to_string_pretty(&v),
//!     "{\n    \"a\": true,\n    \"b\": [\n        1,\n        2\n    ]\n}"
//! );
//! ```

use std::fmt;

use crate::types::Value;

/// Indent unit used by [`SerializeOptions::default`]: four spaces.
pub const DEFAULT_INDENT: &str = "    ";

/// Serializer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializeOptions {
    /// String repeated once per nesting level.
    pub indent: String,
}

impl SerializeOptions {
    /// Indent with `n` spaces per level.
    pub fn spaces(n: usize) -> Self {
        Self {
            indent: " ".repeat(n),
        }
    }

    /// Indent with one tab per level.
    pub fn tabs() -> Self {
        Self {
            indent: "\t".to_string(),
        }
    }
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
        }
    }
}

/// Render with the default four-space indent.
pub fn to_string_pretty(value: &Value) -> String {
    to_string_with_options(value, &SerializeOptions::default())
}

/// Render with a custom indent unit.
pub fn to_string_with_options(value: &Value, options: &SerializeOptions) -> String {
    let mut out = String::new();
    write_value(value, 1, &options.indent, &mut out);
    out
}

impl Value {
    /// Shorthand for [`to_string_pretty`].
    pub fn dump(&self) -> String {
        to_string_pretty(self)
    }

    /// Shorthand for [`to_string_with_options`].
    pub fn dump_with(&self, options: &SerializeOptions) -> String {
        to_string_with_options(self, options)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_string_pretty(self))
    }
}

/// Children of a container rendered at `depth` are indented `depth` times;
/// its closing bracket is indented `depth - 1` times.
fn write_value(value: &Value, depth: usize, indent: &str, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Int(n) => out.push_str(&n.to_string()),
        Value::Double(d) => write_double(*d, out),
        Value::String(s) => write_string(s, out),
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Array(items) => {
            out.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(",\n");
                }
                push_indent(indent, depth, out);
                write_value(item, depth + 1, indent, out);
            }
            out.push('\n');
            push_indent(indent, depth - 1, out);
            out.push(']');
        }
        Value::Object(map) => {
            out.push_str("{\n");
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(",\n");
                }
                push_indent(indent, depth, out);
                write_string(key, out);
                out.push_str(": ");
                write_value(item, depth + 1, indent, out);
            }
            out.push('\n');
            push_indent(indent, depth - 1, out);
            out.push('}');
        }
    }
}

/// Doubles always carry a `.` or an exponent so they re-parse as doubles
/// (`1.0`, `2.5`, `1e44`). Non-finite values have no literal and render as
/// `null`.
fn write_double(d: f64, out: &mut String) {
    if d.is_finite() {
        out.push_str(&format!("{d:?}"));
    } else {
        out.push_str("null");
    }
}

fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
}

fn push_indent(indent: &str, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str(indent);
    }
}
