//! Recursive-descent parser: text → [`Value`].
//!
//! One method per grammar production (`parse_value`, `parse_constant`,
//! `parse_number`, `parse_string`, `parse_array`, `parse_object`), all
//! driven by a byte cursor over a fully materialized buffer. Whitespace is
//! skipped at every production boundary.
//!
//! The first failure aborts the whole parse and travels up unchanged through
//! `?`; there is no recovery and no partial tree.
//!
//! # Accepted dialect
//!
//! - Keywords `null`/`true`/`false` must not run into an identifier
//!   character, so `nullable` is rejected.
//! - Numbers: optional `+`/`-`, digits, optional `.digits`, optional
//!   exponent with optional sign. A fraction or exponent makes the literal a
//!   `Double`; otherwise it is an `Int` and must fit in 32 bits. Leading-zero
//!   rules are not enforced.
//! - Strings decode `\"`, `\\`, `\t`, `\n`, `\f`, `\b` and `\r`. Any other
//!   escape (including `\u`) is kept literally as backslash + character.
//! - A trailing comma before `]` or `}` is accepted.
//! - Duplicate object keys: the last value wins.

use crate::error::{JsonError, Result};
use crate::result::ParseResult;
use crate::types::{Map, Value};

/// Nesting depth allowed by [`ParseOptions::default`].
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum array/object nesting depth. Deeper input is a parse error.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parse a complete document with default options.
///
/// ```
/// use jsontree_core::parse;
///
/// let result = parse(r#"{"a": 1, "b": [1, 2, 3]}"#);
/// assert!(!result.is_error());
/// let doc = result.into_value();
/// assert_eq!(doc["b"][2].get_int().unwrap(), 3);
/// ```
pub fn parse(text: &str) -> ParseResult {
    parse_with_options(text, ParseOptions::default())
}

/// Parse a complete document.
pub fn parse_with_options(text: &str, options: ParseOptions) -> ParseResult {
    tracing::trace!(bytes = text.len(), max_depth = options.max_depth, "parsing document");
    let result = Parser::new(text, options).parse_document();
    match &result {
        Ok(value) => tracing::trace!(root = %value.value_type(), "parsed document"),
        Err(error) => tracing::debug!(%error, "parse failed"),
    }
    ParseResult::from(result)
}

impl std::str::FromStr for Value {
    type Err = JsonError;

    fn from_str(s: &str) -> Result<Value> {
        parse(s).into_result()
    }
}

struct Parser<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
    depth: usize,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str, options: ParseOptions) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
            depth: 0,
            options,
        }
    }

    fn parse_document(&mut self) -> Result<Value> {
        let value = self.parse_value()?;
        self.skip_whitespace();
        if !self.is_end() {
            return Err(self.error("trailing content after root value"));
        }
        Ok(value)
    }

    fn parse_value(&mut self) -> Result<Value> {
        self.skip_whitespace();
        match self.peek() {
            Some(b'n') => self.parse_constant("null", Value::Null),
            Some(b't') => self.parse_constant("true", Value::Bool(true)),
            Some(b'f') => self.parse_constant("false", Value::Bool(false)),
            Some(b'+' | b'-' | b'0'..=b'9') => self.parse_number(),
            Some(b'"') => self.parse_string().map(Value::String),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(_) => Err(self.unexpected_char()),
            None => Err(self.error("unexpected end of input, expected a value")),
        }
    }

    /// Match a keyword that is not immediately followed by an identifier
    /// character.
    fn parse_constant(&mut self, name: &str, value: Value) -> Result<Value> {
        let end = self.pos + name.len();
        let matches = self.bytes[self.pos..].starts_with(name.as_bytes())
            && !self.bytes.get(end).copied().is_some_and(is_ident_byte);
        if !matches {
            return Err(self.error(format!("invalid literal, expected '{name}'")));
        }
        self.pos = end;
        Ok(value)
    }

    fn parse_number(&mut self) -> Result<Value> {
        let start = self.pos;
        if matches!(self.peek(), Some(b'+' | b'-')) {
            self.pos += 1;
        }
        self.skip_digits();

        let mut is_int = true;
        if self.peek() == Some(b'.') {
            is_int = false;
            self.pos += 1;
            self.skip_digits();
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            is_int = false;
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            self.skip_digits();
        }

        let literal = &self.src[start..self.pos];
        if is_int {
            literal.parse::<i32>().map(Value::Int).map_err(|e| {
                use std::num::IntErrorKind;
                let message = match e.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        format!("integer literal '{literal}' out of range")
                    }
                    _ => format!("invalid number literal '{literal}'"),
                };
                self.error_at(start, message)
            })
        } else {
            literal
                .parse::<f64>()
                .map(Value::Double)
                .map_err(|_| self.error_at(start, format!("invalid number literal '{literal}'")))
        }
    }

    /// Parse a quoted string starting at the opening quote.
    fn parse_string(&mut self) -> Result<String> {
        let open = self.pos;
        self.pos += 1; // opening quote
        let mut out = String::new();
        loop {
            // Copy the run up to the next quote or backslash. Both are ASCII,
            // so the run always ends on a char boundary.
            let run_start = self.pos;
            while let Some(b) = self.peek() {
                if b == b'"' || b == b'\\' {
                    break;
                }
                self.pos += 1;
            }
            out.push_str(&self.src[run_start..self.pos]);

            match self.peek() {
                None => return Err(self.error_at(open, "unterminated string")),
                Some(b'"') => {
                    self.pos += 1;
                    return Ok(out);
                }
                Some(_) => {
                    self.pos += 1; // backslash
                    let Some(ch) = self.src[self.pos..].chars().next() else {
                        return Err(self.error_at(open, "unterminated string"));
                    };
                    self.pos += ch.len_utf8();
                    match ch {
                        '"' => out.push('"'),
                        '\\' => out.push('\\'),
                        't' => out.push('\t'),
                        'n' => out.push('\n'),
                        'f' => out.push('\u{0C}'),
                        'b' => out.push('\u{08}'),
                        'r' => out.push('\r'),
                        other => {
                            out.push('\\');
                            out.push(other);
                        }
                    }
                }
            }
        }
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.enter()?;
        self.pos += 1; // [
        self.skip_whitespace();

        let mut items = Vec::new();
        if self.peek() == Some(b']') {
            self.pos += 1;
            self.leave();
            return Ok(Value::Array(items));
        }

        loop {
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                    if self.peek() == Some(b']') {
                        self.pos += 1;
                        break;
                    }
                }
                Some(b']') => {
                    self.pos += 1;
                    break;
                }
                Some(_) => return Err(self.error("expected ',' or ']' after array element")),
                None => return Err(self.error("unexpected end of input, expected ']'")),
            }
        }

        self.leave();
        Ok(Value::Array(items))
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.enter()?;
        self.pos += 1; // {
        self.skip_whitespace();

        let mut map = Map::new();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            self.leave();
            return Ok(Value::Object(map));
        }

        loop {
            let (key, value) = self.parse_member()?;
            map.insert(key, value);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                    if self.peek() == Some(b'}') {
                        self.pos += 1;
                        break;
                    }
                }
                Some(b'}') => {
                    self.pos += 1;
                    break;
                }
                Some(_) => return Err(self.error("expected ',' or '}' after object member")),
                None => return Err(self.error("unexpected end of input, expected '}'")),
            }
        }

        self.leave();
        Ok(Value::Object(map))
    }

    /// `"key": value`
    fn parse_member(&mut self) -> Result<(String, Value)> {
        self.skip_whitespace();
        if self.peek() != Some(b'"') {
            return Err(self.error("expected string key"));
        }
        let key = self.parse_string()?;
        self.skip_whitespace();
        if self.peek() != Some(b':') {
            return Err(self.error(format!("expected ':' after key \"{key}\"")));
        }
        self.pos += 1;
        let value = self.parse_value()?;
        Ok((key, value))
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(self.error(format!(
                "maximum nesting depth of {} exceeded",
                self.options.max_depth
            )));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn is_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_space_byte) {
            self.pos += 1;
        }
    }

    fn unexpected_char(&self) -> JsonError {
        let ch = self.src[self.pos..].chars().next().unwrap_or('\0');
        self.error(format!("unexpected character '{}'", ch.escape_default()))
    }

    fn error(&self, message: impl Into<String>) -> JsonError {
        self.error_at(self.pos, message)
    }

    fn error_at(&self, pos: usize, message: impl Into<String>) -> JsonError {
        let (line, column) = line_col(self.bytes, pos);
        JsonError::Parse {
            message: message.into(),
            line,
            column,
        }
    }
}

/// 1-based line and column (in characters) of byte offset `pos`.
fn line_col(bytes: &[u8], pos: usize) -> (usize, usize) {
    let before = &bytes[..pos.min(bytes.len())];
    let line_start = before
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i + 1);
    let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
    // Count UTF-8 lead bytes so multi-byte characters occupy one column.
    let column = before[line_start..]
        .iter()
        .filter(|&&b| b & 0xC0 != 0x80)
        .count()
        + 1;
    (line, column)
}

/// Characters that may not directly follow a keyword.
fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// ASCII whitespace, including vertical tab and form feed.
fn is_space_byte(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}
