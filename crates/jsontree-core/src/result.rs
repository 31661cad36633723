//! `ParseResult`: the outcome of parsing a document.

use crate::error::{JsonError, Result};
use crate::types::Value;

/// Either the parsed [`Value`] or the error that aborted the parse.
///
/// A failed parse never carries a partial tree. Extracting the value from a
/// failed result with [`ParseResult::into_value`] yields `Null` instead of
/// panicking, so check [`ParseResult::is_error`] first.
#[derive(Debug)]
#[must_use]
pub struct ParseResult {
    inner: Result<Value>,
}

impl ParseResult {
    /// A successful parse holding `value`.
    pub fn success(value: Value) -> Self {
        Self { inner: Ok(value) }
    }

    /// A failed parse holding `error`.
    pub fn failure(error: JsonError) -> Self {
        Self { inner: Err(error) }
    }

    /// True when the parse failed.
    pub fn is_error(&self) -> bool {
        self.inner.is_err()
    }

    /// True when the parse produced a value.
    pub fn is_ok(&self) -> bool {
        self.inner.is_ok()
    }

    /// The error, if the parse failed.
    pub fn error(&self) -> Option<&JsonError> {
        self.inner.as_ref().err()
    }

    /// Human-readable description of the failure, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    /// The parsed value, if the parse succeeded.
    pub fn value(&self) -> Option<&Value> {
        self.inner.as_ref().ok()
    }

    /// The parsed value, or `Null` when the parse failed.
    pub fn into_value(self) -> Value {
        self.inner.unwrap_or_default()
    }

    pub fn into_result(self) -> Result<Value> {
        self.inner
    }
}

impl From<Result<Value>> for ParseResult {
    fn from(inner: Result<Value>) -> Self {
        Self { inner }
    }
}

impl From<ParseResult> for Result<Value> {
    fn from(result: ParseResult) -> Self {
        result.inner
    }
}
