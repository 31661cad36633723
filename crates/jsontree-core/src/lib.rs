//! # jsontree-core
//!
//! A mutable, dynamically-typed document tree for JSON-like data, with a
//! recursive-descent parser and a pretty printer.
//!
//! ## Quick start
//!
//! ```rust
//! use jsontree_core::{parse, Value};
//!
//! // Text → tree
//! let mut doc = parse(r#"{"name": "Alice", "scores": [95, 87]}"#).into_value();
//! assert_eq!(doc["scores"][1].get_int().unwrap(), 87);
//!
//! // Mutate in place; indexing through `&mut` creates missing entries
//! doc["scores"].push(92);
//! doc["tags"][1] = Value::from("rust");
//!
//! // Tree → text (object keys come out sorted)
//! let text = doc.dump();
//! assert!(text.starts_with("{\n    \"name\": \"Alice\""));
//! ```
//!
//! ## Modules
//!
//! - [`types`] — `Value`, `ValueType`, builders and conversions
//! - [`value`] — typed accessors, get-or-create access, `set_type`, `size`
//! - [`parser`] — text → `Value`
//! - [`serializer`] — `Value` → indented text
//! - [`result`] — `ParseResult`
//! - [`loader`] — read and parse a file
//! - [`error`] — error kinds

pub mod error;
pub mod loader;
pub mod parser;
pub mod result;
mod serde_impl;
pub mod serializer;
pub mod types;
pub mod value;

pub use error::{JsonError, Result};
pub use loader::{load_file, load_file_with_options};
pub use parser::{parse, parse_with_options, ParseOptions};
pub use result::ParseResult;
pub use serializer::{to_string_pretty, to_string_with_options, SerializeOptions};
pub use types::{Map, Value, ValueType};
