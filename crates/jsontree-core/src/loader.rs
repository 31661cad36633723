//! Read a document from disk.

use std::path::Path;

use crate::error::JsonError;
use crate::parser::{parse_with_options, ParseOptions};
use crate::result::ParseResult;

/// Read `path` verbatim and parse it with default options.
///
/// The file is read as-is; whitespace, including line breaks inside string
/// literals, is handed to the parser untouched. An unreadable file or invalid
/// UTF-8 yields a failed [`ParseResult`] carrying [`JsonError::Io`].
pub fn load_file(path: impl AsRef<Path>) -> ParseResult {
    load_file_with_options(path, ParseOptions::default())
}

pub fn load_file_with_options(path: impl AsRef<Path>, options: ParseOptions) -> ParseResult {
    let path = path.as_ref();
    tracing::trace!(path = %path.display(), "loading document");
    match std::fs::read_to_string(path) {
        Ok(text) => parse_with_options(&text, options),
        Err(source) => ParseResult::failure(JsonError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_io_error() {
        let result = load_file("/nonexistent/jsontree/missing.json");
        assert!(matches!(result.error(), Some(JsonError::Io { .. })));
        assert!(result.into_value().is_null());
    }

    #[test]
    fn newlines_inside_strings_survive() {
        let path = std::env::temp_dir().join("jsontree-loader-newline.json");
        std::fs::write(&path, "{\"text\": \"two\n  lines\"}").unwrap();
        let value = load_file(&path).into_result().unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(value["text"].get_string().unwrap(), "two\n  lines");
    }
}
