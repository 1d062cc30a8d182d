//! Unified error types for tgtranscript.
//!
//! A single [`TranscriptError`] enum covers every failure the pipeline can
//! report. Loading can fail with [`TranscriptError::Parse`] or
//! [`TranscriptError::Schema`]; rendering can fail with
//! [`TranscriptError::MissingField`] when a visible message lacks a field
//! the transcript needs.

use std::io;

use serde_json::error::Category;
use thiserror::Error;

/// A specialized [`Result`] type for tgtranscript operations.
///
/// # Example
///
/// ```rust
/// use tgtranscript::error::Result;
///
/// fn count_lines(text: &str) -> Result<usize> {
///     Ok(text.lines().count())
/// }
/// # assert_eq!(count_lines("a\nb").unwrap(), 2);
/// ```
pub type Result<T> = std::result::Result<T, TranscriptError>;

/// The error type for all tgtranscript operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TranscriptError {
    /// An I/O error occurred while reading input or writing the transcript.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input is not well-formed JSON.
    ///
    /// `offset` is the byte offset of the failure inside the input,
    /// `line`/`column` are 1-based as reported by `serde_json`.
    #[error("JSON parsing failed at byte {offset} (line {line}, column {column}): {source}")]
    Parse {
        /// Byte offset of the failure
        offset: usize,
        /// 1-based line number
        line: usize,
        /// 1-based column number
        column: usize,
        /// Error category reported by the parser
        category: &'static str,
        /// The underlying parser error
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but does not have the expected shape.
    #[error("Invalid export: {message}")]
    Schema {
        /// Description of what's wrong
        message: String,
    },

    /// A message lacks a field required to render it.
    #[error(
        "message #{position}{} has no '{field}' member",
        id.as_ref().map(|id| format!(" (id {id})")).unwrap_or_default()
    )]
    MissingField {
        /// Name of the missing JSON member
        field: &'static str,
        /// Position of the message inside the `messages` array
        position: usize,
        /// The message id, when it has one
        id: Option<i64>,
    },

    /// The token encoder could not be initialized.
    #[error("Tokenizer error: {0}")]
    Tokenizer(String),
}

impl TranscriptError {
    /// Builds a [`TranscriptError::Parse`] from a `serde_json` error.
    ///
    /// `input` must be the bytes that were handed to the parser; they are
    /// used to turn the reported line/column into a byte offset.
    pub fn from_json(source: serde_json::Error, input: &[u8]) -> Self {
        let line = source.line();
        let column = source.column();
        TranscriptError::Parse {
            offset: byte_offset(input, line, column),
            line,
            column,
            category: category_name(source.classify()),
            source,
        }
    }

    /// Creates a schema error.
    pub fn schema(message: impl Into<String>) -> Self {
        TranscriptError::Schema {
            message: message.into(),
        }
    }

    /// Creates a missing-field error.
    pub fn missing_field(field: &'static str, position: usize, id: Option<i64>) -> Self {
        TranscriptError::MissingField {
            field,
            position,
            id,
        }
    }

    /// Creates a tokenizer error.
    pub fn tokenizer(message: impl Into<String>) -> Self {
        TranscriptError::Tokenizer(message.into())
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, TranscriptError::Io(_))
    }

    /// Returns `true` if this is a JSON parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, TranscriptError::Parse { .. })
    }

    /// Returns `true` if this is a schema error.
    pub fn is_schema(&self) -> bool {
        matches!(self, TranscriptError::Schema { .. })
    }

    /// Returns `true` if this is a missing-field error.
    pub fn is_missing_field(&self) -> bool {
        matches!(self, TranscriptError::MissingField { .. })
    }
}

fn category_name(category: Category) -> &'static str {
    match category {
        Category::Io => "io",
        Category::Syntax => "syntax",
        Category::Data => "data",
        Category::Eof => "eof",
    }
}

/// Converts serde_json's 1-based line and column into a byte offset.
///
/// serde_json counts columns in bytes; a column of 0 means the error sits
/// right after the newline ending the previous line.
fn byte_offset(input: &[u8], line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }
    let line_start: usize = input
        .split_inclusive(|&byte| byte == b'\n')
        .take(line - 1)
        .map(<[u8]>::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(input.len())
}

// ============================================================================
// Tests
// ============================================================================
