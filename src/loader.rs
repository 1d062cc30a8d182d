//! Loading Telegram JSON exports.
//!
//! Telegram Desktop exports a chat as a JSON document with this shape:
//!
//! ```json
//! {
//!   "name": "Chat Name",
//!   "type": "personal_chat",
//!   "messages": [
//!     {
//!       "id": 12345,
//!       "type": "message",
//!       "date": "2024-01-15T10:30:00",
//!       "date_unixtime": "1705314600",
//!       "from": "Sender Name",
//!       "from_id": "user123",
//!       "text": "Hello" | ["Hello", {"type": "link", "text": "url"}],
//!       "reply_to_message_id": 12344
//!     }
//!   ]
//! }
//! ```
//!
//! The whole document is read into memory and parsed at once. Only the
//! `messages` array is required; individual messages stay as untyped
//! [`Value`]s and are interpreted lazily by
//! [`TelegramMessage`](crate::message::TelegramMessage).

use std::io::Read;

use serde_json::Value;

use crate::error::{Result, TranscriptError};

/// A parsed export whose top-level shape has been validated.
#[derive(Debug, Clone)]
pub struct ChatExport {
    name: Option<String>,
    messages: Vec<Value>,
}

impl ChatExport {
    /// Creates an export from an already parsed message list.
    pub fn new(messages: Vec<Value>) -> Self {
        Self {
            name: None,
            messages,
        }
    }

    /// Chat title, when the export carries a string `name`.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The raw message records, in export order.
    pub fn messages(&self) -> &[Value] {
        &self.messages
    }

    /// Number of records in the `messages` array.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if the `messages` array is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Reads `reader` to the end and parses it as an export.
///
/// The input is taken as raw bytes, so invalid UTF-8 surfaces as a
/// positioned [`TranscriptError::Parse`] rather than an I/O failure.
pub fn load_export<R: Read>(mut reader: R) -> Result<ChatExport> {
    let mut content = Vec::new();
    reader.read_to_end(&mut content)?;
    parse_export(content)
}

/// Parses an export from a string or byte buffer.
///
/// # Errors
///
/// - [`TranscriptError::Parse`] if `content` is not well-formed UTF-8 JSON
/// - [`TranscriptError::Schema`] if there is no top-level `messages` array
///
/// # Example
///
/// ```rust
/// use tgtranscript::loader::parse_export;
///
/// let export = parse_export(r#"{"name": "Chat", "messages": [{"id": 1}]}"#)?;
/// assert_eq!(export.len(), 1);
/// assert_eq!(export.name(), Some("Chat"));
///
/// assert!(parse_export(r#"{"chats": []}"#).unwrap_err().is_schema());
/// # Ok::<(), tgtranscript::TranscriptError>(())
/// ```
pub fn parse_export(content: impl AsRef<[u8]>) -> Result<ChatExport> {
    let content = content.as_ref();
    let document: Value =
        serde_json::from_slice(content).map_err(|e| TranscriptError::from_json(e, content))?;

    let Value::Object(mut root) = document else {
        return Err(TranscriptError::schema("top-level value is not an object"));
    };

    let messages = match root.remove("messages") {
        Some(Value::Array(messages)) => messages,
        Some(_) => return Err(TranscriptError::schema("'messages' is not an array")),
        None => return Err(TranscriptError::schema("missing 'messages' array")),
    };

    let name = match root.remove("name") {
        Some(Value::String(name)) => Some(name),
        _ => None,
    };

    log::debug!("loaded export with {} message records", messages.len());

    Ok(ChatExport { name, messages })
}
