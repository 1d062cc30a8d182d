//! Read-only view over a single Telegram export message.
//!
//! Telegram exports are loosely typed: every field may be missing and some
//! fields change shape between messages (`text` is either a string or an
//! array of fragments). [`TelegramMessage`] borrows the parsed
//! [`serde_json::Value`] and exposes each field with the fallback the
//! transcript needs, so nothing is copied until a line is rendered.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use tgtranscript::message::{MessageText, TelegramMessage};
//!
//! let value = json!({
//!     "id": 7,
//!     "from": "Alice",
//!     "text": ["See ", {"type": "link", "text": "https://t.me"}]
//! });
//! let msg = TelegramMessage::from_value(&value).unwrap();
//!
//! assert_eq!(msg.id(), Some(7));
//! assert_eq!(msg.sender(), "Alice");
//! assert!(matches!(msg.text(), Some(MessageText::Fragments(_))));
//! assert_eq!(msg.text().unwrap().concat(), "See https://t.me");
//! ```

use serde_json::{Map, Value};

/// Sender name used when a message has no string `from`.
pub const UNKNOWN_SENDER: &str = "unknown";

/// Message `type` marking join/leave/pin notifications.
pub const SERVICE_TYPE: &str = "service";

/// One piece of a fragmented `text` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// A bare string element: `"Hello "`
    Plain(&'a str),
    /// An entity object carrying a `text` member: `{"type": "bold", "text": "Hi"}`
    Entity(&'a str),
}

impl<'a> Fragment<'a> {
    /// Interprets one element of a `text` array.
    ///
    /// Elements that are neither strings nor objects with a string `text`
    /// contribute nothing and yield `None`.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Fragment::Plain(s)),
            Value::Object(obj) => obj.get("text").and_then(Value::as_str).map(Fragment::Entity),
            _ => None,
        }
    }

    /// The text carried by this fragment.
    pub fn as_str(&self) -> &'a str {
        match self {
            Fragment::Plain(s) | Fragment::Entity(s) => *s,
        }
    }
}

/// The polymorphic `text` field of a Telegram message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageText<'a> {
    /// `"text": "Hello"`
    Plain(&'a str),
    /// `"text": ["Hello ", {"type": "bold", "text": "world"}]`
    Fragments(Vec<Fragment<'a>>),
}

impl<'a> MessageText<'a> {
    /// Interprets a `text` member. Values that are neither strings nor arrays
    /// yield `None`.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(MessageText::Plain(s)),
            Value::Array(items) => Some(MessageText::Fragments(
                items.iter().filter_map(Fragment::from_value).collect(),
            )),
            _ => None,
        }
    }

    /// Concatenates the text in order, with no separator.
    pub fn concat(&self) -> String {
        match self {
            MessageText::Plain(s) => (*s).to_string(),
            MessageText::Fragments(fragments) => {
                fragments.iter().map(Fragment::as_str).collect()
            }
        }
    }
}

/// Borrowed view over a message object inside a parsed export.
#[derive(Debug, Clone, Copy)]
pub struct TelegramMessage<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> TelegramMessage<'a> {
    /// Wraps a message value. Returns `None` if the value is not an object.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        value.as_object().map(|fields| Self { fields })
    }

    fn str_field(&self, name: &str) -> Option<&'a str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Integer `id`, if present.
    pub fn id(&self) -> Option<i64> {
        self.fields.get("id").and_then(Value::as_i64)
    }

    /// String `type`, if present.
    pub fn kind(&self) -> Option<&'a str> {
        self.str_field("type")
    }

    /// Returns `true` for service messages (joins, pins, calls...).
    pub fn is_service(&self) -> bool {
        self.kind() == Some(SERVICE_TYPE)
    }

    /// Display name of the sender, if `from` is a string.
    pub fn from_name(&self) -> Option<&'a str> {
        self.str_field("from")
    }

    /// Display name of the sender, falling back to [`UNKNOWN_SENDER`].
    pub fn sender(&self) -> &'a str {
        self.from_name().unwrap_or(UNKNOWN_SENDER)
    }

    /// Stable sender key; empty when `from_id` is missing or not a string.
    pub fn from_id(&self) -> &'a str {
        self.str_field("from_id").unwrap_or_default()
    }

    /// The `text` member, when it is a string or an array.
    pub fn text(&self) -> Option<MessageText<'a>> {
        self.fields.get("text").and_then(MessageText::from_value)
    }

    /// Returns `true` if the message carries a `photo` member of any shape.
    pub fn has_photo(&self) -> bool {
        self.fields.contains_key("photo")
    }

    /// String `media_type`, if present.
    pub fn media_type(&self) -> Option<&'a str> {
        self.str_field("media_type")
    }

    /// String `sticker_emoji`, if present.
    pub fn sticker_emoji(&self) -> Option<&'a str> {
        self.str_field("sticker_emoji")
    }

    /// Integer `reply_to_message_id`, if present.
    pub fn reply_to(&self) -> Option<i64> {
        self.fields.get("reply_to_message_id").and_then(Value::as_i64)
    }

    /// Parsed `date_unixtime`.
    ///
    /// Telegram stores the epoch as a decimal string like `"1705314600"`.
    /// Returns `None` when the member is missing, not a string, or not an
    /// integer.
    pub fn unix_time(&self) -> Option<i64> {
        self.str_field("date_unixtime")
            .and_then(|ts| ts.trim().parse::<i64>().ok())
    }

    /// Human-readable `date`, printed verbatim in date separators.
    pub fn date(&self) -> Option<&'a str> {
        self.str_field("date")
    }
}
