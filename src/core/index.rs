//! Message id lookup used for reply resolution.

use std::collections::HashMap;

use serde_json::Value;

use crate::message::TelegramMessage;

/// Maps message ids to their position in the `messages` array.
///
/// Every object record with an integer `id` is indexed, service messages
/// included, so a reply can always find its target. When ids collide the
/// last occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct MessageIndex {
    positions: HashMap<i64, usize>,
}

impl MessageIndex {
    /// Builds the index in one pass over `messages`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::json;
    /// use tgtranscript::core::MessageIndex;
    ///
    /// let messages = vec![json!({"id": 10}), json!("junk"), json!({"id": 12})];
    /// let index = MessageIndex::build(&messages);
    ///
    /// assert_eq!(index.position(12), Some(2));
    /// assert_eq!(index.position(11), None);
    /// ```
    pub fn build(messages: &[Value]) -> Self {
        let positions = messages
            .iter()
            .enumerate()
            .filter_map(|(position, value)| {
                TelegramMessage::from_value(value)
                    .and_then(|msg| msg.id())
                    .map(|id| (id, position))
            })
            .collect();
        Self { positions }
    }

    /// Position of the message with `id`, if indexed.
    pub fn position(&self, id: i64) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Number of distinct ids.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if no message carried an id.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
