//! Message-to-line transformation.
//!
//! [`Formatter::step`] renders one message at a time. Everything that has
//! to survive between messages lives in [`TranscriptState`], which the
//! caller threads through the calls, so a single message can be rendered
//! and inspected in isolation.
//!
//! Each message ends in exactly one [`MessageOutcome`]:
//!
//! | Outcome | Lines |
//! |---------|-------|
//! | [`Skip`](MessageOutcome::Skip) | none |
//! | [`Continuation`](MessageOutcome::Continuation) | `<body>` |
//! | [`Dated`](MessageOutcome::Dated) | `### DATE: <date>` + message line |
//! | [`Separated`](MessageOutcome::Separated) | `###` + message line |

use serde_json::Value;

use super::index::MessageIndex;
use crate::config::TranscriptConfig;
use crate::error::{Result, TranscriptError};
use crate::message::TelegramMessage;

/// Bare separator line.
pub const SEPARATOR: &str = "###";

/// Prefix of a date separator line.
pub const DATE_PREFIX: &str = "### DATE: ";

/// State carried from one message to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscriptState {
    /// `from_id` of the last message that produced output; empty after a
    /// skipped message.
    pub previous_sender_key: String,
    /// `date_unixtime` of the last message that produced output.
    pub previous_timestamp: i64,
    /// Bare separators printed since the last date separator.
    pub no_date_count: u32,
}

impl TranscriptState {
    /// Creates the state for the start of a transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ends the current sender run so the next message gets a prefix.
    fn break_run(&mut self) {
        self.previous_sender_key.clear();
    }
}

/// Why a message produced no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The record is not a JSON object.
    Malformed,
    /// `type` is `"service"`.
    Service,
    /// No text, caption or media placeholder could be derived.
    EmptyBody,
    /// A required field was missing and the run is lenient.
    MissingField(&'static str),
}

/// What a single message contributed to the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageOutcome {
    /// Nothing was emitted.
    Skip(SkipReason),
    /// Body only, same sender as the previous message.
    Continuation,
    /// Date separator followed by the message line.
    Dated {
        /// The message replies to a resolvable sender.
        reply: bool,
    },
    /// Bare separator followed by the message line.
    Separated {
        /// The message replies to a resolvable sender.
        reply: bool,
    },
}

impl MessageOutcome {
    /// Returns `true` if the message produced at least one line.
    pub fn is_visible(&self) -> bool {
        !matches!(self, MessageOutcome::Skip(_))
    }

    /// Number of lines the message produced.
    pub fn line_count(&self) -> usize {
        match self {
            MessageOutcome::Skip(_) => 0,
            MessageOutcome::Continuation => 1,
            MessageOutcome::Dated { .. } | MessageOutcome::Separated { .. } => 2,
        }
    }
}

/// How a visible message opens.
enum Opening<'a> {
    Continuation,
    Date(&'a str),
    Separator,
}

/// Everything needed to emit a message, computed before any state changes.
struct Rendered<'a> {
    body: String,
    sender: &'a str,
    sender_key: &'a str,
    reply_target: Option<&'a str>,
    timestamp: i64,
    opening: Opening<'a>,
}

/// Renders messages of one export into transcript lines.
#[derive(Debug, Clone, Copy)]
pub struct Formatter<'a> {
    messages: &'a [Value],
    index: &'a MessageIndex,
    config: &'a TranscriptConfig,
}

impl<'a> Formatter<'a> {
    /// Creates a formatter over `messages`.
    ///
    /// `index` must have been built from the same `messages` slice.
    pub fn new(
        messages: &'a [Value],
        index: &'a MessageIndex,
        config: &'a TranscriptConfig,
    ) -> Self {
        Self {
            messages,
            index,
            config,
        }
    }

    /// Renders the message at `position`, appending its lines to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`TranscriptError::MissingField`] when a visible message lacks
    /// `date_unixtime`, lacks `date` while a date separator is due, or is a
    /// sticker without `sticker_emoji`, unless the config is lenient. On
    /// error neither `state` nor `out` is modified.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::json;
    /// use tgtranscript::config::TranscriptConfig;
    /// use tgtranscript::core::{Formatter, MessageIndex, MessageOutcome, TranscriptState};
    ///
    /// let messages = vec![
    ///     json!({"from": "Alice", "from_id": "u1", "text": "a", "date_unixtime": "10"}),
    ///     json!({"from": "Alice", "from_id": "u1", "text": "b", "date_unixtime": "20"}),
    /// ];
    /// let index = MessageIndex::build(&messages);
    /// let config = TranscriptConfig::default();
    /// let formatter = Formatter::new(&messages, &index, &config);
    ///
    /// let mut state = TranscriptState::new();
    /// let mut lines = Vec::new();
    /// formatter.step(0, &mut state, &mut lines)?;
    /// let second = formatter.step(1, &mut state, &mut lines)?;
    ///
    /// assert_eq!(second, MessageOutcome::Continuation);
    /// assert_eq!(lines, ["###", "[Alice]: a", "b"]);
    /// # Ok::<(), tgtranscript::TranscriptError>(())
    /// ```
    pub fn step(
        &self,
        position: usize,
        state: &mut TranscriptState,
        out: &mut Vec<String>,
    ) -> Result<MessageOutcome> {
        let Some(msg) = self.messages.get(position).and_then(TelegramMessage::from_value) else {
            log::debug!("message #{position}: not an object, skipped");
            state.break_run();
            return Ok(MessageOutcome::Skip(SkipReason::Malformed));
        };

        if msg.is_service() {
            state.break_run();
            return Ok(MessageOutcome::Skip(SkipReason::Service));
        }

        let rendered = match self.prepare(position, msg, state) {
            Ok(Some(rendered)) => rendered,
            Ok(None) => {
                state.break_run();
                return Ok(MessageOutcome::Skip(SkipReason::EmptyBody));
            }
            Err(TranscriptError::MissingField { field, .. }) if !self.config.strict => {
                log::warn!(
                    "skipping message #{position}{}: no '{field}' member",
                    msg.id().map(|id| format!(" (id {id})")).unwrap_or_default()
                );
                state.break_run();
                return Ok(MessageOutcome::Skip(SkipReason::MissingField(field)));
            }
            Err(e) => return Err(e),
        };

        Ok(Self::emit(rendered, state, out))
    }

    /// Derives everything about a message without touching `state`.
    ///
    /// Returns `Ok(None)` when the message has no body to show.
    fn prepare(
        &self,
        position: usize,
        msg: TelegramMessage<'a>,
        state: &TranscriptState,
    ) -> Result<Option<Rendered<'a>>> {
        let body = derive_body(position, msg)?;
        if body.is_empty() {
            return Ok(None);
        }

        let sender = msg.sender();
        let sender_key = msg.from_id();
        let reply_target = self.resolve_reply(msg);

        let timestamp = msg
            .unix_time()
            .ok_or_else(|| TranscriptError::missing_field("date_unixtime", position, msg.id()))?;
        let show_date =
            timestamp.saturating_sub(state.previous_timestamp) > self.config.min_time_gap;

        let continues_run = reply_target.is_none()
            && !sender_key.is_empty()
            && sender_key == state.previous_sender_key;

        let opening = if continues_run {
            Opening::Continuation
        } else if show_date || state.no_date_count > self.config.max_no_date_run {
            let date = msg
                .date()
                .ok_or_else(|| TranscriptError::missing_field("date", position, msg.id()))?;
            Opening::Date(date)
        } else {
            Opening::Separator
        };

        Ok(Some(Rendered {
            body,
            sender,
            sender_key,
            reply_target,
            timestamp,
            opening,
        }))
    }

    /// Looks up the sender of the message this one replies to.
    fn resolve_reply(&self, msg: TelegramMessage<'a>) -> Option<&'a str> {
        let position = self.index.position(msg.reply_to()?)?;
        let target = TelegramMessage::from_value(self.messages.get(position)?)?;
        target.from_name()
    }

    fn emit(
        rendered: Rendered<'_>,
        state: &mut TranscriptState,
        out: &mut Vec<String>,
    ) -> MessageOutcome {
        state.previous_timestamp = rendered.timestamp;
        let reply = rendered.reply_target.is_some();

        let outcome = match rendered.opening {
            Opening::Continuation => {
                out.push(rendered.body);
                MessageOutcome::Continuation
            }
            Opening::Date(date) => {
                state.no_date_count = 0;
                out.push(format!("{DATE_PREFIX}{date}"));
                out.push(message_line(rendered.sender, rendered.reply_target, &rendered.body));
                MessageOutcome::Dated { reply }
            }
            Opening::Separator => {
                state.no_date_count += 1;
                out.push(SEPARATOR.to_string());
                out.push(message_line(rendered.sender, rendered.reply_target, &rendered.body));
                MessageOutcome::Separated { reply }
            }
        };

        state.previous_sender_key.clear();
        state.previous_sender_key.push_str(rendered.sender_key);
        outcome
    }
}

/// Builds the display text of a message from its text and media fields.
///
/// Photos prefix the caption with `*photo* `. Messages that still have no
/// text get a placeholder for stickers, videos and GIFs; any other message
/// yields an empty string.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tgtranscript::core::formatter::derive_body;
/// use tgtranscript::message::TelegramMessage;
///
/// let value = json!({"photo": "photos/1.jpg", "text": "sunset"});
/// let msg = TelegramMessage::from_value(&value).unwrap();
/// assert_eq!(derive_body(0, msg)?, "*photo* sunset");
///
/// let value = json!({"media_type": "animation", "text": ""});
/// let msg = TelegramMessage::from_value(&value).unwrap();
/// assert_eq!(derive_body(0, msg)?, "*gif*");
/// # Ok::<(), tgtranscript::TranscriptError>(())
/// ```
pub fn derive_body(position: usize, msg: TelegramMessage<'_>) -> Result<String> {
    let mut body = msg.text().map(|text| text.concat()).unwrap_or_default();

    if msg.has_photo() {
        body.insert_str(0, "*photo* ");
    }

    if body.is_empty() {
        match msg.media_type() {
            Some("sticker") => {
                let emoji = msg.sticker_emoji().ok_or_else(|| {
                    TranscriptError::missing_field("sticker_emoji", position, msg.id())
                })?;
                body = format!("*sticker {emoji}*");
            }
            Some("video_file") => body.push_str("*video*"),
            Some("animation") => body.push_str("*gif*"),
            _ => {}
        }
    }

    Ok(body)
}

/// Formats a message line with its sender prefix.
///
/// ```rust
/// use tgtranscript::core::formatter::message_line;
///
/// assert_eq!(message_line("Bob", None, "hi"), "[Bob]: hi");
/// assert_eq!(message_line("Bob", Some("Alice"), "hi"), "[Bob](-> Alice): hi");
/// ```
pub fn message_line(sender: &str, reply_target: Option<&str>, body: &str) -> String {
    match reply_target {
        Some(target) => format!("[{sender}](-> {target}): {body}"),
        None => format!("[{sender}]: {body}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(
        messages: &[Value],
        config: &TranscriptConfig,
    ) -> Result<(Vec<String>, Vec<MessageOutcome>)> {
        let index = MessageIndex::build(messages);
        let formatter = Formatter::new(messages, &index, config);
        let mut state = TranscriptState::new();
        let mut lines = Vec::new();
        let mut outcomes = Vec::new();
        for position in 0..messages.len() {
            outcomes.push(formatter.step(position, &mut state, &mut lines)?);
        }
        Ok((lines, outcomes))
    }

    fn msg(id: i64, from: &str, from_id: &str, text: &str, time: i64) -> Value {
        json!({
            "id": id,
            "type": "message",
            "date": format!("date-{time}"),
            "date_unixtime": time.to_string(),
            "from": from,
            "from_id": from_id,
            "text": text,
        })
    }

    #[test]
    fn test_first_message_within_gap_gets_bare_separator() {
        let messages = vec![msg(1, "Alice", "u1", "hi", 1000)];
        let (lines, outcomes) = run(&messages, &TranscriptConfig::default()).unwrap();
        assert_eq!(lines, ["###", "[Alice]: hi"]);
        assert_eq!(outcomes, [MessageOutcome::Separated { reply: false }]);
    }

    #[test]
    fn test_first_message_after_gap_gets_date() {
        let messages = vec![msg(1, "Alice", "u1", "hi", 1705314600)];
        let (lines, _) = run(&messages, &TranscriptConfig::default()).unwrap();
        assert_eq!(lines, ["### DATE: date-1705314600", "[Alice]: hi"]);
    }

    #[test]
    fn test_same_sender_is_compacted() {
        let messages = vec![msg(1, "Alice", "u1", "a", 100), msg(2, "Alice", "u1", "b", 200)];
        let (lines, outcomes) = run(&messages, &TranscriptConfig::default()).unwrap();
        assert_eq!(lines, ["###", "[Alice]: a", "b"]);
        assert_eq!(outcomes[1], MessageOutcome::Continuation);
    }

    #[test]
    fn test_compaction_ignores_time_gap() {
        let messages = vec![msg(1, "Alice", "u1", "a", 100), msg(2, "Alice", "u1", "b", 100_000)];
        let (lines, _) = run(&messages, &TranscriptConfig::default()).unwrap();
        assert_eq!(lines, ["###", "[Alice]: a", "b"]);
    }

    #[test]
    fn test_empty_sender_key_never_compacts() {
        let messages = vec![msg(1, "Alice", "", "a", 100), msg(2, "Alice", "", "b", 200)];
        let (lines, _) = run(&messages, &TranscriptConfig::default()).unwrap();
        assert_eq!(lines, ["###", "[Alice]: a", "###", "[Alice]: b"]);
    }

    #[test]
    fn test_different_senders_get_separators() {
        let messages = vec![msg(1, "Alice", "u1", "a", 100), msg(2, "Bob", "u2", "b", 200)];
        let (lines, _) = run(&messages, &TranscriptConfig::default()).unwrap();
        assert_eq!(lines, ["###", "[Alice]: a", "###", "[Bob]: b"]);
    }

    #[test]
    fn test_gap_exactly_min_is_not_a_date() {
        let messages = vec![msg(1, "Alice", "u1", "a", 100), msg(2, "Bob", "u2", "b", 3700)];
        let (lines, _) = run(&messages, &TranscriptConfig::default()).unwrap();
        assert_eq!(lines[2], "###");

        let messages = vec![msg(1, "Alice", "u1", "a", 100), msg(2, "Bob", "u2", "b", 3701)];
        let (lines, _) = run(&messages, &TranscriptConfig::default()).unwrap();
        assert_eq!(lines[2], "### DATE: date-3701");
    }

    #[test]
    fn test_reply_resolves_sender() {
        let mut reply = msg(2, "Bob", "u2", "yes", 200);
        reply["reply_to_message_id"] = json!(1);
        let messages = vec![msg(1, "Alice", "u1", "really?", 100), reply];
        let (lines, outcomes) = run(&messages, &TranscriptConfig::default()).unwrap();
        assert_eq!(lines[3], "[Bob](-> Alice): yes");
        assert_eq!(outcomes[1], MessageOutcome::Separated { reply: true });
    }

    #[test]
    fn test_reply_breaks_compaction() {
        let mut reply = msg(2, "Alice", "u1", "also", 200);
        reply["reply_to_message_id"] = json!(1);
        let messages = vec![msg(1, "Alice", "u1", "first", 100), reply];
        let (lines, _) = run(&messages, &TranscriptConfig::default()).unwrap();
        assert_eq!(lines, ["###", "[Alice]: first", "###", "[Alice](-> Alice): also"]);
    }

    #[test]
    fn test_reply_to_missing_id_is_plain() {
        let mut reply = msg(2, "Bob", "u2", "what?", 200);
        reply["reply_to_message_id"] = json!(999);
        let messages = vec![reply];
        let (lines, _) = run(&messages, &TranscriptConfig::default()).unwrap();
        assert_eq!(lines, ["###", "[Bob]: what?"]);
    }

    #[test]
    fn test_reply_to_target_without_from_is_plain() {
        let mut reply = msg(2, "Bob", "u2", "welcome", 200);
        reply["reply_to_message_id"] = json!(1);
        let messages = vec![
            json!({"id": 1, "type": "service", "actor": "Alice", "action": "join_group_by_link"}),
            reply,
        ];
        let (lines, _) = run(&messages, &TranscriptConfig::default()).unwrap();
        assert_eq!(lines, ["###", "[Bob]: welcome"]);
    }

    #[test]
    fn test_reply_can_point_forward() {
        let mut reply = msg(1, "Bob", "u2", "early", 100);
        reply["reply_to_message_id"] = json!(2);
        let messages = vec![reply, msg(2, "Alice", "u1", "late", 200)];
        let (lines, _) = run(&messages, &TranscriptConfig::default()).unwrap();
        assert_eq!(lines[1], "[Bob](-> Alice): early");
    }

    #[test]
    fn test_service_message_is_skipped_and_breaks_run() {
        let messages = vec![
            msg(1, "Alice", "u1", "a", 100),
            json!({"id": 2, "type": "service", "from": "Alice", "from_id": "u1", "text": "pinned"}),
            msg(3, "Alice", "u1", "b", 200),
        ];
        let (lines, outcomes) = run(&messages, &TranscriptConfig::default()).unwrap();
        assert_eq!(outcomes[1], MessageOutcome::Skip(SkipReason::Service));
        assert_eq!(lines, ["###", "[Alice]: a", "###", "[Alice]: b"]);
    }

    #[test]
    fn test_malformed_record_is_skipped() {
        let messages = vec![json!("oops"), json!(null), msg(1, "Alice", "u1", "a", 100)];
        let (lines, outcomes) = run(&messages, &TranscriptConfig::default()).unwrap();
        assert_eq!(outcomes[0], MessageOutcome::Skip(SkipReason::Malformed));
        assert_eq!(outcomes[1], MessageOutcome::Skip(SkipReason::Malformed));
        assert_eq!(lines, ["###", "[Alice]: a"]);
    }

    #[test]
    fn test_empty_body_skipped_without_timestamp_check() {
        let messages = vec![json!({"type": "message", "from": "Alice", "text": ""})];
        let (lines, outcomes) = run(&messages, &TranscriptConfig::default()).unwrap();
        assert!(lines.is_empty());
        assert_eq!(outcomes, [MessageOutcome::Skip(SkipReason::EmptyBody)]);
    }

    #[test]
    fn test_empty_body_breaks_run_but_keeps_timestamp() {
        let messages = vec![
            msg(1, "Alice", "u1", "a", 100),
            json!({
                "id": 2,
                "from": "Alice",
                "from_id": "u1",
                "text": "",
                "media_type": "voice_message",
                "date_unixtime": "99999"
            }),
            msg(3, "Alice", "u1", "b", 200),
        ];
        let (lines, _) = run(&messages, &TranscriptConfig::default()).unwrap();
        assert_eq!(lines, ["###", "[Alice]: a", "###", "[Alice]: b"]);
    }

    #[test]
    fn test_unknown_sender() {
        let messages = vec![json!({"text": "anon", "date_unixtime": "5"})];
        let (lines, _) = run(&messages, &TranscriptConfig::default()).unwrap();
        assert_eq!(lines, ["###", "[unknown]: anon"]);
    }

    #[test]
    fn test_forced_redate_after_long_bare_run() {
        let config = TranscriptConfig::default().with_max_no_date_run(3);
        let messages: Vec<Value> = (0..6)
            .map(|i| {
                let (from, key) = if i % 2 == 0 { ("Alice", "u1") } else { ("Bob", "u2") };
                msg(i, from, key, "x", 10 + i)
            })
            .collect();
        let (lines, outcomes) = run(&messages, &config).unwrap();
        let separators: Vec<&str> = lines.iter().step_by(2).map(String::as_str).collect();
        assert_eq!(separators, ["###", "###", "###", "###", "### DATE: date-14", "###"]);
        assert_eq!(outcomes[4], MessageOutcome::Dated { reply: false });
    }

    #[test]
    fn test_missing_unixtime_is_fatal() {
        let messages = vec![json!({"from": "Alice", "text": "hi", "date": "today"})];
        let err = run(&messages, &TranscriptConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            TranscriptError::MissingField { field: "date_unixtime", position: 0, .. }
        ));
    }

    #[test]
    fn test_unparseable_unixtime_is_fatal() {
        let messages = vec![json!({"from": "Alice", "text": "hi", "date_unixtime": "noon"})];
        let err = run(&messages, &TranscriptConfig::default()).unwrap_err();
        assert!(err.is_missing_field());
    }

    #[test]
    fn test_missing_date_only_fatal_when_due() {
        let messages = vec![json!({"from": "Alice", "text": "hi", "date_unixtime": "10"})];
        assert!(run(&messages, &TranscriptConfig::default()).is_ok());

        let messages = vec![json!({"from": "Alice", "text": "hi", "date_unixtime": "100000"})];
        let err = run(&messages, &TranscriptConfig::default()).unwrap_err();
        assert!(matches!(err, TranscriptError::MissingField { field: "date", .. }));
    }

    #[test]
    fn test_sticker_without_emoji_is_fatal() {
        let messages = vec![json!({
            "id": 4, "from": "Alice", "text": "", "media_type": "sticker", "date_unixtime": "10"
        })];
        let err = run(&messages, &TranscriptConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            TranscriptError::MissingField { field: "sticker_emoji", id: Some(4), .. }
        ));
    }

    #[test]
    fn test_lenient_skips_broken_message_and_leaves_state() {
        let config = TranscriptConfig::lenient();
        let messages = vec![
            msg(1, "Alice", "u1", "a", 100),
            json!({
                "from": "Alice",
                "from_id": "u1",
                "text": "",
                "media_type": "sticker",
                "date_unixtime": "500000"
            }),
            msg(3, "Bob", "u2", "b", 200),
        ];
        let index = MessageIndex::build(&messages);
        let formatter = Formatter::new(&messages, &index, &config);
        let mut state = TranscriptState::new();
        let mut lines = Vec::new();

        formatter.step(0, &mut state, &mut lines).unwrap();
        let outcome = formatter.step(1, &mut state, &mut lines).unwrap();
        assert_eq!(outcome, MessageOutcome::Skip(SkipReason::MissingField("sticker_emoji")));
        assert_eq!(state.previous_timestamp, 100);
        assert!(state.previous_sender_key.is_empty());

        formatter.step(2, &mut state, &mut lines).unwrap();
        assert_eq!(lines, ["###", "[Alice]: a", "###", "[Bob]: b"]);
    }

    #[test]
    fn test_failed_step_does_not_touch_state() {
        let messages = vec![
            msg(1, "Alice", "u1", "a", 100),
            json!({"from": "Bob", "from_id": "u2", "text": "late", "date_unixtime": "900000"}),
        ];
        let config = TranscriptConfig::default();
        let index = MessageIndex::build(&messages);
        let formatter = Formatter::new(&messages, &index, &config);
        let mut state = TranscriptState::new();
        let mut lines = Vec::new();

        formatter.step(0, &mut state, &mut lines).unwrap();
        let before = state.clone();
        assert!(formatter.step(1, &mut state, &mut lines).is_err());
        assert_eq!(state, before);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_derive_body_media_placeholders() {
        let cases = [
            (json!({"media_type": "sticker", "sticker_emoji": "😀"}), "*sticker 😀*"),
            (json!({"media_type": "video_file"}), "*video*"),
            (json!({"media_type": "animation", "text": []}), "*gif*"),
            (json!({"media_type": "voice_message"}), ""),
            (json!({"photo": "p.jpg", "text": ""}), "*photo* "),
            (json!({"media_type": "video_file", "text": "caption"}), "caption"),
        ];
        for (value, expected) in cases {
            let msg = TelegramMessage::from_value(&value).unwrap();
            assert_eq!(derive_body(0, msg).unwrap(), expected, "{value}");
        }
    }

    #[test]
    fn test_outcome_line_counts() {
        assert_eq!(MessageOutcome::Skip(SkipReason::Service).line_count(), 0);
        assert_eq!(MessageOutcome::Continuation.line_count(), 1);
        assert_eq!(MessageOutcome::Dated { reply: true }.line_count(), 2);
        assert!(MessageOutcome::Separated { reply: false }.is_visible());
        assert!(!MessageOutcome::Skip(SkipReason::EmptyBody).is_visible());
    }
}
