//! Whole-export rendering and transcript output.

use std::fmt;
use std::io::Write;

use super::formatter::{Formatter, MessageOutcome, SkipReason, TranscriptState};
use super::index::MessageIndex;
use crate::config::TranscriptConfig;
use crate::error::Result;
use crate::loader::ChatExport;
use crate::progress::{ProgressCallback, ProgressTicker};

/// Counters collected while rendering an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranscriptStats {
    /// Records in the `messages` array.
    pub total: usize,
    /// Messages that produced output.
    pub emitted: usize,
    /// Messages rendered without a sender prefix.
    pub continuations: usize,
    /// `### DATE:` separators printed.
    pub dated: usize,
    /// Bare `###` separators printed.
    pub separated: usize,
    /// Messages rendered as replies.
    pub replies: usize,
    /// Service messages skipped.
    pub service: usize,
    /// Records skipped because they were not objects or had no body.
    pub empty: usize,
    /// Messages skipped for a missing field (lenient runs only).
    pub broken: usize,
}

impl TranscriptStats {
    fn record(&mut self, outcome: MessageOutcome) {
        match outcome {
            MessageOutcome::Skip(SkipReason::Service) => self.service += 1,
            MessageOutcome::Skip(SkipReason::Malformed | SkipReason::EmptyBody) => {
                self.empty += 1;
            }
            MessageOutcome::Skip(SkipReason::MissingField(_)) => self.broken += 1,
            MessageOutcome::Continuation => self.continuations += 1,
            MessageOutcome::Dated { reply } => {
                self.dated += 1;
                self.replies += usize::from(reply);
            }
            MessageOutcome::Separated { reply } => {
                self.separated += 1;
                self.replies += usize::from(reply);
            }
        }
        if outcome.is_visible() {
            self.emitted += 1;
        }
    }

    /// Messages that produced no output.
    pub fn skipped(&self) -> usize {
        self.service + self.empty + self.broken
    }
}

/// A rendered transcript held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
    stats: TranscriptStats,
}

impl Transcript {
    /// The transcript lines, without terminators.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Counters collected while rendering.
    pub fn stats(&self) -> &TranscriptStats {
        &self.stats
    }

    /// Returns `true` if no message produced output.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Writes every line followed by `\n`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        for line in &self.lines {
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Returns the transcript as a single string.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Renders every message of `export` into a [`Transcript`].
///
/// Messages are indexed first, then formatted in export order; `progress`
/// is ticked once per record and always sees a final, complete snapshot,
/// even for an empty export. Nothing is written anywhere, so a fatal error
/// leaves the caller with no partial transcript.
///
/// # Example
///
/// ```rust
/// use tgtranscript::config::TranscriptConfig;
/// use tgtranscript::core::render_transcript;
/// use tgtranscript::loader::parse_export;
/// use tgtranscript::progress::no_progress;
///
/// let export = parse_export(r#"{"messages": [
///     {"id": 1, "from": "Alice", "from_id": "u1", "text": "hi", "date_unixtime": "1000"},
///     {"id": 2, "from": "Bob", "from_id": "u2", "text": "hey", "date_unixtime": "1060",
///      "reply_to_message_id": 1}
/// ]}"#)?;
///
/// let transcript = render_transcript(&export, &TranscriptConfig::default(), &no_progress())?;
/// assert_eq!(transcript.to_text(), "###\n[Alice]: hi\n###\n[Bob](-> Alice): hey\n");
/// assert_eq!(transcript.stats().replies, 1);
/// # Ok::<(), tgtranscript::TranscriptError>(())
/// ```
pub fn render_transcript(
    export: &ChatExport,
    config: &TranscriptConfig,
    progress: &ProgressCallback,
) -> Result<Transcript> {
    let messages = export.messages();
    let index = MessageIndex::build(messages);
    if index.is_empty() {
        log::debug!("no message ids found, replies will not resolve");
    } else {
        log::debug!("indexed {} message ids", index.len());
    }

    let formatter = Formatter::new(messages, &index, config);
    let mut state = TranscriptState::new();
    let mut lines = Vec::with_capacity(messages.len() * 2);
    let mut stats = TranscriptStats {
        total: messages.len(),
        ..TranscriptStats::default()
    };
    let mut ticker = ProgressTicker::new(messages.len());

    for position in 0..messages.len() {
        let outcome = formatter.step(position, &mut state, &mut lines)?;
        stats.record(outcome);
        ticker.tick(progress);
    }
    ticker.finish(progress);

    Ok(Transcript { lines, stats })
}
