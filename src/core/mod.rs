//! Core transcript logic.
//!
//! This module contains:
//! - [`index`] - Message id lookup for reply resolution
//! - [`formatter`] - Per-message rendering and the state carried between messages
//! - [`transcript`] - Whole-export rendering and output
//!
//! # Quick Start
//!
//! ```rust
//! use tgtranscript::core::{MessageIndex, Formatter, TranscriptState, render_transcript};
//! ```

pub mod formatter;
pub mod index;
pub mod transcript;

// Re-export main types for convenience
pub use formatter::{Formatter, MessageOutcome, SkipReason, TranscriptState};
pub use index::MessageIndex;
pub use transcript::{Transcript, TranscriptStats, render_transcript};
