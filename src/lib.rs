//! # tgtranscript
//!
//! Turn a Telegram Desktop chat export (`result.json`) into a flat text
//! transcript that is easy to read, grep or paste into a prompt.
//!
//! ## Transcript format
//!
//! ```text
//! ### DATE: 2024-01-15T10:30:00
//! [Alice]: Hello!
//! How are you?
//! ###
//! [Bob](-> Alice): Fine, thanks
//! ```
//!
//! - `### DATE: <date>` opens a message sent more than an hour after the
//!   previous one, and is reprinted after a long run of bare separators
//! - `###` opens any other message that starts a new sender run
//! - `[sender]: text` / `[sender](-> replied-to sender): text`
//! - a bare line continues the previous sender's run
//!
//! ## Quick Start
//!
//! ```rust
//! use tgtranscript::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let export = parse_export(r#"{"messages": [
//!         {"from": "Alice", "from_id": "user1", "text": "Hello!", "date_unixtime": "60"},
//!         {"from": "Alice", "from_id": "user1", "text": "How are you?", "date_unixtime": "90"}
//!     ]}"#)?;
//!
//!     let transcript = render_transcript(&export, &TranscriptConfig::default(), &no_progress())?;
//!     assert_eq!(transcript.to_text(), "###\n[Alice]: Hello!\nHow are you?\n");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`loader`] — reading and validating the export ([`ChatExport`](loader::ChatExport))
//! - [`message`] — typed view over one message record
//! - [`core`] — id index, per-message formatter, whole-export rendering
//! - [`config`] — [`TranscriptConfig`](config::TranscriptConfig)
//! - [`progress`] — progress callbacks
//! - [`error`] — [`TranscriptError`], [`Result`]
//! - [`tokens`] — token counts for transcripts (feature `tokens`)
//! - [`cli`] — command-line arguments (feature `cli`)

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod loader;
pub mod message;
pub mod progress;
#[cfg(feature = "tokens")]
pub mod tokens;

// Re-export the main types at the crate root for convenience
pub use error::{Result, TranscriptError};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use tgtranscript::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::TranscriptConfig;
    pub use crate::core::{Transcript, TranscriptStats, render_transcript};
    pub use crate::error::{Result, TranscriptError};
    pub use crate::loader::{ChatExport, load_export, parse_export};
    pub use crate::message::TelegramMessage;
    pub use crate::progress::{ProgressCallback, no_progress, stderr_progress};
}
