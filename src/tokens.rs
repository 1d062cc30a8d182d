//! Token counts for rendered transcripts.
//!
//! Transcripts usually end up in a language model prompt, so it helps to
//! know what one costs. [`TokenCounter`] wraps one of the BPE vocabularies
//! bundled with `tiktoken-rs`; nothing is downloaded at runtime.
//!
//! # Example
//!
//! ```rust
//! use tgtranscript::tokens::{TokenCounter, TokenEncoding};
//!
//! let counter = TokenCounter::new(TokenEncoding::Cl100kBase)?;
//! assert_eq!(counter.count("hello world"), 2);
//! # Ok::<(), tgtranscript::TranscriptError>(())
//! ```

use serde::{Deserialize, Serialize};
use tiktoken_rs::CoreBPE;

use crate::core::Transcript;
use crate::error::{Result, TranscriptError};

/// BPE vocabulary used for counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum TokenEncoding {
    /// GPT-4o family vocabulary
    #[default]
    #[cfg_attr(feature = "cli", value(name = "o200k_base"))]
    O200kBase,

    /// GPT-4 / GPT-3.5 vocabulary
    #[cfg_attr(feature = "cli", value(name = "cl100k_base"))]
    Cl100kBase,
}

impl TokenEncoding {
    /// The vocabulary's conventional name.
    pub fn name(&self) -> &'static str {
        match self {
            TokenEncoding::O200kBase => "o200k_base",
            TokenEncoding::Cl100kBase => "cl100k_base",
        }
    }

    fn load(self) -> Result<CoreBPE> {
        let bpe = match self {
            TokenEncoding::O200kBase => tiktoken_rs::o200k_base(),
            TokenEncoding::Cl100kBase => tiktoken_rs::cl100k_base(),
        };
        bpe.map_err(|e| TranscriptError::tokenizer(format!("loading {}: {e}", self.name())))
    }
}

/// Counts tokens with a loaded vocabulary.
pub struct TokenCounter {
    encoding: TokenEncoding,
    bpe: CoreBPE,
}

impl TokenCounter {
    /// Loads the vocabulary for `encoding`.
    ///
    /// Building the vocabulary takes a noticeable moment, so keep the
    /// counter around when counting more than one text.
    pub fn new(encoding: TokenEncoding) -> Result<Self> {
        Ok(Self {
            encoding,
            bpe: encoding.load()?,
        })
    }

    /// The vocabulary in use.
    pub fn encoding(&self) -> TokenEncoding {
        self.encoding
    }

    /// Number of tokens in `text`. Special tokens are not recognized.
    pub fn count(&self, text: &str) -> usize {
        self.bpe.encode_ordinary(text).len()
    }

    /// Number of tokens in the transcript exactly as it is written out.
    pub fn count_transcript(&self, transcript: &Transcript) -> usize {
        self.count(&transcript.to_text())
    }
}
