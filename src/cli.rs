//! Command-line interface definition using clap.
//!
//! [`Args`] maps onto a [`TranscriptConfig`] via [`Args::transcript_config`]
//! and onto a logging level via [`Args::log_level`].

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::{DEFAULT_MAX_NO_DATE_RUN, DEFAULT_MIN_TIME_GAP, TranscriptConfig};
use crate::tokens::TokenEncoding;

/// Convert a Telegram chat export (JSON) into a plain text transcript.
#[derive(Parser, Debug, Clone)]
#[command(name = "tgtranscript")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    tgtranscript < result.json > chat.txt
    tgtranscript result.json -o chat.txt
    tgtranscript result.json --lenient --min-gap 1800
    tgtranscript result.json -o chat.txt --count-tokens --encoding cl100k_base")]
pub struct Args {
    /// Path to the export; reads stdin when omitted or `-`
    pub input: Option<PathBuf>,

    /// Write the transcript to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Skip messages missing required fields instead of aborting
    #[arg(long)]
    pub lenient: bool,

    /// Seconds of silence that trigger a date separator
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_MIN_TIME_GAP)]
    pub min_gap: i64,

    /// Reprint the date after this many bare separators
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_NO_DATE_RUN)]
    pub redate_after: u32,

    /// Report how many tokens the transcript takes (printed even with --quiet)
    #[arg(long)]
    pub count_tokens: bool,

    /// Vocabulary used by --count-tokens
    #[arg(long, value_enum, value_name = "NAME", default_value_t = TokenEncoding::O200kBase)]
    pub encoding: TokenEncoding,

    /// Suppress banners, progress and the summary
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log why messages are skipped
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Input path, or `None` when reading stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|path| path.as_os_str() != "-")
    }

    /// Rendering configuration selected by the flags.
    pub fn transcript_config(&self) -> TranscriptConfig {
        TranscriptConfig::new()
            .with_min_time_gap(self.min_gap)
            .with_max_no_date_run(self.redate_after)
            .with_strict(!self.lenient)
    }

    /// Default log level selected by `--quiet` / `--verbose`.
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            log::LevelFilter::Error
        } else if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}
