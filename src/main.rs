//! # tgtranscript CLI
//!
//! Reads a Telegram export, writes the transcript to stdout (or `--output`)
//! and reports progress on stderr.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read};
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use tgtranscript::TranscriptError;
use tgtranscript::cli::Args;
use tgtranscript::core::{Transcript, render_transcript};
use tgtranscript::loader::load_export;
use tgtranscript::progress::{no_progress, stderr_progress};
use tgtranscript::tokens::TokenCounter;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(&args);

    if let Err(e) = run(&args) {
        report_error(&e, &args);
        process::exit(1);
    }
}

fn init_logging(args: &Args) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.quiet || args.verbose {
        builder.filter_level(args.log_level());
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn run(args: &Args) -> Result<(), TranscriptError> {
    let total_start = Instant::now();
    let chatty = !args.quiet;

    let input: Box<dyn Read> = match args.input_path() {
        Some(path) => {
            if chatty {
                eprintln!("Reading {}...", path.display());
            }
            Box::new(BufReader::new(File::open(path)?))
        }
        None => {
            if chatty {
                eprintln!("Waiting for input from stdin...");
            }
            Box::new(io::stdin().lock())
        }
    };

    if chatty {
        eprintln!("Parsing JSON...");
    }
    let export = load_export(input)?;

    if chatty {
        match export.name() {
            Some(name) => eprintln!("Processing {} messages of \"{}\"...", export.len(), name),
            None => eprintln!("Processing {} messages...", export.len()),
        }
    }

    let progress = if chatty {
        stderr_progress()
    } else {
        no_progress()
    };
    let transcript = render_transcript(&export, &args.transcript_config(), &progress)?;

    write_transcript(&transcript, args)?;

    if chatty {
        print_summary(&transcript, total_start);
    }
    if args.count_tokens {
        let counter = TokenCounter::new(args.encoding)?;
        eprintln!(
            "Tokens: {} ({})",
            counter.count_transcript(&transcript),
            counter.encoding().name()
        );
    }
    Ok(())
}

fn write_transcript(transcript: &Transcript, args: &Args) -> Result<(), TranscriptError> {
    match &args.output {
        Some(path) => {
            transcript.write_to(BufWriter::new(File::create(path)?))?;
            if !args.quiet {
                eprintln!("Transcript saved to {}", path.display());
            }
        }
        None => transcript.write_to(BufWriter::new(io::stdout().lock()))?,
    }
    Ok(())
}

fn print_summary(transcript: &Transcript, started: Instant) {
    let stats = transcript.stats();
    eprintln!(
        "Done: {} of {} messages written ({} continued, {} replies, {} skipped) in {:.2}s",
        stats.emitted,
        stats.total,
        stats.continuations,
        stats.replies,
        stats.skipped(),
        started.elapsed().as_secs_f64()
    );
    if stats.broken > 0 {
        eprintln!("Warning: {} messages skipped for missing fields", stats.broken);
    }
}

fn report_error(err: &TranscriptError, args: &Args) {
    match err {
        TranscriptError::Parse {
            offset,
            category,
            source,
            ..
        } => {
            eprintln!("Error: JSON parsing failed.");
            eprintln!("Error code: {}", category);
            eprintln!("Error offset: {}", offset);
            eprintln!("Error message: {}", source);
        }
        TranscriptError::Schema { message } => {
            eprintln!("Error: JSON does not contain a 'messages' array.");
            eprintln!("Details: {}", message);
        }
        TranscriptError::MissingField { .. } => {
            // finish the progress line before reporting
            if !args.quiet {
                eprintln!();
            }
            eprintln!("Error: {}", err);
        }
        _ => eprintln!("Error: {}", err),
    }
}
