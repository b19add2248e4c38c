//! seqsniff - Sequence format and alphabet detection
//!
//! Reads sequence text, reports its format and alphabet, and optionally
//! converts it.
//!
//! ## Usage
//!
//! ```bash
//! seqsniff <sequence_file>                     # Report format and alphabet
//! cat seqs.txt | seqsniff                      # Read from stdin
//! seqsniff -t clustal -o out/ <sequence_file>  # Convert, writes out/<stem>.aln
//! seqsniff -t fasta -o - <sequence_file>       # Convert to stdout
//! ```
//!
//! ## Supported Formats
//!
//! - FASTA (text starting with `>`)
//! - CLUSTAL (text starting with `CLUSTAL` or mentioning `CLUSTALW`)
//! - Anything else is read as a single raw sequence

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use seqsniff::export::{export_file_name, write_export};
use seqsniff::formats::encode;
use seqsniff::logging::init_tracing;
use seqsniff::model::{SequenceFormat, SequenceSet};
use seqsniff::{classify, detect_format_and_extract, render_feedback, summarize};

/// Stem used for exported files when reading from stdin.
const DEFAULT_STEM: &str = "sequences";

/// seqsniff - Detects sequence formats and alphabets, and converts between formats
///
/// Without -o/--output, only prints what was detected.
/// With -o/--output, also writes the sequences in the --to format.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Sequence text to inspect. Use "-" for stdin.
    #[arg(default_value = "-")]
    file: PathBuf,

    /// Output file or directory (enables conversion). Use "-" for stdout.
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Export format: fasta or clustal
    #[arg(short = 't', long = "to", default_value = "fasta")]
    to: String,

    /// Print one line per sequence: id, length and alphabet
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Enable debug logging (overridden by SEQSNIFF_LOG)
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

/// Reads the whole input, from stdin when the path is "-".
fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        Ok(content)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))
    }
}

/// Writes one tab-separated line per sequence.
fn print_records<W: Write>(set: &SequenceSet, mut out: W) -> Result<()> {
    for seq in set {
        writeln!(out, "{}\t{}\t{}", seq.id, seq.len(), classify(&seq.data))?;
    }
    Ok(())
}

/// Writes the converted sequences to a file, a directory, or stdout.
fn run_export(set: &SequenceSet, input: &Path, output: &str, target: SequenceFormat) -> Result<()> {
    if output == "-" {
        let content = encode(set, target)?;
        io::stdout().lock().write_all(content.as_bytes())?;
        return Ok(());
    }

    let output = PathBuf::from(output);
    let path = if output.is_dir() {
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| *s != "-")
            .unwrap_or(DEFAULT_STEM);
        output.join(export_file_name(stem, target)?)
    } else {
        output
    };

    write_export(set, target, &path)?;
    eprintln!("Wrote {} sequences to {}", set.len(), path.display());
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    // Validate the export format before doing any work
    let target: SequenceFormat = args.to.parse()?;

    let content = read_input(&args.file)?;
    let set = detect_format_and_extract(&content);

    // Keep stdout clean when it carries the exported sequences
    let feedback = render_feedback(&summarize(&set));
    let to_stdout = args.output.as_deref() == Some("-");
    if to_stdout {
        eprintln!("{}", feedback);
    } else {
        println!("{}", feedback);
    }

    if args.summary {
        if to_stdout {
            print_records(&set, io::stderr().lock())?;
        } else {
            print_records(&set, io::stdout().lock())?;
        }
    }

    if let Some(output) = args.output {
        run_export(&set, &args.file, &output, target)?;
    }

    Ok(())
}
