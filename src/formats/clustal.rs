//! CLUSTAL-like alignment reader and writer.
//!
//! ## CLUSTAL Format
//!
//! A `CLUSTAL` header line followed by blocks of interleaved data. Each
//! block line gives an identifier and a chunk of its residues; the same
//! identifiers repeat in every block:
//!
//! ```text
//! CLUSTAL W (1.83) multiple sequence alignment
//!
//! seq1 ACGTACGTAC
//! seq2 TGCATGCATG
//!
//! seq1 GGGG
//! seq2 CCCC
//! ```
//!
//! ## Relaxed Parsing
//!
//! This parser is lenient about:
//! - Header version text (any line starting with `CLUSTAL` is skipped)
//! - Chunks split by spaces (all tokens after the name are joined)
//! - Ruler and annotation lines (single-token lines are ignored)
//!
//! Sequence lengths are not checked against each other.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::model::{Sequence, SequenceFormat, SequenceSet};

/// Number of residue columns per block when writing.
pub const CLUSTAL_BLOCK_WIDTH: usize = 60;

static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").unwrap());

/// Returns true if the text carries a CLUSTAL marker.
pub fn is_clustal(content: &str) -> bool {
    content.starts_with("CLUSTAL") || content.contains("CLUSTALW")
}

/// Parses CLUSTAL-like alignment text.
///
/// Returns `None` unless the text starts with `CLUSTAL` or contains
/// `CLUSTALW`. Otherwise every line of the form `name chunk...` appends its
/// chunk to `name`, so interleaved blocks are merged per identifier. Text
/// with no data lines gives a single empty record named `""`.
///
/// # Examples
///
/// ```
/// use seqsniff::formats::clustal::parse_clustal;
///
/// let set = parse_clustal("CLUSTAL\n\nseq1 ACGT\n\nseq1 GGGG\n").unwrap();
/// assert_eq!(set.get_by_id("seq1").unwrap().as_str(), "ACGTGGGG");
/// ```
pub fn parse_clustal(content: &str) -> Option<SequenceSet> {
    if !is_clustal(content) {
        return None;
    }

    let mut set = SequenceSet::new(SequenceFormat::Clustal);

    for line in content.lines() {
        if line.trim().is_empty() || line.starts_with("CLUSTAL") {
            continue;
        }

        let tokens: Vec<&str> = SPACE_RUNS.split(line).collect();
        if tokens.len() < 2 {
            // Ruler or annotation line
            continue;
        }

        let chunk: String = tokens[1..].concat();
        set.append(tokens[0], &chunk);
    }

    // A header without data lines still yields one (empty) record
    if set.is_empty() {
        set.append("", "");
    }

    debug!(records = set.len(), "parsed CLUSTAL");
    Some(set)
}

/// Writes a set as a CLUSTAL alignment in blocks of 60 columns.
///
/// Names are cut at their first whitespace. Shorter records contribute
/// shorter (possibly empty) chunks; nothing is padded, so ragged input
/// gives ragged output.
pub fn write_clustal(set: &SequenceSet) -> String {
    let total_len = set.alignment_length();
    let mut out = String::from("CLUSTAL\n\n");

    let names: Vec<&str> = set
        .iter()
        .map(|seq| seq.id.split(char::is_whitespace).next().unwrap_or(""))
        .collect();
    // Unwritten tail of each record, advanced one block at a time
    let mut rests: Vec<&str> = set.iter().map(Sequence::as_str).collect();

    let mut offset = 0;
    while offset < total_len {
        for (name, rest) in names.iter().zip(rests.iter_mut()) {
            let (chunk, tail) = split_columns(*rest, CLUSTAL_BLOCK_WIDTH);
            out.push_str(name);
            out.push(' ');
            out.push_str(chunk);
            out.push('\n');
            *rest = tail;
        }

        out.push('\n');
        offset += CLUSTAL_BLOCK_WIDTH;
    }

    out
}

/// Splits off the first `width` characters of `s`.
fn split_columns(s: &str, width: usize) -> (&str, &str) {
    let at = s.char_indices().nth(width).map_or(s.len(), |(i, _)| i);
    s.split_at(at)
}
