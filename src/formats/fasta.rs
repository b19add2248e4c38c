//! FASTA reader and writer.
//!
//! ## FASTA Format
//!
//! ```text
//! >sequence_identifier optional description
//! ACGTACGTACGT...
//! >another_sequence
//! TGCATGCATGCA...
//! ```
//!
//! The whole header line (minus `>` and surrounding whitespace) is kept as
//! the identifier, description included. Sequence lines are trimmed and
//! concatenated as-is.

use tracing::debug;

use crate::model::{SequenceFormat, SequenceSet};

/// Parses FASTA text.
///
/// Returns `None` unless the text starts with `>`. Any text that does start
/// with `>` is accepted; there is no failure mode past that check.
///
/// A header reusing an earlier identifier restarts that record: the later
/// residues replace the earlier ones.
///
/// # Examples
///
/// ```
/// use seqsniff::formats::fasta::parse_fasta;
///
/// let set = parse_fasta(">seq1\nACGT\nACGT\n").unwrap();
/// assert_eq!(set.get_by_id("seq1").unwrap().as_str(), "ACGTACGT");
/// assert!(parse_fasta("ACGT").is_none());
/// ```
pub fn parse_fasta(content: &str) -> Option<SequenceSet> {
    if !content.starts_with('>') {
        return None;
    }

    let mut set = SequenceSet::new(SequenceFormat::Fasta);
    let mut current_id: Option<&str> = None;

    for line in content.lines() {
        if let Some(header) = line.strip_prefix('>') {
            let id = header.trim();
            set.start_record(id);
            current_id = Some(id);
        } else if let Some(id) = current_id {
            set.append(id, line.trim());
        }
    }

    debug!(records = set.len(), "parsed FASTA");
    Some(set)
}

/// Writes a set as FASTA, one header line and one residue line per record.
///
/// Residues are written exactly as stored, without re-wrapping.
pub fn write_fasta(set: &SequenceSet) -> String {
    let capacity = set.iter().map(|s| s.id.len() + s.data.len() + 3).sum();
    let mut out = String::with_capacity(capacity);

    for seq in set {
        out.push('>');
        out.push_str(&seq.id);
        out.push('\n');
        out.push_str(&seq.data);
        out.push('\n');
    }

    out
}
