//! Format detection, extraction and export.
//!
//! Supported formats:
//! - FASTA: text starting with `>`
//! - CLUSTAL: text starting with `CLUSTAL` or containing `CLUSTALW`
//!
//! Detection priority:
//! 1. FASTA
//! 2. CLUSTAL
//! 3. Fallback: the whole text is one anonymous sequence
//!
//! Detection never fails. Only encoding can report an error, when asked
//! for a format that has no writer.

pub mod clustal;
pub mod fasta;

use thiserror::Error;
use tracing::{debug, trace};

use crate::model::{SequenceFormat, SequenceSet};

/// Errors that can occur when converting between formats.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Unsupported export format: {0}.\n\
             Hint: supported formats are fasta and clustal")]
    UnsupportedFormat(String),
}

/// Result type for format operations.
pub type FormatResult<T> = Result<T, FormatError>;

/// A recognizer that either claims the text or returns `None`.
type Parser = fn(&str) -> Option<SequenceSet>;

/// Parsers in the order they are tried.
const PARSERS: &[(SequenceFormat, Parser)] = &[
    (SequenceFormat::Fasta, fasta::parse_fasta),
    (SequenceFormat::Clustal, clustal::parse_clustal),
];

/// Detects the container format and extracts its sequences.
///
/// Text matching no parser is returned as a single `Unknown` record with an
/// empty identifier and the unmodified text as residues, so the result is
/// never empty.
///
/// # Examples
///
/// ```
/// use seqsniff::formats::detect_format_and_extract;
/// use seqsniff::model::SequenceFormat;
///
/// let set = detect_format_and_extract("MKV LTP");
/// assert_eq!(set.format, SequenceFormat::Unknown);
/// assert_eq!(set.get_by_id("").unwrap().as_str(), "MKV LTP");
/// ```
pub fn detect_format_and_extract(content: &str) -> SequenceSet {
    for &(format, parse) in PARSERS {
        if let Some(set) = parse(content) {
            debug!(%format, records = set.len(), "format detected");
            return set;
        }
        trace!(%format, "format rejected");
    }

    debug!(bytes = content.len(), "no format detected, using raw text");
    let mut set = SequenceSet::new(SequenceFormat::Unknown);
    set.append("", content);
    set
}

/// Encodes a set into the target format.
///
/// Returns `UnsupportedFormat` for targets without a writer; no partial
/// output is produced in that case.
pub fn encode(set: &SequenceSet, target: SequenceFormat) -> FormatResult<String> {
    let out = match target {
        SequenceFormat::Fasta => fasta::write_fasta(set),
        SequenceFormat::Clustal => clustal::write_clustal(set),
        SequenceFormat::Unknown => {
            return Err(FormatError::UnsupportedFormat(target.to_string()));
        }
    };

    debug!(%target, records = set.len(), bytes = out.len(), "encoded");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_fasta() {
        let set = detect_format_and_extract(">seq1\nACGT\nACGT\n");

        assert_eq!(set.format, SequenceFormat::Fasta);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get_by_id("seq1").unwrap().as_str(), "ACGTACGT");
    }

    #[test]
    fn test_detect_clustal() {
        let set =
            detect_format_and_extract("CLUSTAL\n\nseq1 ACGT\nseq2 TTTT\n\nseq1 GGGG\nseq2 CCCC\n");

        assert_eq!(set.format, SequenceFormat::Clustal);
        assert_eq!(set.get_by_id("seq1").unwrap().as_str(), "ACGTGGGG");
        assert_eq!(set.get_by_id("seq2").unwrap().as_str(), "TTTTCCCC");
    }

    #[test]
    fn test_detect_unknown() {
        let set = detect_format_and_extract("MKV LTP");

        assert_eq!(set.format, SequenceFormat::Unknown);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(0).unwrap().id, "");
        assert_eq!(set.get(0).unwrap().as_str(), "MKV LTP");
    }

    #[test]
    fn test_detect_empty_text() {
        let set = detect_format_and_extract("");

        assert_eq!(set.format, SequenceFormat::Unknown);
        assert_eq!(set.len(), 1);
        assert!(set.get(0).unwrap().is_empty());
    }

    #[test]
    fn test_fasta_wins_over_clustal() {
        let set = detect_format_and_extract(">aln from CLUSTALW\nACGT\n");

        assert_eq!(set.format, SequenceFormat::Fasta);
        assert_eq!(set.get(0).unwrap().id, "aln from CLUSTALW");
    }

    #[test]
    fn test_accepted_input_is_never_empty() {
        for content in [">", ">\n", "CLUSTAL", "CLUSTAL\n\n", "", "   "] {
            let set = detect_format_and_extract(content);
            assert!(!set.is_empty(), "input {:?}", content);
        }

        let set = detect_format_and_extract(">");
        assert_eq!(set.format, SequenceFormat::Fasta);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(0).unwrap().id, "");
        assert!(set.get(0).unwrap().is_empty());
    }

    #[test]
    fn test_leading_whitespace_defeats_detection() {
        let set = detect_format_and_extract("\n>seq1\nACGT\n");

        assert_eq!(set.format, SequenceFormat::Unknown);
        assert_eq!(set.get(0).unwrap().as_str(), "\n>seq1\nACGT\n");
    }

    #[test]
    fn test_encode_fasta_and_clustal() {
        let set = detect_format_and_extract("CLUSTAL\n\nseq1 ACGT\nseq2 TTTT\n");

        assert_eq!(
            encode(&set, SequenceFormat::Fasta).unwrap(),
            ">seq1\nACGT\n>seq2\nTTTT\n"
        );
        assert_eq!(
            encode(&set, SequenceFormat::Clustal).unwrap(),
            "CLUSTAL\n\nseq1 ACGT\nseq2 TTTT\n\n"
        );
    }

    #[test]
    fn test_encode_unsupported() {
        let set = detect_format_and_extract(">seq1\nACGT\n");

        let result = encode(&set, SequenceFormat::Unknown);
        assert!(matches!(result, Err(FormatError::UnsupportedFormat(_))));

        let result = "nexus".parse::<SequenceFormat>().and_then(|target| encode(&set, target));
        assert_eq!(result, Err(FormatError::UnsupportedFormat("nexus".to_string())));
    }
}
