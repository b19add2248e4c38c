//! Per-set classification and feedback text.

use crate::alphabet::{classify, SequenceAlphabet};
use crate::model::{SequenceFormat, SequenceSet};

/// What was found in one input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationSummary {
    /// Detected container format
    pub format: SequenceFormat,
    /// Distinct alphabets, in order of first appearance
    pub alphabets: Vec<SequenceAlphabet>,
    /// Number of records in the set
    pub record_count: usize,
}

/// Classifies every record of a set.
pub fn summarize(set: &SequenceSet) -> ClassificationSummary {
    let mut alphabets = Vec::new();
    for seq in set {
        let alphabet = classify(&seq.data);
        if !alphabets.contains(&alphabet) {
            alphabets.push(alphabet);
        }
    }

    ClassificationSummary {
        format: set.format,
        alphabets,
        record_count: set.len(),
    }
}

/// Renders the one-line message shown to the user.
///
/// ```text
/// Detected format: FASTA - DNA detected
/// Detected format: CLUSTAL - Protein detected, DNA detected
/// RNA detected                       (unrecognized container)
/// ```
pub fn render_feedback(summary: &ClassificationSummary) -> String {
    let labels = if summary.alphabets.is_empty() {
        SequenceAlphabet::Unknown.label().to_string()
    } else {
        summary
            .alphabets
            .iter()
            .map(SequenceAlphabet::label)
            .collect::<Vec<_>>()
            .join(", ")
    };

    match summary.format {
        SequenceFormat::Unknown => labels,
        format => format!("Detected format: {} - {}", format, labels),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::detect_format_and_extract;

    #[test]
    fn test_summarize_mixed_fasta() {
        let set = detect_format_and_extract(">p1\nMKVLTP\n>d1\nACGT\n>p2\nWWYY\n");
        let summary = summarize(&set);

        assert_eq!(summary.format, SequenceFormat::Fasta);
        assert_eq!(summary.record_count, 3);
        assert_eq!(
            summary.alphabets,
            vec![SequenceAlphabet::Protein, SequenceAlphabet::Dna]
        );
    }

    #[test]
    fn test_summarize_does_not_touch_set() {
        let set = detect_format_and_extract("CLUSTAL\n\nseq1 AC-GT\n");
        let before = set.clone();
        summarize(&set);
        assert_eq!(set, before);
    }

    #[test]
    fn test_summarize_empty_set() {
        let set = SequenceSet::new(SequenceFormat::Clustal);
        let summary = summarize(&set);

        assert_eq!(summary.record_count, 0);
        assert!(summary.alphabets.is_empty());
    }

    #[test]
    fn test_feedback_known_format() {
        let set = detect_format_and_extract(">seq1\nACGU\n");
        assert_eq!(
            render_feedback(&summarize(&set)),
            "Detected format: FASTA - RNA detected"
        );
    }

    #[test]
    fn test_feedback_unknown_format() {
        let set = detect_format_and_extract("MKV LTP");
        assert_eq!(render_feedback(&summarize(&set)), "Protein detected");

        let set = detect_format_and_extract("12 34");
        assert_eq!(render_feedback(&summarize(&set)), "Unknown format");
    }

    #[test]
    fn test_feedback_lists_all_alphabets() {
        let set = detect_format_and_extract("CLUSTAL\n\nseq1 MKVL\nseq2 ACGT\n");
        assert_eq!(
            render_feedback(&summarize(&set)),
            "Detected format: CLUSTAL - Protein detected, DNA detected"
        );
    }

    #[test]
    fn test_feedback_header_only_clustal() {
        let set = detect_format_and_extract("CLUSTAL\n");
        assert_eq!(summarize(&set).record_count, 1);
        assert_eq!(
            render_feedback(&summarize(&set)),
            "Detected format: CLUSTAL - Unknown format"
        );
    }
}
