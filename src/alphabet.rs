//! Biochemical alphabet detection.
//!
//! A sequence is cleaned of gaps (`-`, `.`) and whitespace, then tested
//! against three character classes in a fixed order:
//!
//! ```text
//! DNA      A C G T N   (either case)
//! RNA      A C G U N   (either case)
//! Protein  any ASCII letter
//! ```
//!
//! The first class that matches wins. Sequences made only of `A`, `C`, `G`
//! and `N` fit both nucleotide classes and are reported as DNA.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static GAPS_AND_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-.\s\x{FEFF}]").unwrap());
static DNA: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[ATCGNatcgn]+$").unwrap());
static RNA: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[AUCGNaucgn]+$").unwrap());
static PROTEIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]+$").unwrap());

/// Alphabet inferred from the residues of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceAlphabet {
    Dna,
    Rna,
    Protein,
    Unknown,
}

impl SequenceAlphabet {
    /// Short user-facing message for this alphabet.
    pub fn label(&self) -> &'static str {
        match self {
            SequenceAlphabet::Dna => "DNA detected",
            SequenceAlphabet::Rna => "RNA detected",
            SequenceAlphabet::Protein => "Protein detected",
            SequenceAlphabet::Unknown => "Unknown format",
        }
    }
}

impl fmt::Display for SequenceAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceAlphabet::Dna => write!(f, "DNA"),
            SequenceAlphabet::Rna => write!(f, "RNA"),
            SequenceAlphabet::Protein => write!(f, "Protein"),
            SequenceAlphabet::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Removes gap characters and all whitespace, including newlines and
/// byte-order marks.
pub fn clean_sequence(sequence: &str) -> String {
    GAPS_AND_WHITESPACE.replace_all(sequence, "").into_owned()
}

/// Classifies a raw sequence string.
///
/// Total: input that cleans to nothing, or holds digits or symbols,
/// is `Unknown`.
///
/// # Examples
///
/// ```
/// use seqsniff::alphabet::{classify, SequenceAlphabet};
///
/// assert_eq!(classify("ACGT-ACGT"), SequenceAlphabet::Dna);
/// assert_eq!(classify("ACGU"), SequenceAlphabet::Rna);
/// assert_eq!(classify("MKVLTP"), SequenceAlphabet::Protein);
/// assert_eq!(classify("123"), SequenceAlphabet::Unknown);
/// ```
pub fn classify(sequence: &str) -> SequenceAlphabet {
    let cleaned = clean_sequence(sequence);

    if DNA.is_match(&cleaned) {
        SequenceAlphabet::Dna
    } else if RNA.is_match(&cleaned) {
        SequenceAlphabet::Rna
    } else if PROTEIN.is_match(&cleaned) {
        SequenceAlphabet::Protein
    } else {
        SequenceAlphabet::Unknown
    }
}
