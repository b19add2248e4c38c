//! # seqsniff - Sequence Format and Alphabet Detection
//!
//! Recognizes biological sequence text pasted or read from a file, works out
//! what it is, and converts it.
//!
//! ## Architecture
//!
//! Data flows one way, from raw text to a summary:
//! - `formats`: format detection (FASTA, CLUSTAL, raw fallback) and encoding
//! - `model`: `Sequence`, `SequenceSet` and `SequenceFormat`
//! - `alphabet`: DNA / RNA / protein classification of one sequence
//! - `summary`: classification of a whole set and the feedback message
//! - `export`: writing an encoded set to a file
//! - `logging`: subscriber setup for the command-line tool
//!
//! ## Example
//!
//! ```
//! use seqsniff::{detect_format_and_extract, encode, render_feedback, summarize, SequenceFormat};
//!
//! let set = detect_format_and_extract(">seq1\nACGT\nACGT\n");
//! assert_eq!(render_feedback(&summarize(&set)), "Detected format: FASTA - DNA detected");
//!
//! let aln = encode(&set, SequenceFormat::Clustal).unwrap();
//! assert_eq!(aln, "CLUSTAL\n\nseq1 ACGTACGT\n\n");
//! ```

pub mod alphabet;
pub mod export;
pub mod formats;
pub mod logging;
pub mod model;
pub mod summary;

pub use alphabet::{classify, SequenceAlphabet};
pub use formats::{detect_format_and_extract, encode, FormatError};
pub use model::{Sequence, SequenceFormat, SequenceSet};
pub use summary::{render_feedback, summarize, ClassificationSummary};
