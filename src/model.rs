//! Data model for parsed sequence text.
//!
//! This module contains the structures shared by the parsers, the encoders
//! and the classifier:
//! - `Sequence`: one named record
//! - `SequenceSet`: an ordered, identifier-keyed collection of records
//! - `SequenceFormat`: the container format a set was read from
//!
//! Nothing here is persisted; every set is rebuilt from the input text.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::formats::FormatError;

/// Represents a single sequence with its identifier and data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    /// The sequence identifier (may be empty for anonymous input)
    pub id: String,
    /// Raw residues as read, gaps and whitespace included
    pub data: String,
}

impl Sequence {
    /// Creates a new sequence.
    pub fn new(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: data.into(),
        }
    }

    /// Returns the length of the sequence in characters.
    pub fn len(&self) -> usize {
        self.data.chars().count()
    }

    /// Returns true if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the residues as a string slice.
    pub fn as_str(&self) -> &str {
        &self.data
    }
}

/// Container format a `SequenceSet` was detected as, or is encoded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceFormat {
    Fasta,
    Clustal,
    Unknown,
}

impl SequenceFormat {
    /// File extension used when exporting to this format.
    pub fn file_extension(&self) -> Option<&'static str> {
        match self {
            SequenceFormat::Fasta => Some("fasta"),
            SequenceFormat::Clustal => Some("aln"),
            SequenceFormat::Unknown => None,
        }
    }
}

impl fmt::Display for SequenceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceFormat::Fasta => write!(f, "FASTA"),
            SequenceFormat::Clustal => write!(f, "CLUSTAL"),
            SequenceFormat::Unknown => write!(f, "Unknown"),
        }
    }
}

impl FromStr for SequenceFormat {
    type Err = FormatError;

    /// Parses a user-supplied export format name.
    ///
    /// Only formats that can be encoded are accepted; "unknown" is not one.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_lowercase().as_str() {
            "fasta" | "fa" | "fas" => Ok(SequenceFormat::Fasta),
            "clustal" | "clustalw" | "aln" => Ok(SequenceFormat::Clustal),
            _ => Err(FormatError::UnsupportedFormat(name.to_string())),
        }
    }
}

/// An ordered mapping from identifier to residues, tagged with its format.
///
/// Identifiers are unique: records keep the position at which their
/// identifier was first seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceSet {
    /// Format the records were extracted from
    pub format: SequenceFormat,
    sequences: Vec<Sequence>,
    index: HashMap<String, usize>,
}

impl SequenceSet {
    /// Creates an empty set for the given format.
    pub fn new(format: SequenceFormat) -> Self {
        Self {
            format,
            sequences: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Builds a set from records, in order.
    ///
    /// A repeated identifier replaces the residues of the earlier record.
    pub fn from_sequences(format: SequenceFormat, sequences: Vec<Sequence>) -> Self {
        let mut set = Self::new(format);
        for seq in sequences {
            set.start_record(&seq.id);
            set.append(&seq.id, &seq.data);
        }
        set
    }

    /// Starts an empty accumulation for `id`.
    ///
    /// If `id` already exists its residues are cleared in place.
    pub fn start_record(&mut self, id: &str) {
        match self.index.get(id) {
            Some(&pos) => self.sequences[pos].data.clear(),
            None => self.push(id, String::new()),
        }
    }

    /// Appends residues to `id`, creating the record if needed.
    pub fn append(&mut self, id: &str, chunk: &str) {
        match self.index.get(id) {
            Some(&pos) => self.sequences[pos].data.push_str(chunk),
            None => self.push(id, chunk.to_string()),
        }
    }

    fn push(&mut self, id: &str, data: String) {
        self.index.insert(id.to_string(), self.sequences.len());
        self.sequences.push(Sequence::new(id, data));
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// Returns true if the set holds no records.
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Gets a record by position.
    pub fn get(&self, index: usize) -> Option<&Sequence> {
        self.sequences.get(index)
    }

    /// Gets a record by identifier.
    pub fn get_by_id(&self, id: &str) -> Option<&Sequence> {
        self.index.get(id).map(|&pos| &self.sequences[pos])
    }

    /// Iterates over records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sequence> {
        self.sequences.iter()
    }

    /// Returns the length of the longest record.
    pub fn alignment_length(&self) -> usize {
        self.sequences.iter().map(Sequence::len).max().unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a SequenceSet {
    type Item = &'a Sequence;
    type IntoIter = std::slice::Iter<'a, Sequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
