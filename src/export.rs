//! Writing encoded sets to files.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::formats::{encode, FormatError, FormatResult};
use crate::model::{SequenceFormat, SequenceSet};

/// Errors that can occur while exporting a set.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write file: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Builds a download file name such as `sequences.aln`.
pub fn export_file_name(stem: &str, format: SequenceFormat) -> FormatResult<String> {
    let ext = format
        .file_extension()
        .ok_or_else(|| FormatError::UnsupportedFormat(format.to_string()))?;
    Ok(format!("{}.{}", stem, ext))
}

/// Encodes `set` and writes it to `path`.
///
/// Nothing is written if the format cannot be encoded.
pub fn write_export<P: AsRef<Path>>(
    set: &SequenceSet,
    format: SequenceFormat,
    path: P,
) -> ExportResult<()> {
    let content = encode(set, format)?;
    fs::write(&path, content)?;
    info!(
        path = %path.as_ref().display(),
        %format,
        records = set.len(),
        "wrote export"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name() {
        assert_eq!(
            export_file_name("sequences", SequenceFormat::Fasta).unwrap(),
            "sequences.fasta"
        );
        assert_eq!(
            export_file_name("sequences", SequenceFormat::Clustal).unwrap(),
            "sequences.aln"
        );
        assert!(matches!(
            export_file_name("sequences", SequenceFormat::Unknown),
            Err(FormatError::UnsupportedFormat(_))
        ));
    }
}
