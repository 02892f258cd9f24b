//! Error types for question distribution and export

use thiserror::Error;

/// Unified error type for question splitter operations
#[derive(Debug, Error)]
pub enum SplitError {
    /// The question list is empty
    #[error("No questions to distribute")]
    NoQuestions,
    /// The participant list is empty
    #[error("No participants to distribute to")]
    NoParticipants,
    /// Failed to read a source file (questions or participant names)
    #[error("Failed to read {0}: {1}")]
    SourceRead(String, #[source] std::io::Error),
    /// Failed to parse a CSV source file
    #[error("Failed to parse {0}: {1}")]
    SourceParse(String, #[source] csv::Error),
    /// Failed to write an exported report
    #[error("Failed to write {0}: {1}")]
    ExportWrite(String, #[source] std::io::Error),
}

/// Result alias for question splitter operations
pub type Result<T> = std::result::Result<T, SplitError>;
