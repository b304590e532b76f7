//! Typed errors for record store operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::records::student::ID_PATTERN;
use crate::records::ValidationError;

/// Errors raised by [`RecordStore`](crate::store::RecordStore) operations.
///
/// Every recoverable variant formats to a single human-readable message the
/// presentation layer can surface as-is.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Program with code \"{0}\" already exists.")]
    DuplicateProgram(String),

    #[error("Student with ID \"{0}\" already exists.")]
    DuplicateStudent(String),

    #[error("Program with code \"{0}\" not found.")]
    ProgramNotFound(String),

    #[error("Student with ID \"{0}\" not found.")]
    StudentNotFound(String),

    /// The key used for a student lookup does not even match the ID shape.
    /// Distinct from [`StoreError::StudentNotFound`]: this points at bad
    /// input, not a legitimately absent record.
    #[error("ID \"{0}\" must follow the format {ID_PATTERN}.")]
    MalformedStudentId(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A data row that cannot be split into the expected columns.
    #[error("{}:{line}: {reason}", .path.display())]
    MalformedRow {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
