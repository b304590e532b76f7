//! # ssis-core
//!
//! Core business logic for the student information system - framework-agnostic.
//!
//! This crate knows nothing about widgets or event loops. It can be driven by:
//! - a desktop shell (via commands wired to its operations)
//! - integration tests
//!
//! ## Key Concepts
//!
//! - **Record**: a [`Program`] or [`Student`] value whose fields are validated
//!   on construction and on every mutation
//! - **RecordStore**: the two keyed mappings (programs by code, students by ID)
//!   plus persistence to two delimited text files
//! - **ValidationReport**: per-field failures collected into one combined
//!   message, so the user sees every violation at once

pub mod error;
pub mod records;
pub mod store;

// Re-export commonly used types
pub use error::StoreError;
pub use records::{Gender, Program, Student, StudentName, ValidationError, ValidationReport};
pub use store::{RecordStore, UNENROLLED};
