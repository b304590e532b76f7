//! Record types and their field validation.
//!
//! Each record type carries its validation predicates as side-effect-free
//! associated functions. Constructors and setters call them defensively and
//! fail with a [`ValidationError`]; the presentation layer calls them
//! proactively through a [`ValidationReport`] to build one combined error
//! message before attempting construction.

pub mod program;
pub mod student;
pub mod validation;

pub use program::Program;
pub use student::{Gender, Student, StudentName};
pub use validation::{check_program_fields, check_student_fields, ValidationError, ValidationReport};
