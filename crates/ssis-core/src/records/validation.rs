//! Field validation errors and multi-field reporting.
//!
//! Every predicate lives on its record type (`Program::valid_code`,
//! `Student::valid_id`, ...) and is side-effect-free. Constructors and setters
//! call them defensively and fail with a [`ValidationError`]. The presentation
//! layer calls them proactively through a [`ValidationReport`], which collects
//! every failing field into one combined message instead of surfacing failures
//! one dialog at a time.

use thiserror::Error;

use super::program::Program;
use super::student::{Student, StudentName, ID_PATTERN, MAX_YEAR, MIN_YEAR};

/// A single field constraint violation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("\"{0}\" is not a valid program code.")]
    ProgramCode(String),

    #[error("\"{0}\" is not a valid program name.")]
    ProgramName(String),

    #[error("ID \"{0}\" must follow the format {ID_PATTERN}.")]
    StudentId(String),

    #[error("Surname and first name must not be empty.")]
    StudentName,

    #[error("Invalid year level {0}. Must be within {MIN_YEAR} and {MAX_YEAR}.")]
    Year(u32),

    #[error("\"{0}\" is not a valid year level.")]
    YearFormat(String),

    #[error("\"{0}\" is not a recognized gender. Recognized values are MALE, FEMALE and OTHER.")]
    Gender(String),
}

/// Accumulates field validation failures into one combined message.
///
/// The caller runs every raw field through a report before constructing a
/// record, so the user sees all violations at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// All failures collected so far.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// One line per violation, ready for a message box.
    pub fn message(&self) -> String {
        self.errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `Ok(())` when every check passed, otherwise the report itself.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn check_program_code(&mut self, code: &str) -> &mut Self {
        if !Program::valid_code(code) {
            self.errors.push(ValidationError::ProgramCode(code.to_string()));
        }
        self
    }

    pub fn check_program_name(&mut self, name: &str) -> &mut Self {
        if !Program::valid_name(name) {
            self.errors.push(ValidationError::ProgramName(name.to_string()));
        }
        self
    }

    pub fn check_student_id(&mut self, id: &str) -> &mut Self {
        if !Student::valid_id(id) {
            self.errors.push(ValidationError::StudentId(id.to_string()));
        }
        self
    }

    pub fn check_student_name(&mut self, surname: &str, first_name: &str) -> &mut Self {
        if !StudentName::valid(surname, first_name) {
            self.errors.push(ValidationError::StudentName);
        }
        self
    }

    /// The year arrives as the raw string a form collected; a value that does
    /// not even parse is reported alongside the other field failures instead
    /// of failing out-of-band.
    pub fn check_year(&mut self, year: &str) -> &mut Self {
        match year.parse::<u32>() {
            Ok(value) => {
                if !Student::valid_year(value) {
                    self.errors.push(ValidationError::Year(value));
                }
            }
            Err(_) => self.errors.push(ValidationError::YearFormat(year.to_string())),
        }
        self
    }

    pub fn check_gender(&mut self, gender: &str) -> &mut Self {
        if !Student::valid_gender(gender) {
            self.errors.push(ValidationError::Gender(gender.to_string()));
        }
        self
    }
}

/// Run both program fields through a fresh report.
pub fn check_program_fields(code: &str, name: &str) -> ValidationReport {
    let mut report = ValidationReport::new();
    report.check_program_code(code).check_program_name(name);
    report
}

/// Run every student field through a fresh report.
pub fn check_student_fields(
    id: &str,
    surname: &str,
    first_name: &str,
    year: &str,
    gender: &str,
) -> ValidationReport {
    let mut report = ValidationReport::new();
    report
        .check_student_id(id)
        .check_student_name(surname, first_name)
        .check_year(year)
        .check_gender(gender);
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_fields_produce_empty_report() {
        let report = check_program_fields("BSCS", "BACHELOR OF SCIENCE IN COMPUTER SCIENCE");
        assert!(report.is_valid());
        assert!(report.message().is_empty());
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn every_invalid_field_is_listed() {
        let report = check_student_fields("20210001", "", "JUAN", "0", "male");
        assert!(!report.is_valid());
        assert_eq!(report.errors().len(), 4);

        // One line per violation, all in a single message.
        let message = report.message();
        assert_eq!(message.lines().count(), 4);
        assert!(message.contains("20210001"));
        assert!(message.contains("Surname and first name"));
        assert!(message.contains("year level 0"));
        assert!(message.contains("male"));
    }

    #[test]
    fn partial_failures_only_list_offenders() {
        let report = check_program_fields("CS", "BACHELOR OF SCIENCE IN COMPUTER SCIENCE");
        assert_eq!(
            report.errors(),
            &[ValidationError::ProgramCode("CS".to_string())]
        );
    }

    #[test]
    fn unparseable_year_joins_the_report() {
        let report = check_student_fields("2021-0001", "DELACRUZ", "JUAN", "three", "MALE");
        assert_eq!(
            report.errors(),
            &[ValidationError::YearFormat("three".to_string())]
        );
        assert!(report.message().contains("three"));
    }

    #[test]
    fn in_range_year_string_passes() {
        let report = check_student_fields("2021-0001", "DELACRUZ", "JUAN", "6", "MALE");
        assert!(report.is_valid());
    }

    #[test]
    fn into_result_returns_report_on_failure() {
        let report = check_program_fields("CS", "X");
        let err = report.into_result().unwrap_err();
        assert_eq!(err.errors().len(), 2);
    }
}
