//! Academic program records.

use std::fmt;

use serde::Serialize;

use super::validation::ValidationError;

/// A program code must be longer than this to count as meaningful.
const CODE_MIN_LEN: usize = 2;

/// A program name must be longer than this.
const NAME_MIN_LEN: usize = 12;

/// An academic program offering.
///
/// `code` is the unique key within the store. Fields are private so every
/// write goes through a validating path; construction and both setters re-run
/// the field predicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    code: String,
    name: String,
}

impl Program {
    /// Create a program, validating both fields.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into();
        let name = name.into();

        if !Self::valid_code(&code) {
            return Err(ValidationError::ProgramCode(code));
        }
        if !Self::valid_name(&name) {
            return Err(ValidationError::ProgramName(name));
        }

        Ok(Self { code, name })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reassign the code, re-validating it.
    ///
    /// On a record already inserted into a store this does not re-key the
    /// store's mapping. Callers re-keying a stored program should delete it
    /// and insert a fresh record instead.
    pub fn set_code(&mut self, code: impl Into<String>) -> Result<(), ValidationError> {
        let code = code.into();
        if !Self::valid_code(&code) {
            return Err(ValidationError::ProgramCode(code));
        }
        self.code = code;
        Ok(())
    }

    /// Reassign the name, re-validating it.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        if !Self::valid_name(&name) {
            return Err(ValidationError::ProgramName(name));
        }
        self.name = name;
        Ok(())
    }

    /// True iff the code is longer than two characters.
    pub fn valid_code(code: &str) -> bool {
        code.chars().count() > CODE_MIN_LEN
    }

    /// True iff the name is longer than twelve characters.
    pub fn valid_name(name: &str) -> bool {
        name.chars().count() > NAME_MIN_LEN
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.code, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_valid_fields() {
        let program = Program::new("BSCS", "BACHELOR OF SCIENCE IN COMPUTER SCIENCE").unwrap();
        assert_eq!(program.code(), "BSCS");
        assert_eq!(program.name(), "BACHELOR OF SCIENCE IN COMPUTER SCIENCE");
    }

    #[test]
    fn new_rejects_short_code() {
        let err = Program::new("CS", "BACHELOR OF SCIENCE IN COMPUTER SCIENCE").unwrap_err();
        assert_eq!(err, ValidationError::ProgramCode("CS".to_string()));
    }

    #[test]
    fn new_rejects_short_name() {
        let err = Program::new("BSCS", "SHORT NAME").unwrap_err();
        assert_eq!(err, ValidationError::ProgramName("SHORT NAME".to_string()));
    }

    #[test]
    fn code_boundary_is_exclusive() {
        // Exactly 2 characters fails, 3 passes.
        assert!(!Program::valid_code("AB"));
        assert!(Program::valid_code("ABC"));
    }

    #[test]
    fn name_boundary_is_exclusive() {
        // Exactly 12 characters fails, 13 passes.
        assert!(!Program::valid_name("TWELVE CHARS"));
        assert!(Program::valid_name("THIRTEEN CHRS"));
    }

    #[test]
    fn setters_revalidate() {
        let mut program = Program::new("BSCS", "BACHELOR OF SCIENCE IN COMPUTER SCIENCE").unwrap();

        assert!(program.set_code("AB").is_err());
        assert_eq!(program.code(), "BSCS");

        program.set_code("BSIT").unwrap();
        assert_eq!(program.code(), "BSIT");

        assert!(program.set_name("TOO SHORT").is_err());
        program
            .set_name("BACHELOR OF SCIENCE IN INFORMATION TECHNOLOGY")
            .unwrap();
        assert_eq!(
            program.name(),
            "BACHELOR OF SCIENCE IN INFORMATION TECHNOLOGY"
        );
    }

    #[test]
    fn display_joins_code_and_name() {
        let program = Program::new("BSCS", "BACHELOR OF SCIENCE IN COMPUTER SCIENCE").unwrap();
        assert_eq!(
            program.to_string(),
            "BSCS | BACHELOR OF SCIENCE IN COMPUTER SCIENCE"
        );
    }
}
