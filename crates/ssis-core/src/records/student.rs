//! Student records: identity, compound name, year level, gender.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::validation::ValidationError;

/// Shape a student ID must match, e.g. `2021-0001`.
pub const ID_PATTERN: &str = r"[0-9]{4}-[0-9]{4}";

/// Lowest valid year level.
pub const MIN_YEAR: u32 = 1;

/// Highest valid year level.
pub const MAX_YEAR: u32 = 6;

// Anchored at the start only, so a valid prefix with trailing characters is
// accepted. Tighten with `$` only together with a data-file sweep.
static ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{ID_PATTERN}")).unwrap());

/// Recognized gender values, matched case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Other => "OTHER",
        }
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MALE" => Ok(Gender::Male),
            "FEMALE" => Ok(Gender::Female),
            "OTHER" => Ok(Gender::Other),
            other => Err(ValidationError::Gender(other.to_string())),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A four-part student name.
///
/// Surname and first name are required. Middle name and suffix are genuinely
/// optional: `None` means absent, and an empty string passed for either part
/// collapses to `None` so "absent" stays unambiguous at the type level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentName {
    surname: String,
    first_name: String,
    middle_name: Option<String>,
    suffix: Option<String>,
}

impl StudentName {
    pub fn new(
        surname: impl Into<String>,
        first_name: impl Into<String>,
        middle_name: Option<String>,
        suffix: Option<String>,
    ) -> Result<Self, ValidationError> {
        let surname = surname.into();
        let first_name = first_name.into();

        if !Self::valid(&surname, &first_name) {
            return Err(ValidationError::StudentName);
        }

        Ok(Self {
            surname,
            first_name,
            middle_name: middle_name.filter(|part| !part.is_empty()),
            suffix: suffix.filter(|part| !part.is_empty()),
        })
    }

    /// True iff both required parts are non-empty.
    pub fn valid(surname: &str, first_name: &str) -> bool {
        !surname.is_empty() && !first_name.is_empty()
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn middle_name(&self) -> Option<&str> {
        self.middle_name.as_deref()
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }
}

impl fmt::Display for StudentName {
    /// `SURNAME, FIRSTNAME [MIDDLE] [SUFFIX]` with absent parts omitted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.surname, self.first_name)?;
        if let Some(middle) = &self.middle_name {
            write!(f, " {middle}")?;
        }
        if let Some(suffix) = &self.suffix {
            write!(f, " {suffix}")?;
        }
        Ok(())
    }
}

/// An enrolled student.
///
/// `id` is the unique key within the store and is fixed at construction; the
/// remaining fields go through validating setters. `program_code` is not a
/// foreign key: it may name a program that no longer exists, and display-time
/// resolution falls back to the unenrolled placeholder (see the store).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    id: String,
    name: StudentName,
    year: u32,
    gender: Gender,
    program_code: String,
}

impl Student {
    /// Create a student, validating the ID shape and year level.
    pub fn new(
        id: impl Into<String>,
        name: StudentName,
        year: u32,
        gender: Gender,
        program_code: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let id = id.into();

        if !Self::valid_id(&id) {
            return Err(ValidationError::StudentId(id));
        }
        if !Self::valid_year(year) {
            return Err(ValidationError::Year(year));
        }

        Ok(Self {
            id,
            name,
            year,
            gender,
            program_code: program_code.into(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &StudentName {
        &self.name
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Empty string means unenrolled.
    pub fn program_code(&self) -> &str {
        &self.program_code
    }

    /// Replace the name. [`StudentName`] is validated at construction, so
    /// there is nothing left to check here.
    pub fn set_name(&mut self, name: StudentName) {
        self.name = name;
    }

    pub fn set_year(&mut self, year: u32) -> Result<(), ValidationError> {
        if !Self::valid_year(year) {
            return Err(ValidationError::Year(year));
        }
        self.year = year;
        Ok(())
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = gender;
    }

    /// Unconstrained: the code is not checked against the program mapping.
    pub fn set_program_code(&mut self, program_code: impl Into<String>) {
        self.program_code = program_code.into();
    }

    /// Start-anchored match of [`ID_PATTERN`]; trailing characters after a
    /// valid prefix are accepted.
    pub fn valid_id(id: &str) -> bool {
        ID_RE.is_match(id)
    }

    /// True iff the year level lies within [`MIN_YEAR`]..=[`MAX_YEAR`].
    pub fn valid_year(year: u32) -> bool {
        (MIN_YEAR..=MAX_YEAR).contains(&year)
    }

    /// Case-sensitive membership in the recognized gender set.
    pub fn valid_gender(gender: &str) -> bool {
        gender.parse::<Gender>().is_ok()
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | Name: {}; Year: {}; Gender: {}; Program Code: {}",
            self.id, self.name, self.year, self.gender, self.program_code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_name() -> StudentName {
        StudentName::new("DELACRUZ", "JUAN", None, Some("SR".to_string())).unwrap()
    }

    #[test]
    fn valid_id_matches_shape() {
        assert!(Student::valid_id("2021-0001"));
        assert!(!Student::valid_id("abcd-1234"));
        assert!(!Student::valid_id("20210001"));
        assert!(!Student::valid_id("202-10001"));
        assert!(!Student::valid_id(""));
    }

    #[test]
    fn valid_id_accepts_trailing_characters() {
        // The pattern is anchored at the start only, so a valid prefix with
        // trailing characters still passes.
        assert!(Student::valid_id("2021-0001-extra"));
    }

    #[test]
    fn year_boundaries() {
        assert!(!Student::valid_year(0));
        assert!(Student::valid_year(1));
        assert!(Student::valid_year(6));
        assert!(!Student::valid_year(7));
    }

    #[test]
    fn gender_is_case_sensitive() {
        assert!(Student::valid_gender("MALE"));
        assert!(Student::valid_gender("FEMALE"));
        assert!(Student::valid_gender("OTHER"));
        assert!(!Student::valid_gender("male"));
        assert!(!Student::valid_gender("M"));
        assert!(!Student::valid_gender(""));
    }

    #[test]
    fn gender_round_trips_through_str() {
        for gender in [Gender::Male, Gender::Female, Gender::Other] {
            assert_eq!(gender.as_str().parse::<Gender>().unwrap(), gender);
        }
    }

    #[test]
    fn name_requires_surname_and_first_name() {
        assert!(StudentName::new("", "JUAN", None, None).is_err());
        assert!(StudentName::new("DELACRUZ", "", None, None).is_err());
        assert!(StudentName::new("DELACRUZ", "JUAN", None, None).is_ok());
    }

    #[test]
    fn name_collapses_empty_optional_parts() {
        let name =
            StudentName::new("DELACRUZ", "JUAN", Some(String::new()), Some(String::new())).unwrap();
        assert_eq!(name.middle_name(), None);
        assert_eq!(name.suffix(), None);
    }

    #[test]
    fn name_formats_with_optional_parts() {
        let full = StudentName::new(
            "DELACRUZ",
            "JUAN",
            Some("SANTOS".to_string()),
            Some("SR".to_string()),
        )
        .unwrap();
        assert_eq!(full.to_string(), "DELACRUZ, JUAN SANTOS SR");

        let bare = StudentName::new("DELACRUZ", "JUAN", None, None).unwrap();
        assert_eq!(bare.to_string(), "DELACRUZ, JUAN");

        let suffix_only = make_name();
        assert_eq!(suffix_only.to_string(), "DELACRUZ, JUAN SR");
    }

    #[test]
    fn new_rejects_bad_id() {
        let err = Student::new("20210001", make_name(), 3, Gender::Male, "BSCS").unwrap_err();
        assert_eq!(err, ValidationError::StudentId("20210001".to_string()));
    }

    #[test]
    fn new_rejects_year_out_of_range() {
        let err = Student::new("2021-0001", make_name(), 0, Gender::Male, "BSCS").unwrap_err();
        assert_eq!(err, ValidationError::Year(0));

        let err = Student::new("2021-0001", make_name(), 7, Gender::Male, "BSCS").unwrap_err();
        assert_eq!(err, ValidationError::Year(7));
    }

    #[test]
    fn setters_revalidate() {
        let mut student = Student::new("2021-0001", make_name(), 3, Gender::Male, "BSCS").unwrap();

        assert!(student.set_year(7).is_err());
        assert_eq!(student.year(), 3);

        student.set_year(4).unwrap();
        assert_eq!(student.year(), 4);

        student.set_gender(Gender::Other);
        assert_eq!(student.gender(), Gender::Other);

        student.set_program_code("");
        assert_eq!(student.program_code(), "");
    }

    #[test]
    fn display_matches_summary_line() {
        let student = Student::new("2021-0001", make_name(), 3, Gender::Male, "BSCS").unwrap();
        assert_eq!(
            student.to_string(),
            "2021-0001 | Name: DELACRUZ, JUAN SR; Year: 3; Gender: MALE; Program Code: BSCS"
        );
    }
}
