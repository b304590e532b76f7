//! The file-backed record store.
//!
//! # Overview
//!
//! [`RecordStore`] owns the two keyed mappings (programs by code, students by
//! ID), enforces key uniqueness at insert time, and loads from / saves to two
//! delimited text files.
//!
//! # Persistence
//!
//! Saving is a total-replace write: the header row, then one row per record
//! sorted ascending by key. Whatever was removed from memory disappears from
//! the file, and in-place edits are written out as-is. There is no atomic
//! rename or backup, so a crash mid-write can leave a truncated file; callers
//! trigger saves explicitly and in-memory edits are never auto-persisted.
//!
//! # Referential integrity
//!
//! There is none, deliberately. A student's `program_code` may dangle after
//! the program is deleted; [`RecordStore::program_name_or_unenrolled`] resolves
//! it to the [`UNENROLLED`] placeholder at display time instead of failing.

pub mod rows;

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::error::StoreError;
use crate::records::{Gender, Program, Student, StudentName};

use self::rows::{PROGRAM_FIELD_NAMES, STUDENT_FIELD_NAMES};

/// Placeholder shown when a student's program code is empty or no longer
/// resolves to a program.
pub const UNENROLLED: &str = "NOT ENROLLED";

#[derive(Debug)]
pub struct RecordStore {
    programs_path: PathBuf,
    students_path: PathBuf,
    programs: HashMap<String, Program>,
    students: HashMap<String, Student>,
}

impl RecordStore {
    /// Open the store over the two backing files.
    ///
    /// A missing file is created with just its header row and leaves the
    /// mapping empty. An existing file is parsed in full: any row that fails a
    /// field invariant or collides on its key aborts the open. The store never
    /// loads partially.
    pub fn open(
        programs_path: impl Into<PathBuf>,
        students_path: impl Into<PathBuf>,
    ) -> Result<Self, StoreError> {
        let mut store = Self {
            programs_path: programs_path.into(),
            students_path: students_path.into(),
            programs: HashMap::new(),
            students: HashMap::new(),
        };

        store.load_programs()?;
        store.load_students()?;

        Ok(store)
    }

    fn load_programs(&mut self) -> Result<(), StoreError> {
        if !self.programs_path.exists() {
            rows::create_with_header(&self.programs_path, &PROGRAM_FIELD_NAMES)?;
            log::info!(
                "created empty programs file at {}",
                self.programs_path.display()
            );
            return Ok(());
        }

        let contents = fs::read_to_string(&self.programs_path)?;

        // First record is the header.
        for (line, record) in rows::split_records(&contents).into_iter().skip(1) {
            if record.is_empty() {
                continue;
            }

            let cols = rows::split_row(record, PROGRAM_FIELD_NAMES.len()).ok_or_else(|| {
                StoreError::MalformedRow {
                    path: self.programs_path.clone(),
                    line,
                    reason: format!("expected {} columns", PROGRAM_FIELD_NAMES.len()),
                }
            })?;

            let program = Program::new(cols[0].as_str(), cols[1].as_str())?;
            self.add_program(program)?;
        }

        log::info!(
            "loaded {} programs from {}",
            self.programs.len(),
            self.programs_path.display()
        );
        Ok(())
    }

    fn load_students(&mut self) -> Result<(), StoreError> {
        if !self.students_path.exists() {
            rows::create_with_header(&self.students_path, &STUDENT_FIELD_NAMES)?;
            log::info!(
                "created empty students file at {}",
                self.students_path.display()
            );
            return Ok(());
        }

        let contents = fs::read_to_string(&self.students_path)?;

        for (line, record) in rows::split_records(&contents).into_iter().skip(1) {
            if record.is_empty() {
                continue;
            }

            let cols = rows::split_row(record, STUDENT_FIELD_NAMES.len()).ok_or_else(|| {
                StoreError::MalformedRow {
                    path: self.students_path.clone(),
                    line,
                    reason: format!("expected {} columns", STUDENT_FIELD_NAMES.len()),
                }
            })?;

            let year: u32 = cols[5].parse().map_err(|_| StoreError::MalformedRow {
                path: self.students_path.clone(),
                line,
                reason: format!("invalid year \"{}\"", cols[5]),
            })?;
            let gender: Gender = cols[6].parse()?;

            // Empty optional columns collapse to absent inside StudentName.
            let name = StudentName::new(
                cols[1].as_str(),
                cols[2].as_str(),
                Some(cols[3].clone()),
                Some(cols[4].clone()),
            )?;
            let student = Student::new(cols[0].as_str(), name, year, gender, cols[7].as_str())?;
            self.add_student(student)?;
        }

        log::info!(
            "loaded {} students from {}",
            self.students.len(),
            self.students_path.display()
        );
        Ok(())
    }

    /// Insert a program keyed by its code.
    ///
    /// On a duplicate code the existing record is left untouched and the new
    /// one is not stored.
    pub fn add_program(&mut self, program: Program) -> Result<(), StoreError> {
        if self.programs.contains_key(program.code()) {
            return Err(StoreError::DuplicateProgram(program.code().to_string()));
        }

        self.programs.insert(program.code().to_string(), program);
        Ok(())
    }

    /// Insert a student keyed by their ID.
    ///
    /// On a duplicate ID the existing record is left untouched and the new one
    /// is not stored.
    pub fn add_student(&mut self, student: Student) -> Result<(), StoreError> {
        if self.students.contains_key(student.id()) {
            return Err(StoreError::DuplicateStudent(student.id().to_string()));
        }

        self.students.insert(student.id().to_string(), student);
        Ok(())
    }

    pub fn get_program_by_code(&self, code: &str) -> Result<&Program, StoreError> {
        self.programs
            .get(code)
            .ok_or_else(|| StoreError::ProgramNotFound(code.to_string()))
    }

    /// Live handle for in-place edits; changes are visible in the store and
    /// written out on the next save.
    pub fn get_program_by_code_mut(&mut self, code: &str) -> Result<&mut Program, StoreError> {
        self.programs
            .get_mut(code)
            .ok_or_else(|| StoreError::ProgramNotFound(code.to_string()))
    }

    /// A malformed ID fails before "not found" can apply.
    pub fn get_student_by_id(&self, id: &str) -> Result<&Student, StoreError> {
        if !Student::valid_id(id) {
            return Err(StoreError::MalformedStudentId(id.to_string()));
        }

        self.students
            .get(id)
            .ok_or_else(|| StoreError::StudentNotFound(id.to_string()))
    }

    /// Live handle for in-place edits; same key semantics as
    /// [`RecordStore::get_student_by_id`].
    pub fn get_student_by_id_mut(&mut self, id: &str) -> Result<&mut Student, StoreError> {
        if !Student::valid_id(id) {
            return Err(StoreError::MalformedStudentId(id.to_string()));
        }

        self.students
            .get_mut(id)
            .ok_or_else(|| StoreError::StudentNotFound(id.to_string()))
    }

    /// Remove and return a program.
    ///
    /// Never cascades: students referencing the code keep it, and display-time
    /// resolution degrades to [`UNENROLLED`].
    pub fn delete_program_by_code(&mut self, code: &str) -> Result<Program, StoreError> {
        self.programs
            .remove(code)
            .ok_or_else(|| StoreError::ProgramNotFound(code.to_string()))
    }

    /// Remove and return a student; same key semantics as lookup.
    pub fn delete_student_by_id(&mut self, id: &str) -> Result<Student, StoreError> {
        if !Student::valid_id(id) {
            return Err(StoreError::MalformedStudentId(id.to_string()));
        }

        self.students
            .remove(id)
            .ok_or_else(|| StoreError::StudentNotFound(id.to_string()))
    }

    /// Overwrite the programs file with the full current state, sorted by code.
    pub fn save_programs(&self) -> Result<(), StoreError> {
        let mut out = String::new();
        out.push_str(&rows::header(&PROGRAM_FIELD_NAMES));
        out.push('\n');

        for program in self.programs_sorted() {
            out.push_str(&rows::encode_row(&[program.code(), program.name()]));
            out.push('\n');
        }

        fs::write(&self.programs_path, out)?;

        log::info!(
            "saved {} programs to {}",
            self.programs.len(),
            self.programs_path.display()
        );
        Ok(())
    }

    /// Overwrite the students file with the full current state, sorted by ID.
    pub fn save_students(&self) -> Result<(), StoreError> {
        let mut out = String::new();
        out.push_str(&rows::header(&STUDENT_FIELD_NAMES));
        out.push('\n');

        for student in self.students_sorted() {
            let year = student.year().to_string();
            out.push_str(&rows::encode_row(&[
                student.id(),
                student.name().surname(),
                student.name().first_name(),
                student.name().middle_name().unwrap_or(""),
                student.name().suffix().unwrap_or(""),
                &year,
                student.gender().as_str(),
                student.program_code(),
            ]));
            out.push('\n');
        }

        fs::write(&self.students_path, out)?;

        log::info!(
            "saved {} students to {}",
            self.students.len(),
            self.students_path.display()
        );
        Ok(())
    }

    /// All programs sorted by code. A snapshot for display, not a live cursor.
    pub fn programs_sorted(&self) -> Vec<&Program> {
        let mut programs: Vec<&Program> = self.programs.values().collect();
        programs.sort_by(|a, b| a.code().cmp(b.code()));
        programs
    }

    /// All students sorted by ID. A snapshot for display, not a live cursor.
    pub fn students_sorted(&self) -> Vec<&Student> {
        let mut students: Vec<&Student> = self.students.values().collect();
        students.sort_by(|a, b| a.id().cmp(b.id()));
        students
    }

    /// Resolve a student's program code to the program name for display.
    /// Empty and dangling codes both degrade to [`UNENROLLED`].
    pub fn program_name_or_unenrolled(&self, program_code: &str) -> &str {
        self.programs
            .get(program_code)
            .map(|program| program.name())
            .unwrap_or(UNENROLLED)
    }
}
