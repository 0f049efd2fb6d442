//! Student registration, listing and bulk deletion.

use super::constraint::{classify, Constraint};
use super::db::Db;
use super::error::StoreError;
use crate::libs::student::{DeleteOutcome, NewStudent, StudentSummary};
use rusqlite::{params, params_from_iter};
use std::collections::BTreeSet;
use tracing::{info, warn};

const INSERT_STUDENT: &str = "INSERT INTO students
    (student_id, full_name, date_of_birth, email, phone_number, address, course, resume)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const SELECT_SUMMARIES: &str = "SELECT full_name, student_id, course, email
    FROM students
    ORDER BY full_name, student_id";
const DELETE_WHERE_ID: &str = "DELETE FROM students WHERE student_id IN";
/// Ids bound per `DELETE` statement; stays well under SQLite's host parameter limit.
const DELETE_CHUNK_SIZE: usize = 500;

pub struct Students {
    db: Db,
}

impl Students {
    pub fn new(db: &Db) -> Self {
        Self { db: db.clone() }
    }

    /// Registers a student and returns its id.
    ///
    /// The date of birth is composed before any storage access, so invalid
    /// date parts never open a transaction.
    pub fn register(&self, student: &NewStudent) -> Result<String, StoreError> {
        let date_of_birth = student.date_of_birth.to_date()?;
        let student_id = student.student_id.trim();
        if student_id.is_empty() {
            return Err(StoreError::InvalidIdentifier(student.student_id.clone()));
        }

        self.db.unit_of_work(|tx| {
            tx.execute(
                INSERT_STUDENT,
                params![
                    student_id,
                    student.full_name,
                    date_of_birth,
                    student.email,
                    student.phone_number,
                    student.address,
                    student.course,
                    student.resume,
                ],
            )
            .map_err(|err| match classify(&err) {
                Some(Constraint::Unique) => StoreError::DuplicateStudentId(student_id.to_string()),
                _ => StoreError::from(err),
            })?;
            Ok(())
        })?;

        info!(student_id, "student registered");
        Ok(student_id.to_string())
    }

    /// Lists students by name. Storage failures yield an empty list.
    pub fn list(&self) -> Vec<StudentSummary> {
        self.try_list().unwrap_or_else(|err| {
            warn!(error = %err, "listing students failed; returning an empty list");
            Vec::new()
        })
    }

    pub fn try_list(&self) -> Result<Vec<StudentSummary>, StoreError> {
        self.db.read_unit(|tx| {
            let mut stmt = tx.prepare(SELECT_SUMMARIES)?;
            let student_iter = stmt.query_map([], |row| {
                Ok(StudentSummary {
                    full_name: row.get(0)?,
                    student_id: row.get(1)?,
                    course: row.get(2)?,
                    email: row.get(3)?,
                })
            })?;

            let mut students = Vec::new();
            for student in student_iter {
                students.push(student?);
            }
            Ok(students)
        })
    }

    /// Deletes every student whose id is in `student_ids`.
    ///
    /// Large selections are split into several statements, all inside one
    /// unit of work, so the set is removed entirely or not at all. Ids that
    /// are not registered are ignored. Attendance of the removed students
    /// goes with them.
    pub fn delete(&self, student_ids: &BTreeSet<String>) -> Result<DeleteOutcome, StoreError> {
        if student_ids.is_empty() {
            return Ok(DeleteOutcome::NoSelection);
        }

        let ids: Vec<&String> = student_ids.iter().collect();
        let deleted = self.db.unit_of_work(|tx| {
            let mut deleted = 0;
            for chunk in ids.chunks(DELETE_CHUNK_SIZE) {
                let sql = format!("{} ({})", DELETE_WHERE_ID, vec!["?"; chunk.len()].join(", "));
                deleted += tx.execute(&sql, params_from_iter(chunk.iter()))?;
            }
            Ok(deleted)
        })?;

        info!(requested = student_ids.len(), deleted, "students deleted");
        Ok(DeleteOutcome::Deleted(deleted))
    }
}
