//! Daily attendance marks and the attendance listing.

use super::constraint::{classify, Constraint};
use super::db::Db;
use super::error::StoreError;
use crate::libs::attendance::{AttendanceRow, NewAttendance};
use crate::libs::student::validate_student_id;
use rusqlite::{params, OptionalExtension};
use tracing::{info, warn};

const SELECT_STUDENT_EXISTS: &str = "SELECT 1 FROM students WHERE student_id = ?1";
const INSERT_ATTENDANCE: &str = "INSERT INTO attendance
    (student_id, attendance_date, check_in, check_out)
    VALUES (?1, ?2, ?3, ?4)";
const SELECT_WITH_STUDENT: &str = "
    SELECT a.student_id, s.full_name, a.attendance_date, a.check_in, a.check_out
    FROM attendance a
    JOIN students s ON a.student_id = s.student_id
    ORDER BY a.attendance_date DESC, a.student_id
";

pub struct AttendanceRecords {
    db: Db,
}

impl AttendanceRecords {
    pub fn new(db: &Db) -> Self {
        Self { db: db.clone() }
    }

    /// Marks attendance for one student on one date.
    ///
    /// The student must exist. Duplicates are not looked up beforehand: the
    /// `UNIQUE(student_id, attendance_date)` constraint rejects them and the
    /// violation is reported as [`StoreError::DuplicateAttendance`].
    pub fn mark(&self, entry: &NewAttendance) -> Result<(), StoreError> {
        let student_id = validate_student_id(&entry.student_id)?;

        self.db.unit_of_work(|tx| {
            let exists = tx
                .query_row(SELECT_STUDENT_EXISTS, [student_id], |_| Ok(()))
                .optional()?
                .is_some();
            if !exists {
                return Err(StoreError::UnknownStudent(student_id.to_string()));
            }

            tx.execute(
                INSERT_ATTENDANCE,
                params![student_id, entry.attendance_date, entry.check_in, entry.check_out],
            )
            .map_err(|err| match classify(&err) {
                Some(Constraint::Unique) => StoreError::DuplicateAttendance {
                    student_id: student_id.to_string(),
                    date: entry.attendance_date,
                },
                Some(Constraint::ForeignKey) => StoreError::UnknownStudent(student_id.to_string()),
                _ => StoreError::from(err),
            })?;
            Ok(())
        })?;

        info!(student_id, date = %entry.attendance_date, "attendance marked");
        Ok(())
    }

    /// Lists attendance, most recent date first. Storage failures yield an
    /// empty list.
    pub fn list(&self) -> Vec<AttendanceRow> {
        self.try_list().unwrap_or_else(|err| {
            warn!(error = %err, "listing attendance failed; returning an empty list");
            Vec::new()
        })
    }

    pub fn try_list(&self) -> Result<Vec<AttendanceRow>, StoreError> {
        self.db.read_unit(|tx| {
            let mut stmt = tx.prepare(SELECT_WITH_STUDENT)?;
            let row_iter = stmt.query_map([], |row| {
                Ok(AttendanceRow {
                    student_id: row.get(0)?,
                    full_name: row.get(1)?,
                    attendance_date: row.get(2)?,
                    check_in: row.get(3)?,
                    check_out: row.get(4)?,
                })
            })?;

            let mut rows = Vec::new();
            for row in row_iter {
                rows.push(row?);
            }
            Ok(rows)
        })
    }
}
