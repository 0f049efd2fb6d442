//! Typed failures of the record store.
//!
//! Every write operation returns a [`StoreError`] instead of letting a raw
//! SQLite error escape, so callers can present a precise message for each
//! outcome. [`StoreError::kind`] collapses the variants onto the four-way
//! taxonomy the request boundary works with.

use super::constraint::{classify, Constraint};
use chrono::NaiveDate;
use rusqlite::ErrorCode;
use thiserror::Error;

/// Coarse classification of a [`StoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed date or identifier; rejected before touching storage.
    InvalidInput,
    /// The referenced student does not exist.
    NotFound,
    /// A uniqueness constraint rejected the write.
    Conflict,
    /// The store could not be reached or did not answer in time.
    Unavailable,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("invalid date of birth: day {day}, month {month}, year {year}")]
    InvalidDate { day: u32, month: u32, year: i32 },

    #[error("invalid student ID '{0}'")]
    InvalidIdentifier(String),

    #[error("student ID {0} does not exist")]
    UnknownStudent(String),

    #[error("student ID {0} is already registered")]
    DuplicateStudentId(String),

    #[error("attendance already marked for student {student_id} on {date}")]
    DuplicateAttendance { student_id: String, date: NaiveDate },

    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage error: {0}")]
    Storage(#[source] rusqlite::Error),
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::InvalidDate { .. } | StoreError::InvalidIdentifier(_) => ErrorKind::InvalidInput,
            StoreError::UnknownStudent(_) => ErrorKind::NotFound,
            StoreError::DuplicateStudentId(_) | StoreError::DuplicateAttendance { .. } => ErrorKind::Conflict,
            StoreError::Unavailable(_) | StoreError::Storage(_) => ErrorKind::Unavailable,
        }
    }

    /// Returns the constraint that rejected the write, if any.
    pub fn constraint(&self) -> Option<Constraint> {
        match self {
            StoreError::Storage(err) => classify(err),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match err.sqlite_error_code() {
            Some(
                ErrorCode::DatabaseBusy
                | ErrorCode::DatabaseLocked
                | ErrorCode::CannotOpen
                | ErrorCode::SystemIoFailure
                | ErrorCode::DiskFull
                | ErrorCode::NotADatabase,
            ) => StoreError::Unavailable(err.to_string()),
            _ => StoreError::Storage(err),
        }
    }
}

impl From<r2d2::Error> for StoreError {
    fn from(err: r2d2::Error) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}
