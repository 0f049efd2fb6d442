//! Classification of SQLite constraint violations.
//!
//! SQLite reports which rule rejected a write through its extended result
//! code. Reading that code is the only way the store distinguishes a
//! duplicate attendance mark from a missing student or a generic failure.

use rusqlite::{ffi, ErrorCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// `PRIMARY KEY` or `UNIQUE`.
    Unique,
    ForeignKey,
    /// `NOT NULL`, `CHECK` and the rest.
    Other,
}

pub fn classify(err: &rusqlite::Error) -> Option<Constraint> {
    match err {
        rusqlite::Error::SqliteFailure(failure, _) if failure.code == ErrorCode::ConstraintViolation => {
            Some(match failure.extended_code {
                ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => Constraint::Unique,
                ffi::SQLITE_CONSTRAINT_FOREIGNKEY => Constraint::ForeignKey,
                _ => Constraint::Other,
            })
        }
        _ => None,
    }
}
