use crate::db::error::StoreError;
use chrono::NaiveDate;
use serde::Serialize;

/// Day, month and year of a date as entered, before composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl DateParts {
    pub fn new(day: u32, month: u32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// Composes the parts into a calendar date.
    ///
    /// Combinations such as 31 February fail with
    /// [`StoreError::InvalidDate`].
    pub fn to_date(&self) -> Result<NaiveDate, StoreError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or(StoreError::InvalidDate {
            day: self.day,
            month: self.month,
            year: self.year,
        })
    }
}

/// A student as submitted for registration.
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub student_id: String,
    pub full_name: String,
    pub date_of_birth: DateParts,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub course: String,
    pub resume: Option<Vec<u8>>,
}

/// The projection of a student shown in listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentSummary {
    pub full_name: String,
    pub student_id: String,
    pub course: String,
    pub email: String,
}

/// Result of a bulk delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The selection was empty; nothing was written.
    NoSelection,
    /// Number of student rows removed.
    Deleted(usize),
}

/// Trims `raw` and checks that it is a non-empty run of ASCII digits.
pub fn validate_student_id(raw: &str) -> Result<&str, StoreError> {
    let id = raw.trim();
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(StoreError::InvalidIdentifier(raw.to_string()));
    }
    Ok(id)
}
