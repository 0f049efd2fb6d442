use chrono::{Local, NaiveDate, NaiveTime};
use serde::Serialize;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// An attendance mark as submitted.
#[derive(Debug, Clone)]
pub struct NewAttendance {
    pub student_id: String,
    pub attendance_date: NaiveDate,
    pub check_in: NaiveTime,
    pub check_out: Option<NaiveTime>,
}

impl NewAttendance {
    pub fn new(student_id: &str, attendance_date: NaiveDate, check_in: NaiveTime, check_out: Option<NaiveTime>) -> Self {
        Self {
            student_id: student_id.to_string(),
            attendance_date,
            check_in,
            check_out,
        }
    }
}

/// One line of the attendance listing, joined with the student's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceRow {
    pub student_id: String,
    pub full_name: String,
    pub attendance_date: NaiveDate,
    pub check_in: NaiveTime,
    pub check_out: Option<NaiveTime>,
}

/// Parses `YYYY-MM-DD` or the keyword `today`.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("today") {
        return Some(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).ok()
}

/// Parses `HH:MM` or `HH:MM:SS`.
pub fn parse_time(input: &str) -> Option<NaiveTime> {
    let input = input.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(input, format).ok())
}

/// Parses an optional time where an empty string means "not set".
pub fn parse_optional_time(input: Option<&str>) -> Result<Option<NaiveTime>, String> {
    match input.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_time(value).map(Some).ok_or_else(|| value.to_string()),
    }
}
