//! Transactional record store for students and their attendance.
//!
//! Built on SQLite through a pool of `rusqlite` connections. Integrity rules
//! live in the schema, not in application code:
//!
//! - `students.student_id` is the primary key
//! - `attendance` allows one row per `(student_id, attendance_date)`
//! - `attendance.student_id` references `students` with `ON DELETE CASCADE`
//!
//! Every public operation runs as one unit of work ([`db::Db::unit_of_work`]):
//! one pooled connection, one transaction, commit on success, rollback on
//! any failure.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rollcall::db::{attendance::AttendanceRecords, db::Db, students::Students};
//! use rollcall::libs::attendance::NewAttendance;
//! use rollcall::libs::config::DatabaseConfig;
//! use rollcall::libs::student::{DateParts, NewStudent};
//! use chrono::{NaiveDate, NaiveTime};
//! use std::path::Path;
//!
//! let db = Db::open(Path::new("rollcall.db"), &DatabaseConfig::default())?;
//! Students::new(&db).register(&NewStudent {
//!     student_id: "1001".to_string(),
//!     full_name: "Ada Lovelace".to_string(),
//!     date_of_birth: DateParts::new(14, 5, 2000),
//!     email: "ada@example.com".to_string(),
//!     phone_number: "555-0100".to_string(),
//!     address: "12 St James's Square".to_string(),
//!     course: "Mathematics".to_string(),
//!     resume: None,
//! })?;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let check_in = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
//! AttendanceRecords::new(&db).mark(&NewAttendance::new("1001", date, check_in, None))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod attendance;
pub mod constraint;
#[allow(clippy::module_inception)]
pub mod db;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod students;
