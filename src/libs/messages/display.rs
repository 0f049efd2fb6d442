//! Human-readable text for every [`Message`].
//!
//! All operator-facing wording lives here so commands only pick a variant
//! and its parameters.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === STUDENT MESSAGES ===
            Message::StudentRegistered(id) => format!("Student {} registered", id),
            Message::RegistrationFailed(reason) => format!("Registration failed: {}", reason),
            Message::StudentsHeader => "Registered students:".to_string(),
            Message::NoStudentsFound => "No students found".to_string(),
            Message::ResumeReadFailed(path, error) => format!("Failed to read resume '{}': {}", path, error),

            // === ATTENDANCE MESSAGES ===
            Message::AttendanceSaved(id, date) => format!("Attendance saved for {} on {}", id, date),
            Message::AttendanceFailed(reason) => format!("Attendance failed: {}", reason),
            Message::AttendanceHeader => "Attendance (most recent first):".to_string(),
            Message::NoAttendanceFound => "No attendance recorded".to_string(),
            Message::InvalidAttendanceDate(value) => {
                format!("Invalid attendance date '{}'. Use YYYY-MM-DD or 'today'", value)
            }
            Message::InvalidCheckInTime(value) => format!("Invalid check-in time '{}'. Use HH:MM or HH:MM:SS", value),
            Message::InvalidCheckOutTime(value) => format!("Invalid check-out time '{}'. Use HH:MM or HH:MM:SS", value),

            // === DELETE MESSAGES ===
            Message::NoStudentsSelected => "No students selected".to_string(),
            Message::StudentsDeleted(count) => format!("Deleted {} student(s)", count),
            Message::ConfirmDeleteStudents(count) => {
                format!("Delete {} student(s) together with their attendance?", count)
            }
            Message::DeleteCancelled => "Deletion cancelled".to_string(),
            Message::DeleteFailed(reason) => format!("Delete failed: {}", reason),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::PromptDatabasePath => "Database file (empty for the default location)".to_string(),
            Message::PromptPoolSize => "Connection pool size".to_string(),
            Message::PoolSizeRange => "Pool size must be at least 1".to_string(),
            Message::PromptConnectionTimeout => "Connection checkout timeout (ms)".to_string(),
            Message::PromptBusyTimeout => "Lock wait timeout (ms)".to_string(),
            Message::PromptLogLevel => "Log level in debug mode".to_string(),

            // === DATABASE MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database schema needs to be updated".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
        };
        write!(f, "{}", text)
    }
}
