#[derive(Debug, Clone)]
pub enum Message {
    // === STUDENT MESSAGES ===
    StudentRegistered(String),    // student id
    RegistrationFailed(String),   // reason
    StudentsHeader,
    NoStudentsFound,
    ResumeReadFailed(String, String), // path, error

    // === ATTENDANCE MESSAGES ===
    AttendanceSaved(String, String), // student id, date
    AttendanceFailed(String),        // reason
    AttendanceHeader,
    NoAttendanceFound,
    InvalidAttendanceDate(String),
    InvalidCheckInTime(String),
    InvalidCheckOutTime(String),

    // === DELETE MESSAGES ===
    NoStudentsSelected,
    StudentsDeleted(usize),
    ConfirmDeleteStudents(usize),
    DeleteCancelled,
    DeleteFailed(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    PromptDatabasePath,
    PromptPoolSize,
    PoolSizeRange,
    PromptConnectionTimeout,
    PromptBusyTimeout,
    PromptLogLevel,

    // === DATABASE MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
}
