//! # Rollcall - Student Enrollment and Attendance Records
//!
//! A command-line utility that registers students, marks their daily
//! attendance and keeps both consistent in a local SQLite store.
//!
//! ## Features
//!
//! - **Registration**: students with contact details, course and an optional resume
//! - **Attendance**: one check-in per student per day, enforced by the store
//! - **Listings**: students by name, attendance newest first
//! - **Bulk delete**: atomic removal of a selection of students and their attendance
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rollcall::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
