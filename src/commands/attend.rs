//! Attendance marking command.

use crate::{
    db::{attendance::AttendanceRecords, db::Db},
    libs::{
        attendance::{parse_date, parse_optional_time, parse_time, NewAttendance},
        messages::Message,
    },
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AttendArgs {
    /// Student identifier (digits only)
    #[arg(long)]
    student_id: String,

    #[arg(long, short, default_value = "today", help = "Attendance date (YYYY-MM-DD or 'today')")]
    date: String,

    #[arg(long, help = "Check-in time (HH:MM or HH:MM:SS)")]
    check_in: String,

    /// Check-out time; leave out or pass an empty value when not known
    #[arg(long)]
    check_out: Option<String>,
}

pub fn cmd(args: AttendArgs) -> Result<()> {
    let Some(attendance_date) = parse_date(&args.date) else {
        msg_bail_anyhow!(Message::InvalidAttendanceDate(args.date));
    };
    let Some(check_in) = parse_time(&args.check_in) else {
        msg_bail_anyhow!(Message::InvalidCheckInTime(args.check_in));
    };
    let check_out = match parse_optional_time(args.check_out.as_deref()) {
        Ok(check_out) => check_out,
        Err(value) => msg_bail_anyhow!(Message::InvalidCheckOutTime(value)),
    };

    let entry = NewAttendance::new(&args.student_id, attendance_date, check_in, check_out);
    let db = Db::new()?;
    match AttendanceRecords::new(&db).mark(&entry) {
        Ok(()) => {
            msg_success!(Message::AttendanceSaved(
                entry.student_id.trim().to_string(),
                attendance_date.to_string()
            ));
            Ok(())
        }
        Err(err) => msg_bail_anyhow!(Message::AttendanceFailed(err.to_string())),
    }
}
