use super::attendance::AttendanceRow;
use super::student::StudentSummary;
use anyhow::Result;
use prettytable::{row, Table};
use serde::Serialize;

const TIME_FORMAT: &str = "%H:%M:%S";

pub struct View {}

impl View {
    pub fn students(students: &[StudentSummary]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["NAME", "STUDENT ID", "COURSE", "EMAIL"]);
        for student in students {
            table.add_row(row![student.full_name, student.student_id, student.course, student.email]);
        }
        table.printstd();

        Ok(())
    }

    pub fn attendance(rows: &[AttendanceRow]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["STUDENT ID", "NAME", "DATE", "CHECK IN", "CHECK OUT"]);
        for entry in rows {
            table.add_row(row![
                entry.student_id,
                entry.full_name,
                entry.attendance_date.format("%Y-%m-%d"),
                entry.check_in.format(TIME_FORMAT),
                entry
                    .check_out
                    .map(|t| t.format(TIME_FORMAT).to_string())
                    .unwrap_or_else(|| "-".to_string())
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}
