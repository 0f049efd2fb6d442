use crate::{
    db::{attendance::AttendanceRecords, db::Db},
    libs::{messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AttendanceArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: AttendanceArgs) -> Result<()> {
    let db = Db::new()?;
    let rows = AttendanceRecords::new(&db).list();

    if args.json {
        return View::json(&rows);
    }
    if rows.is_empty() {
        msg_info!(Message::NoAttendanceFound);
        return Ok(());
    }

    msg_print!(Message::AttendanceHeader, true);
    View::attendance(&rows)
}
