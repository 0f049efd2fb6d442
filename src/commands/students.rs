use crate::{
    db::{db::Db, students::Students},
    libs::{messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StudentsArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: StudentsArgs) -> Result<()> {
    let db = Db::new()?;
    let students = Students::new(&db).list();

    if args.json {
        return View::json(&students);
    }
    if students.is_empty() {
        msg_info!(Message::NoStudentsFound);
        return Ok(());
    }

    msg_print!(Message::StudentsHeader, true);
    View::students(&students)
}
