//! Student registration command.
//!
//! Collects the registration fields, reads the optional resume file and
//! hands everything to the store in one call. The date of birth arrives as
//! separate day, month and year values and is composed by the store.

use crate::{
    db::{db::Db, students::Students},
    libs::{
        messages::Message,
        student::{DateParts, NewStudent},
    },
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Externally assigned student identifier
    #[arg(long)]
    student_id: String,

    #[arg(long)]
    full_name: String,

    #[arg(long)]
    email: String,

    #[arg(long)]
    phone: String,

    #[arg(long)]
    address: String,

    #[arg(long)]
    course: String,

    /// Day of birth (1-31)
    #[arg(long)]
    day: u32,

    /// Month of birth (1-12)
    #[arg(long)]
    month: u32,

    /// Year of birth
    #[arg(long)]
    year: i32,

    /// Resume file stored as-is alongside the record
    #[arg(long)]
    resume: Option<PathBuf>,
}

pub fn cmd(args: RegisterArgs) -> Result<()> {
    let resume = match &args.resume {
        Some(path) => match fs::read(path) {
            Ok(bytes) => Some(bytes),
            Err(e) => msg_bail_anyhow!(Message::ResumeReadFailed(path.display().to_string(), e.to_string())),
        },
        None => None,
    };

    let student = NewStudent {
        student_id: args.student_id,
        full_name: args.full_name,
        date_of_birth: DateParts::new(args.day, args.month, args.year),
        email: args.email,
        phone_number: args.phone,
        address: args.address,
        course: args.course,
        resume,
    };

    let db = Db::new()?;
    match Students::new(&db).register(&student) {
        Ok(student_id) => {
            msg_success!(Message::StudentRegistered(student_id));
            Ok(())
        }
        Err(err) => msg_bail_anyhow!(Message::RegistrationFailed(err.to_string())),
    }
}
