//! Bulk deletion of students.
//!
//! Every selected id is removed in one transaction, attendance included.
//! Unknown ids are skipped silently; an empty selection writes nothing.

use crate::{
    db::{db::Db, students::Students},
    libs::{messages::Message, student::DeleteOutcome},
    msg_bail_anyhow, msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::collections::BTreeSet;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Student identifiers to delete
    student_ids: Vec<String>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let selection: BTreeSet<String> = args
        .student_ids
        .iter()
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .collect();

    if !selection.is_empty() && !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteStudents(selection.len()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_warning!(Message::DeleteCancelled);
            return Ok(());
        }
    }

    let db = Db::new()?;
    match Students::new(&db).delete(&selection) {
        Ok(DeleteOutcome::NoSelection) => {
            msg_info!(Message::NoStudentsSelected);
            Ok(())
        }
        Ok(DeleteOutcome::Deleted(count)) => {
            msg_success!(Message::StudentsDeleted(count));
            Ok(())
        }
        Err(err) => msg_bail_anyhow!(Message::DeleteFailed(err.to_string())),
    }
}
