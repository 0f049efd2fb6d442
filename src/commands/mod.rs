pub mod attend;
pub mod attendance;
pub mod delete;
pub mod init;
pub mod migrations;
pub mod register;
pub mod students;

use crate::libs::config::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Register a student")]
    Register(register::RegisterArgs),
    #[command(about = "Mark attendance for a student")]
    Attend(attend::AttendArgs),
    #[command(about = "List registered students")]
    Students(students::StudentsArgs),
    #[command(about = "List attendance, most recent first")]
    Attendance(attendance::AttendanceArgs),
    #[command(about = "Delete students and their attendance")]
    Delete(delete::DeleteArgs),
    #[command(about = "Inspect the database schema version")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        if let Ok(config) = Config::read() {
            config.log.init();
        }

        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Register(args) => register::cmd(args),
            Commands::Attend(args) => attend::cmd(args),
            Commands::Students(args) => students::cmd(args),
            Commands::Attendance(args) => attendance::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}
