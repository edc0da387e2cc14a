use anyhow::Result;

use super::args::{Arguments, Command};
use super::exit_status::ExitStatus;
use crate::commands::{init, plan, run as run_command};

/// Dispatch to the appropriate command handler based on the parsed arguments.
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Run(args)) => run_command::run(args),
        Some(Command::Plan(args)) => plan::plan(args),
        Some(Command::Init) => {
            init::init()?;
            Ok(ExitStatus::Success)
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
