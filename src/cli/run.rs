use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check, import::import, init::init, sync::sync},
};

/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with issues, counts and exit behavior
/// - `Err` if the command cannot run at all (bad config, unreadable import file)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Sync(args)) => sync(args),
        Some(Command::Check(args)) => check(args),
        Some(Command::Import(args)) => import(args),
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
