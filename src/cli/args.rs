//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `sync`: Merge source translations into the per-directory dictionaries
//! - `check`: Report stale dictionaries, duplicate ids and dangling references
//! - `import`: Write externally translated text into secondary locales
//! - `init`: Initialize the configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Sync(args)) => args.common.verbose,
            Some(Command::Check(args)) => args.common.verbose,
            Some(Command::Import(args)) => args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Primary locale (overrides config file)
    #[arg(long)]
    pub primary_locale: Option<String>,

    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Comma separated locale list, e.g. `en,fr,de` (overrides config file)
    #[arg(long, value_delimiter = ',')]
    pub locales: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct SyncArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually write dictionaries (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Parser)]
pub struct ImportArgs {
    /// JSON file mapping dictionary paths to `{locale: {id: text}}`
    pub file: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually write dictionaries (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge translations found in source files into the dictionaries
    Sync(SyncArgs),
    /// Check that dictionaries match the source without writing anything
    Check(CheckArgs),
    /// Import translated text into secondary locales
    Import(ImportArgs),
    /// Initialize a new .i18nsyncrc.json configuration file
    Init,
}
