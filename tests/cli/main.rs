use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod check;
mod import;
mod init;
mod sync;

const BIN_NAME: &str = "i18n-sync";

/// Config used by most tests: English primary, French secondary.
const EN_FR_CONFIG: &str = r#"{ "locales": ["en", "fr"], "primaryLocale": "en" }"#;

/// A throwaway project directory plus helpers to run the binary in it.
pub struct CliTest {
    root: PathBuf,
    _dir: TempDir,
}

impl CliTest {
    /// An empty project. The `.git` marker keeps config lookup inside it.
    pub fn new() -> Result<Self> {
        let dir = TempDir::new()?;
        let root = dir.path().canonicalize()?;
        fs::create_dir(root.join(".git"))?;
        Ok(Self { root, _dir: dir })
    }

    /// A project with the English/French config and one file.
    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(".i18nsyncrc.json", EN_FR_CONFIG)?;
        test.write_file(path, content)?;
        Ok(test)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let target = self.root.join(path);
        let parent = target.parent().unwrap_or(&self.root);
        fs::create_dir_all(parent).with_context(|| format!("mkdir {}", parent.display()))?;
        fs::write(&target, content).with_context(|| format!("write {}", target.display()))
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let target = self.root.join(path);
        fs::read_to_string(&target).with_context(|| format!("read {}", target.display()))
    }

    /// The binary, run from the project root with colors off and a clean
    /// environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.root).env_clear().env("NO_COLOR", "1");
        cmd
    }

    fn subcommand(&self, args: &[&str]) -> Command {
        let mut cmd = self.command();
        cmd.args(args);
        cmd
    }

    pub fn sync_command(&self) -> Command {
        self.subcommand(&["sync"])
    }

    pub fn check_command(&self) -> Command {
        self.subcommand(&["check"])
    }

    pub fn import_command(&self, file: &str) -> Command {
        self.subcommand(&["import", file])
    }
}

/// Captured output of a finished command.
pub struct RunOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

pub fn run(cmd: &mut Command) -> Result<RunOutput> {
    let Output {
        status,
        stdout,
        stderr,
    } = cmd.output().context("Failed to run command")?;
    Ok(RunOutput {
        code: status.code(),
        stdout: String::from_utf8(stdout)?,
        stderr: String::from_utf8(stderr)?,
    })
}
