//! External command execution
//!
//! Every package-manager and generator invocation goes through
//! [`ProcessRunner`]. Commands run synchronously, inherit the terminal and
//! receive their working directory explicitly.

use anyhow::Context;
use std::fmt::Display;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

pub mod package_manager;

pub use package_manager::PackageManager;

/// A program and its arguments, not yet bound to a working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    program: String,
    args: Vec<String>,
}

impl ExternalCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), args: Vec::new() }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }
}

impl Display for ExternalCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Runs an external command to completion.
pub trait ProcessRunner {
    /// Runs `command` inside `cwd` and blocks until it exits.
    ///
    /// # Errors
    /// * [`Error::ExternalCommandError`] when the command exits nonzero
    /// * [`Error::Other`] when it cannot be spawned
    fn run(&self, command: &ExternalCommand, cwd: &Path) -> Result<()>;
}

/// Spawns real child processes with inherited stdio.
#[derive(Debug, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }

    fn build(command: &ExternalCommand) -> Command {
        // Package managers ship as `.cmd` shims on Windows, which only the shell resolves
        if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(command.program()).args(command.arguments());
            cmd
        } else {
            let mut cmd = Command::new(command.program());
            cmd.args(command.arguments());
            cmd
        }
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, command: &ExternalCommand, cwd: &Path) -> Result<()> {
        log::debug!("Running '{command}' in {}", cwd.display());

        let status = Self::build(command)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| format!("Failed to start '{command}'"))?;

        if !status.success() {
            return Err(Error::ExternalCommandError {
                command: command.to_string(),
                code: status.code(),
            });
        }

        Ok(())
    }
}
