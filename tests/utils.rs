#![allow(dead_code)]

use devnest::error::{Error, Result};
use devnest::process::{ExternalCommand, PackageManager, ProcessRunner};
use devnest::prompt::ScriptedPrompter;
use devnest::scaffold::{scaffold, Services};
use devnest::types::ProjectContext;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Records every command instead of spawning it.
///
/// A command whose text starts with `fail_on` exits with `fail_code`.
#[derive(Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<(String, PathBuf)>>,
    fail_on: Option<(String, i32)>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(prefix: &str, code: i32) -> Self {
        Self { calls: RefCell::default(), fail_on: Some((prefix.to_string(), code)) }
    }

    /// Recorded `(command line, working directory)` pairs, in call order.
    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls.borrow().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(command, _)| command.clone()).collect()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, command: &ExternalCommand, cwd: &Path) -> Result<()> {
        let line = command.to_string();
        self.calls.borrow_mut().push((line.clone(), cwd.to_path_buf()));
        match &self.fail_on {
            Some((prefix, code)) if line.starts_with(prefix.as_str()) => {
                Err(Error::ExternalCommandError { command: line, code: Some(*code) })
            }
            _ => Ok(()),
        }
    }
}

/// Runs a full scaffold with npm, scripted answers and recorded commands.
pub fn scaffold_in(
    base_dir: &Path,
    prompter: &ScriptedPrompter,
    runner: &RecordingRunner,
) -> Result<ProjectContext> {
    let services = Services::new(prompter, runner, PackageManager::Npm);
    scaffold(&services, base_dir)
}

/// Every entry below `root`, relative and `/`-separated, sorted.
pub fn list_tree(root: &Path) -> Vec<String> {
    let mut entries: Vec<String> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .map(|entry| {
            let rel = entry.path().strip_prefix(root).unwrap();
            rel.components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect();
    entries.sort();
    entries
}
