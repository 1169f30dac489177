//! Project scaffolding orchestration
//!
//! The run is a linear sequence:
//! - `collector`: gather the folders to create
//! - `project`: create the project root and the collected folders
//! - `dispatcher`: route each folder to its role-specific flow
//! - `frontend` / `backend`: the role-specific flows

pub mod backend;
pub mod collector;
pub mod dispatcher;
pub mod frontend;
pub mod project;

use crate::{
    error::Result,
    process::{PackageManager, ProcessRunner},
    prompt::PromptProvider,
    renderer::StarterRenderer,
    types::ProjectContext,
};
use std::path::Path;

pub use backend::setup_backend;
pub use collector::collect_folders;
pub use dispatcher::dispatch;
pub use frontend::setup_frontend;
pub use project::{ask_project_name, create_folders, initialize_project};

/// Collaborators shared by every step of a run.
pub struct Services<'a> {
    pub prompter: &'a dyn PromptProvider,
    pub runner: &'a dyn ProcessRunner,
    pub package_manager: PackageManager,
    pub renderer: StarterRenderer,
}

impl<'a> Services<'a> {
    pub fn new(
        prompter: &'a dyn PromptProvider,
        runner: &'a dyn ProcessRunner,
        package_manager: PackageManager,
    ) -> Self {
        Self { prompter, runner, package_manager, renderer: StarterRenderer::new() }
    }
}

/// Outcome of a role-specific setup flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupOutcome {
    Completed,
    /// The user declined to set the folder up now.
    Skipped,
    /// The role has no setup flow.
    NoSetup,
    /// The chosen framework cannot be generated yet; nothing was written.
    Unsupported,
}

/// Runs the whole scaffolding sequence under `base_dir`.
///
/// Returns the created project once every folder has been dispatched.
pub fn scaffold(services: &Services<'_>, base_dir: &Path) -> Result<ProjectContext> {
    let project_name = ask_project_name(services.prompter)?;
    let folders = collect_folders(services.prompter)?;

    let ctx = initialize_project(base_dir, &project_name)?;
    create_folders(&ctx, &folders)?;

    log::info!("Folder creation complete, starting setup for each folder");
    let outcomes = dispatch(services, &ctx, &folders)?;
    log::debug!("Setup outcomes: {outcomes:?}");

    Ok(ctx)
}
