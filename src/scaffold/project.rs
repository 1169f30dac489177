use crate::{
    error::Result,
    ioutils::{create_dir_if_absent, ensure_absent},
    prompt::{ask_text, PromptProvider},
    types::{validate_entry_name, Folder, ProjectContext},
};
use std::path::Path;

pub fn ask_project_name(prompter: &dyn PromptProvider) -> Result<String> {
    let name = ask_text(prompter, "Enter your project name:")?;
    validate_entry_name("Project", &name)
}

/// Creates the project root `base_dir/project_name`.
///
/// Nothing is created when an entry already exists at that path.
pub fn initialize_project(base_dir: &Path, project_name: &str) -> Result<ProjectContext> {
    let base_dir = if base_dir.is_absolute() {
        base_dir.to_path_buf()
    } else {
        std::env::current_dir()?.join(base_dir)
    };
    let project_name = validate_entry_name("Project", project_name)?;
    let root = base_dir.join(&project_name);

    ensure_absent(&root)?;
    std::fs::create_dir(&root)?;
    log::info!("Created project root {}", root.display());

    Ok(ProjectContext::new(project_name, root))
}

/// Creates one directory per collected folder, skipping ones already present.
pub fn create_folders(ctx: &ProjectContext, folders: &[Folder]) -> Result<()> {
    println!("Creating folders...");
    for folder in folders {
        if create_dir_if_absent(ctx.folder_path(folder.name()))? {
            println!("  ✔ Created {} ({})", folder.name(), folder.role());
        } else {
            log::debug!("Skipping directory creation '{}' (already exists)", folder.name());
        }
    }
    Ok(())
}
