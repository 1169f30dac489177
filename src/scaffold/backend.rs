use super::{Services, SetupOutcome};
use crate::{
    constants::{BACKEND_DIRS, BACKEND_ENTRY_POINT, DEFAULT_PORT, ENV_FILE},
    error::Result,
    ioutils::{create_dir_if_absent, write_file},
    prompt::ask_choices,
    types::{BackendChoice, BackendDependency, ProjectContext},
};

/// Initializes a Node backend in `folder_name`.
///
/// The six backend subdirectories are created whatever dependencies are picked.
pub fn setup_backend(
    services: &Services<'_>,
    ctx: &ProjectContext,
    folder_name: &str,
) -> Result<SetupOutcome> {
    let folder_path = ctx.folder_path(folder_name);
    let pm = services.package_manager;

    println!("Setting up backend in {folder_name}...");
    services.runner.run(&pm.init(), &folder_path)?;

    let choice = BackendChoice::new(ask_choices::<BackendDependency>(
        services.prompter,
        "Install basic backend dependencies?",
    )?);
    if !choice.is_empty() {
        let packages = choice.packages();
        services.runner.run(&pm.add(&packages), &folder_path)?;
        log::info!("Installed: {}", packages.join(", "));
    }

    for dir in BACKEND_DIRS {
        if create_dir_if_absent(folder_path.join(dir))? {
            log::info!("  ✔ Created {dir}/");
        }
    }

    write_file(&services.renderer.env_file(DEFAULT_PORT)?, folder_path.join(ENV_FILE))?;
    write_file(
        &services.renderer.server_entry(DEFAULT_PORT)?,
        folder_path.join(BACKEND_ENTRY_POINT),
    )?;
    log::info!("{BACKEND_ENTRY_POINT} and {ENV_FILE} created");

    println!("Backend setup complete for {folder_name}!");
    Ok(SetupOutcome::Completed)
}
