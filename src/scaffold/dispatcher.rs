use super::{setup_backend, setup_frontend, Services, SetupOutcome};
use crate::{
    error::Result,
    prompt::ask_confirm,
    types::{Folder, FolderRole, ProjectContext},
};

/// Offers setup for each folder in collection order and runs the flow for its role.
///
/// Returns one outcome per folder, in the same order.
pub fn dispatch(
    services: &Services<'_>,
    ctx: &ProjectContext,
    folders: &[Folder],
) -> Result<Vec<SetupOutcome>> {
    let mut outcomes = Vec::with_capacity(folders.len());

    for folder in folders {
        let setup_now = ask_confirm(
            services.prompter,
            &format!(
                "Do you want to set up the {} ({}) folder now?",
                folder.role(),
                folder.name()
            ),
            folder.role() == FolderRole::Frontend,
        )?;

        let outcome = if setup_now {
            setup_folder(services, ctx, folder)?
        } else {
            SetupOutcome::Skipped
        };
        log::debug!("Folder '{}' finished with {outcome:?}", folder.name());
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

fn setup_folder(
    services: &Services<'_>,
    ctx: &ProjectContext,
    folder: &Folder,
) -> Result<SetupOutcome> {
    match folder.role() {
        FolderRole::Frontend => {
            log::info!("Setup options for frontend: {}", folder.name());
            setup_frontend(services, ctx, folder.name())
        }
        FolderRole::Backend => {
            log::info!("Starting backend setup for: {}", folder.name());
            setup_backend(services, ctx, folder.name())
        }
        FolderRole::Admin | FolderRole::Other => {
            println!("No specific setup defined for '{}' folder yet.", folder.role());
            Ok(SetupOutcome::NoSetup)
        }
    }
}
