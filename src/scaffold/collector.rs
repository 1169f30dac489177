use crate::{
    error::Result,
    prompt::{ask_choice, ask_confirm, ask_text, PromptProvider},
    types::{Folder, FolderRole},
};

/// Asks for folders until the user declines to add another.
///
/// Always yields at least one folder, in the order they were entered.
pub fn collect_folders(prompter: &dyn PromptProvider) -> Result<Vec<Folder>> {
    let mut folders = Vec::new();

    loop {
        let role = ask_choice(
            prompter,
            "What kind of folder do you want to create?",
            FolderRole::Frontend,
        )?;
        let name = ask_text(prompter, "Enter the folder name:")?;
        folders.push(Folder::new(role, name)?);

        if !ask_confirm(prompter, "Do you want to create another folder?", false)? {
            break;
        }
    }

    Ok(folders)
}
