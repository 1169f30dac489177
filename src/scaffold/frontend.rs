use super::{Services, SetupOutcome};
use crate::{
    constants::{
        APP_COMPONENT_STEM, BUILD_CONFIG_STEM, FRONTEND_SRC_DIRS, ICONS_PACKAGE,
        LEGACY_TAILWIND_CONFIG, MAIN_STYLESHEET, ROUTER_PACKAGE, SECONDARY_STYLESHEET,
        SRC_DIR,
    },
    error::Result,
    ioutils::{create_dir_if_absent, remove_file_if_exists, write_file},
    prompt::{ask_choice, ask_confirm, Choice},
    types::{Framework, FrontendChoice, Language, ProjectContext, UiLibrary},
};
use std::path::Path;

/// Generates and configures a frontend app in `folder_name`.
///
/// Picking a framework other than React is not fatal: a notice is printed and
/// the folder is left untouched.
pub fn setup_frontend(
    services: &Services<'_>,
    ctx: &ProjectContext,
    folder_name: &str,
) -> Result<SetupOutcome> {
    let Some(choice) = ask_frontend_choice(services, folder_name)? else {
        return Ok(SetupOutcome::Unsupported);
    };
    let FrontendChoice { ui_library, language, .. } = choice;

    println!("Creating Vite + React ({}) in {folder_name}...", language.label());
    let pm = services.package_manager;
    services
        .runner
        .run(&pm.create_vite(folder_name, language.generator_template()), ctx.root())?;

    let folder_path = ctx.folder_path(folder_name);
    services.runner.run(&pm.install(), &folder_path)?;

    let packages = ui_library.packages();
    if !packages.is_empty() {
        services.runner.run(&pm.add(packages), &folder_path)?;
        log::info!("Installed: {}", packages.join(", "));
    }
    if ui_library == UiLibrary::Tailwind {
        configure_tailwind(services, &folder_path, language)?;
    }

    let src = folder_path.join(SRC_DIR);
    if ask_confirm(
        services.prompter,
        "Create folder structure inside src (components, utils, routes, hooks)?",
        true,
    )? {
        for dir in FRONTEND_SRC_DIRS {
            if create_dir_if_absent(src.join(dir))? {
                log::info!("  ✔ Created src/{dir}");
            }
        }
    }

    write_file(
        &services.renderer.app_component(ctx.name())?,
        src.join(format!("{APP_COMPONENT_STEM}.{}", language.source_ext())),
    )?;

    if ask_confirm(services.prompter, &format!("Install {ROUTER_PACKAGE}?"), true)? {
        services.runner.run(&pm.add(&[ROUTER_PACKAGE]), &folder_path)?;
    }
    if ask_confirm(services.prompter, &format!("Install {ICONS_PACKAGE}?"), true)? {
        services.runner.run(&pm.add(&[ICONS_PACKAGE]), &folder_path)?;
    }

    // Backend folders are set up by the dispatcher in their own turn; this only informs.
    if ask_confirm(services.prompter, "Do you want to set up backend now?", true)? {
        println!("Starting backend setup (coming next)...");
    }

    println!("{folder_name} frontend is all set!");
    Ok(SetupOutcome::Completed)
}

/// Asks framework, UI library and language.
///
/// Returns `None` as soon as an unsupported framework is picked.
fn ask_frontend_choice(
    services: &Services<'_>,
    folder_name: &str,
) -> Result<Option<FrontendChoice>> {
    let framework = ask_choice(
        services.prompter,
        &format!("Select frontend framework for {folder_name}:"),
        Framework::React,
    )?;
    if !framework.is_supported() {
        println!(
            "Sorry, {} is not yet supported. Only React is available now.",
            framework.name()
        );
        return Ok(None);
    }

    let ui_library =
        ask_choice(services.prompter, "Choose a UI library:", UiLibrary::Tailwind)?;
    let language = ask_choice(services.prompter, "Choose language:", Language::JavaScript)?;

    Ok(Some(FrontendChoice { framework, ui_library, language }))
}

/// Rewrites the generated styles and build config for Tailwind's Vite plugin.
fn configure_tailwind(
    services: &Services<'_>,
    folder_path: &Path,
    language: Language,
) -> Result<()> {
    let src = folder_path.join(SRC_DIR);
    write_file(services.renderer.tailwind_stylesheet(), src.join(MAIN_STYLESHEET))?;
    write_file("", src.join(SECONDARY_STYLESHEET))?;
    write_file(
        &services.renderer.vite_config()?,
        folder_path.join(format!("{BUILD_CONFIG_STEM}.{}", language.config_ext())),
    )?;

    // A leftover config would compete with the plugin setup
    if remove_file_if_exists(folder_path.join(LEGACY_TAILWIND_CONFIG))? {
        log::debug!("Removed {LEGACY_TAILWIND_CONFIG}");
    }

    log::info!("Tailwind CSS set up with @import and plugin only");
    Ok(())
}
