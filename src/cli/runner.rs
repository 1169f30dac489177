use crate::{
    cli::Args,
    constants::STDIN_INDICATOR,
    error::Result,
    ioutils::read_from,
    process::SystemProcessRunner,
    prompt::{get_prompt_provider, PromptProvider, ScriptedPrompter},
    scaffold::{scaffold, Services},
};
use std::path::PathBuf;

/// Main CLI runner that wires the collaborators and starts scaffolding
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete scaffolding workflow
    pub fn run(self) -> Result<()> {
        println!("Every great project starts with a simple command.");
        println!("Welcome to DevNest, your fullstack project generator ❤️");

        let prompter = self.prompt_provider()?;
        let process_runner = SystemProcessRunner::new();
        let services =
            Services::new(prompter.as_ref(), &process_runner, self.args.package_manager);

        let base_dir = self.base_dir()?;
        log::debug!("Creating project under {}", base_dir.display());

        let project = scaffold(&services, &base_dir)?;

        println!(
            "Project '{}' scaffolded successfully in {}.",
            project.name(),
            project.root().display()
        );
        Ok(())
    }

    /// Uses the scripted prompter when answers were supplied, the terminal otherwise
    fn prompt_provider(&self) -> Result<Box<dyn PromptProvider>> {
        match &self.args.answers {
            Some(answers) => {
                let buf = if answers == STDIN_INDICATOR {
                    read_from(std::io::stdin())?
                } else {
                    answers.clone()
                };
                Ok(Box::new(ScriptedPrompter::from_json(&buf)?))
            }
            None => Ok(Box::new(get_prompt_provider())),
        }
    }

    fn base_dir(&self) -> Result<PathBuf> {
        match &self.args.directory {
            Some(dir) => Ok(dir.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(args);
    runner.run()
}
