use super::ExternalCommand;
use clap::ValueEnum;
use std::fmt::Display;

/// Package manager used for every collaborator command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
}

impl PackageManager {
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
        }
    }

    fn command(&self) -> ExternalCommand {
        ExternalCommand::new(self.program())
    }

    /// Creates a default package manifest in the working directory.
    pub fn init(&self) -> ExternalCommand {
        match self {
            PackageManager::Pnpm => self.command().arg("init"),
            PackageManager::Npm | PackageManager::Yarn => self.command().args(["init", "-y"]),
        }
    }

    /// Installs the dependencies already listed in the manifest.
    pub fn install(&self) -> ExternalCommand {
        self.command().arg("install")
    }

    /// Adds `packages` to the manifest and installs them.
    pub fn add(&self, packages: &[&str]) -> ExternalCommand {
        let verb = match self {
            PackageManager::Npm => "install",
            PackageManager::Pnpm | PackageManager::Yarn => "add",
        };
        self.command().arg(verb).args(packages.iter().copied())
    }

    /// Generates a Vite project named `folder` from `template`.
    pub fn create_vite(&self, folder: &str, template: &str) -> ExternalCommand {
        match self {
            PackageManager::Npm => self
                .command()
                .args(["create", "vite@latest", folder, "--", "--template", template]),
            PackageManager::Pnpm | PackageManager::Yarn => {
                self.command().args(["create", "vite", folder, "--template", template])
            }
        }
    }
}

impl Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn npm_commands() {
        let npm = PackageManager::Npm;
        assert_eq!(npm.init().to_string(), "npm init -y");
        assert_eq!(npm.install().to_string(), "npm install");
        assert_eq!(npm.add(&["express", "nodemon"]).to_string(), "npm install express nodemon");
        assert_eq!(
            npm.create_vite("web", "react-ts").to_string(),
            "npm create vite@latest web -- --template react-ts"
        );
    }

    #[test]
    fn pnpm_and_yarn_use_add() {
        assert_eq!(PackageManager::Pnpm.add(&["react-icons"]).to_string(), "pnpm add react-icons");
        assert_eq!(PackageManager::Yarn.add(&["react-icons"]).to_string(), "yarn add react-icons");
        assert_eq!(PackageManager::Pnpm.init().to_string(), "pnpm init");
        assert_eq!(
            PackageManager::Yarn.create_vite("web", "react").to_string(),
            "yarn create vite web --template react"
        );
    }

    #[test]
    fn defaults_to_npm() {
        assert_eq!(PackageManager::default(), PackageManager::Npm);
        assert_eq!(PackageManager::default().to_string(), "npm");
    }
}
