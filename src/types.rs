//! Common types used across the DevNest crate.

use crate::{
    error::{Error, Result},
    prompt::Choice,
};
use std::fmt::Display;
use std::path::{Component, Path, PathBuf};

/// Trims `raw` and checks it names a single entry directly below its parent.
///
/// Absolute paths, `..`, drive prefixes and nested paths are rejected so the
/// resolved path can never leave the directory it is joined onto.
pub fn validate_entry_name(kind: &str, raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(Error::ValidationError(format!("{kind} name is required")));
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(name.to_string()),
        _ => Err(Error::ValidationError(format!(
            "{kind} name '{name}' must be a plain name, not a path"
        ))),
    }
}

/// Role a collected folder plays in the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderRole {
    Frontend,
    Backend,
    Admin,
    Other,
}

impl Choice for FolderRole {
    const ALL: &'static [Self] =
        &[FolderRole::Frontend, FolderRole::Backend, FolderRole::Admin, FolderRole::Other];

    const FALLBACK: Option<Self> = Some(FolderRole::Other);

    fn label(&self) -> &'static str {
        match self {
            FolderRole::Frontend => "frontend",
            FolderRole::Backend => "backend",
            FolderRole::Admin => "admin",
            FolderRole::Other => "other",
        }
    }
}

impl Display for FolderRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A directory to scaffold, as collected from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    role: FolderRole,
    name: String,
}

impl Folder {
    pub fn new(role: FolderRole, name: impl Into<String>) -> Result<Self> {
        let name = validate_entry_name("Folder", &name.into())?;
        Ok(Self { role, name })
    }

    pub fn role(&self) -> FolderRole {
        self.role
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The project being scaffolded and the absolute path of its root.
///
/// Every flow resolves its paths through this value instead of changing the
/// process working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    name: String,
    root: PathBuf,
}

impl ProjectContext {
    pub fn new(name: impl Into<String>, root: PathBuf) -> Self {
        Self { name: name.into(), root }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a folder name relative to the project root.
    pub fn folder_path(&self, folder_name: &str) -> PathBuf {
        self.root.join(folder_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framework {
    React,
    NextJs,
    Vue,
}

impl Framework {
    /// Only React can be generated today.
    pub fn is_supported(&self) -> bool {
        matches!(self, Framework::React)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Framework::React => "React",
            Framework::NextJs => "Next.js",
            Framework::Vue => "Vue",
        }
    }
}

impl Choice for Framework {
    const ALL: &'static [Self] = &[Framework::React, Framework::NextJs, Framework::Vue];

    fn label(&self) -> &'static str {
        match self {
            Framework::React => "React",
            Framework::NextJs => "Next.js (coming soon)",
            Framework::Vue => "Vue (coming soon)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiLibrary {
    Tailwind,
    Chakra,
    Material,
    None,
}

impl UiLibrary {
    /// Packages installed for this library.
    pub fn packages(&self) -> &'static [&'static str] {
        match self {
            UiLibrary::Tailwind => &["tailwindcss", "@tailwindcss/vite"],
            UiLibrary::Chakra => {
                &["@chakra-ui/react", "@emotion/react", "@emotion/styled", "framer-motion"]
            }
            UiLibrary::Material => &["@mui/material", "@emotion/react", "@emotion/styled"],
            UiLibrary::None => &[],
        }
    }
}

impl Choice for UiLibrary {
    const ALL: &'static [Self] =
        &[UiLibrary::Tailwind, UiLibrary::Chakra, UiLibrary::Material, UiLibrary::None];

    fn label(&self) -> &'static str {
        match self {
            UiLibrary::Tailwind => "Tailwind CSS",
            UiLibrary::Chakra => "Chakra UI",
            UiLibrary::Material => "Material UI",
            UiLibrary::None => "None",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    JavaScript,
    TypeScript,
}

impl Language {
    /// Extension of component source files (`jsx` / `tsx`).
    pub fn source_ext(&self) -> &'static str {
        match self {
            Language::JavaScript => "jsx",
            Language::TypeScript => "tsx",
        }
    }

    /// Extension of config files (`js` / `ts`).
    pub fn config_ext(&self) -> &'static str {
        match self {
            Language::JavaScript => "js",
            Language::TypeScript => "ts",
        }
    }

    /// Template name passed to the frontend generator.
    pub fn generator_template(&self) -> &'static str {
        match self {
            Language::JavaScript => "react",
            Language::TypeScript => "react-ts",
        }
    }
}

impl Choice for Language {
    const ALL: &'static [Self] = &[Language::JavaScript, Language::TypeScript];

    fn label(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
        }
    }
}

/// Everything the frontend flow asks before touching the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontendChoice {
    pub framework: Framework,
    pub ui_library: UiLibrary,
    pub language: Language,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendDependency {
    Express,
    Nodemon,
}

impl Choice for BackendDependency {
    const ALL: &'static [Self] = &[BackendDependency::Express, BackendDependency::Nodemon];

    fn label(&self) -> &'static str {
        match self {
            BackendDependency::Express => "express",
            BackendDependency::Nodemon => "nodemon",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendChoice {
    selected: Vec<BackendDependency>,
}

impl BackendChoice {
    /// Builds the selection, dropping repeats while keeping first-seen order.
    pub fn new(dependencies: impl IntoIterator<Item = BackendDependency>) -> Self {
        let mut selected = Vec::new();
        for dependency in dependencies {
            if !selected.contains(&dependency) {
                selected.push(dependency);
            }
        }
        Self { selected }
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn packages(&self) -> Vec<&'static str> {
        self.selected.iter().map(|d| d.label()).collect()
    }
}
