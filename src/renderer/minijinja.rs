use super::templates;
use crate::error::Result;
use minijinja::{context, Environment};

/// MiniJinja-based renderer for starter files.
pub struct StarterRenderer {
    env: Environment<'static>,
}

impl StarterRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        // Generated files must end with a newline like hand-written ones
        env.set_keep_trailing_newline(true);
        Self { env }
    }

    /// Main application component greeting `project_name`.
    pub fn app_component(&self, project_name: &str) -> Result<String> {
        Ok(self.env.render_str(templates::APP_COMPONENT, context! { project_name })?)
    }

    pub fn vite_config(&self) -> Result<String> {
        Ok(self.env.render_str(templates::VITE_CONFIG_TAILWIND, context! {})?)
    }

    pub fn tailwind_stylesheet(&self) -> &'static str {
        templates::TAILWIND_STYLESHEET
    }

    pub fn env_file(&self, port: u16) -> Result<String> {
        Ok(self.env.render_str(templates::ENV_FILE, context! { port })?)
    }

    pub fn server_entry(&self, port: u16) -> Result<String> {
        Ok(self.env.render_str(templates::SERVER_ENTRY, context! { port })?)
    }
}

impl Default for StarterRenderer {
    fn default() -> Self {
        Self::new()
    }
}
