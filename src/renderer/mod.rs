//! Rendering of the starter files written into scaffolded folders.

pub mod minijinja;
pub mod templates;

pub use self::minijinja::StarterRenderer;
