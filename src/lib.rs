/// Handles argument parsing and the top-level run.
pub mod cli;

/// Fixed names, packages and exit codes.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// External command execution and package-manager commands.
pub mod process;

/// User input and interaction handling.
pub mod prompt;

/// Starter file rendering.
pub mod renderer;

/// Folder collection, project creation and the per-role setup flows.
pub mod scaffold;

/// Closed enumerations and records shared by the flows.
pub mod types;
