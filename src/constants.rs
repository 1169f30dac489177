//! Constants used throughout the DevNest application

/// Subdirectories optionally created under a frontend `src/` tree
pub const FRONTEND_SRC_DIRS: &[&str] = &["components", "utils", "routes", "hooks"];

/// Subdirectories always created in a backend folder
pub const BACKEND_DIRS: &[&str] =
    &["model", "controller", "routes", "middleware", "utils", "config"];

/// Frontend source directory produced by the generator
pub const SRC_DIR: &str = "src";

/// Main stylesheet, rewritten to a single import when Tailwind is chosen
pub const MAIN_STYLESHEET: &str = "index.css";

/// Secondary stylesheet, emptied when Tailwind is chosen
pub const SECONDARY_STYLESHEET: &str = "App.css";

/// Tailwind config some generator versions leave behind
pub const LEGACY_TAILWIND_CONFIG: &str = "tailwind.config.js";

/// Build-tool config file stem; the extension follows the chosen language
pub const BUILD_CONFIG_STEM: &str = "vite.config";

/// Starter component file stem; the extension follows the chosen language
pub const APP_COMPONENT_STEM: &str = "App";

/// Optional frontend packages
pub const ROUTER_PACKAGE: &str = "react-router-dom";
pub const ICONS_PACKAGE: &str = "react-icons";

/// Backend environment file name
pub const ENV_FILE: &str = ".env";

/// Backend entry point file name
pub const BACKEND_ENTRY_POINT: &str = "index.js";

/// Port written to the environment file and used as the server fallback
pub const DEFAULT_PORT: u16 = 5000;

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
