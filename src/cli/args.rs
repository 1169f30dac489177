use crate::constants::verbosity;
use crate::process::PackageManager;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for DevNest.
///
/// Every argument is optional: a bare `devnest` asks everything interactively.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Package manager used to initialize, generate and install.
    #[arg(long = "package-manager", value_enum, default_value_t = PackageManager::Npm)]
    pub package_manager: PackageManager,

    /// Predefined answers as JSON string or `-` to read from stdin.
    ///
    /// Format
    ///
    /// > {"text": ["shop", "api"], "select": ["backend"], "multi_select": [["express"]], "confirm": [false, true]}
    ///
    /// Each list is consumed in prompt order; prompts left unanswered take
    /// their default.
    #[arg(short, long)]
    pub answers: Option<String>,

    /// Directory the project folder is created in (defaults to the current one).
    #[arg(short = 'C', long = "directory", value_name = "DIR")]
    pub directory: Option<PathBuf>,
}

/// Parse command line arguments.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_without_arguments() {
        let args = Args::parse_from(["devnest"]);
        assert_eq!(args.verbose, 0);
        assert_eq!(args.package_manager, PackageManager::Npm);
        assert!(args.answers.is_none());
        assert!(args.directory.is_none());
    }

    #[test]
    fn parses_full_feature_flags() {
        let args = Args::parse_from([
            "devnest",
            "-vv",
            "--package-manager",
            "pnpm",
            "--answers",
            "-",
            "-C",
            "/tmp/work",
        ]);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.package_manager, PackageManager::Pnpm);
        assert_eq!(args.answers.as_deref(), Some("-"));
        assert_eq!(args.directory, Some(PathBuf::from("/tmp/work")));
    }

    #[test]
    fn rejects_unknown_package_manager() {
        assert!(Args::try_parse_from(["devnest", "--package-manager", "bun"]).is_err());
    }
}
