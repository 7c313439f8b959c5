//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dlp-cli",
    version,
    about = "Validate digital-library metadata spreadsheets",
    long_about = "Validate CSV metadata against a named profile of checks.\n\n\
                  Profiles are kept in a JSON store; each names the checks to run.\n\
                  Problems are reported as a table or as report JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Profile store file; created on first save.
    #[arg(long = "profiles-file", env = "PROFILES_FILE", value_name = "PATH", global = true)]
    pub profiles_file: Option<PathBuf>,

    /// Rule book JSON replacing the built-in required fields and NAAN lists.
    #[arg(long = "rules-file", env = "RULES_FILE", value_name = "PATH", global = true)]
    pub rules_file: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include cell values in trace-level logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a CSV file against a profile.
    Validate(ValidateArgs),

    /// Inspect or edit the profile store.
    #[command(subcommand)]
    Profiles(ProfilesCommand),

    /// List every registered check.
    Checks,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// CSV file to validate; the first row holds the column headers.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Profile naming the checks to run.
    #[arg(long = "profile", short = 'p', default_value = "default")]
    pub profile: String,

    /// Output format for the report.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,

    /// Directory that File Name values are resolved against.
    #[arg(long = "host-dir", env = "HOST_DIR", value_name = "DIR")]
    pub host_dir: Option<PathBuf>,

    /// Seconds to wait for a license URL before giving up.
    #[arg(
        long = "url-timeout-secs",
        env = "URL_TIMEOUT_SECS",
        default_value_t = 10,
        value_name = "SECS"
    )]
    pub url_timeout_secs: u64,

    /// Skip checks that need network access.
    #[arg(long = "offline")]
    pub offline: bool,
}

#[derive(Subcommand)]
pub enum ProfilesCommand {
    /// List stored profiles.
    List,

    /// Show one profile's validations.
    Show {
        name: String,
    },

    /// Create a profile, or add validations to an existing one.
    Add {
        name: String,

        /// Check name to include; repeat for several.
        #[arg(long = "validation", value_name = "NAME", required = true)]
        validations: Vec<String>,
    },

    /// Delete a profile.
    Remove {
        name: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_defaults() {
        let cli = Cli::try_parse_from(["dlp-cli", "validate", "sheet.csv"]).unwrap();
        let Command::Validate(args) = cli.command else {
            panic!("expected validate");
        };
        assert_eq!(args.profile, "default");
        assert!(matches!(args.format, ReportFormatArg::Table));
        assert!(!args.offline);
    }

    #[test]
    fn test_profiles_add_requires_validation() {
        assert!(Cli::try_parse_from(["dlp-cli", "profiles", "add", "custom"]).is_err());

        let cli = Cli::try_parse_from([
            "dlp-cli",
            "profiles",
            "add",
            "custom",
            "--validation",
            "EOLCheck",
            "--validation",
            "ARKCheck",
        ])
        .unwrap();
        let Command::Profiles(ProfilesCommand::Add { name, validations }) = cli.command else {
            panic!("expected profiles add");
        };
        assert_eq!(name, "custom");
        assert_eq!(validations, vec!["EOLCheck", "ARKCheck"]);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "dlp-cli",
            "checks",
            "--profiles-file",
            "profiles.json",
            "--log-data",
        ])
        .unwrap();
        assert_eq!(cli.profiles_file, Some(PathBuf::from("profiles.json")));
        assert!(cli.log_data);
    }
}
