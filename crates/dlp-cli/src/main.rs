//! Metadata spreadsheet validation CLI.

use std::io::{self, IsTerminal};

use anyhow::Error;
use clap::{ColorChoice, Parser};
use dlp_cli::logging::{LogConfig, LogFormat, init_logging};
use dlp_cli::render::{report_table, summary_line};
use dlp_profiles::ProfileError;
use dlp_report::serialize_report;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, ReportFormatArg};
use crate::commands::{run_checks, run_profiles, run_validate};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error:#}");
        std::process::exit(1);
    }

    let exit_code = match &cli.command {
        Command::Validate(args) => match run_validate(&cli, args) {
            Ok(report) => match args.format {
                ReportFormatArg::Json => match serialize_report(&report) {
                    Ok(json) => {
                        println!("{json}");
                        i32::from(!report.is_empty())
                    }
                    Err(error) => report_error(&error.into()),
                },
                ReportFormatArg::Table => {
                    if !report.is_empty() {
                        println!("{}", report_table(&report));
                    }
                    println!("{}", summary_line(&report));
                    i32::from(!report.is_empty())
                }
            },
            Err(error) => report_error(&error),
        },
        Command::Profiles(command) => match run_profiles(&cli, command) {
            Ok(()) => 0,
            Err(error) => report_error(&error),
        },
        Command::Checks => {
            run_checks();
            0
        }
    };
    std::process::exit(exit_code);
}

/// Print an error chain, plus a hint when the store knows one.
fn report_error(error: &Error) -> i32 {
    eprintln!("error: {error:#}");
    let hint = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<ProfileError>())
        .and_then(ProfileError::suggestion);
    if let Some(hint) = hint {
        eprintln!("hint: {hint}");
    }
    1
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
