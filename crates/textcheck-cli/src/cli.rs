//! CLI argument definitions for `textcheck`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use textcheck_cli::params::parse_param;

#[derive(Parser)]
#[command(
    name = "textcheck",
    version,
    about = "Interpret text-check requests the way the check API does",
    long_about = "Validate check-request parameters, resolve the language to check \
                  against and inspect the rule confidence calibration.\n\n\
                  The calibration file can be set in the config file, through \
                  TEXTCHECK_RULE_CONFIDENCE_FILE or with --confidence-file \
                  (in increasing order of precedence)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Server configuration file (TOML).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Rule confidence calibration file (`RULE_ID,float_value[,...]`).
    #[arg(long = "confidence-file", value_name = "PATH", global = true)]
    pub confidence_file: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

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
}

#[derive(Subcommand)]
pub enum Command {
    /// Interpret one check request and print the resolved specification.
    Interpret(InterpretArgs),

    /// Show the loaded rule confidence calibration.
    Calibration(CalibrationArgs),

    /// List the languages this server accepts.
    Languages,
}

#[derive(Parser)]
pub struct InterpretArgs {
    /// Request parameter, repeatable (e.g. --param language=auto).
    #[arg(
        long = "param",
        short = 'p',
        value_name = "KEY=VALUE",
        value_parser = parse_param
    )]
    pub params: Vec<(String, String)>,

    /// Text to check.
    #[arg(
        long = "text",
        value_name = "TEXT",
        conflicts_with = "text_file",
        required_unless_present = "text_file"
    )]
    pub text: Option<String>,

    /// Read the text to check from a file.
    #[arg(long = "text-file", value_name = "PATH")]
    pub text_file: Option<PathBuf>,

    /// Run language detection in test mode.
    #[arg(long = "test-mode")]
    pub test_mode: bool,
}

#[derive(Parser)]
pub struct CalibrationArgs {
    /// Only show these rule ids (repeatable).
    #[arg(long = "rule", value_name = "ID")]
    pub rules: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
