//! CLI argument definitions for the ABN checker.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "abn",
    version,
    about = "Validate and format Australian Business Numbers",
    long_about = "Validate Australian Business Numbers against the ATO checksum\n\
                  and print them in canonical DD DDD DDD DDD form.\n\n\
                  Group ABNs (11 digits plus a 3-digit group number) are accepted\n\
                  unless --no-group is given."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
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

    /// Prefix log events with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path in log events.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Allow raw input values to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Accept 11-digit ABNs only; reject group ABNs.
    #[arg(long = "no-group", global = true)]
    pub no_group: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate ABNs given on the command line.
    Check(CheckArgs),

    /// Validate every ABN in a file.
    Batch(BatchArgs),

    /// Show the checksum working for one ABN.
    Explain(ExplainArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// ABNs to validate. Quote values that contain spaces.
    #[arg(value_name = "ABN", required = true)]
    pub values: Vec<String>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "plain")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct BatchArgs {
    /// Text file with one ABN per line, or a CSV file with --column.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Read ABNs from this CSV column (header row required).
    #[arg(long = "column", value_name = "NAME")]
    pub column: Option<String>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Only list records that fail validation.
    #[arg(long = "invalid-only")]
    pub invalid_only: bool,
}

#[derive(Parser)]
pub struct ExplainArgs {
    /// ABN to explain.
    #[arg(value_name = "ABN")]
    pub value: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Plain,
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
