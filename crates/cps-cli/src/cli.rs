//! CLI argument definitions for the CPS audit tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cps-audit",
    version,
    about = "CPS Microdata Audit - Validate survey extracts against documented ranges",
    long_about = "Validate CPS survey microdata extracts.\n\n\
                  Checks per-variable summary statistics against documented valid\n\
                  value ranges and traces derived variable names back to original\n\
                  CPS mnemonics via codebook comments."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

    /// Standards directory override (defaults to the shipped data).
    #[arg(long = "standards-dir", value_name = "DIR", global = true)]
    pub standards_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Audit a codebook against tabstat summary statistics.
    Audit(AuditArgs),

    /// List the documented valid ranges shipped with the tool.
    Ranges,

    /// Verify the standards directory against its manifest.
    Doctor,
}

#[derive(Parser)]
pub struct AuditArgs {
    /// Path to the codebook (delimited text; delimiter auto-detected).
    #[arg(value_name = "CODEBOOK")]
    pub codebook: PathBuf,

    /// Path to the tabstat summary-statistics output.
    #[arg(long = "stats", value_name = "FILE")]
    pub stats: PathBuf,

    /// Report rendering on stdout.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: ReportFormatArg,

    /// Also write the JSON report to a file.
    #[arg(long = "report-file", value_name = "PATH")]
    pub report_file: Option<PathBuf>,
}

/// Report rendering choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Text,
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
