use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "reflayout",
    version,
    about = "Reference-time layout formatting and its conformance suites"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the built-in conformance tables or a YAML suite
    Run(RunArgs),
    /// Format one instant under a layout
    Format(FormatArgs),
    /// List the predefined layouts
    Layouts,
    Version,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Clone, Debug)]
pub struct RunArgs {
    /// Suite file (YAML); the built-in tables when omitted
    #[arg(long, env = "REFLAYOUT_SUITE")]
    pub suite: Option<PathBuf>,

    /// stdout format: text|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write summary.json to this path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Clone, Debug)]
pub struct FormatArgs {
    /// Nanoseconds since the Unix epoch
    #[arg(long, allow_hyphen_values = true)]
    pub unix_nanos: i64,

    /// Zone abbreviation printed for `MST`
    #[arg(long, default_value = "UTC")]
    pub zone_name: String,

    /// Zone offset in seconds east of UTC
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub offset: i32,

    /// Layout text, or `@Name` for a predefined layout
    pub layout: String,
}
