use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use binexa_sdk::{Base, EntryId};

#[derive(Parser)]
#[command(
    name = "binexa",
    about = "Binexa: binary, decimal and hexadecimal conversion with history",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the config file, session and history
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (`export -` always writes CSV and `shell` always text)
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a value and show it in all three bases
    Convert(ConvertArgs),
    /// List saved conversions, newest first
    History(HistoryArgs),
    /// Delete one saved conversion
    Delete(DeleteArgs),
    /// Delete every saved conversion
    ClearHistory,
    /// Export saved conversions as CSV
    Export(ExportArgs),
    /// Show usage statistics
    Stats,
    /// Show the session id
    Session,
    /// Start an interactive converter
    Shell,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// bin, dec or hex (or binary, decimal, hexadecimal, 2, 10, 16)
    pub base: Base,
    pub value: String,
    /// Save the result to history
    #[arg(long)]
    pub save: bool,
}

#[derive(Args)]
pub struct HistoryArgs {
    /// Maximum entries to show (defaults to the configured history limit)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

#[derive(Args)]
pub struct DeleteArgs {
    pub id: EntryId,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Output file, or `-` for stdout (defaults to a dated file name)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
