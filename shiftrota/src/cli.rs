use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Shift rotation calendar with public holidays and long weekends.
#[derive(Parser)]
#[command(
    name = "shiftrota",
    version,
    about = "Shift rotation calendar with public holidays and long weekends"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file [default: shiftrota.toml, if present].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the schedule of one rotation group over a date range.
    Schedule(ScheduleArgs),
    /// Print the shift of one rotation group on one date.
    Shift(ShiftArgs),
    /// List the rotation cycles.
    Cycles,
}

/// Which rows of the schedule to print.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum View {
    /// Every day in the range.
    Full,
    /// Only public holidays.
    Holidays,
    /// Only Friday/Saturday pairs that are both off.
    Weekends,
}

/// Output encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Aligned plain-text columns.
    Table,
    /// JSON array of `{date, weekday, shift, holiday}` records.
    Json,
}

/// How to choose the rotation cycle.
#[derive(clap::Args, Debug)]
pub struct CycleArgs {
    /// Cycle name, e.g. "A" or "KOC B". Overrides the config file.
    #[arg(long, conflicts_with_all = ["company", "group"])]
    pub cycle: Option<String>,

    /// Company whose group is selected (KNPC or KOC).
    #[arg(long, requires = "group")]
    pub company: Option<String>,

    /// Rotation group within the company (A-D).
    #[arg(long, requires = "company")]
    pub group: Option<String>,
}

/// Arguments for the `schedule` subcommand.
#[derive(clap::Args, Debug)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub cycle: CycleArgs,

    /// First day (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub from: Option<String>,

    /// Last day (YYYY-MM-DD). Overrides --preset.
    #[arg(long)]
    pub to: Option<String>,

    /// Look-ahead window: week, month, 3-months, 6-months or year.
    #[arg(long)]
    pub preset: Option<String>,

    /// Rows to print.
    #[arg(long, value_enum, default_value_t = View::Full)]
    pub view: View,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

/// Arguments for the `shift` subcommand.
#[derive(clap::Args, Debug)]
pub struct ShiftArgs {
    #[command(flatten)]
    pub cycle: CycleArgs,

    /// Date to look up (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub date: Option<String>,
}
