use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "baitscan",
    version,
    about = "Flag bait rental listings by scoring them against market rents"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding baitscan.toml and .baitscan/local.toml
    #[arg(long, global = true, default_value = ".")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score every listing in a JSON file and print a report
    Score(ScoreCommand),
    /// Print normalized records without scoring
    Normalize(NormalizeCommand),
    /// Look up the market rent for one unit
    Market(MarketCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum MinLevel {
    Safe,
    Caution,
    Warning,
    Danger,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum RegionArg {
    Tokyo,
    Osaka,
    Other,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub input: PathBuf,
    /// Photo and report counts gathered after the scan
    #[arg(long)]
    pub evidence: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Hide units below this level (the summary still counts them)
    #[arg(long, value_enum, default_value = "safe")]
    pub min_level: MinLevel,
}

#[derive(Args)]
pub struct NormalizeCommand {
    pub input: PathBuf,
}

#[derive(Args)]
pub struct MarketCommand {
    #[arg(long, value_enum)]
    pub region: RegionArg,
    #[arg(long)]
    pub subdivision: String,
    #[arg(long)]
    pub layout: String,
    /// Building age in years
    #[arg(long, allow_negative_numbers = true, default_value_t = -1)]
    pub age: i32,
    /// Walking minutes to the station
    #[arg(long, allow_negative_numbers = true, default_value_t = -1)]
    pub walk: i32,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
