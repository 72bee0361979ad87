use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Gateau office cake-day scheduler.
#[derive(Parser)]
#[command(
    name = "gateau",
    version,
    about = "Turn a birthday roster into a business-day cake schedule"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute the cake-day schedule from a birthday CSV.
    Plan(PlanArgs),
    /// Print the resolved office closure dates.
    Closures(ClosuresArgs),
}

/// Arguments for the `plan` subcommand.
#[derive(clap::Args)]
pub struct PlanArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "gateau.toml")]
    pub config: PathBuf,

    /// Override input birthday CSV path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override output schedule CSV path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override target year from config.
    #[arg(short, long)]
    pub year: Option<i32>,
}

/// Arguments for the `closures` subcommand.
#[derive(clap::Args)]
pub struct ClosuresArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "gateau.toml")]
    pub config: PathBuf,

    /// Override target year from config.
    #[arg(short, long)]
    pub year: Option<i32>,
}
