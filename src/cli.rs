use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Month grid and infinite month pager.
#[derive(Parser)]
#[command(name = "flexcal", version, about = "Month grid and infinite month pager")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file. Missing files fall back to defaults.
    #[arg(short, long, global = true, default_value = "flexcal.toml")]
    pub config: PathBuf,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print one month grid.
    Show(ShowArgs),
    /// Drive the pager through a sequence of steps and print its events.
    Navigate(NavigateArgs),
}

/// View options shared by all subcommands; each overrides the config file.
#[derive(clap::Args, Debug, Default)]
pub struct ViewArgs {
    /// Start year.
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Start month, 1 (January) to 12 (December).
    #[arg(short, long)]
    pub month: Option<u32>,

    /// Hide days of adjacent months.
    #[arg(long)]
    pub compact: bool,

    /// First day of the week, e.g. "monday" or "sun".
    #[arg(long = "first-day")]
    pub first_day: Option<String>,

    /// Override today's date (YYYY-MM-DD).
    #[arg(long)]
    pub today: Option<String>,
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub view: ViewArgs,
}

/// Arguments for the `navigate` subcommand.
#[derive(clap::Args)]
pub struct NavigateArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Steps: next, prev, next-day, prev-day, today, click:N, goto:YYYY-MM-DD.
    #[arg(required = true)]
    pub steps: Vec<String>,
}
