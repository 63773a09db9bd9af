mod cli;
mod config;
mod convert;
mod logging;
mod navigate_cmd;
mod render;
mod show_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(&cli.config)?;
    match cli.command {
        Command::Show(args) => show_cmd::run(args, &config),
        Command::Navigate(args) => navigate_cmd::run(args, &config),
    }
}
