mod cli;
mod config;
mod logging;
mod render;
mod schedule_cmd;

use std::path::Path;
use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::RotaConfig;

const DEFAULT_CONFIG: &str = "shiftrota.toml";

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match cli.config.as_deref() {
        Some(path) => RotaConfig::load(path, true)?,
        None => RotaConfig::load(Path::new(DEFAULT_CONFIG), false)?,
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Schedule(args) => schedule_cmd::run_schedule(&args, &config, &mut out),
        Command::Shift(args) => schedule_cmd::run_shift(&args, &config, &mut out),
        Command::Cycles => render::cycles(&mut out),
    }
}
