mod cli;
mod config;
mod convert;
mod graph_cmd;
mod list_cmd;
mod logging;
mod methods_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Graph(args) => graph_cmd::run(args),
        Command::List(args) => list_cmd::run(args),
        Command::Methods => methods_cmd::run(),
    }
}
