mod cli;
mod dashboard;
mod error;
mod init;
mod logging;
mod report;
mod settings;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Report {
            kind,
            from,
            to,
            stream,
            config,
            base_url,
            page,
            show_curl,
            verbose,
        } => report::execute(report::ReportArgs {
            kind: kind.into(),
            from,
            to,
            stream,
            config_path: config,
            base_url,
            page,
            show_curl,
            verbose,
        }),
        Commands::Dashboard {
            config,
            base_url,
            snapshot,
        } => dashboard::execute(config, base_url, snapshot),
        Commands::Init { config, force } => init::execute(config, force),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
