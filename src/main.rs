// file: src/main.rs
// version: 1.0.0
// guid: 5d1f7b93-4e28-4a06-95d1-f7b934e284a0

//! uvinit - Main entry point

use clap::Parser;
use colored::Colorize;
use tokio::signal;
use uvinit::{
    cli::{args::Commands, commands::*, Cli},
    logging::logger,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init_logger(cli.verbose, cli.quiet) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    // An interrupt during the interactive session aborts the child process
    // (same terminal process group) and this tool exits accordingly.
    let shutdown_signal = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    let command_future = async {
        match cli.command {
            Some(Commands::Create(args)) => create_command(args).await,
            Some(Commands::Readme) => readme_command().await,
            Some(Commands::Migrate { dir, json }) => migrate_command(&dir, json).await,
            Some(Commands::CheckPrereqs) => check_prereqs_command().await,
            // Bare `uvinit` runs the create workflow with the top-level flags
            None => create_command(cli.create).await,
        }
    };

    tokio::select! {
        result = command_future => {
            if let Err(e) = result {
                if !matches!(e, uvinit::UvinitError::Cancelled) {
                    eprintln!("{} {}", "✗".red().bold(), e);
                }
                // Relay the wrapped tool's exit status verbatim
                std::process::exit(e.exit_code());
            }
        }
        _ = shutdown_signal => {
            println!();
            println!("{}", "Interrupted. You can rerun uvinit at any time.".yellow());
            std::process::exit(130); // Standard exit code for Ctrl+C
        }
    }
}
