mod commands;
mod script;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{list, replay, ListArgs, ReplayArgs};

/// Drive the custom-editor boundary element from the command line
#[derive(Parser, Debug)]
#[command(name = "custom-editor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON script of host actions and print the outward events
    Replay(ReplayArgs),

    /// List the commands accepted by the `format` attribute
    Commands(ListArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| {
            let cwd = cwd.display().to_string();
            match cli.command {
                Command::Replay(args) => replay(args, &cwd),
                Command::Commands(args) => list(args),
            }
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
