mod commands;
mod output;

use clap::{Parser, Subcommand};

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::WARN;

/// Compile field selections into GraphQL documents.
#[derive(Debug, Parser)]
#[command(name = "gqlselect", version, about)]
struct Cli {
    /// Log debug output to stderr (overrides $LOG_LEVEL).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compile a JSON selection file into a query or mutation document.
    Compile(commands::compile::CompileCmd),
    /// Show the default selection the compiler synthesizes for a type.
    Defaults(commands::defaults::DefaultsCmd),
}

fn main() {
    let cli = Cli::parse();
    setup_logger(cli.verbose);

    let result = match cli.command {
        Command::Compile(cmd) => commands::compile::run(cmd),
        Command::Defaults(cmd) => commands::defaults::run(cmd),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn setup_logger(verbose: bool) {
    let mut log_level_warnings: Vec<String> = vec![];
    let log_level = if verbose {
        tracing::Level::DEBUG
    } else {
        let env_val = std::env::var("LOG_LEVEL").map(|s| s.trim().to_string());
        match env_val.as_deref() {
            Ok("ERROR" | "error") => tracing::Level::ERROR,
            Ok("WARN" | "warn") => tracing::Level::WARN,
            Ok("INFO" | "info") => tracing::Level::INFO,
            Ok("DEBUG" | "debug") => tracing::Level::DEBUG,
            Ok("TRACE" | "trace") => tracing::Level::TRACE,
            Ok(other) => {
                log_level_warnings.push(format!(
                    "Invalid `LOG_LEVEL` environment variable value: `{other}`"
                ));
                DEFAULT_LOG_LEVEL
            }
            Err(_) => DEFAULT_LOG_LEVEL,
        }
    };

    // stdout carries the document.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    tracing::trace!("Initial logging level set to `{log_level}`.");

    for warning in log_level_warnings.drain(..) {
        tracing::warn!("{warning}");
    }
}
