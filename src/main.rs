//! Campaign Console - Entry Point
//!
//! Loads a roster and runs the lookup console, either interactively or for a
//! single `--exec` line.

use campaign_console::console::Console;
use campaign_console::core::config::ConsoleConfig;
use campaign_console::core::error::Result;
use campaign_console::world::Roster;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Campaign Console - look up heroes, clans and settlements
#[derive(Parser, Debug)]
#[command(name = "campaign-console")]
#[command(about = "Resolve console queries against a campaign roster")]
struct Args {
    /// Console config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Roster file (TOML); overrides `roster_path` from the config
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Run a single console line and exit
    #[arg(long, short = 'e')]
    exec: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ConsoleConfig::load(path)?,
        None => ConsoleConfig::default(),
    };

    // Initialize tracing for logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let roster = match args.roster.as_ref().or(config.roster_path.as_ref()) {
        Some(path) => Roster::load_from_file(path)?,
        None => Roster::bundled()?,
    };
    tracing::info!("Campaign console ready with {} entities", roster.len());

    let console = Console::new(roster, config);

    if let Some(line) = &args.exec {
        return match console.execute(line) {
            Ok(output) => {
                if let Some(output) = output {
                    println!("{}", output);
                }
                Ok(())
            }
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        };
    }

    println!("\n=== CAMPAIGN CONSOLE ===");
    println!("Type 'help' for commands, 'quit' to exit.");
    println!();

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("{}", console.config().prompt);
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        let line = input.trim();

        if line == "quit" || line == "q" {
            break;
        }

        match console.execute(line) {
            Ok(Some(output)) => println!("{}", output),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("Command failed: {}", line);
                println!("{}", e);
            }
        }
    }

    Ok(())
}
