//! GridConnect - CLI
//!
//! Daily word-grouping puzzle with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gridconnect::{
    commands::{load_stats, reset_profile, run_simple},
    config::{ClientConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, default_data_dir},
    interactive::{App, run_tui},
    logging,
    output::print_profile,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "gridconnect",
    about = "Find the connection. Solve the grid.",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the puzzle service
    #[arg(long, global = true, env = "GRIDCONNECT_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Play the built-in sample puzzle without a server
    #[arg(long, global = true, env = "GRIDCONNECT_OFFLINE")]
    offline: bool,

    /// Play a puzzle from a file ("NAME: W1, W2, W3, W4" per line)
    #[arg(long, global = true, env = "GRIDCONNECT_PUZZLE_FILE")]
    puzzle_file: Option<PathBuf>,

    /// Profile location (default: <data dir>/gridconnect/profile.json)
    #[arg(long, global = true, env = "GRIDCONNECT_PROFILE")]
    profile: Option<PathBuf>,

    /// Seconds to wait for the puzzle service; 0 waits forever
    #[arg(
        long,
        global = true,
        env = "GRIDCONNECT_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    timeout_secs: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based play without TUI)
    Simple,

    /// Show score, streak, and last win
    Stats,

    /// Reset score and streak
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        let defaults = ClientConfig::default();
        ClientConfig {
            api_url: self.api_url.clone(),
            offline: self.offline,
            puzzle_file: self.puzzle_file.clone(),
            profile_path: self.profile.clone().unwrap_or(defaults.profile_path),
            timeout_secs: self.timeout_secs,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.client_config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal, so its logs go to a file
    let log_file =
        matches!(command, Commands::Play).then(|| default_data_dir().join("gridconnect.log"));
    logging::init(log_file.as_deref())?;
    info!("Profile at {}", config.profile_path.display());

    match command {
        Commands::Play => run_play_command(&config).await,
        Commands::Simple => run_simple_command(&config).await,
        Commands::Stats => {
            print_profile(&load_stats(&config.build_store()));
            Ok(())
        }
        Commands::Reset { yes } => {
            let profile = reset_profile(&config.build_store(), yes)?;
            println!("Profile reset.");
            print_profile(&profile);
            Ok(())
        }
    }
}

async fn run_play_command(config: &ClientConfig) -> Result<()> {
    let engine = config.build_engine().context("building puzzle service")?;
    run_tui(App::new(engine)).await
}

async fn run_simple_command(config: &ClientConfig) -> Result<()> {
    let mut engine = config.build_engine().context("building puzzle service")?;
    run_simple(&mut engine).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn every_global_option_reads_env() {
        let command = Cli::command();
        let globals: Vec<_> = command
            .get_arguments()
            .filter(|arg| arg.is_global_set())
            .collect();

        assert_eq!(globals.len(), 5);
        for arg in globals {
            let env = arg.get_env().unwrap_or_else(|| panic!("{} has no env", arg.get_id()));
            assert!(env.to_string_lossy().starts_with("GRIDCONNECT_"));
        }
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "gridconnect",
            "simple",
            "--offline",
            "--timeout-secs",
            "3",
            "--profile",
            "/tmp/p.json",
        ])
        .unwrap();
        let config = cli.client_config();

        assert!(config.offline);
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.profile_path, PathBuf::from("/tmp/p.json"));
    }
}
