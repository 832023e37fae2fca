//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pitwall_core::{config, logging};

mod commands;

#[derive(Parser)]
#[command(name = "pitwall")]
#[command(version)]
#[command(about = "Race-engineer themed interactive shell")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Skip the start-lights sequence
    #[arg(long)]
    no_boot: bool,

    /// Refuse to forward unknown commands to the OS shell
    #[arg(long)]
    no_shell: bool,

    /// Seed for tyre picks, quotes and the start hold
    #[arg(long, value_name = "N", env = "PITWALL_SEED")]
    seed: Option<u64>,

    /// Driver name shown in the prompt (default: config, then $USER)
    #[arg(long, value_name = "NAME")]
    driver: Option<String>,

    /// Starting directory (default: current directory)
    #[arg(long, value_name = "PATH")]
    dir: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Print the commented default config template
    Template,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let mut config = config::Config::load().context("load config")?;
    if let Some(driver) = cli.driver.as_deref().map(str::trim) {
        if !driver.is_empty() {
            config.driver = driver.to_uppercase();
        }
    }
    if cli.no_boot {
        config.boot = false;
    }
    if cli.no_shell {
        config.shell.enabled = false;
    }

    match cli.command {
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Show => commands::config::show(&config),
            ConfigCommands::Template => {
                commands::config::template();
                Ok(())
            }
        },
        None => commands::session::run(
            &commands::session::SessionOptions {
                seed: cli.seed,
                dir: cli.dir,
            },
            &config,
        ),
    }
}
