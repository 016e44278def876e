use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_n::config::GameConfig;
use connect_n::game::HorizontalScan;
use connect_n::shell::Shell;

/// Play connect-N on the console.
#[derive(Parser)]
#[command(name = "connect-n", about = "Play a game of connect-N")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_n.toml")]
    config: PathBuf,

    /// Board width (asked for if unset)
    #[arg(long)]
    width: Option<usize>,

    /// Board height (asked for if unset)
    #[arg(long)]
    height: Option<usize>,

    /// Tokens in a row needed to win (asked for if unset)
    #[arg(long)]
    target: Option<usize>,

    /// Player name, in turn order; repeat for each player
    #[arg(long = "player")]
    players: Vec<String>,

    /// Row the horizontal win check reads: bottom-row or candidate-row
    #[arg(long)]
    horizontal: Option<HorizontalScan>,

    /// Print an example configuration file and exit
    #[arg(long)]
    print_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if cli.print_config {
        print!("{}", GameConfig::default_toml());
        return Ok(());
    }

    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if cli.width.is_some() {
        config.width = cli.width;
    }
    if cli.height.is_some() {
        config.height = cli.height;
    }
    if cli.target.is_some() {
        config.target = cli.target;
    }
    if !cli.players.is_empty() {
        config.players = cli.players;
    }
    if let Some(horizontal) = cli.horizontal {
        config.horizontal_scan = horizontal;
    }
    config.validate().context("invalid command line options")?;

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout());
    shell.run(&config).context("console session failed")?;
    Ok(())
}
