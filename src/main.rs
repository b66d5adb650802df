use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use console_connect_four::config::AppConfig;
use console_connect_four::game::{Player, COLS};
use console_connect_four::session::Session;
use console_connect_four::ui::Console;

/// Play Connect Four against a friend at the console.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four at the console", version)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override the Red player's name
    #[arg(long)]
    red_name: Option<String>,

    /// Override the Yellow player's name
    #[arg(long)]
    yellow_name: Option<String>,

    /// Who moves first: red or yellow
    #[arg(long)]
    first: Option<Player>,

    /// Colour the discs with ANSI escapes
    #[arg(long)]
    color: bool,

    /// Play a single game without the replay prompt
    #[arg(long)]
    no_replay: bool,

    /// Log game events at info level to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Log every placement at debug level to stderr
    #[arg(long)]
    debug: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn init_tracing(cli: &Cli) {
    // --debug > --verbose > RUST_LOG env > default "warn"
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(name) = cli.red_name {
        config.players.red_name = name;
    }
    if let Some(name) = cli.yellow_name {
        config.players.yellow_name = name;
    }
    if let Some(first) = cli.first {
        config.players.first = first;
    }
    if cli.color {
        config.display.color = true;
    }
    if cli.no_replay {
        config.display.replay_prompt = false;
    }
    config.validate().context("invalid settings")?;

    let console = Console::new(io::stdin().lock(), io::stdout())
        .with_color(config.display.color)
        .into_shared();
    console.borrow_mut().say(&format!(
        "Welcome to Connect Four! {} plays R, {} plays Y.\n\
         Take turns dropping a disc into a column (1-{COLS}); the first to line up \
         four in a row, column or diagonal wins. Type q to quit.\n",
        config.players.red_name, config.players.yellow_name
    ))?;

    let mut session = Session::new(console.clone(), config);
    let summary = session.run().context("game session failed")?;

    console.borrow_mut().say(&format!(
        "Thanks for playing! ({} game{} finished)",
        summary.games_played,
        if summary.games_played == 1 { "" } else { "s" }
    ))?;
    Ok(())
}
