//! CLI binary for parley.

use clap::Parser;
use parley::{Engine, ParleyConfig};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Parley: a rule-based chat assistant for the terminal.
#[derive(Parser)]
#[command(name = "parley", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for reply selection, for reproducible conversations.
    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective configuration to the config file and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the conversation.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("parley=warn,parley_match=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let path = cli
        .config
        .clone()
        .unwrap_or_else(ParleyConfig::default_config_path);
    // An explicit --config must exist unless we are about to create it.
    let mut config = if cli.config.is_some() && !cli.write_config {
        ParleyConfig::from_file(&path)?
    } else {
        ParleyConfig::load_or_default(&path)?
    };
    if cli.seed.is_some() {
        config.session.seed = cli.seed;
    }

    if cli.write_config {
        config.save_to_file(&path)?;
        println!("Wrote config to {}", path.display());
        return Ok(());
    }

    run_chat(&config)
}

fn run_chat(config: &ParleyConfig) -> anyhow::Result<()> {
    let engine = Engine::with_config(config)?;
    let mut session = engine.new_session();
    let cli = &config.cli;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", cli.labelled(&cli.banner))?;

    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "{}", cli.prompt)?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            // EOF
            writeln!(stdout)?;
            break;
        };
        let input = line?;
        let input = input.trim();

        if cli.is_exit(input) {
            writeln!(stdout, "{}", cli.labelled(&cli.farewell))?;
            break;
        }

        let reply = session.respond(input);
        writeln!(stdout, "{}", cli.labelled(&reply))?;
    }

    tracing::info!(turns = session.state().history_len(), "chat ended");
    Ok(())
}
