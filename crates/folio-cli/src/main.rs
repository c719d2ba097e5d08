use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio_core::content::PortfolioContent;
use folio_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "An animated terminal portfolio")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (defaults to ~/.config/folio/config.toml)
    #[arg(short = 'c', long = "config", global = true)]
    config_path: Option<PathBuf>,

    /// Portfolio content file, TOML or JSON
    #[arg(long, global = true)]
    content: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Drive the page headlessly with a scripted scroll and print what happens
    Replay {
        /// Steps such as `wheel:5`, `goto:skills`, `next`, `connect`, `wait:60`
        #[arg(default_values_t = commands::replay::default_script())]
        steps: Vec<commands::replay::Step>,
        /// Viewport columns
        #[arg(long, default_value_t = 120)]
        width: u16,
        /// Viewport rows
        #[arg(long, default_value_t = 40)]
        height: u16,
        /// Simulated frame length in milliseconds
        #[arg(long, default_value_t = 16)]
        frame_ms: u64,
        /// Print the scroll state after every step as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config_path.clone().unwrap_or_else(AppConfig::config_path);
    let config = AppConfig::load_from(&config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;

    let interactive = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, interactive)?;

    match cli.command {
        Some(Commands::Run) | None => {
            let content = load_content(&config, cli.content.as_deref())?;
            commands::run::run(&config, content)
        }
        Some(Commands::Replay {
            steps,
            width,
            height,
            frame_ms,
            json,
        }) => {
            let content = load_content(&config, cli.content.as_deref())?;
            let options = commands::replay::ReplayOptions {
                width,
                height,
                frame_ms,
                json,
            };
            commands::replay::run(&config, content, &steps, &options)
        }
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Path => commands::config::path(&config_path),
            ConfigAction::Init { force } => commands::config::init(&config_path, force),
        },
    }
}

/// The TUI owns the terminal, so it logs to a file; everything else to stderr
fn init_logging(config: &AppConfig, interactive: bool) -> Result<()> {
    let filter = EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );

    if interactive {
        let log_path = config.log_path();
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("failed to open {}", log_path.display()))?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
    Ok(())
}

/// Content from the flag, then the config, then the built-in page
fn load_content(config: &AppConfig, flag: Option<&Path>) -> Result<PortfolioContent> {
    let path = flag.map(Path::to_path_buf).or_else(|| config.content_path());
    let content = PortfolioContent::load_or_builtin(path.as_deref())?;
    content.validate()?;
    Ok(content)
}
