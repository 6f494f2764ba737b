use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use glide_core::{AppConfig, ContentSource};

mod commands;

#[derive(Parser)]
#[command(name = "glide")]
#[command(author, version, about = "A terminal pager with smooth vi-style scrolling")]
struct Cli {
    /// File to page (reads stdin when omitted or "-")
    file: Option<PathBuf>,

    /// Content width in columns (defaults to the widest line)
    #[arg(short = 'w', long)]
    width: Option<usize>,

    /// Make every scroll command instant
    #[arg(long)]
    no_smooth: bool,

    /// Configuration file (defaults to ~/.config/glide/config.toml)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AppConfig::load()?,
    };
    if cli.no_smooth {
        config.ui.scroll.smooth_enabled = false;
    }
    if let Some(path) = cli.log_file {
        config.general.log_file = Some(path);
    }

    init_logging(&config)?;

    let source = ContentSource::from_arg(cli.file);
    commands::run::run(Arc::new(config), source, cli.width)
}

/// Log to the configured file; the terminal itself belongs to the pager
fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = config.log_file() else {
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    Ok(())
}
