#![allow(clippy::doc_markdown)]
//! graphwalk - interactive shell for undirected graphs and BFS/DFS traces.

mod dataset;
mod render;
mod repl;
mod repl_commands;


use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use graphwalk_core::{GraphwalkConfig, OutputFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::repl::{ReplConfig, Session};

/// graphwalk - build a graph and watch BFS/DFS walk it
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./graphwalk.toml when present)
    #[arg(short, long, env = "GRAPHWALK_CONFIG")]
    config: Option<PathBuf>,

    /// Start with the default ten-vertex graph loaded
    #[arg(long)]
    load_default: bool,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Output format: text or json
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Run a command and exit instead of starting the shell (repeatable)
    #[arg(short, long = "execute", value_name = "COMMAND")]
    execute: Vec<String>,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = GraphwalkConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(format) = cli.format {
        config.shell.format = format;
    }
    if cli.no_color {
        config.shell.color = false;
    }
    if cli.load_default {
        config.shell.load_default = true;
    }

    init_tracing(&config.logging.level);
    if !config.shell.color {
        colored::control::set_override(false);
    }
    tracing::debug!(?config, "configuration loaded");

    let mut session = Session::new(ReplConfig::from_config(&config));
    if config.shell.load_default {
        dataset::load_default(&mut session.graph).context("Failed to load default graph")?;
    }

    if cli.execute.is_empty() {
        return repl::run(&mut session);
    }

    let failures = repl::run_batch(&mut session, &cli.execute, &mut io::stdout().lock());
    if failures > 0 {
        anyhow::bail!("{failures} command(s) failed");
    }
    Ok(())
}
