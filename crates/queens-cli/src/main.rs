//! `queens` - place N non-attacking queens on an N x N board.

mod commands;
mod config;
mod render;
mod session;

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use console::style;
use log::debug;

use queens_core::{NoopCache, Solver};
use queens_store::PlacementStore;

use crate::commands::{Commands, InteractiveArgs};
use crate::config::Config;
use crate::session::Session;

#[derive(Parser, Debug)]
#[command(name = "queens")]
#[command(about = "Solve the N-Queens problem by construction or exhaustive search")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to queens.toml in the config directory)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Placement store file
    #[arg(long, global = true, value_name = "FILE")]
    store: Option<PathBuf>,

    /// Neither read nor write the placement store
    #[arg(long, global = true)]
    no_cache: bool,

    /// Read the placement store but never write to it
    #[arg(long, global = true)]
    read_only: bool,

    /// Enumerate on a single thread
    #[arg(long, global = true)]
    sequential: bool,

    /// Draw each printed placement as a board
    #[arg(long, global = true)]
    board: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{} {:#}", style("Error:").red().bold(), e);
            process::exit(1);
        }
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<i32> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(store) = cli.store {
        config.store_path = Some(store);
    }
    if cli.no_cache {
        config.cache_enabled = false;
    }
    if cli.read_only {
        config.read_only = true;
    }
    if cli.sequential {
        config.parallel = false;
    }
    if cli.board {
        config.render_board = true;
    }
    debug!("Effective configuration: {:?}", config);

    let command = cli
        .command
        .unwrap_or(Commands::Interactive(InteractiveArgs { show: 1 }));
    if !command.needs_session() {
        return commands::execute_standalone(command, &config);
    }

    let solver = Solver::new().parallel(config.parallel);
    if !config.cache_enabled {
        let mut session = Session::new(NoopCache, solver)?;
        return commands::execute(command, &mut session, &config);
    }

    let path = config.resolved_store_path();
    let mut store = PlacementStore::open(&path)
        .with_context(|| format!("Failed to open placement store {}", path.display()))?;
    store.set_read_only(config.read_only);

    let mut session = Session::new(store, solver)?;
    commands::execute(command, &mut session, &config)
}
