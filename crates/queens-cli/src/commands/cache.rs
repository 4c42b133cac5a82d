//! Cache command - inspect or clear the placement store.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use console::style;
use dialoguer::Confirm;

use queens_core::PlacementCache;
use queens_store::PlacementStore;

use crate::config::Config;
use crate::render;

#[derive(Args, Debug)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub action: CacheAction,
}

#[derive(Subcommand, Debug)]
pub enum CacheAction {
    /// Show the store location and what it holds
    Info,

    /// Print the placements stored for a board size
    Show {
        /// Board size
        #[arg(value_name = "N", value_parser = super::parse_size)]
        n: usize,

        /// Print every stored placement instead of the earliest one
        #[arg(long)]
        all: bool,
    },

    /// Remove every stored placement
    Clear {
        /// Do not ask for confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

pub fn execute(args: CacheArgs, config: &Config) -> Result<i32> {
    if !config.cache_enabled {
        println!(
            "{} The placement store is disabled (--no-cache or cache-enabled = false)",
            style("Info:").cyan()
        );
        return Ok(0);
    }

    let path = config.resolved_store_path();
    let mut store = PlacementStore::open(&path)
        .with_context(|| format!("Failed to open placement store {}", path.display()))?;
    store.set_read_only(config.read_only);

    match args.action {
        CacheAction::Info => {
            println!("{} {}", style("Store:").green().bold(), store.path().display());
            println!("  placements: {}", store.len());
            println!("  next id:    {}", store.next_id()?);
            for (n, count) in store.sizes() {
                println!("  n = {:>2}: {} stored", n, count);
            }
            Ok(0)
        }
        CacheAction::Show { n, all } => {
            let placements = if all {
                store.lookup_all(n)?.into_vec()
            } else {
                store.lookup(n)?.into_iter().collect()
            };

            if placements.is_empty() {
                println!("{} Nothing stored for n = {}", style("Info:").cyan(), n);
                return Ok(0);
            }
            for placement in &placements {
                println!("{}", placement);
                if config.render_board {
                    print!("{}", render::board(placement));
                }
            }
            Ok(0)
        }
        CacheAction::Clear { yes } => {
            if config.read_only {
                eprintln!("{} The store is read-only", style("Error:").red().bold());
                return Ok(1);
            }
            if !yes
                && !Confirm::new()
                    .with_prompt(format!("Remove all {} stored placements?", store.len()))
                    .default(false)
                    .interact()?
            {
                return Ok(1);
            }

            let removed = store.clear()?;
            println!(
                "{} Removed {} placements from {}",
                style("Success:").green().bold(),
                removed,
                store.path().display()
            );
            Ok(0)
        }
    }
}
