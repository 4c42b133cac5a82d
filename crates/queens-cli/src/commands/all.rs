//! All command - every placement by exhaustive search.

use std::time::Duration;

use anyhow::Result;
use clap::Args;
use console::{style, Term};
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;

use queens_core::{Mode, PlacementCache};

use crate::config::Config;
use crate::session::Session;

#[derive(Args, Debug)]
pub struct AllArgs {
    /// Board size (number of queens and board dimension)
    #[arg(value_name = "N", value_parser = super::parse_size)]
    pub n: usize,

    /// Number of placements to print
    #[arg(long, default_value_t = 1)]
    pub show: usize,

    /// Skip the confirmation for large boards
    #[arg(short = 'y', long)]
    pub yes: bool,
}

pub fn execute<C: PlacementCache>(
    args: AllArgs,
    session: &mut Session<C>,
    config: &Config,
) -> Result<i32> {
    if args.n > config.max_exhaustive_n && !args.yes {
        if Term::stdout().is_term() {
            let proceed = Confirm::new()
                .with_prompt(format!(
                    "Enumerating every placement for n = {} may take a long time. Continue?",
                    args.n
                ))
                .default(false)
                .interact()?;
            if !proceed {
                println!("{} Nothing enumerated", style("Info:").cyan());
                return Ok(1);
            }
        } else {
            warn!(
                "n = {} is above max-exhaustive-n = {}, enumerating anyway",
                args.n, config.max_exhaustive_n
            );
        }
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]")?);
    spinner.set_message(format!("Enumerating placements for n = {}", args.n));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = session.solve(args.n, Mode::All);
    spinner.finish_and_clear();
    let outcome = outcome?;

    let mut out = std::io::stdout().lock();
    super::report(&mut out, &outcome, args.show, config)?;
    Ok(0)
}
