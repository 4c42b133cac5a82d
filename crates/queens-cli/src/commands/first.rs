//! First command - one placement by closed-form construction.

use anyhow::Result;
use clap::Args;

use queens_core::{Mode, PlacementCache};

use crate::config::Config;
use crate::session::Session;

#[derive(Args, Debug)]
pub struct FirstArgs {
    /// Board size (number of queens and board dimension)
    #[arg(value_name = "N", value_parser = super::parse_size)]
    pub n: usize,
}

pub fn execute<C: PlacementCache>(
    args: FirstArgs,
    session: &mut Session<C>,
    config: &Config,
) -> Result<i32> {
    let outcome = session.solve(args.n, Mode::First)?;
    let mut out = std::io::stdout().lock();
    super::report(&mut out, &outcome, 1, config)?;
    Ok(0)
}
