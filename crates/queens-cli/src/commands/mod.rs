//! Subcommands.

mod all;
mod cache;
mod count;
mod first;
pub mod interactive;
mod verify;

use std::io::{self, Write};

use anyhow::Result;
use clap::Subcommand;
use console::style;

use queens_core::{parse_board_size, Mode, PlacementCache};

use crate::config::Config;
use crate::render;
use crate::session::{Outcome, Session, Source};

pub use all::AllArgs;
pub use cache::CacheArgs;
pub use count::CountArgs;
pub use first::FirstArgs;
pub use interactive::InteractiveArgs;
pub use verify::VerifyArgs;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute one placement by closed-form construction
    First(FirstArgs),

    /// Enumerate every placement by exhaustive search
    All(AllArgs),

    /// Count placements without storing them
    Count(CountArgs),

    /// Compare solution counts against the known reference values
    Verify(VerifyArgs),

    /// Prompt for board sizes and modes until interrupted
    Interactive(InteractiveArgs),

    /// Inspect or clear the placement store
    Cache(CacheArgs),
}

impl Commands {
    /// Whether the command solves through a [`Session`]
    pub fn needs_session(&self) -> bool {
        matches!(
            self,
            Commands::First(_) | Commands::All(_) | Commands::Interactive(_)
        )
    }
}

/// Execute a command that solves through `session`
pub fn execute<C: PlacementCache>(
    command: Commands,
    session: &mut Session<C>,
    config: &Config,
) -> Result<i32> {
    match command {
        Commands::First(args) => first::execute(args, session, config),
        Commands::All(args) => all::execute(args, session, config),
        Commands::Interactive(args) => interactive::execute(args, session, config),
        other => execute_standalone(other, config),
    }
}

/// Execute a command that does not need a session
pub fn execute_standalone(command: Commands, config: &Config) -> Result<i32> {
    match command {
        Commands::Count(args) => count::execute(args, config),
        Commands::Verify(args) => verify::execute(args, config),
        Commands::Cache(args) => cache::execute(args, config),
        other => anyhow::bail!("{:?} needs a solver session", other),
    }
}

/// clap value parser for board sizes
pub(crate) fn parse_size(input: &str) -> Result<usize, String> {
    parse_board_size(input).map_err(|e| e.to_string())
}

/// Print up to `show` placements of `outcome` and where they came from.
pub(crate) fn report<W: Write>(
    out: &mut W,
    outcome: &Outcome,
    show: usize,
    config: &Config,
) -> io::Result<()> {
    let placements = outcome.solution.placements();

    if placements.is_empty() {
        writeln!(
            out,
            "{} No placement exists for n = {}",
            style("Info:").cyan(),
            outcome.n
        )?;
        return Ok(());
    }

    if outcome.mode == Mode::All {
        writeln!(
            out,
            "{} {} placements for n = {}",
            style("Found").green().bold(),
            placements.len(),
            outcome.n
        )?;
        if show < placements.len() {
            writeln!(out, "Showing only the first {}", show)?;
        }
    }

    for placement in placements.iter().take(show) {
        writeln!(out, "{}", placement)?;
        if config.render_board {
            write!(out, "{}", render::board(placement))?;
        }
    }

    match outcome.source {
        Source::Store => writeln!(
            out,
            "{} Solution has been loaded from the store",
            style("Info:").cyan()
        )?,
        Source::Computed if config.cache_enabled && !config.read_only => {
            if let (Some(first), Some(last)) = (outcome.stored_ids.first(), outcome.stored_ids.last()) {
                if first == last {
                    writeln!(
                        out,
                        "{} Solution has been inserted into the store as #{}",
                        style("Info:").cyan(),
                        first
                    )?;
                } else {
                    writeln!(
                        out,
                        "{} {} solutions have been inserted into the store as #{}..#{}",
                        style("Info:").cyan(),
                        outcome.stored_ids.len(),
                        first,
                        last
                    )?;
                }
            }
        }
        Source::Computed => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use queens_core::{MemoryCache, Solver};

    fn report_to_string(outcome: &Outcome, show: usize, config: &Config) -> String {
        let mut out = Vec::new();
        report(&mut out, outcome, show, config).unwrap();
        console::strip_ansi_codes(&String::from_utf8(out).unwrap()).to_string()
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("8"), Ok(8));
        assert!(parse_size("eight").unwrap_err().contains("Invalid board size"));
    }

    #[test]
    fn test_report_first() {
        let config = Config::default();
        let mut session = Session::new(MemoryCache::new(), Solver::new()).unwrap();

        let computed = session.solve(4, Mode::First).unwrap();
        let text = report_to_string(&computed, 1, &config);
        assert!(text.contains("[(3, 1), (1, 2), (4, 3), (2, 4)]"));
        assert!(text.contains("inserted into the store as #1"));

        let cached = session.solve(4, Mode::First).unwrap();
        let text = report_to_string(&cached, 1, &config);
        assert!(text.contains("loaded from the store"));
    }

    #[test]
    fn test_report_all_limits_output() {
        let config = Config {
            render_board: true,
            ..Config::default()
        };
        let mut session = Session::new(MemoryCache::new(), Solver::new()).unwrap();
        let outcome = session.solve(6, Mode::All).unwrap();

        let text = report_to_string(&outcome, 1, &config);
        assert!(text.contains("Found 4 placements for n = 6"));
        assert!(text.contains("Showing only the first 1"));
        assert!(text.contains("4 solutions have been inserted into the store as #1..#4"));
        assert_eq!(text.matches('Q').count(), 6);
    }

    #[test]
    fn test_report_no_placement() {
        let config = Config::default();
        let mut session = Session::new(MemoryCache::new(), Solver::new()).unwrap();
        let outcome = session.solve(2, Mode::All).unwrap();

        let text = report_to_string(&outcome, 1, &config);
        assert!(text.contains("No placement exists for n = 2"));
    }

    #[test]
    fn test_report_without_cache() {
        let config = Config {
            cache_enabled: false,
            ..Config::default()
        };
        let mut session = Session::new(MemoryCache::new(), Solver::new()).unwrap();
        let outcome = session.solve(5, Mode::First).unwrap();

        let text = report_to_string(&outcome, 1, &config);
        assert!(!text.contains("store"));
    }
}
