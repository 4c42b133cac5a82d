//! Verify command - compare enumerated counts with the reference table.

use anyhow::Result;
use clap::Args;
use console::style;

use queens_core::{known_solution_count, KNOWN_SOLUTION_COUNTS};

use crate::config::Config;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Smallest board size to check
    #[arg(long, default_value_t = 4, value_parser = super::parse_size)]
    pub from: usize,

    /// Largest board size to check
    #[arg(long, default_value_t = 11, value_parser = super::parse_size)]
    pub to: usize,
}

pub fn execute(args: VerifyArgs, config: &Config) -> Result<i32> {
    check_range(args.from, args.to)?;

    let mut failures = 0;
    for n in args.from..=args.to {
        let count = super::count::count(n, config.parallel) as u64;
        let expected = known_solution_count(n).unwrap_or_default();

        if count == expected {
            println!("  {} n = {:>2}: {}", style("✔").green(), n, count);
        } else {
            failures += 1;
            println!(
                "  {} n = {:>2}: {} (expected {})",
                style("✘").red(),
                n,
                count,
                expected
            );
        }
    }

    if failures > 0 {
        eprintln!(
            "{} {} board sizes disagree with the reference counts",
            style("Error:").red().bold(),
            failures
        );
        return Ok(1);
    }

    println!(
        "{} All counts for n = {}..={} match",
        style("Success:").green().bold(),
        args.from,
        args.to
    );
    Ok(0)
}

/// Reject empty ranges and sizes without a reference count.
pub(crate) fn check_range(from: usize, to: usize) -> Result<()> {
    let last_known = KNOWN_SOLUTION_COUNTS.len() - 1;
    if from > to {
        anyhow::bail!("--from {} is larger than --to {}", from, to);
    }
    if to > last_known {
        anyhow::bail!("Reference counts are only known up to n = {}", last_known);
    }
    Ok(())
}
