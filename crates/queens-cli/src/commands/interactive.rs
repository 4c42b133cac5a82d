//! Interactive command - prompt for board sizes and modes in a loop.
//!
//! Each round asks for a board size and a mode, prints the result and starts
//! over. An empty answer, `q` or end of input ends the loop. Bad input is
//! reported and the round restarts.

use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use console::style;
use dialoguer::{Confirm, Input};

use queens_core::{parse_board_size, Mode, PlacementCache};

use crate::config::Config;
use crate::session::Session;

const SIZE_PROMPT: &str = "Please introduce the dimensions of the board";
const MODE_PROMPT: &str = "Do you want to get [F]irst solution or [A]ll solutions?";

#[derive(Args, Debug)]
pub struct InteractiveArgs {
    /// Number of placements to print per answer in all mode
    #[arg(long, default_value_t = 1)]
    pub show: usize,
}

/// Source of answers for the interactive loop.
pub trait Prompt {
    /// Ask `question`; `None` means the input has ended.
    fn ask(&mut self, question: &str) -> Result<Option<String>>;

    fn confirm(&mut self, question: &str) -> Result<bool>;
}

/// Terminal prompts.
pub struct DialoguerPrompt;

impl Prompt for DialoguerPrompt {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        let answer = Input::<String>::new()
            .with_prompt(question)
            .allow_empty(true)
            .interact_text();

        match answer {
            Ok(answer) => Ok(Some(answer)),
            Err(dialoguer::Error::IO(e))
                if matches!(
                    e.kind(),
                    io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted
                ) =>
            {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        Ok(Confirm::new().with_prompt(question).default(false).interact()?)
    }
}

pub fn execute<C: PlacementCache>(
    args: InteractiveArgs,
    session: &mut Session<C>,
    config: &Config,
) -> Result<i32> {
    let mut out = io::stdout().lock();
    run_loop(session, &mut DialoguerPrompt, &mut out, config, args.show)?;
    Ok(0)
}

/// Run rounds until the prompt runs dry or the user quits.
pub fn run_loop<C, P, W>(
    session: &mut Session<C>,
    prompt: &mut P,
    out: &mut W,
    config: &Config,
    show: usize,
) -> Result<()>
where
    C: PlacementCache,
    P: Prompt,
    W: Write,
{
    writeln!(out, "{}", style("N-Queens solver!").bold())?;
    writeln!(out, "Leave the board size empty or type q to quit.")?;

    loop {
        let Some(answer) = prompt.ask(SIZE_PROMPT)? else {
            break;
        };
        let answer = answer.trim();
        if answer.is_empty() || answer.eq_ignore_ascii_case("q") {
            break;
        }

        let n = match parse_board_size(answer) {
            Ok(n) => n,
            Err(e) => {
                writeln!(out, "{} {}", style("Error:").red().bold(), e)?;
                continue;
            }
        };

        let Some(answer) = prompt.ask(MODE_PROMPT)? else {
            break;
        };
        let mode: Mode = match answer.parse() {
            Ok(mode) => mode,
            Err(e) => {
                writeln!(out, "{} {}", style("Error:").red().bold(), e)?;
                continue;
            }
        };

        if mode == Mode::All
            && n > config.max_exhaustive_n
            && !prompt.confirm(&format!(
                "Enumerating every placement for n = {} may take a long time. Continue?",
                n
            ))?
        {
            continue;
        }

        match session.solve(n, mode) {
            Ok(outcome) => super::report(out, &outcome, show, config)?,
            Err(e) => writeln!(out, "{} {:#}", style("Error:").red().bold(), e)?,
        }
    }

    writeln!(out, "Goodbye!")?;
    Ok(())
}
