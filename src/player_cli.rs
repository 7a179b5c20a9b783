#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::string::String;

use anyhow::Context;
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::ShotOutcome,
    config::BOARD_SIZE,
    fleet::Fleet,
    game::SideId,
    player::Player,
    ui,
};

/// Human player answering prompts on a line-oriented reader.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player wired to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for one axis until the answer parses, erroring only on closed input.
    fn prompt_axis(&mut self, label: &str) -> anyhow::Result<usize> {
        loop {
            write!(self.output, "Enter the {} (0-{}): ", label, BOARD_SIZE - 1)?;
            self.output.flush()?;
            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read coordinate")?;
            if read == 0 {
                anyhow::bail!("input closed while waiting for the {}", label);
            }
            match parse_axis(&line) {
                Some(v) => return Ok(v),
                None => writeln!(
                    self.output,
                    "Please enter a whole number between 0 and {}.",
                    BOARD_SIZE - 1
                )?,
            }
        }
    }
}

/// Parse one coordinate axis, accepting only integers inside the board.
pub fn parse_axis(input: &str) -> Option<usize> {
    let value: usize = input.trim().parse().ok()?;
    (value < BOARD_SIZE).then_some(value)
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        _target: &Board,
    ) -> anyhow::Result<(usize, usize)> {
        let row = self.prompt_axis("row")?;
        let col = self.prompt_axis("column")?;
        writeln!(self.output)?;
        Ok((row, col))
    }

    fn handle_outcome(&mut self, coord: (usize, usize), outcome: ShotOutcome, target: &Fleet) {
        if let Err(e) = writeln!(
            self.output,
            "You fired at ({}, {}): {}",
            coord.0,
            coord.1,
            ui::describe_outcome(outcome, SideId::Player, target)
        ) {
            log::warn!("failed to report shot outcome: {}", e);
        }
    }
}
