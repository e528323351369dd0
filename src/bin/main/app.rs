//! The terminal application

use crate::input::{parse_command, Command};
use color_eyre::Result;
use mine_grid::{Grid, GridError, GridStatus};
use rand::{rngs::StdRng, SeedableRng};
use std::io::{BufRead, Write};
use tracing::{info, warn};

pub const DEFAULT_WIDTH: u8 = 10;
pub const DEFAULT_HEIGHT: u8 = 10;
pub const DEFAULT_MINES_AMOUNT: u16 = 20;

const HELP: &str = "Commands: `r x,y` reveals a cell, `f x,y` toggles a flag, `h` shows this help, `q` quits.";

/// The terminal application
#[derive(Debug)]
pub struct App {
    /// The game instance.
    pub grid: Grid,
}

impl App {
    /// Creates the application with a new grid. When a seed is provided, the mines' layout is reproducible.
    pub fn new(width: u8, height: u8, mines_amount: u16, seed: Option<u64>) -> Result<App, GridError> {
        let grid = match seed {
            Some(seed) => {
                Grid::with_rng(width, height, mines_amount, &mut StdRng::seed_from_u64(seed))?
            }
            None => Grid::new(width, height, mines_amount)?,
        };

        info!(width, height, mines_amount, ?seed, "starting a new game");
        Ok(App { grid })
    }

    /// Reads the commands line by line and applies them until the game ends, the player quits or the input runs out.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        writeln!(output, "{HELP}")?;
        self.print_grid(&mut output)?;

        for line in input.lines() {
            let line = line?;

            match parse_command(&line) {
                None => writeln!(output, "Incorrect input! Type `h` for help.")?,
                Some(Command::Help) => writeln!(output, "{HELP}")?,
                Some(Command::Quit) => break,
                Some(Command::Interact(interaction)) => match self.grid.interact(interaction) {
                    Ok(_) => self.print_grid(&mut output)?,
                    Err(err) => {
                        warn!(%err, ?interaction, "the interaction has been rejected");
                        writeln!(output, "Can't do that: {err}.")?;
                    }
                },
            };

            if let GridStatus::End(victory) = self.grid.get_status() {
                if victory {
                    writeln!(output, "You won!")?;
                } else {
                    writeln!(output, "Boom! You lost. The mines were here:\n{:?}", self.grid)?;
                }

                break;
            }
        }

        Ok(())
    }

    fn print_grid<W: Write>(&self, output: &mut W) -> Result<()> {
        writeln!(output, "{}", self.grid)?;
        writeln!(
            output,
            "Revealed: {}/{}  Flagged: {}  Mines left: {}",
            self.grid.get_revealed_cells_amount(),
            self.grid.get_safe_cells_amount(),
            self.grid.get_flagged_cells_amount(),
            self.grid.get_mines_left(),
        )?;

        Ok(())
    }
}
