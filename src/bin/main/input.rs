//! Turns the player's text input into commands.

use mine_grid::{Interaction, Position};

/// Everything the player can type in.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Interact(Interaction),
    Help,
    Quit,
}

/// Parses a line like `r 3,5` (reveal the 4th cell of the 6th row) or `f 0,0` into a [`Command`].
///
/// Returns [`None`] on anything that doesn't look like a command.
pub fn parse_command(input: &str) -> Option<Command> {
    let mut words = input.split_whitespace();
    let action = words.next()?;

    let command = match action {
        "q" | "quit" => Command::Quit,
        "h" | "help" => Command::Help,
        "r" | "o" => Command::Interact(Interaction::Primary(parse_position(words.next()?)?)),
        "f" => Command::Interact(Interaction::Secondary(parse_position(words.next()?)?)),
        _ => return None,
    };

    // Trailing garbage means the player meant something else.
    if words.next().is_some() {
        return None;
    }

    Some(command)
}

fn parse_position(input: &str) -> Option<Position> {
    let (x, y) = input.split_once(',')?;

    Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
}
