pub mod cell;

use crate::{GridError, Position};
use cell::{Cell, Visibility};
use rand::{seq::SliceRandom, thread_rng, Rng};
use std::fmt::{Debug, Display, Formatter};
use tracing::{debug, trace};

/// The offsets of the eight neighbors of a cell, in row-major order.
///
/// Every neighbor-walking operation goes through this table, so cascades and chords are reproducible.
const NEIGHBOR_DELTAS: [(i16, i16); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    /* current */
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// The status of a game played on a grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridStatus {
    /// An ongoing game.
    On,
    /// A finished game. `true` for victory, `false` for loss.
    End(bool),
}

/// Describes all the possible actions a player can take.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// A request to reveal a cell by its position. When the cell is already revealed and all the mines around it are
    /// flagged, the cells around it get revealed instead.
    Primary(Position),
    /// A request to toggle the flag of a cell by its position.
    Secondary(Position),
}

/// The grid representation.
///
/// The grid is basically a 2D vector of cells with a known number of mines, plus the counters the frontends display.
/// The mines are placed once, when the grid is created, and never move afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    /// The cells of the grid. The top level represents rows, and the nested vector of each row represents cells, so a
    /// cell at `(x, y)` lives at `cells[y][x]`.
    cells: Vec<Vec<Cell>>,
    /// The total number of mined cells.
    mines_amount: u16,
    /// Always equal to the number of revealed cells.
    revealed_cells_amount: u16,
    /// Always equal to the number of flagged cells.
    flagged_cells_amount: u16,
    status: GridStatus,
}

impl Grid {
    /// Creates a new [`Grid`] with the provided dimensions and randomly distributed mines.
    ///
    /// The method might fail with [`GridError::InvalidDimensions`] in case either side is zero or with
    /// [`GridError::InvalidMinesAmount`] in case the requested mines amount is less than one or is not less than the
    /// total number of cells.
    pub fn new(width: u8, height: u8, mines_amount: u16) -> Result<Self, GridError> {
        Grid::with_rng(width, height, mines_amount, &mut thread_rng())
    }

    /// The same as [`Grid::new`], but the mines are distributed using the provided random numbers generator.
    ///
    /// Passing a seeded generator makes the mines' layout reproducible.
    pub fn with_rng<R: Rng + ?Sized>(
        width: u8,
        height: u8,
        mines_amount: u16,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        Grid::validate(width, height, mines_amount)?;

        let mut grid = Grid::blank(width, height, mines_amount);

        // Shuffle the mutable borrowings and mine the first `mines_amount` of them. Every cell is picked at most once.
        let mut flattened_grid = grid.cells.iter_mut().flatten().collect::<Vec<&mut Cell>>();
        flattened_grid.shuffle(rng);
        flattened_grid
            .into_iter()
            .take(mines_amount as usize)
            .for_each(|cell| cell.mine());

        grid.update_degrees();

        debug!(width, height, mines_amount, "created a grid");
        Ok(grid)
    }

    /// Creates a new [`Grid`] with mines at exactly the provided positions.
    ///
    /// Besides the errors of [`Grid::new`], the method might fail with [`GridError::MineOutOfBounds`] if a position is
    /// beyond the grid and with [`GridError::DuplicateMine`] if a position is listed twice.
    pub fn with_mines(width: u8, height: u8, mines: &[Position]) -> Result<Self, GridError> {
        let mines_amount = u16::try_from(mines.len()).unwrap_or(u16::MAX);
        Grid::validate(width, height, mines_amount)?;

        let mut grid = Grid::blank(width, height, mines_amount);

        for &position in mines {
            let cell = grid
                .get_cell_mut(position)
                .ok_or(GridError::MineOutOfBounds(position))?;

            if cell.is_mined() {
                return Err(GridError::DuplicateMine(position));
            }

            cell.mine();
        }

        grid.update_degrees();

        debug!(width, height, mines_amount, "created a grid with a fixed layout");
        Ok(grid)
    }

    /// Checks that a grid with the given configuration can exist.
    fn validate(width: u8, height: u8, mines_amount: u16) -> Result<(), GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }

        let cells_amount = width as u16 * height as u16;

        // There should always be at least one mine and at least one cell without a mine.
        if mines_amount < 1 || mines_amount >= cells_amount {
            return Err(GridError::InvalidMinesAmount(cells_amount - 1));
        }

        Ok(())
    }

    /// Creates a grid of hidden safe cells. The caller is responsible for placing the mines.
    fn blank(width: u8, height: u8, mines_amount: u16) -> Self {
        Grid {
            cells: vec![vec![Cell::new(); width as usize]; height as usize],
            mines_amount,
            revealed_cells_amount: 0,
            flagged_cells_amount: 0,
            status: GridStatus::On,
        }
    }

    /// Increments the degree of every cell around each of the mines.
    fn update_degrees(&mut self) {
        let adjacent_cells_positions = self
            .get_mine_positions()
            .into_iter()
            .flat_map(|position| self.neighbors(position))
            .collect::<Vec<Position>>();

        for position in adjacent_cells_positions {
            if let Some(cell) = self.get_cell_mut(position) {
                cell.increment_degree();
            }
        }
    }

    /// Returns the grid's width (the number of columns), height (the number of rows) and the two values multiplied,
    /// which is effectively the total number of cells.
    pub fn get_size(&self) -> (u8, u8, u16) {
        let height = self.cells.len() as u8;
        let width = self.cells.first().map(|row| row.len()).unwrap_or(0) as u8;

        (width, height, width as u16 * height as u16)
    }

    pub fn get_mines_amount(&self) -> u16 {
        self.mines_amount
    }

    /// The number of cells the player has to reveal to win.
    pub fn get_safe_cells_amount(&self) -> u16 {
        self.get_size().2 - self.mines_amount
    }

    pub fn get_revealed_cells_amount(&self) -> u16 {
        self.revealed_cells_amount
    }

    pub fn get_flagged_cells_amount(&self) -> u16 {
        self.flagged_cells_amount
    }

    /// Returns the number of mines minus the number of flags. Goes negative when the player places too many flags.
    pub fn get_mines_left(&self) -> i32 {
        self.mines_amount as i32 - self.flagged_cells_amount as i32
    }

    pub fn get_status(&self) -> GridStatus {
        self.status
    }

    /// Checks whether the game is over, be it a victory or a loss.
    pub fn is_game_over(&self) -> bool {
        matches!(self.status, GridStatus::End(_))
    }

    /// Returns a read-only cell reference by its position or [`None`] if there's no cell at the given position.
    pub fn get_cell(&self, (x, y): Position) -> Option<&Cell> {
        self.cells.get(y as usize).and_then(|row| row.get(x as usize))
    }

    /// Returns a mutable cell reference by its position or [`None`] if there's no cell at the given position.
    fn get_cell_mut(&mut self, (x, y): Position) -> Option<&mut Cell> {
        self.cells
            .get_mut(y as usize)
            .and_then(|row| row.get_mut(x as usize))
    }

    /// Iterates over all the cells in row-major order along with their positions.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, cell)| ((x as u8, y as u8), cell))
        })
    }

    /// Returns the positions of all the mined cells, whether they're revealed or not.
    ///
    /// Frontends may use it to show where the mines were once the game is lost.
    pub fn get_mine_positions(&self) -> Vec<Position> {
        self.cells()
            .filter(|(_, cell)| cell.is_mined())
            .map(|(position, _)| position)
            .collect()
    }

    /// Returns the positions of the cell's neighbors, excluding the ones beyond the grid's bounds.
    pub fn neighbors(&self, (x, y): Position) -> Vec<Position> {
        let (width, height, _) = self.get_size();

        NEIGHBOR_DELTAS
            .iter()
            .map(|&(dx, dy)| (x as i16 + dx, y as i16 + dy))
            .filter(|&(nx, ny)| nx >= 0 && ny >= 0 && nx < width as i16 && ny < height as i16)
            .map(|(nx, ny)| (nx as u8, ny as u8))
            .collect()
    }

    /// Performs the requested interaction and returns the resulting status.
    pub fn interact(&mut self, interaction: Interaction) -> Result<GridStatus, GridError> {
        match interaction {
            Interaction::Primary(position) => self.primary_interaction(position),
            Interaction::Secondary(position) => self.secondary_interaction(position),
        }
    }

    /// Reveals a cell by its position.
    ///
    /// A hidden cell gets revealed. If it has no mines around, all the cells around it are revealed as well, and so on
    /// recursively. A revealed cell whose degree matches the number of flags around it reveals all its hidden
    /// neighbors (those don't chain-open). Flagged cells are never revealed.
    ///
    /// Revealing a mine ends the game. Once the game has ended, the method doesn't produce any effect.
    ///
    /// Might fail with [`GridError::OutOfBounds`], in which case nothing is changed.
    pub fn primary_interaction(&mut self, position: Position) -> Result<GridStatus, GridError> {
        let visibility = self.checked_cell(position)?.visibility();

        if self.is_game_over() {
            return Ok(self.status);
        }

        trace!(?position, ?visibility, "primary interaction");

        match visibility {
            Visibility::Hidden => self.reveal_cell(position),
            Visibility::Revealed => self.reveal_surrounding_cells(position),
            Visibility::Flagged => {}
        };

        self.update_status();
        Ok(self.status)
    }

    /// Toggles the flag of a cell by its position.
    ///
    /// Doesn't produce any effect if the cell is revealed or if the game has ended.
    ///
    /// Might fail with [`GridError::OutOfBounds`], in which case nothing is changed.
    pub fn secondary_interaction(&mut self, position: Position) -> Result<GridStatus, GridError> {
        self.checked_cell(position)?;

        if self.is_game_over() {
            return Ok(self.status);
        }

        trace!(?position, "secondary interaction");

        if let Some(cell) = self.get_cell_mut(position) {
            if cell.toggle_flag() {
                if cell.is_flagged() {
                    self.flagged_cells_amount += 1;
                } else {
                    self.flagged_cells_amount -= 1;
                }
            }
        }

        Ok(self.status)
    }

    fn checked_cell(&self, position: Position) -> Result<&Cell, GridError> {
        self.get_cell(position).ok_or(GridError::OutOfBounds(position))
    }

    /// Reveals the cell and, while the revealed cells have no mines around them, their hidden neighbors.
    ///
    /// The pending positions are kept on an explicit stack. A position is only pushed while its cell is hidden and is
    /// checked once more when popped, so every cell is revealed at most once.
    fn reveal_cell(&mut self, position: Position) {
        let mut pending = vec![position];
        let mut revealed_amount = 0u16;

        while let Some(current) = pending.pop() {
            let Some(cell) = self.get_cell_mut(current) else {
                continue;
            };

            if !cell.is_hidden() {
                continue;
            }

            cell.reveal();
            let (is_mined, degree) = (cell.is_mined(), cell.degree());

            self.revealed_cells_amount += 1;
            revealed_amount += 1;

            if is_mined {
                debug!(position = ?current, "a mine has been revealed, the game is lost");
                self.status = GridStatus::End(false);
                return;
            }

            if degree == 0 {
                pending.extend(
                    self.neighbors(current)
                        .into_iter()
                        .filter(|&neighbor| self.get_cell(neighbor).is_some_and(Cell::is_hidden)),
                );
            }
        }

        trace!(?position, revealed_amount, "revealed cells");
    }

    /// Reveals all the hidden cells surrounding the target one.
    ///
    /// The method won't produce any effect if the target cell isn't a revealed number or if its degree is not the same
    /// as the number of flags placed around it. Every hidden neighbor is revealed on its own, without chain-opening, and
    /// the game is lost if any of them is mined.
    fn reveal_surrounding_cells(&mut self, position: Position) {
        let Some(target_cell) = self.get_cell(position) else {
            return;
        };

        let degree = target_cell.degree();

        if !target_cell.is_revealed() || target_cell.is_mined() || degree == 0 {
            return;
        }

        let adjacent_cells_positions = self.neighbors(position);

        let flagged_adjacent_cells_amount = adjacent_cells_positions
            .iter()
            .filter_map(|&adjacent_position| self.get_cell(adjacent_position))
            .filter(|adjacent_cell| adjacent_cell.is_flagged())
            .count();

        if flagged_adjacent_cells_amount != degree as usize {
            return;
        }

        trace!(?position, "revealing the surrounding cells");

        let mut mine_revealed = false;

        for adjacent_position in adjacent_cells_positions {
            if let Some(cell) = self.get_cell_mut(adjacent_position) {
                if cell.is_hidden() && cell.reveal() {
                    mine_revealed |= cell.is_mined();
                    self.revealed_cells_amount += 1;
                }
            }
        }

        if mine_revealed {
            debug!(?position, "a mine has been revealed around a number, the game is lost");
            self.status = GridStatus::End(false);
        }
    }

    /// Ends the game with a victory once all the safe cells are revealed. A loss is final and is never overridden.
    fn update_status(&mut self) {
        if self.status == GridStatus::On
            && self.revealed_cells_amount == self.get_safe_cells_amount()
        {
            debug!(
                revealed_cells_amount = self.revealed_cells_amount,
                "all the safe cells are revealed, the game is won"
            );
            self.status = GridStatus::End(true);
        }
    }
}

/// The `Debug` implementation displays the whole layout, as if every cell was revealed.
impl Debug for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.iter() {
            for cell in row {
                write!(f, "{:?} ", cell)?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

/// The `Display` implementation shows the grid the way the player sees it, with the columns' and rows' indices.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "    ")?;

        for x in 0..self.get_size().0 {
            write!(f, "{:^3}", x)?;
        }

        writeln!(f)?;

        for (y, row) in self.cells.iter().enumerate() {
            write!(f, "{:>3} ", y)?;

            for cell in row {
                write!(f, "{:^3}", cell.to_string())?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
