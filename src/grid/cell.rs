use std::fmt::{Debug, Display, Formatter};

/// What a cell holds.
///
/// The identity is assigned while the grid is being generated and never changes afterwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Identity {
    /// A cell that doesn't contain a mine.
    Safe,
    /// A mined cell.
    Mine,
}

/// How a cell is currently seen by the player.
///
/// A cell is always in exactly one of the three states.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Visibility {
    /// Nothing is known about the cell yet.
    Hidden,
    /// The cell has been opened.
    Revealed,
    /// The cell is still closed, but the player has marked it as a suspected mine.
    Flagged,
}

/// The display category of a cell.
///
/// Frontends only need this to decide what to draw; the actual drawing is up to them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CellView {
    Hidden,
    Flagged,
    /// A revealed mine.
    Mine,
    /// A revealed safe cell with the amount of mines around it.
    Number(u8),
}

/// The representation of a cell.
///
/// A cell is described with its identity, its visibility and its degree (the number of mines among its neighbors).
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Cell {
    identity: Identity,
    visibility: Visibility,
    /// The amount of mined cells around this one. Computed once, right after the mines have been placed.
    degree: u8,
}

impl Cell {
    /// Creates a new hidden safe `Cell` with no mines around it.
    pub fn new() -> Self {
        Cell {
            identity: Identity::Safe,
            visibility: Visibility::Hidden,
            degree: 0,
        }
    }

    pub fn identity(&self) -> Identity {
        self.identity
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns the amount of mines around the cell.
    ///
    /// Mined cells have a degree too, it's simply never shown to the player.
    pub fn degree(&self) -> u8 {
        self.degree
    }

    /// Checks whether the cell is mined.
    pub fn is_mined(&self) -> bool {
        self.identity == Identity::Mine
    }

    pub fn is_hidden(&self) -> bool {
        self.visibility == Visibility::Hidden
    }

    /// Checks whether the cell is revealed.
    pub fn is_revealed(&self) -> bool {
        self.visibility == Visibility::Revealed
    }

    /// Check whether the cell is flagged.
    pub fn is_flagged(&self) -> bool {
        self.visibility == Visibility::Flagged
    }

    /// Returns the display category of the cell.
    pub fn view(&self) -> CellView {
        match (self.visibility, self.identity) {
            (Visibility::Hidden, _) => CellView::Hidden,
            (Visibility::Flagged, _) => CellView::Flagged,
            (Visibility::Revealed, Identity::Mine) => CellView::Mine,
            (Visibility::Revealed, Identity::Safe) => CellView::Number(self.degree),
        }
    }

    /// Mines the cell. Only meant to be used while the grid is being generated.
    pub(crate) fn mine(&mut self) {
        self.identity = Identity::Mine;
    }

    /// Increments the amount of mines around the cell. Only meant to be used while the grid is being generated.
    pub(crate) fn increment_degree(&mut self) {
        self.degree += 1;
    }

    /// Reveals the cell, whether it's hidden or flagged.
    ///
    /// Returns `false` and doesn't produce any effect if the cell is already revealed.
    pub fn reveal(&mut self) -> bool {
        if self.is_revealed() {
            return false;
        }

        self.visibility = Visibility::Revealed;
        true
    }

    /// Toggles the flag of the cell.
    ///
    /// Returns `false` and doesn't produce any effect if the cell is revealed.
    pub fn toggle_flag(&mut self) -> bool {
        self.visibility = match self.visibility {
            Visibility::Hidden => Visibility::Flagged,
            Visibility::Flagged => Visibility::Hidden,
            Visibility::Revealed => return false,
        };

        true
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::new()
    }
}

/// The `Debug` implementation displays every cell as if it was revealed (flags are kept visible).
impl Debug for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_flagged() {
            return write!(f, "F");
        }

        match self.identity {
            Identity::Mine => write!(f, "*"),
            Identity::Safe if self.degree == 0 => write!(f, "."),
            Identity::Safe => write!(f, "{}", self.degree),
        }
    }
}

/// The `Display` implementation represents the cell in a real-game fashion.
impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.visibility {
            // In the real game, the closed cells don't reveal their inner state.
            Visibility::Hidden => write!(f, "#"),
            // The rest of the cases is covered by the `Debug` implementation.
            _ => write!(f, "{:?}", self),
        }
    }
}
