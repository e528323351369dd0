//! A Minesweeper engine.
//!
//! The [`Grid`] owns the cells, places the mines, and handles the two player interactions: revealing a cell (primary)
//! and toggling a flag (secondary). Frontends only read the cells and the counters back and draw them however they
//! like.
//!
//! ```
//! use mine_grid::{Grid, GridStatus};
//!
//! let mut grid = Grid::with_mines(3, 3, &[(2, 0)]).unwrap();
//!
//! assert_eq!(grid.primary_interaction((0, 0)), Ok(GridStatus::End(true)));
//! assert_eq!(grid.get_revealed_cells_amount(), 8);
//! ```

mod error;
pub mod grid;

pub use error::GridError;
pub use grid::cell::{Cell, CellView, Identity, Visibility};
pub use grid::{Grid, GridStatus, Interaction};

/// A cell's position in a grid: the column's and the row's indices respectively, i.e. `(x, y)`.
pub type Position = (u8, u8);
