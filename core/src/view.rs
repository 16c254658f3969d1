use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What the player sees at one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    RevealedEmpty,
    RevealedNumber(u8),
    RevealedMine,
}

impl CellView {
    pub const fn is_revealed(self) -> bool {
        matches!(
            self,
            Self::RevealedEmpty | Self::RevealedNumber(_) | Self::RevealedMine
        )
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Read-only snapshot handed to whatever draws the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderView {
    pub side: Coord,
    pub phase: Phase,
    pub mines_left: isize,
    pub cells: Array2<CellView>,
}

impl RenderView {
    pub fn cell_at(&self, coords: Coord2) -> CellView {
        self.cells[coords.to_nd_index()]
    }

    /// Cells of one row, left to right.
    pub fn row(&self, y: Coord) -> impl Iterator<Item = CellView> + '_ {
        (0..self.side).map(move |x| self.cell_at((x, y)))
    }
}
