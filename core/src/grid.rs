use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Content of a single cell once mines are placed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellValue {
    Mine,
    /// Safe cell with the number of adjacent mines.
    Safe(u8),
}

impl CellValue {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

impl Default for CellValue {
    fn default() -> Self {
        Self::Safe(0)
    }
}

/// Square board of mines and cached adjacency counts.
///
/// A fresh grid holds no mines until [`Grid::generate`] runs, which in a normal game happens on the first
/// reveal so the clicked area can be excluded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<CellValue>,
    side: Coord,
    mine_count: CellCount,
    generated: bool,
}

impl Grid {
    pub fn new(side: Coord) -> Self {
        Self {
            cells: square_grid(side, CellValue::default()),
            side,
            mine_count: 0,
            generated: false,
        }
    }

    /// Grid with mines at fixed positions, duplicates are counted once.
    pub fn from_mine_coords(side: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mut grid = Self::new(side);
        for &coords in mine_coords {
            let coords = grid.validate_coords(coords)?;
            grid.cells[coords.to_nd_index()] = CellValue::Mine;
        }
        grid.finish_layout();
        Ok(grid)
    }

    /// Places `mine_count` mines uniformly among the cells not in `excluded`.
    ///
    /// Out-of-bounds entries in `excluded` are ignored. Fails with [`GameError::TooManyMines`] without touching
    /// the grid when the eligible cells cannot hold that many mines.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        excluded: &[Coord2],
        mine_count: CellCount,
        rng: &mut R,
    ) -> Result<()> {
        let mut blocked = square_grid(self.side, false);
        for &coords in excluded.iter().filter(|&&c| in_bounds(c, self.side)) {
            blocked[coords.to_nd_index()] = true;
        }

        let eligible: Vec<Coord2> = self
            .iter_coords()
            .filter(|&coords| !blocked[coords.to_nd_index()])
            .collect();

        if usize::from(mine_count) > eligible.len() {
            log::warn!(
                "Cannot place {} mines, only {} eligible cells",
                mine_count,
                eligible.len()
            );
            return Err(GameError::TooManyMines);
        }

        self.cells.fill(CellValue::default());
        for i in rand::seq::index::sample(rng, eligible.len(), mine_count.into()) {
            self.cells[eligible[i].to_nd_index()] = CellValue::Mine;
        }
        self.finish_layout();

        debug_assert_eq!(self.mine_count, mine_count, "generated mine count mismatch");
        log::debug!(
            "Generated {} mines on a {}x{} board, {} cells excluded",
            self.mine_count,
            self.side,
            self.side,
            self.total_cells() - CellCount::try_from(eligible.len()).unwrap_or(CellCount::MAX)
        );
        Ok(())
    }

    /// Counts mines and caches the adjacency of every safe cell.
    fn finish_layout(&mut self) {
        let mut mine_count: CellCount = 0;
        for coords in self.iter_coords() {
            if self[coords].is_mine() {
                mine_count += 1;
                continue;
            }
            let adjacent = self.iter_neighbors(coords).filter(|&pos| self[pos].is_mine()).count();
            // at most 8 neighbors
            self.cells[coords.to_nd_index()] = CellValue::Safe(adjacent as u8);
        }
        self.mine_count = mine_count;
        self.generated = true;
    }

    /// Drops the mine layout, the next game generates a new one.
    pub fn clear(&mut self) {
        self.cells.fill(CellValue::default());
        self.mine_count = 0;
        self.generated = false;
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords, self.side) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn side(&self) -> Coord {
        self.side
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        area(self.side)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn value_at(&self, coords: Coord2) -> CellValue {
        self[coords]
    }

    pub fn is_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine()
    }

    /// Cached number of adjacent mines, `None` for a mine.
    pub fn adjacent_mines(&self, coords: Coord2) -> Option<u8> {
        match self[coords] {
            CellValue::Mine => None,
            CellValue::Safe(count) => Some(count),
        }
    }

    pub fn neighbors(&self, coords: Coord2) -> Neighbors {
        self.iter_neighbors(coords).collect()
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.side)
    }

    /// All coordinates in column-major order.
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let side = self.side;
        (0..side).flat_map(move |x| (0..side).map(move |y| (x, y)))
    }
}

impl Index<Coord2> for Grid {
    type Output = CellValue;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
