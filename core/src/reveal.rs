use alloc::collections::VecDeque;
use ndarray::Array2;

use crate::*;

/// Result of a single reveal step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Continue,
    HitMine,
}

/// Set of uncovered cells and the flood-fill that grows it.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealEngine {
    revealed: Array2<bool>,
    revealed_count: CellCount,
    // scratch marker for the current flood, reset on every call
    visited: Array2<bool>,
}

impl RevealEngine {
    pub fn new(side: Coord) -> Self {
        Self {
            revealed: square_grid(side, false),
            revealed_count: 0,
            visited: square_grid(side, false),
        }
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.revealed[coords.to_nd_index()]
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    /// Uncovers `coords` alone, returns whether it was hidden before.
    pub fn reveal_single(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.revealed[coords.to_nd_index()];
        if *cell {
            return false;
        }
        *cell = true;
        self.revealed_count += 1;
        true
    }

    /// Uncovers `coords` and, when it has no adjacent mines, breadth-first expands through every connected
    /// zero cell and its numbered border.
    ///
    /// Already revealed cells are neither counted twice nor expanded twice within one call.
    pub fn reveal_from(&mut self, coords: Coord2, grid: &Grid) -> ActionOutcome {
        self.reveal_single(coords);

        match grid.value_at(coords) {
            CellValue::Mine => {
                log::debug!("Revealed mine at {:?}", coords);
                return ActionOutcome::HitMine;
            }
            CellValue::Safe(0) => {}
            CellValue::Safe(count) => {
                log::trace!("Revealed {:?}, {} adjacent mines", coords, count);
                return ActionOutcome::Continue;
            }
        }

        self.visited.fill(false);
        self.visited[coords.to_nd_index()] = true;
        let mut frontier = VecDeque::new();
        self.enqueue_neighbors(coords, grid, &mut frontier);
        log::trace!(
            "Starting flood-fill from {:?}, initial neighbors: {:?}",
            coords,
            frontier
        );

        let before = self.revealed_count;
        while let Some(visit_coords) = frontier.pop_front() {
            let Some(count) = grid.adjacent_mines(visit_coords) else {
                // a zero cell never borders a mine
                debug_assert!(false, "flood-fill reached mine at {visit_coords:?}");
                continue;
            };

            self.reveal_single(visit_coords);
            if count == 0 {
                self.enqueue_neighbors(visit_coords, grid, &mut frontier);
            }
        }
        log::debug!(
            "Flood-fill from {:?} uncovered {} more cells",
            coords,
            self.revealed_count - before
        );

        ActionOutcome::Continue
    }

    fn enqueue_neighbors(&mut self, coords: Coord2, grid: &Grid, frontier: &mut VecDeque<Coord2>) {
        for pos in grid.iter_neighbors(coords) {
            let visited = &mut self.visited[pos.to_nd_index()];
            if !*visited {
                *visited = true;
                frontier.push_back(pos);
            }
        }
    }

    pub fn clear(&mut self) {
        self.revealed.fill(false);
        self.revealed_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(side: Coord, mines: &[Coord2]) -> Grid {
        Grid::from_mine_coords(side, mines).unwrap()
    }

    fn revealed_cells(engine: &RevealEngine, grid: &Grid) -> alloc::vec::Vec<Coord2> {
        grid.iter_coords().filter(|&c| engine.is_revealed(c)).collect()
    }

    #[test]
    fn hitting_mine_reveals_only_the_mine() {
        let grid = grid(3, &[(1, 1)]);
        let mut engine = RevealEngine::new(3);

        assert_eq!(engine.reveal_from((1, 1), &grid), ActionOutcome::HitMine);
        assert_eq!(revealed_cells(&engine, &grid), [(1, 1)]);
    }

    #[test]
    fn numbered_cell_does_not_expand() {
        let grid = grid(4, &[(3, 3), (0, 0)]);
        let mut engine = RevealEngine::new(4);

        assert_eq!(engine.reveal_from((1, 1), &grid), ActionOutcome::Continue);
        assert_eq!(engine.revealed_count(), 1);
        assert!(engine.is_revealed((1, 1)));
    }

    #[test]
    fn flood_stops_at_numbered_border() {
        // wall of mines in column 2 splits the board
        let mines = [(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)];
        let grid = grid(5, &mines);
        let mut engine = RevealEngine::new(5);

        assert_eq!(engine.reveal_from((0, 0), &grid), ActionOutcome::Continue);

        for coords in grid.iter_coords() {
            assert_eq!(engine.is_revealed(coords), coords.0 < 2, "at {coords:?}");
        }
        assert_eq!(engine.revealed_count(), 10);
    }

    #[test]
    fn flood_reveals_zero_region_and_border_only() {
        let grid = grid(5, &[(4, 4)]);
        let mut engine = RevealEngine::new(5);

        engine.reveal_from((0, 0), &grid);

        assert_eq!(engine.revealed_count(), 24);
        assert!(!engine.is_revealed((4, 4)));
        assert!(engine.is_revealed((3, 3)));
    }

    #[test]
    fn repeated_reveal_is_idempotent() {
        let grid = grid(5, &[(4, 4)]);
        let mut engine = RevealEngine::new(5);

        engine.reveal_from((0, 0), &grid);
        let snapshot = engine.clone();
        engine.reveal_from((0, 0), &grid);
        engine.reveal_from((2, 2), &grid);

        assert_eq!(engine.revealed, snapshot.revealed);
        assert_eq!(engine.revealed_count(), snapshot.revealed_count());
    }

    #[test]
    fn reveal_single_reports_new_cells() {
        let mut engine = RevealEngine::new(2);
        assert!(engine.reveal_single((1, 0)));
        assert!(!engine.reveal_single((1, 0)));
        assert_eq!(engine.revealed_count(), 1);

        engine.clear();
        assert_eq!(engine.revealed_count(), 0);
        assert!(!engine.is_revealed((1, 0)));
    }
}
