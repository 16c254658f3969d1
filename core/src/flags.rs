use ndarray::Array2;

use crate::*;

/// Outcome of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Player-placed markers, kept apart from reveal state.
#[derive(Clone, Debug, PartialEq)]
pub struct FlagTracker {
    flags: Array2<bool>,
    flagged_count: CellCount,
}

impl FlagTracker {
    pub fn new(side: Coord) -> Self {
        Self {
            flags: square_grid(side, false),
            flagged_count: 0,
        }
    }

    pub fn is_flagged(&self, coords: Coord2) -> bool {
        self.flags[coords.to_nd_index()]
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    pub fn toggle(&mut self, coords: Coord2) -> MarkOutcome {
        let flag = &mut self.flags[coords.to_nd_index()];
        *flag = !*flag;
        if *flag {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }
        MarkOutcome::Changed
    }

    /// Drops the flag at `coords`, returns whether there was one.
    pub fn remove(&mut self, coords: Coord2) -> bool {
        let flag = &mut self.flags[coords.to_nd_index()];
        if !*flag {
            return false;
        }
        *flag = false;
        self.flagged_count -= 1;
        true
    }

    /// How many mines have not been flagged yet, negative when over-flagged.
    pub fn remaining_mine_estimate(&self, total_mines: CellCount) -> isize {
        (total_mines as isize) - (self.flagged_count as isize)
    }

    pub fn clear(&mut self) {
        self.flags.fill(false);
        self.flagged_count = 0;
    }
}
