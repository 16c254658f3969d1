use serde::{Deserialize, Serialize};

use crate::*;

/// Board side and mine count for one game.
///
/// Built through [`GameConfig::new`], which rejects any mine count that could not fit around a safe
/// first click anywhere on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    side: Coord,
    mines: CellCount,
}

impl GameConfig {
    pub(crate) const fn new_unchecked(side: Coord, mines: CellCount) -> Self {
        Self { side, mines }
    }

    pub fn new(side: Coord, mines: CellCount) -> Result<Self> {
        if side == 0 {
            return Err(GameError::InvalidSize);
        }
        let config = Self::new_unchecked(side, mines);
        if mines >= config.mine_limit() {
            log::warn!(
                "Rejected config: {} mines requested but a {}x{} board needs fewer than {}",
                mines,
                side,
                side,
                config.mine_limit()
            );
            return Err(GameError::TooManyMines);
        }
        Ok(config)
    }

    /// Config with the default density of one mine per eight cells.
    pub fn with_default_density(side: Coord) -> Result<Self> {
        Self::new(side, default_mine_count(side))
    }

    /// Derives the board from screen geometry: one cell per `square_len` pixels and the default density.
    pub fn from_screen(screen_len: u32, square_len: u32) -> Result<Self> {
        let side = screen_len
            .checked_div(square_len)
            .and_then(|side| Coord::try_from(side).ok())
            .ok_or(GameError::InvalidSize)?;
        Self::with_default_density(side)
    }

    pub const fn side(&self) -> Coord {
        self.side
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.side)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }

    /// Cells left outside the biggest possible first-click exclusion zone, the mine count must stay below it.
    pub const fn mine_limit(&self) -> CellCount {
        let zone = if self.side < 3 { self.side } else { 3 };
        self.total_cells() - area(zone)
    }
}

pub const fn default_mine_count(side: Coord) -> CellCount {
    area(side) / 8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_density_is_one_eighth_rounded_down() {
        let config = GameConfig::with_default_density(14).unwrap();
        assert_eq!(config.mines(), 24);
        assert_eq!(config.safe_cells(), 196 - 24);
    }

    #[test]
    fn from_screen_matches_window_geometry() {
        // 512px screen with 35px squares
        let config = GameConfig::from_screen(512, 35).unwrap();
        assert_eq!(config.side(), 14);
        assert_eq!(config.mines(), 24);
    }

    #[test]
    fn from_screen_rejects_degenerate_geometry() {
        assert_eq!(GameConfig::from_screen(512, 0), Err(GameError::InvalidSize));
        assert_eq!(GameConfig::from_screen(10, 35), Err(GameError::InvalidSize));
        assert_eq!(GameConfig::from_screen(100_000, 1), Err(GameError::InvalidSize));
    }

    #[test]
    fn rejects_zero_side() {
        assert_eq!(GameConfig::new(0, 0), Err(GameError::InvalidSize));
    }

    #[test]
    fn mine_limit_accounts_for_first_click_zone() {
        assert_eq!(GameConfig::new(4, 6).unwrap().mine_limit(), 7);
        assert_eq!(GameConfig::new(4, 7), Err(GameError::TooManyMines));
        assert_eq!(GameConfig::new(4, 8), Err(GameError::TooManyMines));
        assert_eq!(GameConfig::new(9, 71).unwrap().mines(), 71);
        assert_eq!(GameConfig::new(9, 72), Err(GameError::TooManyMines));
    }

    #[test]
    fn boards_without_room_outside_the_first_click_are_rejected() {
        // the whole board fits inside the first-click zone
        assert_eq!(GameConfig::new(1, 0), Err(GameError::TooManyMines));
        assert_eq!(GameConfig::new(2, 0), Err(GameError::TooManyMines));
        assert_eq!(GameConfig::new(3, 0), Err(GameError::TooManyMines));
        assert_eq!(GameConfig::new(4, 0).unwrap().mine_limit(), 7);
    }
}
