use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Playing,
    Won,
    Lost,
}

impl Phase {
    /// Game ended and the board is frozen
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::Playing
    }
}

/// Outcome of a reveal action
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

/// Represents a game from first click to win or loss.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    grid: Grid,
    reveal: RevealEngine,
    flags: FlagTracker,
    phase: Phase,
    rng: SmallRng,
    triggered_mine: Option<Coord2>,
}

impl Game {
    /// New game whose mines are placed on the first reveal using `seed`.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let side = config.side();
        log::debug!(
            "New {}x{} game with {} mines, seed: {}",
            side,
            side,
            config.mines(),
            seed
        );
        Self {
            config,
            grid: Grid::new(side),
            reveal: RevealEngine::new(side),
            flags: FlagTracker::new(side),
            phase: Default::default(),
            rng: SmallRng::seed_from_u64(seed),
            triggered_mine: None,
        }
    }

    /// Game over an already generated grid, the first reveal gets no safety guarantee.
    pub fn with_grid(grid: Grid, seed: u64) -> Self {
        let side = grid.side();
        Self {
            config: GameConfig::new_unchecked(side, grid.mine_count()),
            grid,
            reveal: RevealEngine::new(side),
            flags: FlagTracker::new(side),
            phase: Default::default(),
            rng: SmallRng::seed_from_u64(seed),
            triggered_mine: None,
        }
    }

    /// Discards the board and all player state, mines are placed again on the next reveal.
    pub fn restart(&mut self, seed: u64) {
        log::debug!("Restarting game, seed: {}", seed);
        self.grid.clear();
        self.reveal.clear();
        self.flags.clear();
        self.phase = Phase::Playing;
        self.rng = SmallRng::seed_from_u64(seed);
        self.triggered_mine = None;
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn side(&self) -> Coord {
        self.config.side()
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.reveal.revealed_count()
    }

    /// How many mines have not been flagged yet
    pub fn mines_left(&self) -> isize {
        self.flags.remaining_mine_estimate(self.config.mines())
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Underlying board, mines included; not meant for rendering.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell_at(&self, coords: Coord2) -> CellView {
        if self.reveal.is_revealed(coords) {
            match self.grid.value_at(coords) {
                CellValue::Mine => CellView::RevealedMine,
                CellValue::Safe(0) => CellView::RevealedEmpty,
                CellValue::Safe(count) => CellView::RevealedNumber(count),
            }
        } else if self.flags.is_flagged(coords) {
            CellView::Flagged
        } else {
            CellView::Hidden
        }
    }

    pub fn render_view(&self) -> RenderView {
        let side = self.side();
        let cells = Array2::from_shape_fn((side, side).to_nd_index(), |(x, y)| {
            // indices come from a side x side shape
            self.cell_at((x as Coord, y as Coord))
        });
        RenderView {
            side,
            phase: self.phase,
            mines_left: self.mines_left(),
            cells,
        }
    }

    /// Reveal action from the input side, rejected actions are logged and become [`RevealOutcome::NoChange`].
    pub fn on_reveal(&mut self, coords: Coord2) -> RevealOutcome {
        self.reveal(coords).unwrap_or_else(|err| {
            log::debug!("Ignored reveal at {:?}: {}", coords, err);
            RevealOutcome::NoChange
        })
    }

    /// Flag action from the input side, rejected actions are logged and become [`MarkOutcome::NoChange`].
    pub fn on_toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        self.toggle_flag(coords).unwrap_or_else(|err| {
            log::debug!("Ignored flag at {:?}: {}", coords, err);
            MarkOutcome::NoChange
        })
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.grid.validate_coords(coords)?;
        self.check_playing()?;

        if self.reveal.is_revealed(coords) {
            return Ok(MarkOutcome::NoChange);
        }
        Ok(self.flags.toggle(coords))
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.grid.validate_coords(coords)?;
        self.check_playing()?;

        if self.reveal.is_revealed(coords) {
            return Ok(RevealOutcome::NoChange);
        }

        if !self.grid.is_generated() {
            let mut excluded = self.grid.neighbors(coords);
            excluded.push(coords);
            self.grid.generate(&excluded, self.config.mines(), &mut self.rng)?;
            self.reveal.reveal_from(coords, &self.grid);
        } else {
            match self.grid.value_at(coords) {
                CellValue::Mine => {
                    self.reveal.reveal_single(coords);
                    self.flags.remove(coords);
                    self.triggered_mine = Some(coords);
                    self.end_game(false);
                    return Ok(RevealOutcome::HitMine);
                }
                CellValue::Safe(0) => {
                    self.reveal.reveal_from(coords, &self.grid);
                }
                CellValue::Safe(_) => {
                    self.reveal.reveal_single(coords);
                }
            }
        }
        self.drop_revealed_flags();

        if self.reveal.revealed_count() == self.grid.safe_cell_count() {
            self.end_game(true);
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    /// A flood may uncover flagged cells, their flags no longer count.
    fn drop_revealed_flags(&mut self) {
        if self.flags.flagged_count() == 0 {
            return;
        }
        for coords in self.grid.iter_coords() {
            if self.reveal.is_revealed(coords) && self.flags.remove(coords) {
                log::trace!("Dropped flag on revealed cell {:?}", coords);
            }
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.phase.is_finished() {
            return;
        }

        self.phase = if won { Phase::Won } else { Phase::Lost };
        log::debug!(
            "Game ended: {:?}, {} of {} safe cells revealed",
            self.phase,
            self.reveal.revealed_count(),
            self.grid.safe_cell_count()
        );
    }

    fn check_playing(&self) -> Result<()> {
        if self.phase.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
