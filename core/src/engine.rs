use alloc::collections::BTreeSet;
use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

/// Overall game phase. `Playing` is the initial mode; `Won` is terminal and
/// the only transition is `Playing -> Won`, driven by the win check.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameMode {
    Playing,
    Won,
}

impl GameMode {
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl Default for GameMode {
    fn default() -> Self {
        Self::Playing
    }
}

/// Outcome of a player selection.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SelectOutcome {
    NoChange,
    Flooded,
    Won,
}

impl SelectOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use SelectOutcome::*;
        match self {
            NoChange => false,
            Flooded => true,
            Won => true,
        }
    }
}

/// Represents a game from start to finish: the board, the mode, the move
/// counter, and the transient highlight used for pointer feedback.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    grid: ColorGrid,
    mode: GameMode,
    moves: Saturating<u32>,
    pointer: Option<Coord2>,
    highlight: BTreeSet<Coord2>,
}

impl PlayEngine {
    pub fn new(grid: ColorGrid) -> Self {
        Self {
            grid,
            mode: Default::default(),
            moves: Saturating(0),
            pointer: None,
            highlight: BTreeSet::new(),
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn is_won(&self) -> bool {
        self.mode.is_won()
    }

    /// Accepted moves so far; reported as the score when the game is won.
    pub fn moves(&self) -> u32 {
        self.moves.0
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn grid(&self) -> &ColorGrid {
        &self.grid
    }

    pub fn color_at(&self, coords: Coord2) -> ColorIndex {
        self.grid.color_at(coords)
    }

    /// Read-only blob query, re-exposed so a renderer can preview the blob
    /// under the pointer without going through the mutation path.
    pub fn blob_at(&self, coords: Coord2) -> Result<BTreeSet<Coord2>> {
        self.grid.blob_at(coords)
    }

    /// The blob currently under the pointer, recomputed by [`Self::step`].
    pub fn highlight(&self) -> &BTreeSet<Coord2> {
        &self.highlight
    }

    pub fn pointer(&self) -> Option<Coord2> {
        self.pointer
    }

    /// Applies a player selection. Selections while the game is already won
    /// and selections outside the board are normal input, not errors: they
    /// leave the grid, the move counter, and the mode untouched.
    pub fn handle_select(&mut self, coords: Coord2) -> SelectOutcome {
        if self.mode.is_won() {
            log::trace!("ignoring select at {:?}, game already won", coords);
            return SelectOutcome::NoChange;
        }

        if self.grid.flood_from(coords).is_err() {
            log::trace!("ignoring select outside the board: {:?}", coords);
            return SelectOutcome::NoChange;
        }

        self.moves += 1;
        if self.check_win() {
            SelectOutcome::Won
        } else {
            SelectOutcome::Flooded
        }
    }

    /// Full-board uniformity scan. Transitions `Playing -> Won` exactly
    /// once; calling again after the game is won reports `true` without
    /// re-triggering anything.
    pub fn check_win(&mut self) -> bool {
        if self.mode.is_won() {
            return true;
        }

        if !self.grid.is_uniform() {
            return false;
        }

        self.mode = GameMode::Won;
        log::debug!("board uniform, won in {} moves", self.moves.0);
        true
    }

    /// Pointer position reported by the input collaborator, already in grid
    /// coordinates. Out-of-bounds positions clear the pointer.
    pub fn set_pointer(&mut self, pointer: Option<Coord2>) {
        self.pointer = pointer.and_then(|coords| self.grid.validate_coords(coords).ok());
    }

    /// Per-tick presentation hook: recomputes the highlight blob under the
    /// pointer. Never mutates cell colors, the mode, or the move counter.
    pub fn step(&mut self) {
        self.highlight = match self.pointer {
            Some(coords) => self.grid.blob_at(coords).unwrap_or_default(),
            None => BTreeSet::new(),
        };
    }
}
