#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use palette::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod grid;
mod palette;
mod types;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub palette: Palette,
}

impl GameConfig {
    pub const DEFAULT_SIZE: Coord2 = (16, 16);

    pub const fn new_unchecked(size: Coord2, palette: Palette) -> Self {
        Self { size, palette }
    }

    pub fn new((size_x, size_y): Coord2, palette: Palette) -> Self {
        let size_x = size_x.clamp(1, Coord::MAX);
        let size_y = size_y.clamp(1, Coord::MAX);
        Self::new_unchecked((size_x, size_y), palette)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_SIZE, Palette::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_the_classic_board() {
        let config = GameConfig::default();
        assert_eq!(config.size, (16, 16));
        assert_eq!(config.total_cells(), 256);
        assert_eq!(config.palette.len(), 4);
    }

    #[test]
    fn new_clamps_degenerate_sizes() {
        let config = GameConfig::new((0, 40), Palette::default());
        assert_eq!(config.size, (1, 40));
    }
}
