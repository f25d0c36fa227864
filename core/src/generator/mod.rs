use crate::*;
pub use random::*;

mod random;

/// Strategy seam for producing starting boards.
pub trait GridGenerator {
    fn generate(self, config: GameConfig) -> ColorGrid;
}
