use ndarray::Array2;

use super::*;

/// Uniform random board: every cell drawn independently from the palette,
/// reproducible from the seed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomGridGenerator {
    seed: u64,
}

impl RandomGridGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl GridGenerator for RandomGridGenerator {
    fn generate(self, config: GameConfig) -> ColorGrid {
        use rand::prelude::*;

        let GameConfig { size, palette } = config;
        // Palette construction caps the color count at the index range.
        let color_count = palette.len() as ColorIndex;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let cells: Array2<ColorIndex> =
            Array2::from_shape_simple_fn(size.to_nd_index(), || rng.random_range(0..color_count));

        log::debug!(
            "generated {}x{} board with {} colors from seed {}",
            size.0,
            size.1,
            color_count,
            self.seed
        );
        ColorGrid::new_unchecked(cells, palette)
    }
}
