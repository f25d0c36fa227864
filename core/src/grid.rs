use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The W×H board of palette indices plus the palette they refer to.
///
/// The grid keeps its size and palette for its whole lifetime; the only
/// gameplay mutation is [`ColorGrid::flood_from`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorGrid {
    cells: Array2<ColorIndex>,
    palette: Palette,
}

impl ColorGrid {
    /// Invariant: every cell of `cells` indexes into `palette`.
    pub(crate) fn new_unchecked(cells: Array2<ColorIndex>, palette: Palette) -> Self {
        Self { cells, palette }
    }

    pub fn from_cells(cells: Array2<ColorIndex>, palette: Palette) -> Result<Self> {
        if cells.is_empty() {
            return Err(GameError::InvalidBoardShape);
        }
        if cells.iter().any(|&color| !palette.contains_index(color)) {
            return Err(GameError::InvalidColor);
        }
        Ok(Self::new_unchecked(cells, palette))
    }

    /// Builds a grid from colors listed row by row (`y` outer, `x` inner),
    /// so a slice literal reads like the board it describes.
    pub fn from_color_indices(size: Coord2, colors: &[ColorIndex], palette: Palette) -> Result<Self> {
        let (size_x, size_y) = size;
        if colors.len() != usize::from(mult(size_x, size_y)) || colors.is_empty() {
            return Err(GameError::InvalidBoardShape);
        }

        let cells = Array2::from_shape_fn(size.to_nd_index(), |(x, y)| {
            colors[y * usize::from(size_x) + x]
        });
        Self::from_cells(cells, palette)
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn color_at(&self, coords: Coord2) -> ColorIndex {
        self.cells[coords.to_nd_index()]
    }

    /// Row-major iteration over every cell with its coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, ColorIndex)> + '_ {
        self.cells.indexed_iter().map(|((x, y), &color)| {
            ((x.try_into().unwrap(), y.try_into().unwrap()), color)
        })
    }

    /// Whether the whole board shares the color of cell `(0, 0)`.
    pub fn is_uniform(&self) -> bool {
        let reference = self.cells[[0, 0]];
        self.cells.iter().all(|&color| color == reference)
    }

    /// Maximal 4-connected region of cells sharing the seed cell's color.
    ///
    /// Breadth-first search; each cell is enqueued at most once per call,
    /// and the visited set lives only for the duration of the call. The
    /// seed always belongs to its own blob, so the result is never empty.
    pub fn blob_at(&self, coords: Coord2) -> Result<BTreeSet<Coord2>> {
        let coords = self.validate_coords(coords)?;
        let seed_color = self.color_at(coords);

        let mut blob = BTreeSet::from([coords]);
        let mut visited = BTreeSet::from([coords]);
        let mut to_visit: VecDeque<_> = self.cells.iter_neighbors(coords).collect();

        while let Some(visit_coords) = to_visit.pop_front() {
            if !visited.insert(visit_coords) {
                continue;
            }

            if self.color_at(visit_coords) != seed_color {
                continue;
            }

            blob.insert(visit_coords);
            to_visit.extend(
                self.cells
                    .iter_neighbors(visit_coords)
                    .filter(|pos| !visited.contains(pos)),
            );
        }

        Ok(blob)
    }

    /// Sets every listed cell to `new_color`. Empty sets are a no-op, and
    /// repeating the call with the same color changes nothing further.
    /// Coordinates must belong to this grid.
    pub fn recolor(&mut self, cells: &BTreeSet<Coord2>, new_color: ColorIndex) -> Result<()> {
        if !self.palette.contains_index(new_color) {
            return Err(GameError::InvalidColor);
        }

        for &coords in cells {
            self.cells[coords.to_nd_index()] = new_color;
        }
        Ok(())
    }

    /// The sole gameplay mutation: recolors the blob under `coords` to the
    /// next color in the palette cycle and returns it together with the new
    /// color. Deterministic, and the new color always differs from the old.
    pub fn flood_from(&mut self, coords: Coord2) -> Result<(ColorIndex, BTreeSet<Coord2>)> {
        let coords = self.validate_coords(coords)?;
        let old_color = self.color_at(coords);
        let new_color = self.palette.next_index(old_color);

        let blob = self.blob_at(coords)?;
        self.recolor(&blob, new_color)?;

        log::debug!(
            "flooded {} cells from {:?}: color {} -> {}",
            blob.len(),
            coords,
            old_color,
            new_color
        );
        Ok((new_color, blob))
    }

    /// Flattens the board row by row, the inverse of [`Self::from_color_indices`].
    pub fn to_color_indices(&self) -> Vec<ColorIndex> {
        let (size_x, size_y) = self.size();
        let mut colors = Vec::with_capacity(self.cells.len());
        for y in 0..size_y {
            for x in 0..size_x {
                colors.push(self.color_at((x, y)));
            }
        }
        colors
    }
}
