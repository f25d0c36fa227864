use ndarray::Array2;

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for total-cell counts and blob sizes.
pub type CellCount = u16;

/// Index into the game's [`crate::Palette`].
pub type ColorIndex = u8;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let dim = self.dim();
        let size = (dim.0.try_into().unwrap(), dim.1.try_into().unwrap());
        NeighborIter::new(index, size)
    }
}

// Orthogonal adjacency only: blobs never connect through diagonals.
const DISPLACEMENTS: [(isize, isize); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx.try_into().ok()?)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy.try_into().ok()?)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn neighbors(center: Coord2, bounds: Coord2) -> Vec<Coord2> {
        let grid: Array2<u8> = Array2::default(bounds.to_nd_index());
        grid.iter_neighbors(center).collect()
    }

    #[test]
    fn interior_cell_has_four_neighbors() {
        assert_eq!(
            neighbors((1, 1), (3, 3)),
            [(1, 0), (0, 1), (2, 1), (1, 2)]
        );
    }

    #[test]
    fn corner_cell_has_two_neighbors() {
        assert_eq!(neighbors((0, 0), (3, 3)), [(1, 0), (0, 1)]);
        assert_eq!(neighbors((2, 2), (3, 3)), [(2, 1), (1, 2)]);
    }

    #[test]
    fn edge_cell_has_three_neighbors() {
        assert_eq!(neighbors((1, 0), (3, 3)), [(0, 0), (2, 0), (1, 1)]);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert!(neighbors((0, 0), (1, 1)).is_empty());
    }

    #[test]
    fn diagonal_cells_are_not_neighbors() {
        assert!(!neighbors((1, 1), (3, 3)).contains(&(0, 0)));
        assert!(!neighbors((1, 1), (3, 3)).contains(&(2, 2)));
    }

    #[test]
    fn mult_saturates_at_count_max() {
        assert_eq!(mult(16, 16), 256);
        assert_eq!(mult(Coord::MAX, Coord::MAX), 65025);
    }
}
