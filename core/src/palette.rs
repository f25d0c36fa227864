use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Single display color, packed as `0xRRGGBB`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u32);

impl fmt::Display for Rgb {
    /// CSS hex form, e.g. `#96ceb4`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0 & 0xff_ff_ff)
    }
}

/// Ordered, fixed sequence of colors that cell indices refer to.
///
/// A palette never changes once built, and always holds at least two colors
/// so that the cyclic advance in [`Palette::next_index`] actually changes
/// the color of a flooded blob.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    pub const MIN_COLORS: usize = 2;

    pub fn new(colors: Vec<Rgb>) -> Result<Self> {
        if colors.len() < Self::MIN_COLORS {
            return Err(GameError::PaletteTooSmall);
        }
        if colors.len() > usize::from(ColorIndex::MAX) {
            return Err(GameError::PaletteTooLarge);
        }
        Ok(Self { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn color(&self, index: ColorIndex) -> Result<Rgb> {
        self.colors
            .get(usize::from(index))
            .copied()
            .ok_or(GameError::InvalidColor)
    }

    pub fn contains_index(&self, index: ColorIndex) -> bool {
        usize::from(index) < self.colors.len()
    }

    /// Cyclic palette advance: the color a blob takes when flooded.
    pub fn next_index(&self, index: ColorIndex) -> ColorIndex {
        ((usize::from(index) + 1) % self.colors.len()) as ColorIndex
    }

    pub fn iter(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.colors.iter().copied()
    }
}

impl Default for Palette {
    /// The classic four board colors.
    fn default() -> Self {
        Self {
            colors: alloc::vec![
                Rgb(0x96ceb4),
                Rgb(0xffeead),
                Rgb(0xff6f69),
                Rgb(0xffcc5c),
            ],
        }
    }
}
