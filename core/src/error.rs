use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Color index outside the palette")]
    InvalidColor,
    #[error("Palette needs at least two colors")]
    PaletteTooSmall,
    #[error("Palette has more colors than a color index can address")]
    PaletteTooLarge,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
