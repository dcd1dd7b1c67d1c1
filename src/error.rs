use thiserror::Error;

/// Errors raised by the tile model, codec and line rasterizer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileError {
    /// A coordinate, pixel value or tile index was outside its domain.
    #[error("{0}")]
    OutOfRange(String),
    /// Packed tile data had the wrong length.
    #[error("{0}")]
    Format(String),
    /// A line or command request was malformed.
    #[error("{0}")]
    Validation(String),
    /// A token at the text boundary was not an integer.
    #[error("{0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, TileError>;
