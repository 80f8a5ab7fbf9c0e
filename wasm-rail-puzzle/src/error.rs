/// Error type for input arriving from the JavaScript host

use thiserror::Error;
use crate::types::TileTypeId;

pub type Result<T> = std::result::Result<T, PuzzleError>;

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("unknown tile type id: {0}")]
    UnknownTileType(i32),

    #[error("rotation out of range (expected 0-3): {0}")]
    InvalidRotation(i32),

    #[error("cell ({x}, {y}) is outside the grid")]
    OutOfBounds { x: i32, y: i32 },

    #[error("tile type {0:?} cannot be placed by the player")]
    NotPlaceable(TileTypeId),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
