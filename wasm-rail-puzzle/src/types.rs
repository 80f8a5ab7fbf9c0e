/// Core type definitions for the rail puzzle

use serde::Serialize;
use crate::error::PuzzleError;

/// Width and height of the playing field in cells
pub const GRID_SIZE: i32 = 5;

/// One of the four sides of a grid cell
///
/// **Learning Point**: The declaration order is the canonical clockwise cycle
/// (top -> right -> bottom -> left), so rotation is plain index arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    /// All directions in canonical clockwise order
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    fn index(self) -> usize {
        match self {
            Direction::Top => 0,
            Direction::Right => 1,
            Direction::Bottom => 2,
            Direction::Left => 3,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }

    /// Unit offset (dx, dy) to the neighbor across this side; y grows downwards
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Top => (0, -1),
            Direction::Right => (1, 0),
            Direction::Bottom => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// Rotate clockwise by `rotation` quarter turns
    pub fn rotated(self, rotation: Rotation) -> Direction {
        Direction::ALL[(self.index() + rotation.steps() as usize) % 4]
    }
}

/// Clockwise rotation in quarter turns (0 = 0°, 1 = 90°, 2 = 180°, 3 = 270°)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Rotation(u8);

impl Rotation {
    pub const ALL: [Rotation; 4] = [Rotation(0), Rotation(1), Rotation(2), Rotation(3)];

    /// Build a rotation from any number of quarter turns, reduced modulo 4
    pub fn from_steps(steps: i32) -> Rotation {
        Rotation(steps.rem_euclid(4) as u8)
    }

    pub fn steps(self) -> u8 {
        self.0
    }

    /// One further quarter turn clockwise
    pub fn next(self) -> Rotation {
        Rotation((self.0 + 1) % 4)
    }
}

impl TryFrom<i32> for Rotation {
    type Error = PuzzleError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0..=3 => Ok(Rotation(value as u8)),
            _ => Err(PuzzleError::InvalidRotation(value)),
        }
    }
}

/// Tile type identifiers
///
/// The discriminants are the ids exchanged with the JavaScript host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum TileTypeId {
    Straight = 0,
    Curve = 1,
    Switch = 2,
    Triangle = 3,
    Crossing = 4,
    City1 = 5,
    City2 = 6,
}

impl TryFrom<i32> for TileTypeId {
    type Error = PuzzleError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TileTypeId::Straight),
            1 => Ok(TileTypeId::Curve),
            2 => Ok(TileTypeId::Switch),
            3 => Ok(TileTypeId::Triangle),
            4 => Ok(TileTypeId::Crossing),
            5 => Ok(TileTypeId::City1),
            6 => Ok(TileTypeId::City2),
            _ => Err(PuzzleError::UnknownTileType(value)),
        }
    }
}

/// A tile occupying one cell. Replaced as a whole, never edited in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedTile {
    pub type_id: TileTypeId,
    pub rotation: Rotation,
}

impl PlacedTile {
    pub fn new(type_id: TileTypeId, rotation: Rotation) -> Self {
        PlacedTile { type_id, rotation }
    }
}

/// Cell coordinate as reported to the host
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
}

impl CellCoord {
    pub fn new(x: i32, y: i32) -> Self {
        CellCoord { x, y }
    }
}
