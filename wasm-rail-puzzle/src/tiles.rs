/// Tile catalog and rotation geometry
///
/// **Learning Point**: The catalog is plain `static` data indexed by the
/// `TileTypeId` discriminant. It is built at compile time, never written, and
/// can be shared freely.

use crate::types::{Direction, Rotation, TileTypeId};
use crate::types::Direction::{Bottom, Left, Right, Top};

/// Immutable definition of a tile type at rotation 0
#[derive(Debug, PartialEq, Eq)]
pub struct TileDefinition {
    pub id: TileTypeId,
    /// Palette label shown by the host
    pub label: &'static str,
    /// Edges where a track leaves the tile
    pub edges: &'static [Direction],
    /// Internal routing: entering on one edge of a pair lets a path continue out the other
    pub connections: &'static [(Direction, Direction)],
    pub is_city: bool,
}

static CATALOG: [TileDefinition; 7] = [
    TileDefinition {
        id: TileTypeId::Straight,
        label: "Gerade",
        edges: &[Top, Bottom],
        connections: &[(Top, Bottom)],
        is_city: false,
    },
    TileDefinition {
        id: TileTypeId::Curve,
        label: "Kurve",
        edges: &[Top, Right],
        connections: &[(Top, Right)],
        is_city: false,
    },
    TileDefinition {
        id: TileTypeId::Switch,
        label: "Weiche",
        edges: &[Top, Right, Bottom],
        connections: &[(Top, Bottom), (Top, Right), (Bottom, Right)],
        is_city: false,
    },
    TileDefinition {
        id: TileTypeId::Triangle,
        label: "Dreieck",
        edges: &[Top, Right, Bottom],
        connections: &[(Top, Right), (Right, Bottom), (Top, Bottom)],
        is_city: false,
    },
    TileDefinition {
        id: TileTypeId::Crossing,
        label: "Kreuzung",
        edges: &[Top, Right, Bottom, Left],
        connections: &[(Top, Bottom), (Right, Left)],
        is_city: false,
    },
    TileDefinition {
        id: TileTypeId::City1,
        label: "Stadt (1)",
        edges: &[Bottom],
        connections: &[],
        is_city: true,
    },
    TileDefinition {
        id: TileTypeId::City2,
        label: "Stadt (2)",
        edges: &[Top, Bottom],
        connections: &[(Top, Bottom)],
        is_city: true,
    },
];

/// Tile types the player can place, in palette order
pub const PLACEABLE_TYPES: [TileTypeId; 5] = [
    TileTypeId::Straight,
    TileTypeId::Curve,
    TileTypeId::Switch,
    TileTypeId::Triangle,
    TileTypeId::Crossing,
];

/// City variants the level generator chooses from
pub const CITY_TYPES: [TileTypeId; 2] = [TileTypeId::City1, TileTypeId::City2];

/// Look up the immutable definition of a tile type
pub fn definition_of(type_id: TileTypeId) -> &'static TileDefinition {
    &CATALOG[type_id as usize]
}

/// Edges of a tile after rotation
pub fn rotated_edges(type_id: TileTypeId, rotation: Rotation) -> Vec<Direction> {
    definition_of(type_id)
        .edges
        .iter()
        .map(|edge| edge.rotated(rotation))
        .collect()
}

/// Internal connections of a tile after rotation
pub fn rotated_connections(type_id: TileTypeId, rotation: Rotation) -> Vec<(Direction, Direction)> {
    definition_of(type_id)
        .connections
        .iter()
        .map(|(a, b)| (a.rotated(rotation), b.rotated(rotation)))
        .collect()
}

/// Whether the rotated tile has a track on `dir`
pub fn has_track_on_edge(type_id: TileTypeId, rotation: Rotation, dir: Direction) -> bool {
    rotated_edges(type_id, rotation).contains(&dir)
}
