/// Main library entry point for wasm-rail-puzzle
///
/// A tile-placement rail puzzle: the grid is seeded with immovable cities and
/// the player lays rotatable track tiles until every city is reachable from
/// every other one without any mismatched borders.
///
/// This module organizes the WASM crate into logical sub-modules:
/// - types: Core type definitions
/// - error: Errors for input from the host
/// - tiles: Tile catalog and rotation geometry
/// - grid: Grid storage
/// - conflicts: Edge conflict checks
/// - connectivity: City connectivity search
/// - validation: Combined solution report
/// - generator: Level generation
/// - random: Host-backed random numbers
/// - session: Interactive game session
/// - state: Global session state
/// - api: JavaScript exports

pub mod types;
pub mod error;
pub mod tiles;
pub mod grid;
pub mod conflicts;
pub mod connectivity;
pub mod validation;
pub mod generator;
pub mod random;
pub mod session;
mod state;
mod api;

pub use types::{CellCoord, Direction, PlacedTile, Rotation, TileTypeId, GRID_SIZE};
pub use error::{PuzzleError, Result};
pub use tiles::{definition_of, has_track_on_edge, rotated_connections, rotated_edges, TileDefinition, PLACEABLE_TYPES};
pub use grid::Grid;
pub use conflicts::{all_conflicts, conflicts_at, EdgeConflict};
pub use connectivity::{check_connectivity, ConnectivityResult};
pub use validation::{validate, ValidationReport};
pub use generator::{generate_level, legal_rotations, GeneratorConfig};
pub use random::JsRandom;
pub use session::{CheckOutcome, ClickOutcome, Session};

// JavaScript exports
pub use api::{
    init, get_wasm_version, get_grid_size, new_game, get_tile_at, get_rotation_at, is_city_at,
    place_tile, remove_tile, select_tile_type, get_selection, rotate_selection, click_cell,
    check_solution, is_won, validate_grid, get_conflicts, get_grid_json, get_stats,
    get_placeable_types,
};
