/// JavaScript-facing exports
///
/// **Learning Point**: Every export locks the global session, does one thing
/// and returns plain values. Simple intents report invalid input with `false`
/// or `-1`; structured results are JSON strings built with `serde_json`.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsError;
use crate::error::PuzzleError;
use crate::generator::GeneratorConfig;
use crate::random::JsRandom;
use crate::session::Session;
use crate::state::with_session;
use crate::tiles::{definition_of, PLACEABLE_TYPES};
use crate::types::{PlacedTile, Rotation, TileTypeId};

/// Reported by `get_wasm_version` to tell cached builds apart
pub const WASM_VERSION: &str = "0.1.0-20261017";

fn to_json<T: Serialize>(value: &T) -> Result<String, JsError> {
    Ok(serde_json::to_string(value).map_err(PuzzleError::from)?)
}

fn decode_placement(tile_type: i32, rotation: i32) -> Result<(TileTypeId, Rotation), PuzzleError> {
    Ok((TileTypeId::try_from(tile_type)?, Rotation::try_from(rotation)?))
}

/// Initialize the WASM module and start the first game
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    new_game();
}

#[wasm_bindgen]
pub fn get_wasm_version() -> String {
    WASM_VERSION.to_string()
}

#[wasm_bindgen]
pub fn get_grid_size() -> i32 {
    with_session(|session| session.grid().size())
}

/// Replace the current game with a freshly generated level
#[wasm_bindgen]
pub fn new_game() {
    let session = Session::new_game(&mut JsRandom, &GeneratorConfig::default());
    with_session(|current| *current = session);
}

/// Tile type id at (x, y), or -1 if the cell is empty or off the grid
#[wasm_bindgen]
pub fn get_tile_at(x: i32, y: i32) -> i32 {
    with_session(|session| {
        session
            .grid()
            .get(x, y)
            .map_or(-1, |tile| tile.type_id as i32)
    })
}

/// Rotation (0-3) of the tile at (x, y), or -1 if there is none
#[wasm_bindgen]
pub fn get_rotation_at(x: i32, y: i32) -> i32 {
    with_session(|session| {
        session
            .grid()
            .get(x, y)
            .map_or(-1, |tile| i32::from(tile.rotation.steps()))
    })
}

#[wasm_bindgen]
pub fn is_city_at(x: i32, y: i32) -> bool {
    with_session(|session| session.grid().is_city(x, y))
}

/// Place a tile unconditionally
///
/// @returns false if the type id, rotation or coordinates are invalid
#[wasm_bindgen]
pub fn place_tile(x: i32, y: i32, tile_type: i32, rotation: i32) -> bool {
    let Ok((type_id, rotation)) = decode_placement(tile_type, rotation) else {
        return false;
    };
    with_session(|session| {
        if !session.grid().in_bounds(x, y) {
            return false;
        }
        session.place(x, y, type_id, rotation);
        true
    })
}

/// Clear a player tile
///
/// @returns false for cities and coordinates off the grid
#[wasm_bindgen]
pub fn remove_tile(x: i32, y: i32) -> bool {
    with_session(|session| {
        if !session.grid().in_bounds(x, y) || session.grid().is_city(x, y) {
            return false;
        }
        session.remove(x, y);
        true
    })
}

/// Toggle the palette selection
///
/// @returns false if the id is unknown or names a city
#[wasm_bindgen]
pub fn select_tile_type(tile_type: i32) -> bool {
    let Ok(type_id) = TileTypeId::try_from(tile_type) else {
        return false;
    };
    with_session(|session| session.select(type_id).is_ok())
}

/// Selected tile type id, or -1 when nothing is selected
#[wasm_bindgen]
pub fn get_selection() -> i32 {
    with_session(|session| session.selected().map_or(-1, |type_id| type_id as i32))
}

/// Turn the selection a quarter clockwise and return the new rotation
#[wasm_bindgen]
pub fn rotate_selection() -> i32 {
    with_session(|session| i32::from(session.rotate_selection().steps()))
}

/// Handle a click on a cell
///
/// @returns 0 placed, 1 removed, 2 city locked, 3 no selection, 4 game over, 5 off the grid
#[wasm_bindgen]
pub fn click_cell(x: i32, y: i32) -> i32 {
    with_session(|session| session.click(x, y).code())
}

/// Check the solution: {"outcome":"won"}, {"outcome":"conflicts","count":N} or {"outcome":"disconnected"}
#[wasm_bindgen]
pub fn check_solution() -> Result<String, JsError> {
    let outcome = with_session(|session| session.check());
    to_json(&outcome)
}

#[wasm_bindgen]
pub fn is_won() -> bool {
    with_session(|session| session.is_won())
}

/// Full validation report:
/// {"overallValid":b,"conflicts":[{"x":0,"y":0,"dir":"top"}],"allCitiesConnected":b,"reachableCities":[{"x":0,"y":0}]}
#[wasm_bindgen]
pub fn validate_grid() -> Result<String, JsError> {
    let report = with_session(|session| session.validate());
    to_json(&report)
}

/// Conflicting cell sides for highlighting: [{"x":0,"y":0,"dir":"top"},...]
#[wasm_bindgen]
pub fn get_conflicts() -> Result<String, JsError> {
    let report = with_session(|session| session.validate());
    to_json(&report.conflicts)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CellSnapshot {
    x: i32,
    y: i32,
    #[serde(flatten)]
    tile: PlacedTile,
    is_city: bool,
}

#[derive(Serialize)]
struct GridSnapshot {
    size: i32,
    cells: Vec<CellSnapshot>,
}

/// Occupied cells of the current grid:
/// {"size":5,"cells":[{"x":0,"y":0,"typeId":"city1","rotation":0,"isCity":true},...]}
#[wasm_bindgen]
pub fn get_grid_json() -> Result<String, JsError> {
    let snapshot = with_session(|session| {
        let grid = session.grid();
        GridSnapshot {
            size: grid.size(),
            cells: grid
                .tiles()
                .map(|((x, y), tile)| CellSnapshot {
                    x,
                    y,
                    tile,
                    is_city: definition_of(tile.type_id).is_city,
                })
                .collect(),
        }
    });
    to_json(&snapshot)
}

#[derive(Serialize, Default)]
struct TileStats {
    straight: usize,
    curve: usize,
    switch: usize,
    triangle: usize,
    crossing: usize,
    cities: usize,
    total: usize,
}

/// Tile counts on the grid:
/// {"straight":X,"curve":Y,"switch":Z,"triangle":A,"crossing":B,"cities":C,"total":D}
#[wasm_bindgen]
pub fn get_stats() -> Result<String, JsError> {
    let stats = with_session(|session| {
        let mut stats = TileStats::default();
        for (_, tile) in session.grid().tiles() {
            match tile.type_id {
                TileTypeId::Straight => stats.straight += 1,
                TileTypeId::Curve => stats.curve += 1,
                TileTypeId::Switch => stats.switch += 1,
                TileTypeId::Triangle => stats.triangle += 1,
                TileTypeId::Crossing => stats.crossing += 1,
                TileTypeId::City1 | TileTypeId::City2 => stats.cities += 1,
            }
            stats.total += 1;
        }
        stats
    });
    to_json(&stats)
}

#[derive(Serialize)]
struct PaletteEntry {
    id: i32,
    name: TileTypeId,
    label: &'static str,
}

/// Palette for the host: [{"id":0,"name":"straight","label":"Gerade"},...]
#[wasm_bindgen]
pub fn get_placeable_types() -> Result<String, JsError> {
    let palette: Vec<PaletteEntry> = PLACEABLE_TYPES
        .into_iter()
        .map(|type_id| PaletteEntry {
            id: type_id as i32,
            name: type_id,
            label: definition_of(type_id).label,
        })
        .collect();
    to_json(&palette)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use pretty_assertions::assert_eq;

    fn json(result: Result<String, JsError>) -> serde_json::Value {
        match result {
            Ok(text) => serde_json::from_str(&text).unwrap(),
            Err(_) => panic!("export returned an error"),
        }
    }

    // The exports share one global session, so they are driven from a single test.
    #[test]
    fn exports_drive_the_global_session() {
        let mut grid = Grid::new();
        grid.place(0, 0, TileTypeId::City1, Rotation::from_steps(0));
        grid.place(0, 2, TileTypeId::City1, Rotation::from_steps(2));
        with_session(|session| *session = Session::from_grid(grid));

        assert_eq!(get_grid_size(), 5);
        assert_eq!(get_tile_at(0, 0), TileTypeId::City1 as i32);
        assert_eq!(get_rotation_at(0, 2), 2);
        assert_eq!(get_tile_at(3, 3), -1);
        assert_eq!(get_tile_at(-1, 9), -1);
        assert!(is_city_at(0, 2));

        assert!(!place_tile(0, 1, 9, 0));
        assert!(!place_tile(0, 1, 0, 4));
        assert!(!place_tile(5, 1, 0, 0));
        assert!(!remove_tile(0, 0));

        let report = json(validate_grid());
        assert_eq!(report["allCitiesConnected"], serde_json::json!(false));

        assert!(!select_tile_type(TileTypeId::City1 as i32));
        assert!(select_tile_type(TileTypeId::Straight as i32));
        assert_eq!(get_selection(), TileTypeId::Straight as i32);
        assert_eq!(rotate_selection(), 1);
        assert_eq!(click_cell(0, 1), 0);
        assert_eq!(get_conflicts().map(|text| text.len() > 2).ok(), Some(true));
        assert_eq!(json(check_solution()), serde_json::json!({"outcome": "conflicts", "count": 2}));

        assert!(remove_tile(0, 1));
        assert!(place_tile(0, 1, TileTypeId::Straight as i32, 0));
        assert_eq!(json(get_stats())["total"], serde_json::json!(3));
        assert_eq!(json(check_solution()), serde_json::json!({"outcome": "won"}));
        assert!(is_won());
        assert_eq!(click_cell(0, 1), 4);

        let snapshot = json(get_grid_json());
        assert_eq!(snapshot["cells"][0], serde_json::json!({
            "x": 0, "y": 0, "typeId": "city1", "rotation": 0, "isCity": true
        }));
        let palette = json(get_placeable_types());
        assert_eq!(palette[4], serde_json::json!({"id": 4, "name": "crossing", "label": "Kreuzung"}));
    }
}
