/// Level generation: place non-adjacent city tiles on an empty grid
///
/// Algorithm:
/// 1. Sample random cells until enough positions are accepted or the attempt
///    budget runs out. A cell is rejected if it overlaps or touches an accepted
///    position, or if no city variant has a legal rotation there.
/// 2. For each accepted cell pick uniformly among the variants that fit, then
///    uniformly among that variant's legal rotations.
/// 3. Commit all placements to a fresh grid.
///
/// A rotation is legal when none of its track edges points off the grid.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};
use crate::grid::Grid;
use crate::tiles::{rotated_edges, CITY_TYPES};
use crate::types::{Rotation, TileTypeId, GRID_SIZE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub grid_size: i32,
    pub city_count: usize,
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            grid_size: GRID_SIZE,
            city_count: 3,
            max_attempts: 200,
        }
    }
}

/// Rotations of `type_id` at (x, y) whose tracks all stay on the grid
pub fn legal_rotations(grid: &Grid, x: i32, y: i32, type_id: TileTypeId) -> Vec<Rotation> {
    Rotation::ALL
        .into_iter()
        .filter(|&rotation| {
            rotated_edges(type_id, rotation)
                .into_iter()
                .all(|dir| grid.neighbor_coords(x, y, dir).is_some())
        })
        .collect()
}

/// City variants with at least one legal rotation at (x, y)
fn fitting_city_types(grid: &Grid, x: i32, y: i32) -> Vec<(TileTypeId, Vec<Rotation>)> {
    CITY_TYPES
        .into_iter()
        .map(|type_id| (type_id, legal_rotations(grid, x, y, type_id)))
        .filter(|(_, rotations)| !rotations.is_empty())
        .collect()
}

/// Same cell or orthogonal neighbor
fn touches(a: (i32, i32), b: (i32, i32)) -> bool {
    (a.0 - b.0).abs() + (a.1 - b.1).abs() <= 1
}

/// Generate a fresh level.
///
/// If the attempt budget runs out the grid holds fewer cities than requested;
/// callers must cope with that.
pub fn generate_level<R: Rng + ?Sized>(rng: &mut R, config: &GeneratorConfig) -> Grid {
    let mut grid = Grid::with_size(config.grid_size);

    let mut positions: Vec<(i32, i32)> = Vec::with_capacity(config.city_count);
    let mut attempts = 0;
    while positions.len() < config.city_count && attempts < config.max_attempts {
        attempts += 1;
        let candidate = (
            rng.gen_range(0..config.grid_size),
            rng.gen_range(0..config.grid_size),
        );
        if positions.iter().any(|&accepted| touches(accepted, candidate)) {
            continue;
        }
        if fitting_city_types(&grid, candidate.0, candidate.1).is_empty() {
            continue;
        }
        positions.push(candidate);
    }

    if positions.len() < config.city_count {
        warn!(
            placed = positions.len(),
            requested = config.city_count,
            attempts,
            "level generation ran out of attempts"
        );
    }

    let mut placements = Vec::with_capacity(positions.len());
    for &(x, y) in &positions {
        let options = fitting_city_types(&grid, x, y);
        let Some((type_id, rotations)) = options.choose(&mut *rng) else {
            continue;
        };
        let Some(&rotation) = rotations.choose(&mut *rng) else {
            continue;
        };
        placements.push((x, y, *type_id, rotation));
    }

    for (x, y, type_id, rotation) in placements {
        grid.place(x, y, type_id, rotation);
    }

    debug!(cities = positions.len(), attempts, "generated level");
    grid
}
