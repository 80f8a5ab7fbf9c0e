/// Edge conflict detection
///
/// Two neighbors conflict on their shared border when exactly one of them has
/// a track on it. Empty or off-grid neighbors never conflict.

use serde::Serialize;
use crate::grid::Grid;
use crate::tiles::has_track_on_edge;
use crate::types::{Direction, Rotation, TileTypeId};

/// A conflicting side of an occupied cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct EdgeConflict {
    pub x: i32,
    pub y: i32,
    pub dir: Direction,
}

/// Sides on which a hypothetical tile at (x, y) would clash with placed neighbors.
/// The grid is not modified.
pub fn conflicts_at(
    grid: &Grid,
    x: i32,
    y: i32,
    type_id: TileTypeId,
    rotation: Rotation,
) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&dir| {
            let Some((nx, ny)) = grid.neighbor_coords(x, y, dir) else {
                return false;
            };
            let Some(neighbor) = grid.get(nx, ny) else {
                return false;
            };
            let my_track = has_track_on_edge(type_id, rotation, dir);
            let neighbor_track =
                has_track_on_edge(neighbor.type_id, neighbor.rotation, dir.opposite());
            my_track != neighbor_track
        })
        .collect()
}

/// Every conflict on the grid, in row-major order.
///
/// A conflicting border between two placed tiles is reported once from each
/// side, so the number of physical conflicts is half the length of the list.
pub fn all_conflicts(grid: &Grid) -> Vec<EdgeConflict> {
    let mut conflicts = Vec::new();
    for ((x, y), tile) in grid.tiles() {
        for dir in conflicts_at(grid, x, y, tile.type_id, tile.rotation) {
            conflicts.push(EdgeConflict { x, y, dir });
        }
    }
    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GRID_SIZE;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn rot(steps: i32) -> Rotation {
        Rotation::from_steps(steps)
    }

    #[test]
    fn aligned_straights_do_not_conflict() {
        let mut grid = Grid::new();
        grid.place(2, 1, TileTypeId::Straight, rot(0));
        grid.place(2, 2, TileTypeId::Straight, rot(0));
        assert!(all_conflicts(&grid).is_empty());
    }

    #[test]
    fn blank_edges_facing_each_other_are_compatible() {
        let mut grid = Grid::new();
        // Vertical straights side by side: both offer walls to each other.
        grid.place(1, 1, TileTypeId::Straight, rot(0));
        grid.place(2, 1, TileTypeId::Straight, rot(0));
        assert!(all_conflicts(&grid).is_empty());
    }

    #[test]
    fn track_against_wall_is_reported_from_both_sides() {
        let mut grid = Grid::new();
        grid.place(2, 1, TileTypeId::Straight, rot(0));
        // Curve turned to right+bottom: its top edge is a wall.
        grid.place(2, 2, TileTypeId::Curve, rot(1));
        assert_eq!(
            all_conflicts(&grid),
            vec![
                EdgeConflict { x: 2, y: 1, dir: Direction::Bottom },
                EdgeConflict { x: 2, y: 2, dir: Direction::Top },
            ]
        );
    }

    #[test]
    fn hypothetical_placement_leaves_grid_untouched() {
        let mut grid = Grid::new();
        grid.place(1, 1, TileTypeId::Straight, rot(1));
        let before = grid.clone();
        let clashes = conflicts_at(&grid, 1, 2, TileTypeId::Straight, rot(0));
        assert_eq!(clashes, vec![Direction::Top]);
        assert_eq!(grid, before);
    }

    #[test]
    fn edges_facing_the_border_never_conflict() {
        let grid = Grid::new();
        let clashes = conflicts_at(&grid, 0, 0, TileTypeId::Crossing, rot(0));
        assert!(clashes.is_empty());
    }

    fn arbitrary_grid() -> impl Strategy<Value = Grid> {
        let cell = proptest::option::of((0i32..7, 0i32..4));
        proptest::collection::vec(cell, (GRID_SIZE * GRID_SIZE) as usize).prop_map(|cells| {
            let mut grid = Grid::new();
            for (index, cell) in cells.into_iter().enumerate() {
                if let Some((type_id, steps)) = cell {
                    let index = index as i32;
                    let type_id = TileTypeId::try_from(type_id).unwrap();
                    grid.place(index % GRID_SIZE, index / GRID_SIZE, type_id, rot(steps));
                }
            }
            grid
        })
    }

    proptest! {
        #[test]
        fn conflicts_are_reported_symmetrically(grid in arbitrary_grid()) {
            let conflicts = all_conflicts(&grid);
            prop_assert_eq!(conflicts.len() % 2, 0);
            for conflict in &conflicts {
                let (nx, ny) = grid
                    .neighbor_coords(conflict.x, conflict.y, conflict.dir)
                    .expect("conflicts only exist between cells on the grid");
                let mirror = EdgeConflict { x: nx, y: ny, dir: conflict.dir.opposite() };
                prop_assert!(conflicts.contains(&mirror));
            }
        }

        #[test]
        fn whole_grid_scan_matches_per_cell_checks(grid in arbitrary_grid()) {
            let per_cell: usize = grid
                .tiles()
                .map(|((x, y), tile)| conflicts_at(&grid, x, y, tile.type_id, tile.rotation).len())
                .sum();
            prop_assert_eq!(all_conflicts(&grid).len(), per_cell);
        }
    }
}
