/// City connectivity over the track graph
///
/// **Learning Point**: Nodes are track stubs, i.e. (cell, side) pairs. They
/// are never materialized as a graph; the search derives neighbors on the fly:
/// - internal hops follow a tile's rotated connection pairs
/// - external hops cross a border into a neighbor with a track on the facing side
///
/// Reachability is transitive, so one breadth-first search from the first city
/// decides whether every city can reach every other one.

use std::collections::{HashSet, VecDeque};
use serde::Serialize;
use crate::grid::Grid;
use crate::tiles::{has_track_on_edge, rotated_connections, rotated_edges};
use crate::types::{CellCoord, Direction, PlacedTile};

/// The track stub on side `dir` of cell (x, y)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct EdgeNode {
    x: i32,
    y: i32,
    dir: Direction,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectivityResult {
    pub connected: bool,
    /// Cities reached from the first city (row-major), in row-major order
    pub reachable_cities: Vec<CellCoord>,
}

/// Stubs a search starting inside `tile` begins from: every side taking part
/// in a connection pair plus every track side, so a dead-end city stub with
/// no internal routing still seeds its one edge.
fn seed_edges(tile: PlacedTile) -> Vec<Direction> {
    let mut edges: Vec<Direction> = Vec::new();
    for (a, b) in rotated_connections(tile.type_id, tile.rotation) {
        edges.push(a);
        edges.push(b);
    }
    edges.extend(rotated_edges(tile.type_id, tile.rotation));
    edges.sort();
    edges.dedup();
    edges
}

/// Breadth-first search over track stubs, returning every visited node
fn reachable_stubs(grid: &Grid, x: i32, y: i32, start: PlacedTile) -> HashSet<EdgeNode> {
    let mut visited: HashSet<EdgeNode> = HashSet::new();
    let mut queue: VecDeque<EdgeNode> = VecDeque::new();

    for dir in seed_edges(start) {
        let node = EdgeNode { x, y, dir };
        if visited.insert(node) {
            queue.push_back(node);
        }
    }

    while let Some(current) = queue.pop_front() {
        let Some(tile) = grid.get(current.x, current.y) else {
            continue;
        };

        // Internal hops through the tile body
        for (a, b) in rotated_connections(tile.type_id, tile.rotation) {
            let next = if a == current.dir {
                b
            } else if b == current.dir {
                a
            } else {
                continue;
            };
            let node = EdgeNode { x: current.x, y: current.y, dir: next };
            if visited.insert(node) {
                queue.push_back(node);
            }
        }

        // External hop across the border
        let Some((nx, ny)) = grid.neighbor_coords(current.x, current.y, current.dir) else {
            continue;
        };
        let Some(neighbor) = grid.get(nx, ny) else {
            continue;
        };
        let facing = current.dir.opposite();
        if has_track_on_edge(neighbor.type_id, neighbor.rotation, facing) {
            let node = EdgeNode { x: nx, y: ny, dir: facing };
            if visited.insert(node) {
                queue.push_back(node);
            }
        }
    }

    visited
}

/// Decide whether all cities on the grid are joined by track.
///
/// With fewer than two cities the grid is trivially connected and every city
/// counts as reached.
pub fn check_connectivity(grid: &Grid) -> ConnectivityResult {
    let cities: Vec<((i32, i32), PlacedTile)> = grid.cities().collect();

    let Some(&((start_x, start_y), start_tile)) = cities.first() else {
        return ConnectivityResult {
            connected: true,
            reachable_cities: Vec::new(),
        };
    };
    if cities.len() < 2 {
        return ConnectivityResult {
            connected: true,
            reachable_cities: vec![CellCoord::new(start_x, start_y)],
        };
    }

    let visited = reachable_stubs(grid, start_x, start_y, start_tile);

    let reachable_cities: Vec<CellCoord> = cities
        .iter()
        .filter(|((x, y), tile)| {
            rotated_edges(tile.type_id, tile.rotation)
                .into_iter()
                .any(|dir| visited.contains(&EdgeNode { x: *x, y: *y, dir }))
        })
        .map(|&((x, y), _)| CellCoord::new(x, y))
        .collect();

    ConnectivityResult {
        connected: reachable_cities.len() == cities.len(),
        reachable_cities,
    }
}
