/// Grid storage and bounds arithmetic
///
/// **Learning Point**: The grid is a flat row-major `Vec` of optional tiles.
/// It only stores and addresses cells; rule checking lives in `conflicts` and
/// `connectivity`.

use crate::tiles::definition_of;
use crate::types::{Direction, PlacedTile, Rotation, TileTypeId, GRID_SIZE};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: i32,
    cells: Vec<Option<PlacedTile>>,
}

impl Grid {
    /// Empty grid of the standard size
    pub fn new() -> Self {
        Grid::with_size(GRID_SIZE)
    }

    /// Empty square grid with `size` cells per side
    pub fn with_size(size: i32) -> Self {
        assert!(size > 0, "grid size must be positive, got {size}");
        Grid {
            size,
            cells: vec![None; (size * size) as usize],
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.size && y >= 0 && y < self.size
    }

    fn index(&self, x: i32, y: i32) -> usize {
        assert!(self.in_bounds(x, y), "cell ({x}, {y}) is outside the {0}x{0} grid", self.size);
        (y * self.size + x) as usize
    }

    /// Put a tile into a cell, overwriting whatever was there
    pub fn place(&mut self, x: i32, y: i32, type_id: TileTypeId, rotation: Rotation) {
        let index = self.index(x, y);
        self.cells[index] = Some(PlacedTile::new(type_id, rotation));
    }

    pub fn remove(&mut self, x: i32, y: i32) {
        let index = self.index(x, y);
        self.cells[index] = None;
    }

    /// Tile at (x, y); `None` for empty cells and for coordinates off the grid
    pub fn get(&self, x: i32, y: i32) -> Option<PlacedTile> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.cells[(y * self.size + x) as usize]
    }

    /// Coordinates of the neighbor across `dir`, or `None` past the border
    pub fn neighbor_coords(&self, x: i32, y: i32, dir: Direction) -> Option<(i32, i32)> {
        let (dx, dy) = dir.offset();
        let (nx, ny) = (x + dx, y + dy);
        self.in_bounds(nx, ny).then_some((nx, ny))
    }

    /// Occupied cells in row-major order (top to bottom, left to right)
    pub fn tiles(&self) -> impl Iterator<Item = ((i32, i32), PlacedTile)> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().filter_map(move |(index, cell)| {
            let index = index as i32;
            cell.map(|tile| ((index % size, index / size), tile))
        })
    }

    /// City cells in row-major order
    pub fn cities(&self) -> impl Iterator<Item = ((i32, i32), PlacedTile)> + '_ {
        self.tiles().filter(|(_, tile)| definition_of(tile.type_id).is_city)
    }

    pub fn is_city(&self, x: i32, y: i32) -> bool {
        self.get(x, y)
            .is_some_and(|tile| definition_of(tile.type_id).is_city)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new()
    }
}
