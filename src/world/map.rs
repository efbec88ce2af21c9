//! Map data structure
//!
//! The 2D grid representing a dungeon floor.

use super::tile::Tile;
use crate::ecs::Position;

/// A dungeon floor map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    pub width: i32,
    pub height: i32,
    tiles: Vec<Tile>,
}

impl Map {
    /// Create a new map filled with walls
    pub fn new(width: i32, height: i32) -> Self {
        let tiles = vec![Tile::default(); (width.max(0) * height.max(0)) as usize];
        Self {
            width,
            height,
            tiles,
        }
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    pub fn xy_to_idx(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    /// Convert 1D index to 2D coordinates
    #[inline]
    pub fn idx_to_xy(&self, idx: usize) -> (i32, i32) {
        let idx = idx as i32;
        (idx % self.width, idx / self.width)
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Get tile at position
    pub fn get_tile(&self, x: i32, y: i32) -> Option<&Tile> {
        if self.in_bounds(x, y) {
            Some(&self.tiles[self.xy_to_idx(x, y)])
        } else {
            None
        }
    }

    /// Make a cell passable and see-through. Out-of-bounds cells are ignored.
    fn carve(&mut self, x: i32, y: i32) {
        if self.in_bounds(x, y) {
            let idx = self.xy_to_idx(x, y);
            self.tiles[idx] = Tile::floor();
        }
    }

    /// Carve the interior of a rectangle, leaving its outer ring as wall
    pub fn carve_room(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        for y in y1 + 1..y2 {
            for x in x1 + 1..x2 {
                self.carve(x, y);
            }
        }
    }

    /// Carve a horizontal tunnel, both ends inclusive
    pub fn carve_h_tunnel(&mut self, x1: i32, x2: i32, y: i32) {
        for x in x1.min(x2)..=x1.max(x2) {
            self.carve(x, y);
        }
    }

    /// Carve a vertical tunnel, both ends inclusive
    pub fn carve_v_tunnel(&mut self, y1: i32, y2: i32, x: i32) {
        for y in y1.min(y2)..=y1.max(y2) {
            self.carve(x, y);
        }
    }

    /// Check if a position blocks movement. Anything off the map does.
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        self.get_tile(x, y).map_or(true, |t| t.blocked)
    }

    /// Check if a position is walkable
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        !self.is_blocked(x, y)
    }

    /// Check if a position blocks line of sight
    pub fn is_opaque(&self, x: i32, y: i32) -> bool {
        self.get_tile(x, y).map_or(true, |t| !t.is_transparent())
    }

    /// Get all walkable positions
    pub fn walkable_positions(&self) -> Vec<Position> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.is_walkable())
            .map(|(idx, _)| {
                let (x, y) = self.idx_to_xy(idx);
                Position::new(x, y)
            })
            .collect()
    }

    /// Render the grid as text rows, '#' for rock and '.' for floor
    pub fn to_ascii(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| self.tiles[self.xy_to_idx(x, y)].glyph())
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_map_is_solid() {
        let map = Map::new(10, 8);
        assert!(map.walkable_positions().is_empty());
        assert!(map.is_opaque(3, 3));
    }

    #[test]
    fn test_carve_room_leaves_walls() {
        let mut map = Map::new(10, 10);
        map.carve_room(1, 1, 5, 5);

        assert!(map.is_walkable(2, 2));
        assert!(map.is_walkable(4, 4));
        assert!(map.is_blocked(1, 1));
        assert!(map.is_blocked(5, 3));
        assert_eq!(map.walkable_positions().len(), 9);
    }

    #[test]
    fn test_tunnels_are_order_independent() {
        let mut a = Map::new(12, 12);
        let mut b = Map::new(12, 12);
        a.carve_h_tunnel(2, 9, 4);
        b.carve_h_tunnel(9, 2, 4);
        assert_eq!(a, b);

        a.carve_v_tunnel(1, 7, 3);
        b.carve_v_tunnel(7, 1, 3);
        assert_eq!(a, b);
        assert!(a.is_walkable(3, 1));
        assert!(a.is_walkable(9, 4));
    }

    #[test]
    fn test_carving_is_idempotent() {
        let mut once = Map::new(10, 10);
        once.carve_room(0, 0, 6, 6);
        let mut twice = once.clone();
        twice.carve_room(0, 0, 6, 6);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_out_of_bounds_is_blocked() {
        let map = Map::new(5, 5);
        assert!(map.is_blocked(-1, 0));
        assert!(map.is_blocked(5, 2));
    }
}
