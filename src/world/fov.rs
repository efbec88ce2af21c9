//! Field of View calculation
//!
//! Uses recursive shadowcasting over each tile's `block_sight` flag.

use std::collections::HashSet;

use super::Map;
use crate::ecs::Position;

/// Set of cells visible from one origin
#[derive(Debug, Clone, Default)]
pub struct FieldOfView {
    visible: HashSet<Position>,
}

impl FieldOfView {
    pub fn is_visible(&self, pos: Position) -> bool {
        self.visible.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Build a view from an explicit cell set
    pub fn from_positions(positions: impl IntoIterator<Item = Position>) -> Self {
        Self {
            visible: positions.into_iter().collect(),
        }
    }
}

/// Compute field of view from a position with given radius
pub fn compute_fov(map: &Map, origin: Position, radius: i32) -> FieldOfView {
    let mut visible = HashSet::new();

    // Origin is always visible
    visible.insert(origin);

    // Cast shadows in all 8 octants
    for octant in 0..8 {
        cast_light(map, &mut visible, origin, radius, 1, 1.0, 0.0, octant);
    }

    FieldOfView { visible }
}

/// Recursive shadowcasting for a single octant
#[allow(clippy::too_many_arguments)]
fn cast_light(
    map: &Map,
    visible: &mut HashSet<Position>,
    origin: Position,
    radius: i32,
    row: i32,
    mut start_slope: f64,
    end_slope: f64,
    octant: u8,
) {
    if start_slope < end_slope {
        return;
    }

    let mut next_start_slope = start_slope;

    for j in row..=radius {
        let mut blocked = false;

        let dy = -j;
        for dx in dy..=0 {
            let (map_x, map_y) = transform_octant(dx, dy, octant);
            let cur_x = origin.x + map_x;
            let cur_y = origin.y + map_y;

            let left_slope = (dx as f64 - 0.5) / (dy as f64 + 0.5);
            let right_slope = (dx as f64 + 0.5) / (dy as f64 - 0.5);

            if start_slope < right_slope {
                continue;
            }
            if end_slope > left_slope {
                break;
            }

            if dx * dx + dy * dy <= radius * radius && map.in_bounds(cur_x, cur_y) {
                visible.insert(Position::new(cur_x, cur_y));
            }

            if blocked {
                if map.is_opaque(cur_x, cur_y) {
                    next_start_slope = right_slope;
                } else {
                    blocked = false;
                    start_slope = next_start_slope;
                }
            } else if map.is_opaque(cur_x, cur_y) && j < radius {
                blocked = true;
                cast_light(map, visible, origin, radius, j + 1, start_slope, left_slope, octant);
                next_start_slope = right_slope;
            }
        }

        if blocked {
            break;
        }
    }
}

/// Transform coordinates based on octant
fn transform_octant(col: i32, row: i32, octant: u8) -> (i32, i32) {
    match octant {
        0 => (col, row),
        1 => (row, col),
        2 => (row, -col),
        3 => (col, -row),
        4 => (-col, -row),
        5 => (-row, -col),
        6 => (-row, col),
        7 => (-col, row),
        _ => (col, row),
    }
}
