//! World module
//!
//! Contains map data structures, tiles, field of view and procedural generation.

pub mod fov;
pub mod generation;
pub mod map;
pub mod tile;

pub use fov::{compute_fov, FieldOfView};
pub use map::Map;
pub use tile::Tile;
