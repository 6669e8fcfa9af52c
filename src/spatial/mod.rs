//! Spatial data structures for the maze
//!
//! This module contains the grid-level building blocks:
//! - Directions and their display glyphs
//! - Node storage with a cached origin
//! - Wall derivation from edge orientations
//! - Spanning-tree validation

/// Compass directions and the glyph table
pub mod direction;
/// Node storage and raw access
pub mod grid;
/// Spanning-tree checks
pub mod validation;
/// Per-cell wall derivation
pub mod walls;

pub use direction::Direction;
pub use grid::{Grid, Node, Position};
pub use walls::Walls;
