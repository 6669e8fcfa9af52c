//! Perfect maze generation with the origin shift algorithm
//!
//! A maze is a grid of nodes, each pointing at one neighbour, forming a
//! spanning tree rooted at a single origin node. Shifting the origin to a
//! neighbouring cell changes exactly two edges and keeps the tree intact, so
//! the grid is a perfect maze (one path between any two cells) after every
//! step. Walls are derived from the edges on demand, and a small game layer
//! moves a player through the open sides.

#![forbid(unsafe_code)]

/// Origin shift engine and update hooks
pub mod algorithm;
/// Player movement guarded by derived walls
pub mod game;
/// Input/output operations and error handling
pub mod io;
/// Grid storage, directions, walls and tree validation
pub mod spatial;

pub use algorithm::Maze;
pub use game::{EntityKind, Game, Payload};
pub use io::error::{MazeError, Result};
pub use spatial::{Direction, Grid, Position, Walls};
