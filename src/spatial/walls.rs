//! Wall visibility derived from edge orientations
//!
//! Walls are never stored. The side between two adjacent cells is open exactly
//! when one of them points at the other; grid boundaries are always walled.
//! Each lookup touches at most the cell and its four neighbours.

use ndarray::Array2;

use crate::io::error::Result;
use crate::spatial::direction::Direction;
use crate::spatial::grid::{Grid, Position};

/// Wall presence on each side of a cell, `true` meaning blocked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
// One flag per side; the sides are independent, not a state machine
#[allow(clippy::struct_excessive_bools)]
pub struct Walls {
    /// Side towards `y - 1`
    pub up: bool,
    /// Side towards `y + 1`
    pub down: bool,
    /// Side towards `x - 1`
    pub left: bool,
    /// Side towards `x + 1`
    pub right: bool,
}

impl Walls {
    /// Whether the side facing `direction` is walled
    ///
    /// `Origin` names no side and always reports blocked.
    pub const fn blocks(&self, direction: Direction) -> bool {
        match direction {
            Direction::Origin => true,
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Walls in `[up, down, left, right]` order
    pub const fn as_array(&self) -> [bool; 4] {
        [self.up, self.down, self.left, self.right]
    }

    /// Number of open sides
    pub fn open_count(&self) -> usize {
        self.as_array().iter().filter(|&&wall| !wall).count()
    }
}

/// Walls around the cell at `position`
///
/// # Errors
///
/// Returns `OutOfBounds` if the position is outside the grid.
pub fn walls_at<P>(grid: &Grid<P>, position: Position) -> Result<Walls> {
    let here = grid.direction(position)?;
    Ok(derive_walls(grid, position, here))
}

/// Walls for every cell, indexed `[y, x]`
///
/// This is the snapshot a renderer draws from.
pub fn wall_grid<P>(grid: &Grid<P>) -> Array2<Walls> {
    let directions = grid.directions();
    Array2::from_shape_fn(directions.dim(), |(y, x)| {
        let position = Position::new(x, y);
        let here = directions
            .get([y, x])
            .copied()
            .unwrap_or(Direction::Origin);
        derive_walls(grid, position, here)
    })
}

fn derive_walls<P>(grid: &Grid<P>, position: Position, here: Direction) -> Walls {
    Walls {
        up: is_walled(grid, position, here, Direction::Up),
        down: is_walled(grid, position, here, Direction::Down),
        left: is_walled(grid, position, here, Direction::Left),
        right: is_walled(grid, position, here, Direction::Right),
    }
}

fn is_walled<P>(grid: &Grid<P>, position: Position, here: Direction, side: Direction) -> bool {
    let Some(neighbour) = grid.neighbour(position, side) else {
        return true;
    };
    if here == side {
        return false;
    }
    grid.get(neighbour)
        .is_none_or(|node| node.direction != side.opposite())
}
