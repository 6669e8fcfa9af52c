//! Spanning-tree checks over a grid's edge orientations

use bitvec::prelude::*;

use crate::io::error::{MazeError, Result, out_of_bounds};
use crate::spatial::grid::{Grid, Position};

/// Verify the grid is a spanning tree rooted at its origin
///
/// Walks outbound edges from every cell, marking cells already known to reach
/// the origin so the whole check visits each cell a bounded number of times.
///
/// # Errors
///
/// - `MissingOrigin` if no node is the origin
/// - `DuplicateOrigin` if more than one node is
/// - `OutOfBounds` if an edge points outside the grid
/// - `Cycle` if a walk loops before reaching the origin
pub fn check_spanning_tree<P>(grid: &Grid<P>) -> Result<()> {
    let width = grid.width();
    let slot = |position: Position| position.y * width + position.x;

    let mut origins = grid
        .iter()
        .filter(|(_, node)| node.direction.is_origin())
        .map(|(position, _)| position);
    let origin = origins
        .next()
        .ok_or(MazeError::MissingOrigin { position: None })?;
    if let Some(requested) = origins.next() {
        return Err(MazeError::DuplicateOrigin {
            existing: origin,
            requested,
        });
    }

    let mut settled = bitvec![0; grid.len()];
    let mut on_path = bitvec![0; grid.len()];
    settled.set(slot(origin), true);

    for (start, _) in grid.iter() {
        let mut path = Vec::new();
        let mut current = start;

        while settled.get(slot(current)).as_deref() != Some(&true) {
            if on_path.get(slot(current)).as_deref() == Some(&true) {
                return Err(MazeError::Cycle { position: current });
            }
            on_path.set(slot(current), true);
            path.push(current);

            let direction = grid.direction(current)?;
            let (x, y) = current.offset(direction);
            current = grid
                .neighbour(current, direction)
                .ok_or_else(|| out_of_bounds(x, y, grid.dimensions()))?;
        }

        for position in path {
            settled.set(slot(position), true);
            on_path.set(slot(position), false);
        }
    }

    Ok(())
}

/// Cells visited walking from `start` to the origin, inclusive of both ends
///
/// In a valid tree this is the unique maze path between the two cells.
///
/// # Errors
///
/// Returns `OutOfBounds` if `start` is outside the grid or an edge leaves it,
/// and `Cycle` if the walk does not reach the origin within one visit per cell.
pub fn path_to_origin<P>(grid: &Grid<P>, start: Position) -> Result<Vec<Position>> {
    let mut path = vec![start];
    let mut current = start;

    for _ in 0..grid.len() {
        let direction = grid.direction(current)?;
        if direction.is_origin() {
            return Ok(path);
        }
        let (x, y) = current.offset(direction);
        current = grid
            .neighbour(current, direction)
            .ok_or_else(|| out_of_bounds(x, y, grid.dimensions()))?;
        path.push(current);
    }

    Err(MazeError::Cycle { position: start })
}
