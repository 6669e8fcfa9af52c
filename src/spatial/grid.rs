//! Node storage for the maze with a cached origin coordinate
//!
//! The grid is a `height x width` array of nodes, each holding the single
//! outbound edge of a spanning tree rooted at the origin. Every public mutation
//! keeps three properties intact: exactly one node is the origin, following
//! edges from any node reaches the origin, and no edge leaves the grid.

use std::fmt;

use ndarray::Array2;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{MazeError, Result, invalid_parameter, out_of_bounds};
use crate::spatial::direction::Direction;
use crate::spatial::validation::check_spanning_tree;

/// Cell coordinate, `x` across columns and `y` down rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
}

impl Position {
    /// Create a position from column and row
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Signed coordinate one step away in `direction`
    pub const fn offset(self, direction: Direction) -> (i64, i64) {
        let (dx, dy) = direction.offset();
        (self.x as i64 + dx, self.y as i64 + dy)
    }

    // ndarray indices are (row, col)
    pub(crate) const fn index(self) -> [usize; 2] {
        [self.y, self.x]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A single maze cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<P> {
    /// Outbound edge, or `Origin` for the root
    pub direction: Direction,
    /// Caller-owned data; the maze never inspects it
    pub payload: Option<P>,
}

impl<P> Node<P> {
    const fn pointing(direction: Direction) -> Self {
        Self {
            direction,
            payload: None,
        }
    }
}

/// Rectangular grid of nodes forming a spanning tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<P> {
    nodes: Array2<Node<P>>,
    origin: Position,
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be positive"));
    }
    if value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}

impl<P> Grid<P> {
    /// Create a grid in the default orientation
    ///
    /// The left column points up, every other node points left, and the
    /// top-left node is the origin. A 3x2 grid therefore reads
    ///
    /// ```text
    /// + < <
    /// ^ < <
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero or exceeds
    /// `MAX_GRID_DIMENSION`.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;

        let nodes = Array2::from_shape_fn((height, width), |(y, x)| match (x, y) {
            (0, 0) => Node::pointing(Direction::Origin),
            (0, _) => Node::pointing(Direction::Up),
            _ => Node::pointing(Direction::Left),
        });

        Ok(Self {
            nodes,
            origin: Position::new(0, 0),
        })
    }

    /// Load an explicit row-major layout of directions
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for bad dimensions or a layout of the wrong
    /// length, and `MissingOrigin`, `DuplicateOrigin`, `OutOfBounds` or `Cycle`
    /// if the layout is not a spanning tree.
    pub fn from_directions(width: usize, height: usize, directions: &[Direction]) -> Result<Self> {
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;

        if directions.len() != width * height {
            return Err(invalid_parameter(
                "directions",
                &directions.len(),
                &format!("expected {} entries for a {width}x{height} grid", width * height),
            ));
        }

        let nodes = Array2::from_shape_fn((height, width), |(y, x)| {
            Node::pointing(
                directions
                    .get(y * width + x)
                    .copied()
                    .unwrap_or(Direction::Origin),
            )
        });

        let mut origins = nodes
            .indexed_iter()
            .filter(|(_, node)| node.direction.is_origin())
            .map(|((y, x), _)| Position::new(x, y));

        let origin = origins
            .next()
            .ok_or(MazeError::MissingOrigin { position: None })?;
        if let Some(requested) = origins.next() {
            return Err(MazeError::DuplicateOrigin {
                existing: origin,
                requested,
            });
        }

        let grid = Self { nodes, origin };
        check_spanning_tree(&grid)?;
        Ok(grid)
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.nodes.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.nodes.nrows()
    }

    /// Grid dimensions as (width, height)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; grids have at least one cell
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check whether a signed coordinate lies inside the grid
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.height()
    }

    /// Current origin, kept up to date by every mutation
    pub const fn origin(&self) -> Position {
        self.origin
    }

    /// The in-bounds cell one step from `position` in `direction`
    ///
    /// `None` when the step leaves the grid or `direction` is `Origin`.
    pub fn neighbour(&self, position: Position, direction: Direction) -> Option<Position> {
        if direction.is_origin() {
            return None;
        }
        let (x, y) = position.offset(direction);
        self.contains(x, y)
            .then(|| Position::new(x as usize, y as usize))
    }

    /// Like [`Grid::neighbour`], reporting the attempted coordinate on failure
    pub(crate) fn step_from(&self, position: Position, direction: Direction) -> Result<Position> {
        let (x, y) = position.offset(direction);
        self.neighbour(position, direction)
            .ok_or_else(|| out_of_bounds(x, y, self.dimensions()))
    }

    /// Node at `position`, if inside the grid
    pub fn get(&self, position: Position) -> Option<&Node<P>> {
        self.nodes.get(position.index())
    }

    /// Node at `position`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the position is outside the grid.
    pub fn node(&self, position: Position) -> Result<&Node<P>> {
        self.get(position)
            .ok_or_else(|| self.position_out_of_bounds(position))
    }

    fn node_mut(&mut self, position: Position) -> Result<&mut Node<P>> {
        let dimensions = self.dimensions();
        self.nodes
            .get_mut(position.index())
            .ok_or_else(|| out_of_bounds(position.x as i64, position.y as i64, dimensions))
    }

    /// Direction stored at `position`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the position is outside the grid.
    pub fn direction(&self, position: Position) -> Result<Direction> {
        self.node(position).map(|node| node.direction)
    }

    /// Overwrite a node's direction and optionally its payload
    ///
    /// Setting `Origin` on the current origin leaves the tree as it is. Any
    /// other edit must keep the grid a spanning tree: a non-origin node may be
    /// re-pointed at a neighbour whose path to the origin does not pass back
    /// through it. A `None` payload leaves the stored payload untouched.
    ///
    /// # Errors
    ///
    /// - `OutOfBounds` if the position, or the cell the new edge points at, is
    ///   outside the grid
    /// - `DuplicateOrigin` if `direction` is `Origin` on a non-origin cell
    /// - `MissingOrigin` if the origin would be given an outbound edge
    /// - `Cycle` if the new edge would close a loop
    ///
    /// The grid is unchanged on error.
    pub fn set_node(
        &mut self,
        position: Position,
        direction: Direction,
        payload: Option<P>,
    ) -> Result<()> {
        self.node(position)?;

        if direction.is_origin() {
            if position != self.origin {
                return Err(MazeError::DuplicateOrigin {
                    existing: self.origin,
                    requested: position,
                });
            }
        } else {
            if position == self.origin {
                return Err(MazeError::MissingOrigin {
                    position: Some(position),
                });
            }
            let target = self.step_from(position, direction)?;
            if !self.reaches_origin_avoiding(target, position) {
                return Err(MazeError::Cycle { position });
            }
        }

        let node = self.node_mut(position)?;
        node.direction = direction;
        if let Some(payload) = payload {
            node.payload = Some(payload);
        }
        Ok(())
    }

    /// Payload stored at `position`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the position is outside the grid.
    pub fn payload(&self, position: Position) -> Result<Option<&P>> {
        self.node(position).map(|node| node.payload.as_ref())
    }

    /// Store a payload, returning the one it replaces
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the position is outside the grid.
    pub fn set_payload(&mut self, position: Position, payload: P) -> Result<Option<P>> {
        self.node_mut(position)
            .map(|node| node.payload.replace(payload))
    }

    /// Remove and return the payload at `position`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the position is outside the grid.
    pub fn take_payload(&mut self, position: Position) -> Result<Option<P>> {
        self.node_mut(position).map(|node| node.payload.take())
    }

    /// Snapshot of every node's direction, indexed `[y, x]`
    pub fn directions(&self) -> Array2<Direction> {
        self.nodes.map(|node| node.direction)
    }

    /// Iterate over all cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Node<P>)> + '_ {
        self.nodes
            .indexed_iter()
            .map(|((y, x), node)| (Position::new(x, y), node))
    }

    /// Move the origin one step, re-pointing the old origin at the new one
    ///
    /// Both node writes happen only after the target has been bounds-checked,
    /// so a failed shift leaves the grid untouched.
    pub(crate) fn shift_origin(&mut self, direction: Direction) -> Result<Position> {
        let previous = self.origin;
        let next = self.step_from(previous, direction)?;

        self.node_mut(next)?.direction = Direction::Origin;
        self.node_mut(previous)?.direction = direction;
        self.origin = next;

        Ok(next)
    }

    // Follows edges from `start`; false if `avoid` is met or the walk does not
    // end at the origin within one visit per cell.
    fn reaches_origin_avoiding(&self, start: Position, avoid: Position) -> bool {
        let mut current = start;
        for _ in 0..self.len() {
            if current == avoid {
                return false;
            }
            let direction = self
                .get(current)
                .map_or(Direction::Origin, |node| node.direction);
            if direction.is_origin() {
                return current == self.origin;
            }
            match self.neighbour(current, direction) {
                Some(next) => current = next,
                None => return false,
            }
        }
        false
    }

    fn position_out_of_bounds(&self, position: Position) -> MazeError {
        out_of_bounds(position.x as i64, position.y as i64, self.dimensions())
    }
}
