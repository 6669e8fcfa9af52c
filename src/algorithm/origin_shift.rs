//! Origin shift maze engine
//!
//! Each step moves the root of the spanning tree to a neighbouring cell: the
//! old origin is pointed at the chosen neighbour and the neighbour loses its
//! outbound edge. Only those two edges change, so the grid stays a spanning
//! tree rooted at the new origin. Repeating the step wanders the origin around
//! the grid and gradually randomises the maze.

use log::debug;
use ndarray::Array2;
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::algorithm::hooks::UpdateHooks;
use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::spatial::direction::Direction;
use crate::spatial::grid::{Grid, Position};
use crate::spatial::walls::{Walls, wall_grid, walls_at};

/// A maze grid together with its shift randomness and update hooks
///
/// All mutations take `&mut self` and run to completion before returning, so
/// no caller can observe the grid between the two halves of a shift.
pub struct Maze<P> {
    grid: Grid<P>,
    rng: StdRng,
    hooks: UpdateHooks<Self>,
}

impl<P: std::fmt::Debug> std::fmt::Debug for Maze<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Maze")
            .field("grid", &self.grid)
            .field("hooks", &self.hooks)
            .finish_non_exhaustive()
    }
}

impl<P> Maze<P> {
    /// Create a maze in the default orientation with OS-seeded randomness
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero or too large.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Ok(Self::from_grid(Grid::new(width, height)?, StdRng::from_os_rng()))
    }

    /// Create a maze whose random shifts are reproducible
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero or too large.
    pub fn with_seed(width: usize, height: usize, seed: u64) -> Result<Self> {
        Ok(Self::from_grid(
            Grid::new(width, height)?,
            StdRng::seed_from_u64(seed),
        ))
    }

    /// Wrap an existing grid
    pub const fn from_grid(grid: Grid<P>, rng: StdRng) -> Self {
        Self {
            grid,
            rng,
            hooks: UpdateHooks::new(),
        }
    }

    /// Read-only view of the grid
    pub const fn grid(&self) -> &Grid<P> {
        &self.grid
    }

    /// Release the grid, dropping hooks and randomness
    pub fn into_grid(self) -> Grid<P> {
        self.grid
    }

    /// Current origin
    pub const fn origin(&self) -> Position {
        self.grid.origin()
    }

    /// Register a hook run after every committed mutation
    pub fn on_update(&mut self, hook: impl FnMut(&Self) + 'static) {
        self.hooks.register(hook);
    }

    /// Advance the maze by one origin shift
    ///
    /// With `Some(direction)` the origin moves that way; with `None` a
    /// neighbour is picked uniformly among those inside the grid. Hooks run
    /// once, after both edges have changed. Returns the direction taken.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` if `direction` is `Origin`
    /// - `OutOfBounds` if `direction` leads outside the grid
    /// - `NoNeighbours` on a 1x1 grid with no direction given
    ///
    /// The grid is unchanged and hooks do not run on error.
    pub fn step(&mut self, direction: Option<Direction>) -> Result<Direction> {
        let direction = match direction {
            Some(Direction::Origin) => {
                return Err(invalid_parameter(
                    "direction",
                    &Direction::Origin,
                    &"origin names no neighbour",
                ));
            }
            Some(direction) => direction,
            None => self.random_direction()?,
        };

        let previous = self.grid.origin();
        let next = self.grid.shift_origin(direction)?;
        debug!("origin shifted {direction} from {previous} to {next}");

        self.run_update_hooks();
        Ok(direction)
    }

    /// Run `steps` random shifts, notifying hooks after each
    ///
    /// # Errors
    ///
    /// Returns `NoNeighbours` on a 1x1 grid when `steps` is non-zero.
    pub fn shuffle(&mut self, steps: usize) -> Result<()> {
        for _ in 0..steps {
            self.step(None)?;
        }
        Ok(())
    }

    /// Overwrite a node through [`Grid::set_node`] and notify hooks
    ///
    /// # Errors
    ///
    /// Propagates the grid's rejection; hooks do not run on error.
    pub fn set_node(
        &mut self,
        position: Position,
        direction: Direction,
        payload: Option<P>,
    ) -> Result<()> {
        self.grid.set_node(position, direction, payload)?;
        self.run_update_hooks();
        Ok(())
    }

    /// Store a payload and notify hooks, returning the payload replaced
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the position is outside the grid.
    pub fn set_payload(&mut self, position: Position, payload: P) -> Result<Option<P>> {
        let previous = self.grid.set_payload(position, payload)?;
        self.run_update_hooks();
        Ok(previous)
    }

    /// Remove a payload and notify hooks
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the position is outside the grid.
    pub fn take_payload(&mut self, position: Position) -> Result<Option<P>> {
        let previous = self.grid.take_payload(position)?;
        self.run_update_hooks();
        Ok(previous)
    }

    /// Walls around one cell
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the position is outside the grid.
    pub fn walls(&self, position: Position) -> Result<Walls> {
        walls_at(&self.grid, position)
    }

    /// Walls for every cell, indexed `[y, x]`
    pub fn wall_grid(&self) -> Array2<Walls> {
        wall_grid(&self.grid)
    }

    fn random_direction(&mut self) -> Result<Direction> {
        let origin = self.grid.origin();
        let candidates: Vec<Direction> = Direction::CARDINALS
            .into_iter()
            .filter(|&direction| self.grid.neighbour(origin, direction).is_some())
            .collect();

        candidates
            .choose(&mut self.rng)
            .copied()
            .ok_or(MazeError::NoNeighbours { origin })
    }

    // The registry is detached while hooks run, so a hook that inspects its
    // owner sees no registered hooks. It is restored before returning.
    fn run_update_hooks(&mut self) {
        let mut hooks = std::mem::take(&mut self.hooks);
        hooks.notify(self);
        self.hooks = hooks;
    }
}
