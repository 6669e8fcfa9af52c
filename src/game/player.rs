//! Single player cursor guarded by the maze's derived walls

use log::debug;

use crate::algorithm::hooks::UpdateHooks;
use crate::algorithm::origin_shift::Maze;
use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::spatial::direction::Direction;
use crate::spatial::grid::Position;

/// What a cell payload represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// The player avatar
    Player,
    /// A hostile entity
    Enemy,
    /// A collectable
    Item,
}

/// Tagged caller data stored in maze cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload<D> {
    /// Entity tag
    pub kind: EntityKind,
    /// Arbitrary caller data
    pub data: D,
}

impl<D> Payload<D> {
    /// Create a payload
    pub const fn new(kind: EntityKind, data: D) -> Self {
        Self { kind, data }
    }
}

/// A maze plus a player position that may only cross open walls
pub struct Game<D> {
    maze: Maze<Payload<D>>,
    player: Position,
    hooks: UpdateHooks<Self>,
}

impl<D: std::fmt::Debug> std::fmt::Debug for Game<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("maze", &self.maze)
            .field("player", &self.player)
            .field("hooks", &self.hooks)
            .finish()
    }
}

impl<D> Game<D> {
    /// Start a game with the player in the top-left cell
    pub const fn new(maze: Maze<Payload<D>>) -> Self {
        Self {
            maze,
            player: Position::new(0, 0),
            hooks: UpdateHooks::new(),
        }
    }

    /// Start a game with the player at `start`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `start` is outside the maze.
    pub fn with_player(maze: Maze<Payload<D>>, start: Position) -> Result<Self> {
        maze.grid().node(start)?;
        Ok(Self {
            maze,
            player: start,
            hooks: UpdateHooks::new(),
        })
    }

    /// Current player position
    pub const fn player(&self) -> Position {
        self.player
    }

    /// Read-only view of the maze
    pub const fn maze(&self) -> &Maze<Payload<D>> {
        &self.maze
    }

    /// Mutable access to the maze, for payload updates and maze hooks
    pub const fn maze_mut(&mut self) -> &mut Maze<Payload<D>> {
        &mut self.maze
    }

    /// Register a hook run after every successful move or maze shift
    pub fn on_update(&mut self, hook: impl FnMut(&Self) + 'static) {
        self.hooks.register(hook);
    }

    /// Move the player one cell, returning the new position
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` if `direction` is `Origin`
    /// - `WallCollision` if the side facing `direction` is walled
    ///
    /// The position is unchanged and hooks do not run on error.
    pub fn move_player(&mut self, direction: Direction) -> Result<Position> {
        if direction.is_origin() {
            return Err(invalid_parameter(
                "direction",
                &direction,
                &"the player can only move along a compass direction",
            ));
        }

        let walls = self.maze.walls(self.player)?;
        if walls.blocks(direction) {
            debug!("player at {} blocked moving {direction}", self.player);
            return Err(MazeError::WallCollision {
                position: self.player,
                direction,
            });
        }

        // Grid edges are always walled, so an open side has a neighbour
        let next = self.maze.grid().step_from(self.player, direction)?;
        debug!("player moved {direction} from {} to {next}", self.player);
        self.player = next;

        self.run_update_hooks();
        Ok(next)
    }

    /// Shift the maze origin, then notify game hooks
    ///
    /// The maze's own hooks run first, as part of the shift.
    ///
    /// # Errors
    ///
    /// Propagates [`Maze::step`] errors; game hooks do not run on error.
    pub fn shift_maze(&mut self, direction: Option<Direction>) -> Result<Direction> {
        let taken = self.maze.step(direction)?;
        self.run_update_hooks();
        Ok(taken)
    }

    // The registry is detached while hooks run, so a hook that inspects its
    // owner sees no registered hooks. It is restored before returning.
    fn run_update_hooks(&mut self) {
        let mut hooks = std::mem::take(&mut self.hooks);
        hooks.notify(self);
        self.hooks = hooks;
    }
}
