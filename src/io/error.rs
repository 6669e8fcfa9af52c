//! Error types for maze construction, mutation, movement and export

use std::fmt;
use std::path::PathBuf;

use crate::spatial::direction::Direction;
use crate::spatial::grid::Position;

/// Main error type for all maze operations
///
/// Every variant is recoverable: the operation that produced it left the maze
/// unchanged, and retrying with different input is up to the caller.
#[derive(Debug)]
pub enum MazeError {
    /// Coordinate or requested edge falls outside the grid extent
    OutOfBounds {
        /// Horizontal coordinate that was requested (may be negative)
        x: i64,
        /// Vertical coordinate that was requested (may be negative)
        y: i64,
        /// Grid dimensions (width, height)
        dimensions: (usize, usize),
    },

    /// A second origin node was requested while one already exists
    DuplicateOrigin {
        /// Current origin
        existing: Position,
        /// Cell that was asked to become an origin
        requested: Position,
    },

    /// Player movement blocked by a wall
    WallCollision {
        /// Cell the player stands on
        position: Position,
        /// Side of the cell that is walled
        direction: Direction,
    },

    /// The grid would be left without an origin
    MissingOrigin {
        /// Cell whose edit would have removed the origin, if any
        position: Option<Position>,
    },

    /// Following outbound edges would loop instead of reaching the origin
    Cycle {
        /// Cell on the loop
        position: Position,
    },

    /// The origin has no in-bounds neighbour to shift towards
    ///
    /// Only a 1x1 grid is in this situation.
    NoNeighbours {
        /// Current origin
        origin: Position,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered maze to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { x, y, dimensions } => {
                write!(
                    f,
                    "Position ({x}, {y}) is out of bounds (grid size {}x{})",
                    dimensions.0, dimensions.1
                )
            }
            Self::DuplicateOrigin {
                existing,
                requested,
            } => {
                write!(
                    f,
                    "Cannot make {requested} an origin: origin already exists at {existing}"
                )
            }
            Self::WallCollision {
                position,
                direction,
            } => {
                write!(f, "Wall collision moving {direction} from {position}")
            }
            Self::MissingOrigin { position } => match position {
                Some(position) => {
                    write!(f, "Editing {position} would leave the maze without an origin")
                }
                None => write!(f, "Maze layout has no origin"),
            },
            Self::Cycle { position } => {
                write!(f, "Edges starting at {position} form a cycle")
            }
            Self::NoNeighbours { origin } => {
                write!(f, "Origin at {origin} has no neighbour to shift towards")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl MazeError {
    /// Whether the error is a routine rejection rather than a caller mistake
    ///
    /// Wall collisions happen constantly during play and are not worth
    /// reporting above debug level.
    pub const fn is_expected(&self) -> bool {
        matches!(self, Self::WallCollision { .. })
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an out of bounds error for a signed coordinate pair
pub const fn out_of_bounds(x: i64, y: i64, dimensions: (usize, usize)) -> MazeError {
    MazeError::OutOfBounds { x, y, dimensions }
}
