//! Maze constants and runtime configuration defaults

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Default number of columns
pub const DEFAULT_WIDTH: usize = 10;
/// Default number of rows
pub const DEFAULT_HEIGHT: usize = 10;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// The origin needs to wander the grid several times over before the starting
// comb pattern stops showing through
/// Random shifts per cell when no step count is given
pub const STEPS_PER_CELL: usize = 10;

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

// Image export settings
/// Side length of one cell in pixels
pub const DEFAULT_CELL_SIZE: u32 = 16;
/// Smallest cell that leaves room for a passage between walls
pub const MIN_CELL_SIZE: u32 = 3;
/// Wall pixel color
pub const WALL_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Largest image, in pixels, that export will allocate
pub const MAX_IMAGE_PIXELS: u64 = 1 << 28;
/// Passage pixel color
pub const PASSAGE_COLOR: [u8; 4] = [255, 255, 255, 255];

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;
/// Step counts below this finish too quickly to be worth a progress bar
pub const MIN_STEPS_FOR_PROGRESS: usize = 10_000;
