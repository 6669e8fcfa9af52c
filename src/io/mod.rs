/// Command-line interface and maze runner
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types for all maze operations
pub mod error;
/// PNG export of rendered mazes
pub mod image;
/// Progress display for long shuffles
pub mod progress;
/// Plain-text maze renderings
pub mod render;
