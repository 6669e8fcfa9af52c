//! Player movement on top of a maze

/// Player cursor, entity payloads and movement validation
pub mod player;

pub use player::{EntityKind, Game, Payload};
