/// Observer registry for committed mutations
pub mod hooks;
/// Origin shift engine driving maze mutation
pub mod origin_shift;

pub use hooks::UpdateHooks;
pub use origin_shift::Maze;
