//! Per-instance observer registry invoked after committed mutations

use std::fmt;

use log::trace;

type Hook<T> = Box<dyn FnMut(&T)>;

/// Ordered list of update callbacks owned by a single maze or game
///
/// Hooks are registered at setup and live as long as their owner. They run
/// synchronously in registration order and must not call back into a mutating
/// operation on the same owner.
pub struct UpdateHooks<T> {
    hooks: Vec<Hook<T>>,
}

impl<T> Default for UpdateHooks<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for UpdateHooks<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateHooks")
            .field("registered", &self.hooks.len())
            .finish()
    }
}

impl<T> UpdateHooks<T> {
    /// Create an empty registry
    pub const fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Append a hook to the end of the call order
    pub fn register(&mut self, hook: impl FnMut(&T) + 'static) {
        self.hooks.push(Box::new(hook));
    }

    /// Number of registered hooks
    pub const fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Whether no hooks are registered
    pub const fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Call every hook once with `target`
    pub fn notify(&mut self, target: &T) {
        trace!("notifying {} update hooks", self.hooks.len());
        for hook in &mut self.hooks {
            hook(target);
        }
    }
}
