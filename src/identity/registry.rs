//! Identity registry
//!
//! Interns identity values so that every value maps to exactly one handle.
//! The registry only grows; handles are never evicted.

use crate::identity::handle::{IdentityHandle, WORLD_VALUE};
use log::trace;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::LazyLock;

static GLOBAL: LazyLock<IdentityRegistry> = LazyLock::new(IdentityRegistry::new);

/// Registry handing out canonical identity handles
pub struct IdentityRegistry {
    handles: RwLock<HashMap<i32, IdentityHandle>>,
    world: IdentityHandle,
}

impl IdentityRegistry {
    pub fn new() -> Self {
        let world = IdentityHandle::world();
        let mut handles = HashMap::new();
        handles.insert(WORLD_VALUE, world.clone());
        Self {
            handles: RwLock::new(handles),
            world,
        }
    }

    /// Process-wide registry, built on first use.
    pub fn global() -> &'static IdentityRegistry {
        &GLOBAL
    }

    /// Returns the handle for `value`, interning it on first request.
    pub fn get(&self, value: i32) -> IdentityHandle {
        if let Some(handle) = self.handles.read().get(&value) {
            return handle.clone();
        }

        // Another thread may have interned the value between the two locks;
        // the entry lookup under the write lock settles it.
        let mut handles = self.handles.write();
        handles
            .entry(value)
            .or_insert_with(|| {
                trace!("Interning identity {value}");
                IdentityHandle::new(value)
            })
            .clone()
    }

    /// Returns the world handle, the same instance in every registry.
    pub fn world(&self) -> IdentityHandle {
        self.world.clone()
    }

    pub fn contains(&self, value: i32) -> bool {
        self.handles.read().contains_key(&value)
    }

    pub fn len(&self) -> usize {
        self.handles.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.read().is_empty()
    }
}

impl Default for IdentityRegistry {
    fn default() -> Self {
        Self::new()
    }
}
