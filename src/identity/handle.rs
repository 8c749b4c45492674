//! Module `handle`
//!
//! Defines the `IdentityHandle`, the canonical interned representation of an
//! integer identity. Handles are only created by an `IdentityRegistry`,
//! except the world handle, which is built once and shared by all of them.

use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::{Arc, LazyLock};

/// Value reserved for the world/system actor.
pub const WORLD_VALUE: i32 = 0;

// Shared by every registry and by the failure tokens.
static WORLD: LazyLock<IdentityHandle> = LazyLock::new(|| IdentityHandle::new(WORLD_VALUE));

struct HandleInner {
    value: i32,
    hash: u64,
}

/// Canonical handle for an identity value.
///
/// Two handles are equal only when they are the same interned instance.
/// Comparing against anything else does not compile.
#[derive(Clone)]
pub struct IdentityHandle {
    inner: Arc<HandleInner>,
}

impl IdentityHandle {
    pub(crate) fn new(value: i32) -> Self {
        let mut hasher = DefaultHasher::new();
        i64::from(value).hash(&mut hasher);
        Self {
            inner: Arc::new(HandleInner {
                value,
                hash: hasher.finish(),
            }),
        }
    }

    /// Returns the wrapped identity value.
    pub fn value(&self) -> i32 {
        self.inner.value
    }

    /// The process-wide world handle.
    pub fn world() -> IdentityHandle {
        WORLD.clone()
    }

    /// Returns `true` if this handle denotes the world identity.
    pub fn is_world(&self) -> bool {
        is_world(self.inner.value)
    }

    /// Returns `true` if the identity value is lower than 0.
    pub fn is_negative(&self) -> bool {
        self.inner.value < 0
    }

    /// Returns `true` if both handles are the same interned instance.
    pub fn same_instance(&self, other: &IdentityHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Returns `true` if the raw value matches the world value.
pub fn is_world(value: i32) -> bool {
    value == WORLD_VALUE
}

impl PartialEq for IdentityHandle {
    fn eq(&self, other: &Self) -> bool {
        self.same_instance(other)
    }
}

impl Eq for IdentityHandle {}

impl Hash for IdentityHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.inner.hash);
    }
}

impl fmt::Debug for IdentityHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IdentityHandle").field(&self.inner.value).finish()
    }
}

impl fmt::Display for IdentityHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_value_is_zero() {
        assert!(is_world(0));
        assert!(!is_world(1));
        assert!(!is_world(-1));
    }

    #[test]
    fn separately_built_handles_are_not_equal() {
        let a = IdentityHandle::new(6);
        let b = IdentityHandle::new(6);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn world_handle_is_shared() {
        assert!(IdentityHandle::world().is_world());
        assert_eq!(IdentityHandle::world(), IdentityHandle::world());
        assert_ne!(IdentityHandle::world(), IdentityHandle::new(WORLD_VALUE));
    }

    #[test]
    fn negative_values() {
        assert!(IdentityHandle::new(-5).is_negative());
        assert!(!IdentityHandle::new(0).is_negative());
    }

    #[test]
    fn display_is_bare_value() {
        assert_eq!(IdentityHandle::new(-12).to_string(), "-12");
        assert_eq!(format!("{:?}", IdentityHandle::new(3)), "IdentityHandle(3)");
    }
}
