//! Identity management
//!
//! Handles interning of integer identities into canonical handles.

pub mod handle;
pub mod registry;

pub use handle::{IdentityHandle, WORLD_VALUE, is_world};
pub use registry::IdentityRegistry;
