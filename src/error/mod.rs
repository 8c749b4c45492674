//! Error handling
//!
//! Defines error types and handling for the identity crate.

pub mod handlers;
pub mod types;

pub use types::*;
