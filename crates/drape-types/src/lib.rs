//! # drape-types
//!
//! Grid coordinates, the error type, and reference constants
//! for the drape mass-spring cloth simulator.
//!
//! This crate has no physics in it. It defines the vocabulary
//! that the other drape crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{DrapeError, DrapeResult};
pub use ids::GridIndex;
