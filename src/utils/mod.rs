//! # Utilities Module
//!
//! Geometry and reachability helpers shared by the generation stages.

pub mod math;
pub mod reachability;

pub use math::*;
pub use reachability::*;
