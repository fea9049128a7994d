//! # Rendering Module
//!
//! Macroquad preview of a generated world: colored tiles, entity markers and
//! a status line. Generation never depends on this module.

pub mod display;
pub mod palette;

pub use display::*;
pub use palette::*;
