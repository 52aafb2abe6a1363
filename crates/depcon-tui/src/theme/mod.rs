//! Palette and semantic styles for the console.

pub mod palette;
pub mod styles;
