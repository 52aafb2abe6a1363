//! # depcon-tui - Terminal UI
//!
//! Presentation layer for the console. Organized into focused submodules:
//!
//! - `runner`: Main entry point and event loop
//! - `process`: Message processing and action dispatch
//! - `event`: Terminal event polling
//! - `render`: Frame rendering per screen
//! - `widgets`: Header and status bar
//! - `theme`: Palette and semantic styles
//! - `terminal`: Terminal setup/restore

pub mod event;
pub mod process;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
