//! Color palette. Named terminal colors only, so the console respects the
//! operator's terminal scheme.

use ratatui::style::Color;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Online / completed
pub const STATUS_RED: Color = Color::Red; // Failed / errors
pub const STATUS_YELLOW: Color = Color::Yellow; // Pending
pub const STATUS_BLUE: Color = Color::Blue; // In progress
pub const STATUS_OFF: Color = Color::DarkGray; // Offline

// --- Selection ---
pub const SELECTED_FG: Color = Color::Black;
pub const SELECTED_BG: Color = Color::Cyan;
