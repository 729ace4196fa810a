//! TUI integration layer (crossterm + ratatui).
//!
//! Kept apart from `kernel`/`models` so the core has no terminal dependency.

pub mod terminal_guard;
pub mod view;
