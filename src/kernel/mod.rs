//! Headless application core (state/action/effect).

pub mod action;
pub mod content;
pub mod effect;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use content::{resolve, ContentOrigin, ResolvedContent};
pub use effect::Effect;
pub use state::{AppState, ContentState, FocusTarget, SearchBoxState, SidebarState, UiState};
pub use store::{DispatchResult, Store};
