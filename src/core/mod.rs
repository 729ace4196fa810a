//! Frontend-neutral input types shared by the app and view layers.

pub mod event;

pub use event::{InputEvent, Key};
