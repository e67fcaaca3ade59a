//! Rendering of runtime events for the terminal.
pub mod narration;

pub use narration::Narrator;
