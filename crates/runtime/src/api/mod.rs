//! Public API surface for runtime consumers.
mod errors;
mod providers;

pub use errors::{Result, RuntimeError};
pub use providers::{ActionProvider, AttackActionProvider, ScriptedActionProvider};
