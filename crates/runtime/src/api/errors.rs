//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from action providers, observers and the battle engine so
//! clients can bubble them up with consistent context.
use std::io;

use arena_core::BattleError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("player action provider not set")]
    ProviderNotSet,

    #[error("action provider input closed")]
    InputClosed,

    #[error("scripted provider ran out of {what}")]
    ScriptExhausted { what: &'static str },

    #[error("provider or observer I/O failed")]
    Io(#[from] io::Error),

    #[error("event observer failed: {0}")]
    Observer(String),

    #[error(transparent)]
    Battle(#[from] BattleError),
}
