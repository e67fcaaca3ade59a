//! Runtime orchestration for arena battles.
//!
//! This crate drives the pure rules in `arena-core`: it asks an
//! [`ActionProvider`] for the player's choices, advances the battle state
//! machine, forwards every event to an [`EventObserver`] and chains battles
//! into a session until the hero falls or the player retires.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the provider trait and error types clients interact with
//! - [`events`] wraps core events and defines observers
pub mod api;
pub mod events;
pub mod runtime;

pub use api::{
    ActionProvider, AttackActionProvider, Result, RuntimeError, ScriptedActionProvider,
};
pub use events::{Event, EventLog, EventObserver, Topic};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig, SessionSummary};
