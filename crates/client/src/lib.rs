//! Terminal client for the superhero arena.
//!
//! The `arena` binary assembles the pieces found here:
//! - [`config`] reads settings from the environment
//! - [`logging`] installs the tracing subscriber
//! - [`input`] prompts on stdin and provides the player's actions
//! - [`presentation`] narrates runtime events on stdout
pub mod config;
pub mod input;
pub mod logging;
pub mod presentation;

pub use config::{ClientConfig, NarrationMode};
pub use input::CliActionProvider;
pub use presentation::Narrator;
