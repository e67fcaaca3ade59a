//! Environment collaborators injected into the rules.
//!
//! The only collaborator the arena needs is a source of randomness; it is
//! passed to every operation that rolls dice.

pub mod rng;

pub use rng::{PcgRng, RngOracle, SequenceRng};
