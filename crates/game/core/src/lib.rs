//! Deterministic combat rules for the arena.
//!
//! `arena-core` defines the canonical rules (characters, hero archetypes,
//! enemy generation, battle turns, progression) and exposes pure APIs that
//! the runtime and clients drive. Randomness always arrives through an
//! [`RngOracle`] argument, and every observable outcome is reported as a
//! [`CombatEvent`] or [`ProgressEvent`] instead of being printed.
pub mod action;
pub mod character;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod event;
pub mod session;

pub use action::PlayerAction;
pub use character::{
    Character, Combatant, CombatantStatus, ENEMY_NAMES, Enemy, HealthThreshold, Hero,
    HeroArchetype, SpecialKind,
};
pub use combat::{AttackResult, PassiveEffect, SpecialOutcome, Strike, Strikes};
pub use config::GameConfig;
pub use engine::{Battle, BattleError, BattleOutcome, BattlePhase, BattleView};
pub use env::{PcgRng, RngOracle, SequenceRng};
pub use event::{CombatEvent, ProgressEvent};
pub use session::{Session, SessionEnd, SessionView};
