//! Observable outcomes of battles and sessions.
//!
//! The engine and session never print. Everything a player would be told
//! (damage dealt, healing, status changes, level ups) is recorded as an
//! event and rendered by whoever consumes it.

use crate::character::{CombatantStatus, SpecialKind};
use crate::combat::Strike;
use crate::engine::BattleOutcome;
use crate::session::SessionEnd;

/// Something that happened inside a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatEvent {
    /// A new battle began.
    EnemyAppeared { enemy: CombatantStatus },

    /// Standard attack landed.
    Attacked {
        attacker: String,
        target: String,
        strike: Strike,
    },

    /// Ice passive lowered the target's attack power.
    Frozen {
        hero: String,
        target: String,
        attack_power: u32,
    },

    /// Fire passive dealt burn damage.
    Burned { target: String, strike: Strike },

    /// Lightning passive landed a second hit.
    FollowUp {
        hero: String,
        target: String,
        strike: Strike,
    },

    /// A special ability was unleashed.
    SpecialUsed { hero: String, special: SpecialKind },

    /// Special requested while on cooldown.
    SpecialNotReady { hero: String, special: SpecialKind },

    /// One hit of a special (1-based `hit` index).
    SpecialHit {
        special: SpecialKind,
        target: String,
        hit: u8,
        strike: Strike,
    },

    /// Blizzard lowered the target's attack power.
    Chilled { target: String, attack_power: u32 },

    /// HP restored; `amount` is what was actually gained.
    Healed {
        name: String,
        amount: u32,
        hp: u32,
        max_hp: u32,
    },

    /// Player inspected both combatants.
    StatusReport {
        hero: CombatantStatus,
        special_ready: bool,
        enemy: CombatantStatus,
    },

    /// Unrecognized action: turn lost.
    Fumbled { hero: String },

    /// The surviving enemy is about to act.
    EnemyTurnStarted { enemy: String },

    /// Enemy heavy blow (attack power + 2-4, no variance).
    HeavyBlow {
        attacker: String,
        target: String,
        strike: Strike,
    },

    /// Spent special came back at round end.
    SpecialRecharged { hero: String, special: SpecialKind },

    /// Both sides acted (or the enemy was skipped); used for pacing.
    RoundEnded { round: u32 },

    /// Battle is over.
    BattleEnded {
        outcome: BattleOutcome,
        enemy: String,
        rounds: u32,
    },
}

/// Something that happened between battles.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProgressEvent {
    /// About to fight the enemy for `level`.
    LevelStarted { level: u32, experience: u32 },

    /// Post-victory HP restore.
    VictoryRegen {
        hero: String,
        amount: u32,
        hp: u32,
        max_hp: u32,
    },

    /// Experience awarded for a win; `total` is the running sum before any
    /// level up spends it.
    ExperienceGained { amount: u32, total: u32 },

    /// Hero reached `level`.
    LevelUp {
        level: u32,
        max_hp: u32,
        attack_power: u32,
    },

    /// Session is over.
    SessionEnded {
        end: SessionEnd,
        level: u32,
        victories: u32,
    },
}
