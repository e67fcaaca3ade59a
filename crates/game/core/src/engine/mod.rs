//! Battle state machine.
//!
//! A [`Battle`] pits the session's hero against one enemy and cycles
//! through three phases until someone drops:
//!
//! ```text
//! PlayerTurn ──submit()──▶ EnemyTurn ──advance()──▶ RoundEnd ──advance()──▶ PlayerTurn
//!      │                                                ▲   │
//!      └──────────── (enemy down) ──────────────────────┘   └──▶ Finished(outcome)
//! ```
//!
//! The battle never asks for input itself. Callers read [`Battle::phase`],
//! obtain a [`PlayerAction`](crate::PlayerAction) from wherever they like
//! when it is the player's turn, and call [`Battle::advance`] otherwise.
//! Every outcome is queued as a [`CombatEvent`] and handed out by
//! [`Battle::take_events`].

mod errors;
mod turns;

pub use errors::BattleError;

use strum::Display;

use crate::character::{Combatant, CombatantStatus, Enemy, Hero, SpecialKind};
use crate::config::GameConfig;
use crate::event::CombatEvent;

/// How a battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleOutcome {
    #[strum(serialize = "victory")]
    Victory,
    #[strum(serialize = "defeat")]
    Defeat,
}

impl BattleOutcome {
    pub fn is_victory(&self) -> bool {
        matches!(self, Self::Victory)
    }
}

/// Where the battle currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattlePhase {
    #[strum(serialize = "player turn")]
    PlayerTurn,
    #[strum(serialize = "enemy turn")]
    EnemyTurn,
    #[strum(serialize = "round end")]
    RoundEnd,
    #[strum(serialize = "finished")]
    Finished(BattleOutcome),
}

/// Read-only snapshot handed to whoever chooses the player's action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleView {
    pub round: u32,
    pub hero: CombatantStatus,
    pub special: SpecialKind,
    pub special_ready: bool,
    pub enemy: CombatantStatus,
}

/// One hero-versus-enemy fight.
///
/// Borrows the hero so that damage, cooldowns and attack reductions persist
/// into the session after the battle ends.
pub struct Battle<'a> {
    hero: &'a mut Hero,
    enemy: Enemy,
    config: &'a GameConfig,
    phase: BattlePhase,
    round: u32,
    events: Vec<CombatEvent>,
}

impl<'a> Battle<'a> {
    /// Starts a battle at round 1 with the player to act.
    ///
    /// A battle that starts with either side already down is finished
    /// immediately.
    pub fn new(hero: &'a mut Hero, enemy: Enemy, config: &'a GameConfig) -> Self {
        let mut battle = Self {
            hero,
            enemy,
            config,
            phase: BattlePhase::PlayerTurn,
            round: 1,
            events: Vec::new(),
        };
        battle.events.push(CombatEvent::EnemyAppeared {
            enemy: battle.enemy.status(),
        });
        if let Some(outcome) = battle.decided() {
            battle.finish(outcome);
        }
        battle
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// Current round, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn hero(&self) -> &Hero {
        self.hero
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        match self.phase {
            BattlePhase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.outcome().is_some()
    }

    pub fn view(&self) -> BattleView {
        BattleView {
            round: self.round,
            hero: self.hero.status(),
            special: self.hero.special(),
            special_ready: self.hero.special_ready(),
            enemy: self.enemy.status(),
        }
    }

    /// Hands out every event recorded since the last call.
    pub fn take_events(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }

    /// Hero defeat is checked before enemy defeat.
    fn decided(&self) -> Option<BattleOutcome> {
        if !self.hero.is_alive() {
            Some(BattleOutcome::Defeat)
        } else if !self.enemy.is_alive() {
            Some(BattleOutcome::Victory)
        } else {
            None
        }
    }

    fn finish(&mut self, outcome: BattleOutcome) {
        self.phase = BattlePhase::Finished(outcome);
        self.events.push(CombatEvent::BattleEnded {
            outcome,
            enemy: self.enemy.name().to_owned(),
            rounds: self.round,
        });
    }
}
