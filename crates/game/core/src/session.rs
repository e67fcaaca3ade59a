//! Progression across consecutive battles.
//!
//! A [`Session`] owns the hero plus the level and experience counters. After
//! each won battle, [`Session::record_victory`] awards experience, restores
//! a little HP and applies level ups; the caller decides whether to fight
//! again.

use strum::Display;

use crate::character::{Combatant, Enemy, Hero};
use crate::config::GameConfig;
use crate::engine::Battle;
use crate::env::RngOracle;
use crate::event::ProgressEvent;

/// Why a session stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionEnd {
    /// Hero fell in battle.
    #[strum(serialize = "defeated")]
    Defeated,
    /// Player walked away after a win.
    #[strum(serialize = "retired")]
    Retired,
}

/// Read-only snapshot of progression, shown between battles.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionView {
    pub level: u32,
    pub experience: u32,
    pub victories: u32,
    pub hp: u32,
    pub max_hp: u32,
}

/// Hero plus progression counters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Session {
    hero: Hero,
    level: u32,
    experience: u32,
    victories: u32,
}

impl Session {
    pub const STARTING_LEVEL: u32 = 1;

    pub fn new(hero: Hero) -> Self {
        Self::with_progress(hero, Self::STARTING_LEVEL, 0)
    }

    /// Resume from explicit counters (scenario setups, tests).
    pub fn with_progress(hero: Hero, level: u32, experience: u32) -> Self {
        Self {
            hero,
            level: level.max(Self::STARTING_LEVEL),
            experience,
            victories: 0,
        }
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn hero_mut(&mut self) -> &mut Hero {
        &mut self.hero
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn victories(&self) -> u32 {
        self.victories
    }

    /// The session continues only while the hero stands.
    pub fn is_over(&self) -> bool {
        !self.hero.is_alive()
    }

    pub fn view(&self) -> SessionView {
        let hero = self.hero.character();
        SessionView {
            level: self.level,
            experience: self.experience,
            victories: self.victories,
            hp: hero.hp(),
            max_hp: hero.max_hp(),
        }
    }

    /// Experience awarded for beating a `level` enemy: `[5 + level, 10 + 2·level]`.
    pub const fn experience_reward(level: u32) -> (u32, u32) {
        (5 + level, 10 + 2 * level)
    }

    /// Fresh enemy for the current level.
    pub fn spawn_enemy(&self, rng: &mut (impl RngOracle + ?Sized)) -> Enemy {
        Enemy::random(self.level, rng)
    }

    /// Start a battle between the session's hero and `enemy`.
    pub fn battle<'a>(&'a mut self, enemy: Enemy, config: &'a GameConfig) -> Battle<'a> {
        Battle::new(&mut self.hero, enemy, config)
    }

    /// Reward a won battle.
    ///
    /// Order: experience roll, HP regen roll (capped at max), then level ups.
    pub fn record_victory(
        &mut self,
        config: &GameConfig,
        rng: &mut (impl RngOracle + ?Sized),
    ) -> Vec<ProgressEvent> {
        self.victories += 1;

        let (low, high) = Self::experience_reward(self.level);
        let gained = rng.range(low, high);

        let (low, high) = GameConfig::VICTORY_REGEN_RANGE;
        let amount = self.hero.heal(rng.range(low, high));
        let hero = self.hero.character();
        let mut events = vec![ProgressEvent::VictoryRegen {
            hero: hero.name().to_owned(),
            amount,
            hp: hero.hp(),
            max_hp: hero.max_hp(),
        }];

        events.extend(self.gain_experience(gained, config));
        events
    }

    /// Add experience and apply every level up it pays for.
    ///
    /// Each level consumes `experience_per_level` points, raises max HP and
    /// attack, fully heals and readies the special. On return the stored
    /// experience is below the threshold.
    pub fn gain_experience(&mut self, amount: u32, config: &GameConfig) -> Vec<ProgressEvent> {
        self.experience = self.experience.saturating_add(amount);
        let mut events = vec![ProgressEvent::ExperienceGained {
            amount,
            total: self.experience,
        }];

        let threshold = config.experience_per_level.max(1);
        while self.experience >= threshold {
            self.experience -= threshold;
            self.level += 1;
            self.hero
                .level_up(config.level_up_max_hp, config.level_up_attack);

            let hero = self.hero.character();
            events.push(ProgressEvent::LevelUp {
                level: self.level,
                max_hp: hero.max_hp(),
                attack_power: hero.attack_power(),
            });
        }

        events
    }

    /// Closing event for this session.
    pub fn end(&self, end: SessionEnd) -> ProgressEvent {
        ProgressEvent::SessionEnded {
            end,
            level: self.level,
            victories: self.victories,
        }
    }
}
