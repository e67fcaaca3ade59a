//! Combatants: the shared character model, hero archetypes and enemies.
//!
//! [`Character`] owns the stats every combatant has and enforces the HP
//! invariant (`0 <= hp <= max_hp`). Heroes and enemies wrap a `Character`
//! and expose it through the [`Combatant`] capability trait; archetype
//! behavior is dispatched on [`HeroArchetype`] rather than through a type
//! hierarchy.

pub mod enemy;
pub mod hero;

pub use enemy::{ENEMY_NAMES, Enemy};
pub use hero::{Hero, HeroArchetype, SpecialKind};

use crate::combat::{AttackResult, Strike, apply_damage, reduce_attack_power, roll_attack_damage};
use crate::env::RngOracle;

/// Stats and HP bookkeeping shared by all combatants.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    name: String,
    max_hp: u32,
    hp: u32,
    attack_power: u32,
}

impl Character {
    /// Creates a character at full health.
    pub fn new(name: impl Into<String>, hp: u32, attack_power: u32) -> Self {
        Self {
            name: name.into(),
            max_hp: hp,
            hp,
            attack_power,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn attack_power(&self) -> u32 {
        self.attack_power
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Reduce HP by `amount`, flooring at 0.
    pub fn take_damage(&mut self, amount: u32) -> Strike {
        self.hp = apply_damage(self.hp, amount);
        Strike {
            damage: amount,
            hp: self.hp,
            max_hp: self.max_hp,
        }
    }

    /// Restore HP by up to `amount`, capped at max HP.
    ///
    /// Returns the HP actually restored, which is less than `amount` near max.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp - before
    }

    /// Standard attack: roll attack power ± 2 (at least 1) and apply it.
    pub fn attack(&self, target: &mut Character, rng: &mut (impl RngOracle + ?Sized)) -> Strike {
        let damage = roll_attack_damage(self.attack_power, rng);
        target.take_damage(damage)
    }

    /// Lower attack power by `amount`, never below 1. Returns the new value.
    pub fn weaken(&mut self, amount: u32) -> u32 {
        self.attack_power = reduce_attack_power(self.attack_power, amount);
        self.attack_power
    }

    /// Raise max HP and attack power (level up).
    pub fn grow(&mut self, max_hp: u32, attack_power: u32) {
        self.max_hp = self.max_hp.saturating_add(max_hp);
        self.attack_power = self.attack_power.saturating_add(attack_power);
    }

    /// Set HP back to max.
    pub fn restore_full(&mut self) {
        self.hp = self.max_hp;
    }

    pub fn health(&self) -> HealthThreshold {
        HealthThreshold::from_hp(self.hp, self.max_hp)
    }
}

/// Capability set shared by heroes and enemies.
///
/// Implementors only expose their [`Character`]; liveness, damage and
/// healing are the same for everyone. `attack` is overridden by heroes to
/// layer archetype passives on the standard hit.
pub trait Combatant {
    fn character(&self) -> &Character;

    fn character_mut(&mut self) -> &mut Character;

    fn name(&self) -> &str {
        self.character().name()
    }

    fn is_alive(&self) -> bool {
        self.character().is_alive()
    }

    fn take_damage(&mut self, amount: u32) -> Strike {
        self.character_mut().take_damage(amount)
    }

    fn heal(&mut self, amount: u32) -> u32 {
        self.character_mut().heal(amount)
    }

    /// Standard attack against `target`.
    fn attack<T, R>(&self, target: &mut T, rng: &mut R) -> AttackResult
    where
        T: Combatant + ?Sized,
        R: RngOracle + ?Sized,
    {
        AttackResult::plain(self.character().attack(target.character_mut(), rng))
    }

    /// Read-only snapshot for status reports.
    fn status(&self) -> CombatantStatus {
        CombatantStatus::of(self.character())
    }
}

/// Snapshot of a combatant's numbers for the status action and UIs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantStatus {
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    pub attack_power: u32,
    pub health: HealthThreshold,
}

impl CombatantStatus {
    pub fn of(character: &Character) -> Self {
        Self {
            name: character.name().to_owned(),
            hp: character.hp(),
            max_hp: character.max_hp(),
            attack_power: character.attack_power(),
            health: character.health(),
        }
    }
}

/// Health threshold levels, used to flavor status output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HealthThreshold {
    /// 100% HP
    #[strum(serialize = "unhurt")]
    Full,
    /// 75-99% HP
    #[strum(serialize = "healthy")]
    Healthy,
    /// 25-74% HP
    #[strum(serialize = "wounded")]
    Wounded,
    /// 1-24% HP
    #[strum(serialize = "critical")]
    Critical,
    /// 0% HP
    #[strum(serialize = "down")]
    Dead,
}

impl HealthThreshold {
    /// Calculate health threshold from current and max HP.
    pub fn from_hp(current: u32, max: u32) -> Self {
        if current == 0 {
            Self::Dead
        } else if max == 0 {
            Self::Full
        } else {
            let percent = (current * 100) / max;
            match percent {
                100.. => Self::Full,
                75..=99 => Self::Healthy,
                25..=74 => Self::Wounded,
                _ => Self::Critical,
            }
        }
    }
}
