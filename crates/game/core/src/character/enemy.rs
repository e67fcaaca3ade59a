//! Procedurally generated opponents.

use super::{Character, Combatant};
use crate::env::RngOracle;

/// Flavor names an enemy is drawn from.
pub const ENEMY_NAMES: [&str; 5] = [
    "Robo-Thug",
    "Dark Minion",
    "Wild Drone",
    "Shadow Beast",
    "Creep",
];

/// Enemy combatant: plain stats, no special ability.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    character: Character,
}

impl Enemy {
    pub fn new(name: impl Into<String>, hp: u32, attack_power: u32) -> Self {
        Self {
            character: Character::new(name, hp, attack_power),
        }
    }

    /// Generate an enemy scaled to `level`.
    ///
    /// ```text
    /// hp     = uniform(20 + 4·level, 26 + 6·level)
    /// attack = uniform(4 + level, 6 + level)
    /// name   = uniform(ENEMY_NAMES)
    /// ```
    pub fn random(level: u32, rng: &mut (impl RngOracle + ?Sized)) -> Self {
        let (hp_low, hp_high) = Self::hp_range(level);
        let hp = rng.range(hp_low, hp_high);
        let (attack_low, attack_high) = Self::attack_range(level);
        let attack_power = rng.range(attack_low, attack_high);
        let name = ENEMY_NAMES[rng.index(ENEMY_NAMES.len())];
        Self::new(name, hp, attack_power)
    }

    pub const fn hp_range(level: u32) -> (u32, u32) {
        (20 + 4 * level, 26 + 6 * level)
    }

    pub const fn attack_range(level: u32) -> (u32, u32) {
        (4 + level, 6 + level)
    }
}

impl Combatant for Enemy {
    fn character(&self) -> &Character {
        &self.character
    }

    fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }
}
