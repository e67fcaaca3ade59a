//! Damage rolls shared by every combatant.

use crate::config::GameConfig;
use crate::env::RngOracle;

/// Roll standard attack damage.
///
/// # Formula
///
/// ```text
/// low  = max(1, attack_power - 2)
/// high = attack_power + 2
/// damage = uniform(low, high)
/// ```
pub fn roll_attack_damage(attack_power: u32, rng: &mut (impl RngOracle + ?Sized)) -> u32 {
    let low = attack_power
        .saturating_sub(GameConfig::ATTACK_VARIANCE)
        .max(1);
    let high = (attack_power + GameConfig::ATTACK_VARIANCE).max(low);
    rng.range(low, high)
}

/// Apply damage to current HP.
///
/// Returns the new HP value (clamped to 0).
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Lower attack power by `amount`, never below [`GameConfig::MIN_ATTACK_POWER`].
pub fn reduce_attack_power(attack_power: u32, amount: u32) -> u32 {
    attack_power
        .saturating_sub(amount)
        .max(GameConfig::MIN_ATTACK_POWER)
}

/// Lightning follow-up: 60% of the triggering hit, rounded down, at least 1.
pub fn follow_up_damage(damage: u32) -> u32 {
    (damage * 3 / 5).max(1)
}
