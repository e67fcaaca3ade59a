//! Combat result types.
//!
//! Every combat operation reports what it did through these values instead
//! of printing, so the engine can turn them into events.

use arrayvec::ArrayVec;

/// Upper bound on hits a single special can land (Chain Lightning: 2-4).
pub const MAX_SPECIAL_HITS: usize = 4;

/// Hits landed by a multi-hit special, in order.
pub type Strikes = ArrayVec<Strike, MAX_SPECIAL_HITS>;

/// One application of damage to a target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Strike {
    /// Damage applied (before flooring HP at 0).
    pub damage: u32,
    /// Target HP after the hit.
    pub hp: u32,
    /// Target max HP, for "(HP: hp/max)" style reporting.
    pub max_hp: u32,
}

impl Strike {
    /// Returns true if this hit left the target at 0 HP.
    pub fn is_lethal(&self) -> bool {
        self.hp == 0
    }
}

/// Archetype passive that fired after a standard attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PassiveEffect {
    /// Ice: target attack power lowered; holds the new value.
    Freeze { attack_power: u32 },
    /// Fire: extra burn damage.
    Burn { strike: Strike },
    /// Lightning: quick second hit.
    FollowUp { strike: Strike },
}

/// Result of a standard attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    /// The base hit.
    pub strike: Strike,
    /// Passive effect that triggered, if any.
    pub passive: Option<PassiveEffect>,
}

impl AttackResult {
    pub fn plain(strike: Strike) -> Self {
        Self {
            strike,
            passive: None,
        }
    }

    /// Total damage including passive follow-up damage.
    pub fn total_damage(&self) -> u32 {
        let extra = match self.passive {
            Some(PassiveEffect::Burn { strike }) | Some(PassiveEffect::FollowUp { strike }) => {
                strike.damage
            }
            Some(PassiveEffect::Freeze { .. }) | None => 0,
        };
        self.strike.damage + extra
    }
}

/// Result of a special ability attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecialOutcome {
    /// Special is on cooldown; nothing happened.
    NotReady,
    /// Ice special: one heavy hit plus a strong chill.
    ///
    /// `attack_power` is `None` when the target died before the chill.
    Blizzard {
        strike: Strike,
        attack_power: Option<u32>,
    },
    /// Fire special: three hits.
    Inferno { strikes: Strikes },
    /// Lightning special: two to four hits.
    ChainLightning { strikes: Strikes },
}

impl SpecialOutcome {
    /// Returns true if the special actually fired.
    pub fn fired(&self) -> bool {
        !matches!(self, Self::NotReady)
    }

    /// Total damage the special dealt.
    pub fn total_damage(&self) -> u32 {
        match self {
            Self::NotReady => 0,
            Self::Blizzard { strike, .. } => strike.damage,
            Self::Inferno { strikes } | Self::ChainLightning { strikes } => {
                strikes.iter().map(|strike| strike.damage).sum()
            }
        }
    }
}
