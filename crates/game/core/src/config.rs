/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Experience needed for one level; the surplus carries over.
    pub experience_per_level: u32,
    /// Max HP granted on level up.
    pub level_up_max_hp: u32,
    /// Attack power granted on level up.
    pub level_up_attack: u32,
    /// Percent chance per round that a spent special recharges.
    pub special_recharge_chance: u32,
    /// Percent chance that an enemy turn is a heavy blow.
    pub heavy_blow_chance: u32,
}

impl GameConfig {
    // ===== fixed combat tables =====
    /// Spread applied on both sides of attack power for a standard attack.
    pub const ATTACK_VARIANCE: u32 = 2;
    /// Healing rolled by the Heal action.
    pub const HEAL_ACTION_RANGE: (u32, u32) = (6, 10);
    /// Flat bonus a heavy blow adds on top of enemy attack power.
    pub const HEAVY_BLOW_BONUS: (u32, u32) = (2, 4);
    /// HP restored after every won battle.
    pub const VICTORY_REGEN_RANGE: (u32, u32) = (4, 8);
    /// Attack power is never reduced below this.
    pub const MIN_ATTACK_POWER: u32 = 1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_EXPERIENCE_PER_LEVEL: u32 = 20;
    pub const DEFAULT_LEVEL_UP_MAX_HP: u32 = 6;
    pub const DEFAULT_LEVEL_UP_ATTACK: u32 = 2;
    pub const DEFAULT_SPECIAL_RECHARGE_CHANCE: u32 = 25;
    pub const DEFAULT_HEAVY_BLOW_CHANCE: u32 = 15;

    pub fn new() -> Self {
        Self {
            experience_per_level: Self::DEFAULT_EXPERIENCE_PER_LEVEL,
            level_up_max_hp: Self::DEFAULT_LEVEL_UP_MAX_HP,
            level_up_attack: Self::DEFAULT_LEVEL_UP_ATTACK,
            special_recharge_chance: Self::DEFAULT_SPECIAL_RECHARGE_CHANCE,
            heavy_blow_chance: Self::DEFAULT_HEAVY_BLOW_CHANCE,
        }
    }

    pub fn with_special_recharge_chance(mut self, percent: u32) -> Self {
        self.special_recharge_chance = percent.min(100);
        self
    }

    pub fn with_heavy_blow_chance(mut self, percent: u32) -> Self {
        self.heavy_blow_chance = percent.min(100);
        self
    }

    /// Experience threshold is clamped to 1 so progression always terminates.
    pub fn with_experience_per_level(mut self, experience: u32) -> Self {
        self.experience_per_level = experience.max(1);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
