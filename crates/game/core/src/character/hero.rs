//! Player heroes and their archetype-specific abilities.
//!
//! | Archetype | HP/ATK | Attack passive | Special |
//! |---|---|---|---|
//! | Ice | 40/6 | 25%: target attack -2 | Blizzard: 10-16 damage, target attack -3 |
//! | Fire | 36/8 | 30%: 2 burn damage | Inferno: 3 hits of 3-6 |
//! | Lightning | 34/7 | 20%: follow-up at 60% | Chain Lightning: 2-4 hits of 4-7 |
//!
//! Passives and special hits only land while the target is still alive.

use strum::{Display, EnumIter, IntoStaticStr};

use super::{Character, Combatant};
use crate::combat::{AttackResult, PassiveEffect, SpecialOutcome, Strikes, follow_up_damage};
use crate::env::RngOracle;

/// Hero class picked at the start of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeroArchetype {
    #[default]
    #[strum(serialize = "IceHero")]
    Ice,
    #[strum(serialize = "FireHero")]
    Fire,
    #[strum(serialize = "LightningHero")]
    Lightning,
}

impl HeroArchetype {
    /// Attack power lost by a frozen target.
    pub const FREEZE_REDUCTION: u32 = 2;
    /// Attack power lost to Blizzard's chill.
    pub const BLIZZARD_REDUCTION: u32 = 3;
    pub const BLIZZARD_DAMAGE: (u32, u32) = (10, 16);
    pub const BURN_DAMAGE: u32 = 2;
    pub const INFERNO_HITS: usize = 3;
    pub const INFERNO_DAMAGE: (u32, u32) = (3, 6);
    pub const CHAIN_HITS: (u32, u32) = (2, 4);
    pub const CHAIN_DAMAGE: (u32, u32) = (4, 7);

    /// Resolve a menu choice; anything unrecognized (including empty input)
    /// picks Ice.
    pub fn from_choice(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "2" | "fire" | "firehero" => Self::Fire,
            "3" | "lightning" | "lightninghero" => Self::Lightning,
            _ => Self::Ice,
        }
    }

    /// Menu number used by [`from_choice`](Self::from_choice).
    pub const fn menu_key(&self) -> u8 {
        match self {
            Self::Ice => 1,
            Self::Fire => 2,
            Self::Lightning => 3,
        }
    }

    pub const fn base_hp(&self) -> u32 {
        match self {
            Self::Ice => 40,
            Self::Fire => 36,
            Self::Lightning => 34,
        }
    }

    pub const fn base_attack(&self) -> u32 {
        match self {
            Self::Ice => 6,
            Self::Fire => 8,
            Self::Lightning => 7,
        }
    }

    /// Percent chance the attack passive fires.
    pub const fn passive_chance(&self) -> u32 {
        match self {
            Self::Ice => 25,
            Self::Fire => 30,
            Self::Lightning => 20,
        }
    }

    pub const fn special(&self) -> SpecialKind {
        match self {
            Self::Ice => SpecialKind::Blizzard,
            Self::Fire => SpecialKind::Inferno,
            Self::Lightning => SpecialKind::ChainLightning,
        }
    }

    /// One-line pitch shown in the selection menu.
    pub const fn tagline(&self) -> &'static str {
        match self {
            Self::Ice => "tanky, slows enemies, icy special",
            Self::Fire => "high damage, burn, inferno special",
            Self::Lightning => "fast, chance multi-hit, chain lightning special",
        }
    }
}

/// Named special ability, one per archetype.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecialKind {
    Blizzard,
    Inferno,
    #[strum(serialize = "Chain Lightning")]
    ChainLightning,
}

/// Player-controlled combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hero {
    character: Character,
    archetype: HeroArchetype,
    special_ready: bool,
    passive_chance: u32,
}

impl Hero {
    /// Creates a hero with the archetype's base stats and a ready special.
    pub fn new(archetype: HeroArchetype, name: impl Into<String>) -> Self {
        Self {
            character: Character::new(name, archetype.base_hp(), archetype.base_attack()),
            archetype,
            special_ready: true,
            passive_chance: archetype.passive_chance(),
        }
    }

    /// Override the passive proc chance (clamped to 100).
    pub fn with_passive_chance(mut self, percent: u32) -> Self {
        self.passive_chance = percent.min(100);
        self
    }

    pub fn archetype(&self) -> HeroArchetype {
        self.archetype
    }

    pub fn special(&self) -> SpecialKind {
        self.archetype.special()
    }

    pub fn special_ready(&self) -> bool {
        self.special_ready
    }

    pub fn passive_chance(&self) -> u32 {
        self.passive_chance
    }

    /// Use the archetype special against `target`.
    ///
    /// When the special is on cooldown nothing happens and no randomness is
    /// consumed.
    pub fn use_special<T, R>(&mut self, target: &mut T, rng: &mut R) -> SpecialOutcome
    where
        T: Combatant + ?Sized,
        R: RngOracle + ?Sized,
    {
        if !self.special_ready {
            return SpecialOutcome::NotReady;
        }
        self.special_ready = false;

        match self.archetype {
            HeroArchetype::Ice => {
                let (low, high) = HeroArchetype::BLIZZARD_DAMAGE;
                let strike = target.take_damage(rng.range(low, high));
                let attack_power = target.is_alive().then(|| {
                    target
                        .character_mut()
                        .weaken(HeroArchetype::BLIZZARD_REDUCTION)
                });
                SpecialOutcome::Blizzard {
                    strike,
                    attack_power,
                }
            }
            HeroArchetype::Fire => {
                let (low, high) = HeroArchetype::INFERNO_DAMAGE;
                let strikes = multi_hit(target, HeroArchetype::INFERNO_HITS, low, high, rng);
                SpecialOutcome::Inferno { strikes }
            }
            HeroArchetype::Lightning => {
                let (min_hits, max_hits) = HeroArchetype::CHAIN_HITS;
                let hits = rng.range(min_hits, max_hits) as usize;
                let (low, high) = HeroArchetype::CHAIN_DAMAGE;
                let strikes = multi_hit(target, hits, low, high, rng);
                SpecialOutcome::ChainLightning { strikes }
            }
        }
    }

    /// End-of-round recharge check.
    ///
    /// Returns true if a spent special recharged this round.
    pub fn end_of_round(
        &mut self,
        recharge_chance: u32,
        rng: &mut (impl RngOracle + ?Sized),
    ) -> bool {
        if !self.special_ready && rng.chance(recharge_chance) {
            self.recharge();
            return true;
        }
        false
    }

    /// Make the special available immediately.
    pub fn recharge(&mut self) {
        self.special_ready = true;
    }

    /// Apply a level up: bigger stats, full HP, special ready.
    pub fn level_up(&mut self, max_hp: u32, attack_power: u32) {
        self.character.grow(max_hp, attack_power);
        self.character.restore_full();
        self.recharge();
    }
}

impl Combatant for Hero {
    fn character(&self) -> &Character {
        &self.character
    }

    fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    /// Standard hit followed by the archetype passive roll.
    fn attack<T, R>(&self, target: &mut T, rng: &mut R) -> AttackResult
    where
        T: Combatant + ?Sized,
        R: RngOracle + ?Sized,
    {
        let strike = self.character.attack(target.character_mut(), rng);

        if !target.is_alive() || !rng.chance(self.passive_chance) {
            return AttackResult::plain(strike);
        }

        let passive = match self.archetype {
            HeroArchetype::Ice => PassiveEffect::Freeze {
                attack_power: target
                    .character_mut()
                    .weaken(HeroArchetype::FREEZE_REDUCTION),
            },
            HeroArchetype::Fire => PassiveEffect::Burn {
                strike: target.take_damage(HeroArchetype::BURN_DAMAGE),
            },
            HeroArchetype::Lightning => PassiveEffect::FollowUp {
                strike: target.take_damage(follow_up_damage(strike.damage)),
            },
        };

        AttackResult {
            strike,
            passive: Some(passive),
        }
    }
}

/// Land up to `hits` hits of `low..=high` damage, stopping once the target
/// drops.
fn multi_hit<T, R>(target: &mut T, hits: usize, low: u32, high: u32, rng: &mut R) -> Strikes
where
    T: Combatant + ?Sized,
    R: RngOracle + ?Sized,
{
    let mut strikes = Strikes::new();
    for _ in 0..hits.min(strikes.capacity()) {
        if !target.is_alive() {
            break;
        }
        strikes.push(target.take_damage(rng.range(low, high)));
    }
    strikes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Enemy;
    use crate::env::SequenceRng;
    use strum::IntoEnumIterator;

    // Raw RNG values: 0 = lowest / proc fires, 99 = proc does not fire.
    const PROC: u32 = 0;
    const NO_PROC: u32 = 99;

    fn dummy(hp: u32, attack_power: u32) -> Enemy {
        Enemy::new("Dummy", hp, attack_power)
    }

    #[test]
    fn archetype_base_stats() {
        let stats: Vec<_> = HeroArchetype::iter()
            .map(|archetype| (archetype.base_hp(), archetype.base_attack()))
            .collect();
        assert_eq!(stats, vec![(40, 6), (36, 8), (34, 7)]);
    }

    #[test]
    fn choice_defaults_to_ice() {
        assert_eq!(HeroArchetype::from_choice(""), HeroArchetype::Ice);
        assert_eq!(HeroArchetype::from_choice("1"), HeroArchetype::Ice);
        assert_eq!(HeroArchetype::from_choice(" 2 "), HeroArchetype::Fire);
        assert_eq!(HeroArchetype::from_choice("3"), HeroArchetype::Lightning);
        assert_eq!(HeroArchetype::from_choice("Lightning"), HeroArchetype::Lightning);
        assert_eq!(HeroArchetype::from_choice("9"), HeroArchetype::Ice);
    }

    #[test]
    fn new_hero_has_special_ready() {
        let hero = Hero::new(HeroArchetype::Fire, "Blaze");
        assert!(hero.special_ready());
        assert_eq!(hero.special(), SpecialKind::Inferno);
        assert_eq!(hero.passive_chance(), 30);
        assert_eq!(hero.name(), "Blaze");
    }

    #[test]
    fn ice_attack_freezes_on_proc() {
        let hero = Hero::new(HeroArchetype::Ice, "Frost");
        let mut enemy = dummy(50, 6);
        // damage roll (4 + 0), freeze roll fires
        let mut rng = SequenceRng::new([0, PROC]);
        let result = hero.attack(&mut enemy, &mut rng);
        assert_eq!(result.strike.damage, 4);
        assert_eq!(result.passive, Some(PassiveEffect::Freeze { attack_power: 4 }));
        assert_eq!(enemy.character().attack_power(), 4);
    }

    #[test]
    fn ice_freeze_floors_attack_at_one() {
        let hero = Hero::new(HeroArchetype::Ice, "Frost").with_passive_chance(100);
        let mut enemy = dummy(500, 2);
        let mut rng = SequenceRng::new([0]);
        for _ in 0..3 {
            hero.attack(&mut enemy, &mut rng);
        }
        assert_eq!(enemy.character().attack_power(), 1);
    }

    #[test]
    fn fire_attack_burns_on_proc() {
        let hero = Hero::new(HeroArchetype::Fire, "Blaze");
        let mut enemy = dummy(50, 6);
        // damage roll 6 + 0 = 6, burn fires
        let mut rng = SequenceRng::new([0, PROC]);
        let result = hero.attack(&mut enemy, &mut rng);
        assert_eq!(result.strike.damage, 6);
        assert!(matches!(
            result.passive,
            Some(PassiveEffect::Burn { strike }) if strike.damage == 2
        ));
        assert_eq!(enemy.character().hp(), 42);
        assert_eq!(result.total_damage(), 8);
    }

    #[test]
    fn lightning_follow_up_is_sixty_percent() {
        let hero = Hero::new(HeroArchetype::Lightning, "Volt");
        let mut enemy = dummy(50, 6);
        // damage roll 5 + 4 = 9, follow-up fires for 5
        let mut rng = SequenceRng::new([4, PROC]);
        let result = hero.attack(&mut enemy, &mut rng);
        assert_eq!(result.strike.damage, 9);
        assert!(matches!(
            result.passive,
            Some(PassiveEffect::FollowUp { strike }) if strike.damage == 5
        ));
        assert_eq!(enemy.character().hp(), 36);
    }

    #[test]
    fn passive_skipped_without_proc() {
        let hero = Hero::new(HeroArchetype::Fire, "Blaze");
        let mut enemy = dummy(50, 6);
        let mut rng = SequenceRng::new([0, NO_PROC]);
        let result = hero.attack(&mut enemy, &mut rng);
        assert_eq!(result.passive, None);
        assert_eq!(enemy.character().hp(), 44);
    }

    #[test]
    fn passive_needs_living_target() {
        let hero = Hero::new(HeroArchetype::Lightning, "Volt").with_passive_chance(100);
        let mut enemy = dummy(3, 6);
        let mut rng = SequenceRng::new([0]);
        let result = hero.attack(&mut enemy, &mut rng);
        assert!(result.strike.is_lethal());
        assert_eq!(result.passive, None);
        // only the damage roll was consumed
        assert_eq!(rng.consumed(), 1);
    }

    #[test]
    fn blizzard_hits_and_chills() {
        let mut hero = Hero::new(HeroArchetype::Ice, "Frost");
        let mut enemy = dummy(50, 7);
        let mut rng = SequenceRng::new([6]);
        let outcome = hero.use_special(&mut enemy, &mut rng);
        assert_eq!(
            outcome,
            SpecialOutcome::Blizzard {
                strike: crate::combat::Strike {
                    damage: 16,
                    hp: 34,
                    max_hp: 50
                },
                attack_power: Some(4),
            }
        );
        assert!(!hero.special_ready());
    }

    #[test]
    fn blizzard_chill_floors_attack_at_one() {
        let mut hero = Hero::new(HeroArchetype::Ice, "Frost");
        let mut enemy = dummy(50, 2);
        let outcome = hero.use_special(&mut enemy, &mut SequenceRng::new([0]));
        assert!(matches!(
            outcome,
            SpecialOutcome::Blizzard {
                attack_power: Some(1),
                ..
            }
        ));
        assert_eq!(enemy.character().attack_power(), 1);
    }

    #[test]
    fn inferno_lands_three_hits() {
        let mut hero = Hero::new(HeroArchetype::Fire, "Blaze");
        let mut enemy = dummy(50, 7);
        let mut rng = SequenceRng::new([0, 1, 3]);
        let outcome = hero.use_special(&mut enemy, &mut rng);
        let SpecialOutcome::Inferno { strikes } = &outcome else {
            panic!("expected inferno, got {outcome:?}");
        };
        let damage: Vec<u32> = strikes.iter().map(|strike| strike.damage).collect();
        assert_eq!(damage, vec![3, 4, 6]);
        assert_eq!(enemy.character().hp(), 37);
    }

    #[test]
    fn chain_lightning_rolls_hit_count() {
        let mut hero = Hero::new(HeroArchetype::Lightning, "Volt");
        let mut enemy = dummy(80, 7);
        // hit count 2 + 2 = 4, then four damage rolls of 4 + 3 = 7
        let mut rng = SequenceRng::new([2, 3, 3, 3, 3]);
        let outcome = hero.use_special(&mut enemy, &mut rng);
        let SpecialOutcome::ChainLightning { strikes } = &outcome else {
            panic!("expected chain lightning, got {outcome:?}");
        };
        assert_eq!(strikes.len(), 4);
        assert_eq!(outcome.total_damage(), 28);
        assert_eq!(enemy.character().hp(), 52);
    }

    #[test]
    fn multi_hit_stops_when_target_drops() {
        let mut hero = Hero::new(HeroArchetype::Fire, "Blaze");
        let mut enemy = dummy(5, 7);
        let mut rng = SequenceRng::new([3]);
        let outcome = hero.use_special(&mut enemy, &mut rng);
        let SpecialOutcome::Inferno { strikes } = &outcome else {
            panic!("expected inferno, got {outcome:?}");
        };
        assert_eq!(strikes.len(), 1);
        assert!(!enemy.is_alive());
    }

    #[test]
    fn special_on_cooldown_is_a_no_op() {
        let mut hero = Hero::new(HeroArchetype::Ice, "Frost");
        let mut enemy = dummy(50, 7);
        let mut rng = SequenceRng::new([0]);
        hero.use_special(&mut enemy, &mut rng);
        let hp_after_first = enemy.character().hp();
        let consumed = rng.consumed();

        let outcome = hero.use_special(&mut enemy, &mut rng);
        assert_eq!(outcome, SpecialOutcome::NotReady);
        assert_eq!(enemy.character().hp(), hp_after_first);
        assert_eq!(rng.consumed(), consumed);
        assert!(!hero.special_ready());
    }

    #[test]
    fn recharge_only_when_spent() {
        let mut hero = Hero::new(HeroArchetype::Ice, "Frost");
        let mut rng = SequenceRng::new([PROC]);
        assert!(!hero.end_of_round(25, &mut rng));
        assert_eq!(rng.consumed(), 0);

        hero.use_special(&mut dummy(50, 5), &mut rng);
        let mut rng = SequenceRng::new([NO_PROC, PROC]);
        assert!(!hero.end_of_round(25, &mut rng));
        assert!(!hero.special_ready());
        assert!(hero.end_of_round(25, &mut rng));
        assert!(hero.special_ready());
    }

    #[test]
    fn level_up_restores_and_recharges() {
        let mut hero = Hero::new(HeroArchetype::Lightning, "Volt");
        hero.take_damage(20);
        hero.use_special(&mut dummy(50, 5), &mut SequenceRng::new([0]));

        hero.level_up(6, 2);

        assert_eq!(hero.character().max_hp(), 40);
        assert_eq!(hero.character().hp(), 40);
        assert_eq!(hero.character().attack_power(), 9);
        assert!(hero.special_ready());
    }
}
