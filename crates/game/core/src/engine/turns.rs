use crate::action::PlayerAction;
use crate::character::{Combatant, SpecialKind};
use crate::combat::{AttackResult, PassiveEffect, SpecialOutcome, Strike};
use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::event::CombatEvent;

use super::{Battle, BattleError, BattlePhase};

/// Turn sequencing for [`Battle`].
impl Battle<'_> {
    /// Resolve the player's action for this round.
    ///
    /// The enemy turn is skipped when the action leaves the enemy at 0 HP.
    pub fn submit(
        &mut self,
        action: PlayerAction,
        rng: &mut (impl RngOracle + ?Sized),
    ) -> Result<BattlePhase, BattleError> {
        if self.phase != BattlePhase::PlayerTurn {
            return Err(BattleError::NotPlayerTurn { phase: self.phase });
        }

        self.resolve_player_action(action, rng);

        self.phase = if self.enemy.is_alive() {
            BattlePhase::EnemyTurn
        } else {
            BattlePhase::RoundEnd
        };
        Ok(self.phase)
    }

    /// Run the next non-player step: the enemy turn or the round end.
    pub fn advance(
        &mut self,
        rng: &mut (impl RngOracle + ?Sized),
    ) -> Result<BattlePhase, BattleError> {
        match self.phase {
            BattlePhase::PlayerTurn => return Err(BattleError::AwaitingPlayer),
            BattlePhase::Finished(outcome) => {
                return Err(BattleError::AlreadyFinished { outcome });
            }
            BattlePhase::EnemyTurn => {
                self.resolve_enemy_turn(rng);
                self.phase = BattlePhase::RoundEnd;
            }
            BattlePhase::RoundEnd => self.end_round(rng),
        }
        Ok(self.phase)
    }

    fn resolve_player_action(&mut self, action: PlayerAction, rng: &mut (impl RngOracle + ?Sized)) {
        match action {
            PlayerAction::Attack => {
                let result = self.hero.attack(&mut self.enemy, rng);
                self.record_hero_attack(result);
            }
            PlayerAction::Special => {
                let outcome = self.hero.use_special(&mut self.enemy, rng);
                self.record_special(outcome);
            }
            PlayerAction::Heal => {
                let (low, high) = GameConfig::HEAL_ACTION_RANGE;
                let amount = self.hero.heal(rng.range(low, high));
                let hero = self.hero.character();
                self.events.push(CombatEvent::Healed {
                    name: hero.name().to_owned(),
                    amount,
                    hp: hero.hp(),
                    max_hp: hero.max_hp(),
                });
            }
            PlayerAction::Status => {
                let event = CombatEvent::StatusReport {
                    hero: self.hero.status(),
                    special_ready: self.hero.special_ready(),
                    enemy: self.enemy.status(),
                };
                self.events.push(event);
            }
            PlayerAction::Fumble => {
                self.events.push(CombatEvent::Fumbled {
                    hero: self.hero.name().to_owned(),
                });
            }
        }
    }

    /// 15% heavy blow (attack power + 2-4 flat), otherwise a standard attack.
    fn resolve_enemy_turn(&mut self, rng: &mut (impl RngOracle + ?Sized)) {
        let attacker = self.enemy.name().to_owned();
        let target = self.hero.name().to_owned();
        self.events.push(CombatEvent::EnemyTurnStarted {
            enemy: attacker.clone(),
        });

        if rng.chance(self.config.heavy_blow_chance) {
            let (low, high) = GameConfig::HEAVY_BLOW_BONUS;
            let damage = self.enemy.character().attack_power() + rng.range(low, high);
            let strike = self.hero.take_damage(damage);
            self.events.push(CombatEvent::HeavyBlow {
                attacker,
                target,
                strike,
            });
        } else {
            let result = self.enemy.attack(&mut *self.hero, rng);
            self.events.push(CombatEvent::Attacked {
                attacker,
                target,
                strike: result.strike,
            });
        }
    }

    /// Recharge check, then defeat check (hero first).
    fn end_round(&mut self, rng: &mut (impl RngOracle + ?Sized)) {
        if self
            .hero
            .end_of_round(self.config.special_recharge_chance, rng)
        {
            self.events.push(CombatEvent::SpecialRecharged {
                hero: self.hero.name().to_owned(),
                special: self.hero.special(),
            });
        }

        match self.decided() {
            Some(outcome) => self.finish(outcome),
            None => {
                self.events
                    .push(CombatEvent::RoundEnded { round: self.round });
                self.round += 1;
                self.phase = BattlePhase::PlayerTurn;
            }
        }
    }

    fn record_hero_attack(&mut self, result: AttackResult) {
        let hero = self.hero.name().to_owned();
        let target = self.enemy.name().to_owned();

        self.events.push(CombatEvent::Attacked {
            attacker: hero.clone(),
            target: target.clone(),
            strike: result.strike,
        });

        let Some(passive) = result.passive else {
            return;
        };
        let event = match passive {
            PassiveEffect::Freeze { attack_power } => CombatEvent::Frozen {
                hero,
                target,
                attack_power,
            },
            PassiveEffect::Burn { strike } => CombatEvent::Burned { target, strike },
            PassiveEffect::FollowUp { strike } => CombatEvent::FollowUp {
                hero,
                target,
                strike,
            },
        };
        self.events.push(event);
    }

    fn record_special(&mut self, outcome: SpecialOutcome) {
        let hero = self.hero.name().to_owned();
        let special = self.hero.special();
        let target = self.enemy.name().to_owned();

        if !outcome.fired() {
            self.events
                .push(CombatEvent::SpecialNotReady { hero, special });
            return;
        }
        self.events.push(CombatEvent::SpecialUsed { hero, special });

        match outcome {
            SpecialOutcome::NotReady => {}
            SpecialOutcome::Blizzard {
                strike,
                attack_power,
            } => {
                self.push_special_hits(special, &target, &[strike]);
                if let Some(attack_power) = attack_power {
                    self.events.push(CombatEvent::Chilled {
                        target,
                        attack_power,
                    });
                }
            }
            SpecialOutcome::Inferno { strikes } | SpecialOutcome::ChainLightning { strikes } => {
                self.push_special_hits(special, &target, &strikes);
            }
        }
    }

    fn push_special_hits(&mut self, special: SpecialKind, target: &str, strikes: &[Strike]) {
        for (index, strike) in strikes.iter().enumerate() {
            self.events.push(CombatEvent::SpecialHit {
                special,
                target: target.to_owned(),
                hit: index as u8 + 1,
                strike: *strike,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::action::PlayerAction;
    use crate::character::{Combatant, Enemy, Hero, HeroArchetype};
    use crate::config::GameConfig;
    use crate::engine::{Battle, BattleError, BattleOutcome, BattlePhase};
    use crate::env::{PcgRng, SequenceRng};
    use crate::event::CombatEvent;

    const PROC: u32 = 0;
    const NO_PROC: u32 = 99;

    fn no_heavy_blows() -> GameConfig {
        GameConfig::default().with_heavy_blow_chance(0)
    }

    #[test]
    fn new_battle_announces_enemy() {
        let mut hero = Hero::new(HeroArchetype::Ice, "Frost");
        let config = GameConfig::default();
        let mut battle = Battle::new(&mut hero, Enemy::new("Creep", 30, 5), &config);

        assert_eq!(battle.phase(), BattlePhase::PlayerTurn);
        assert_eq!(battle.round(), 1);
        let events = battle.take_events();
        assert!(matches!(
            &events[..],
            [CombatEvent::EnemyAppeared { enemy }] if enemy.name == "Creep" && enemy.hp == 30
        ));
        assert!(battle.take_events().is_empty());
    }

    #[test]
    fn phases_cycle_through_a_round() {
        let mut hero = Hero::new(HeroArchetype::Ice, "Frost").with_passive_chance(0);
        let config = no_heavy_blows().with_special_recharge_chance(0);
        let mut battle = Battle::new(&mut hero, Enemy::new("Creep", 30, 5), &config);
        let mut rng = SequenceRng::new([0]);

        assert_eq!(
            battle.submit(PlayerAction::Attack, &mut rng),
            Ok(BattlePhase::EnemyTurn)
        );
        assert_eq!(battle.advance(&mut rng), Ok(BattlePhase::RoundEnd));
        assert_eq!(battle.advance(&mut rng), Ok(BattlePhase::PlayerTurn));
        assert_eq!(battle.round(), 2);
    }

    #[test]
    fn out_of_order_calls_are_rejected() {
        let mut hero = Hero::new(HeroArchetype::Ice, "Frost");
        let config = GameConfig::default();
        let mut battle = Battle::new(&mut hero, Enemy::new("Creep", 30, 5), &config);
        let mut rng = SequenceRng::new([0]);

        assert_eq!(battle.advance(&mut rng), Err(BattleError::AwaitingPlayer));
        battle.submit(PlayerAction::Status, &mut rng).unwrap();
        assert_eq!(
            battle.submit(PlayerAction::Attack, &mut rng),
            Err(BattleError::NotPlayerTurn {
                phase: BattlePhase::EnemyTurn
            })
        );
    }

    #[test]
    fn killing_blow_skips_enemy_turn() {
        let mut hero = Hero::new(HeroArchetype::Fire, "Blaze");
        let config = GameConfig::default();
        let mut battle = Battle::new(&mut hero, Enemy::new("Creep", 3, 5), &config);
        let mut rng = SequenceRng::new([0]);

        assert_eq!(
            battle.submit(PlayerAction::Attack, &mut rng),
            Ok(BattlePhase::RoundEnd)
        );
        assert_eq!(
            battle.advance(&mut rng),
            Ok(BattlePhase::Finished(BattleOutcome::Victory))
        );
        assert_eq!(battle.outcome(), Some(BattleOutcome::Victory));
        assert_eq!(
            battle.advance(&mut rng),
            Err(BattleError::AlreadyFinished {
                outcome: BattleOutcome::Victory
            })
        );
        let events = battle.take_events();
        assert!(matches!(
            events.last(),
            Some(CombatEvent::BattleEnded {
                outcome: BattleOutcome::Victory,
                rounds: 1,
                ..
            })
        ));
    }

    #[test]
    fn status_and_fumble_cost_the_turn() {
        let mut hero = Hero::new(HeroArchetype::Ice, "Frost");
        let config = no_heavy_blows();
        let mut battle = Battle::new(&mut hero, Enemy::new("Creep", 30, 5), &config);
        let mut rng = SequenceRng::new([0]);
        battle.take_events();

        battle.submit(PlayerAction::Status, &mut rng).unwrap();
        assert_eq!(battle.phase(), BattlePhase::EnemyTurn);
        assert_eq!(battle.enemy().character().hp(), 30);
        assert!(matches!(
            battle.take_events()[..],
            [CombatEvent::StatusReport {
                special_ready: true,
                ..
            }]
        ));

        battle.advance(&mut rng).unwrap();
        battle.advance(&mut rng).unwrap();
        battle.submit(PlayerAction::Fumble, &mut rng).unwrap();
        assert_eq!(battle.enemy().character().hp(), 30);
        assert_eq!(battle.phase(), BattlePhase::EnemyTurn);
    }

    #[test]
    fn heal_action_restores_hp() {
        let mut hero = Hero::new(HeroArchetype::Ice, "Frost");
        hero.take_damage(20);
        let config = GameConfig::default();
        let mut battle = Battle::new(&mut hero, Enemy::new("Creep", 30, 5), &config);
        battle.take_events();
        // heal roll 6 + 4 = 10
        let mut rng = SequenceRng::new([4]);

        battle.submit(PlayerAction::Heal, &mut rng).unwrap();

        assert_eq!(battle.hero().character().hp(), 30);
        assert_eq!(
            battle.take_events(),
            vec![CombatEvent::Healed {
                name: "Frost".into(),
                amount: 10,
                hp: 30,
                max_hp: 40,
            }]
        );
    }

    #[test]
    fn heavy_blow_adds_flat_bonus() {
        let mut hero = Hero::new(HeroArchetype::Ice, "Frost");
        let config = GameConfig::default().with_heavy_blow_chance(100);
        let mut battle = Battle::new(&mut hero, Enemy::new("Creep", 30, 5), &config);
        // player: status. enemy: heavy blow proc, bonus 2 + 2 = 4
        let mut rng = SequenceRng::new([PROC, 2]);
        battle.submit(PlayerAction::Status, &mut rng).unwrap();
        battle.take_events();

        battle.advance(&mut rng).unwrap();

        assert_eq!(battle.hero().character().hp(), 31);
        assert!(matches!(
            &battle.take_events()[..],
            [CombatEvent::EnemyTurnStarted { enemy }, CombatEvent::HeavyBlow { strike, .. }]
                if enemy == "Creep" && strike.damage == 9
        ));
    }

    #[test]
    fn enemy_turn_is_marked_even_when_names_match() {
        let mut hero = Hero::new(HeroArchetype::Ice, "Creep").with_passive_chance(0);
        let config = no_heavy_blows();
        let mut battle = Battle::new(&mut hero, Enemy::new("Creep", 30, 5), &config);
        let mut rng = SequenceRng::new([0]);
        battle.take_events();

        battle.submit(PlayerAction::Attack, &mut rng).unwrap();
        assert!(matches!(
            battle.take_events()[..],
            [CombatEvent::Attacked { .. }]
        ));

        battle.advance(&mut rng).unwrap();
        let events = battle.take_events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], CombatEvent::EnemyTurnStarted { .. }));
        assert!(matches!(events[1], CombatEvent::Attacked { .. }));
    }

    #[test]
    fn special_on_cooldown_leaves_enemy_untouched() {
        let mut hero = Hero::new(HeroArchetype::Lightning, "Volt");
        let config = no_heavy_blows().with_special_recharge_chance(0);
        let mut battle = Battle::new(&mut hero, Enemy::new("Creep", 200, 5), &config);
        let mut rng = SequenceRng::new([0]);

        battle.submit(PlayerAction::Special, &mut rng).unwrap();
        battle.advance(&mut rng).unwrap();
        battle.advance(&mut rng).unwrap();
        let hp = battle.enemy().character().hp();
        assert!(!battle.hero().special_ready());
        battle.take_events();

        battle.submit(PlayerAction::Special, &mut rng).unwrap();

        assert_eq!(battle.enemy().character().hp(), hp);
        assert!(!battle.hero().special_ready());
        assert!(matches!(
            battle.take_events()[..],
            [CombatEvent::SpecialNotReady { .. }]
        ));
    }

    #[test]
    fn spent_special_can_recharge_at_round_end() {
        let mut hero = Hero::new(HeroArchetype::Ice, "Frost");
        let config = no_heavy_blows().with_special_recharge_chance(100);
        let mut battle = Battle::new(&mut hero, Enemy::new("Creep", 200, 5), &config);
        let mut rng = SequenceRng::new([0, NO_PROC]);

        battle.submit(PlayerAction::Special, &mut rng).unwrap();
        assert!(!battle.hero().special_ready());
        battle.advance(&mut rng).unwrap();
        battle.advance(&mut rng).unwrap();

        assert!(battle.hero().special_ready());
        let events = battle.take_events();
        assert!(
            events
                .iter()
                .any(|event| matches!(event, CombatEvent::SpecialRecharged { .. }))
        );
    }

    #[test]
    fn hero_defeat_ends_battle() {
        let mut hero = Hero::new(HeroArchetype::Lightning, "Volt");
        hero.take_damage(33);
        let config = no_heavy_blows();
        let mut battle = Battle::new(&mut hero, Enemy::new("Creep", 50, 5), &config);
        let mut rng = SequenceRng::new([0]);

        battle.submit(PlayerAction::Status, &mut rng).unwrap();
        battle.advance(&mut rng).unwrap();
        assert_eq!(
            battle.advance(&mut rng),
            Ok(BattlePhase::Finished(BattleOutcome::Defeat))
        );
    }

    #[test]
    fn attack_only_battle_terminates() {
        let config = GameConfig::default();
        for seed in 0..200 {
            let mut rng = PcgRng::seeded(seed);
            let mut hero = Hero::new(HeroArchetype::Ice, "Frost");
            let enemy = Enemy::random(1, &mut rng);
            let mut battle = Battle::new(&mut hero, enemy, &config);

            while !battle.is_finished() {
                if battle.phase() == BattlePhase::PlayerTurn {
                    battle.submit(PlayerAction::Attack, &mut rng).unwrap();
                } else {
                    battle.advance(&mut rng).unwrap();
                }
            }
            assert!(battle.round() <= 50, "seed {seed} took {} rounds", battle.round());
        }
    }

    #[test]
    fn dead_hero_cannot_start_a_battle() {
        let mut hero = Hero::new(HeroArchetype::Ice, "Frost");
        hero.take_damage(100);
        let config = GameConfig::default();
        let battle = Battle::new(&mut hero, Enemy::new("Creep", 30, 5), &config);
        assert_eq!(battle.outcome(), Some(BattleOutcome::Defeat));
    }
}
