//! Abstraction for sourcing player intent.
//!
//! Runtime users plug in [`ActionProvider`] implementations so battles can
//! run with human input, scripted fixtures, or simple policies.
use std::collections::VecDeque;

use arena_core::{BattleView, PlayerAction, SessionView};

use super::errors::{Result, RuntimeError};

/// Trait for providing the hero's decisions.
///
/// Different implementations can handle:
/// - Player input (from the CLI)
/// - Scripted actions for tests
/// - Fixed policies such as "always attack"
pub trait ActionProvider {
    /// Choose the hero's action for the current player turn.
    fn provide_action(&mut self, view: &BattleView) -> Result<PlayerAction>;

    /// Decide whether to fight again after a victory.
    fn confirm_continue(&mut self, _session: &SessionView) -> Result<bool> {
        Ok(true)
    }
}

impl<P: ActionProvider + ?Sized> ActionProvider for &mut P {
    fn provide_action(&mut self, view: &BattleView) -> Result<PlayerAction> {
        (**self).provide_action(view)
    }

    fn confirm_continue(&mut self, session: &SessionView) -> Result<bool> {
        (**self).confirm_continue(session)
    }
}

impl<P: ActionProvider + ?Sized> ActionProvider for Box<P> {
    fn provide_action(&mut self, view: &BattleView) -> Result<PlayerAction> {
        (**self).provide_action(view)
    }

    fn confirm_continue(&mut self, session: &SessionView) -> Result<bool> {
        (**self).confirm_continue(session)
    }
}

/// Always attacks and always fights on.
/// Useful for testing or as a fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct AttackActionProvider;

impl ActionProvider for AttackActionProvider {
    fn provide_action(&mut self, _view: &BattleView) -> Result<PlayerAction> {
        Ok(PlayerAction::Attack)
    }
}

/// Replays a fixed list of actions and continue answers.
///
/// Once the action script is used up, the provider either repeats the
/// configured fallback or fails with [`RuntimeError::ScriptExhausted`].
/// Continue prompts behave the same way with their own fallback.
#[derive(Debug, Default, Clone)]
pub struct ScriptedActionProvider {
    actions: VecDeque<PlayerAction>,
    continues: VecDeque<bool>,
    fallback_action: Option<PlayerAction>,
    fallback_continue: Option<bool>,
    served: usize,
}

impl ScriptedActionProvider {
    pub fn new(actions: impl IntoIterator<Item = PlayerAction>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Answers for successive continue prompts.
    pub fn with_continues(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.continues = answers.into_iter().collect();
        self
    }

    /// Action to repeat after the script runs out.
    pub fn then_repeat(mut self, action: PlayerAction) -> Self {
        self.fallback_action = Some(action);
        self
    }

    /// Answer to give after the continue script runs out.
    pub fn then_continue(mut self, answer: bool) -> Self {
        self.fallback_continue = Some(answer);
        self
    }

    /// Number of actions handed out so far.
    pub fn served(&self) -> usize {
        self.served
    }

    /// Scripted actions not yet handed out.
    pub fn remaining(&self) -> usize {
        self.actions.len()
    }
}

impl ActionProvider for ScriptedActionProvider {
    fn provide_action(&mut self, _view: &BattleView) -> Result<PlayerAction> {
        let action = self
            .actions
            .pop_front()
            .or(self.fallback_action)
            .ok_or(RuntimeError::ScriptExhausted { what: "actions" })?;
        self.served += 1;
        Ok(action)
    }

    fn confirm_continue(&mut self, _session: &SessionView) -> Result<bool> {
        self.continues
            .pop_front()
            .or(self.fallback_continue)
            .ok_or(RuntimeError::ScriptExhausted {
                what: "continue answers",
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{Combatant, CombatantStatus, Enemy, Hero, HeroArchetype, SpecialKind};

    fn view() -> BattleView {
        let hero = Hero::new(HeroArchetype::Ice, "Frost");
        let enemy = Enemy::new("Creep", 20, 4);
        BattleView {
            round: 1,
            hero: CombatantStatus::of(hero.character()),
            special: SpecialKind::Blizzard,
            special_ready: true,
            enemy: CombatantStatus::of(enemy.character()),
        }
    }

    fn session() -> SessionView {
        SessionView {
            level: 1,
            experience: 0,
            victories: 1,
            hp: 30,
            max_hp: 40,
        }
    }

    #[test]
    fn attack_provider_always_attacks() {
        let mut provider = AttackActionProvider;
        for _ in 0..3 {
            assert_eq!(provider.provide_action(&view()).unwrap(), PlayerAction::Attack);
        }
        assert!(provider.confirm_continue(&session()).unwrap());
    }

    #[test]
    fn script_is_replayed_in_order() {
        let mut provider =
            ScriptedActionProvider::new([PlayerAction::Special, PlayerAction::Heal]);
        assert_eq!(provider.provide_action(&view()).unwrap(), PlayerAction::Special);
        assert_eq!(provider.provide_action(&view()).unwrap(), PlayerAction::Heal);
        assert_eq!(provider.served(), 2);
        assert!(matches!(
            provider.provide_action(&view()),
            Err(RuntimeError::ScriptExhausted { what: "actions" })
        ));
    }

    #[test]
    fn fallback_repeats_after_script() {
        let mut provider = ScriptedActionProvider::new([PlayerAction::Status])
            .then_repeat(PlayerAction::Attack);
        assert_eq!(provider.provide_action(&view()).unwrap(), PlayerAction::Status);
        assert_eq!(provider.provide_action(&view()).unwrap(), PlayerAction::Attack);
        assert_eq!(provider.provide_action(&view()).unwrap(), PlayerAction::Attack);
        assert_eq!(provider.remaining(), 0);
    }

    #[test]
    fn continue_answers_follow_script() {
        let mut provider = ScriptedActionProvider::default()
            .with_continues([true, false])
            .then_continue(true);
        assert!(provider.confirm_continue(&session()).unwrap());
        assert!(!provider.confirm_continue(&session()).unwrap());
        assert!(provider.confirm_continue(&session()).unwrap());
    }

    #[test]
    fn missing_continue_answer_is_an_error() {
        let mut provider = ScriptedActionProvider::default();
        assert!(matches!(
            provider.confirm_continue(&session()),
            Err(RuntimeError::ScriptExhausted { .. })
        ));
    }

    #[test]
    fn borrowed_provider_forwards() {
        fn first_action(mut provider: impl ActionProvider) -> PlayerAction {
            provider.provide_action(&view()).unwrap()
        }

        let mut inner = ScriptedActionProvider::new([PlayerAction::Heal]);
        assert_eq!(first_action(&mut inner), PlayerAction::Heal);
        assert_eq!(inner.served(), 1);
    }
}
