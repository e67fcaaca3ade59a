//! High-level runtime orchestrator.
//!
//! The runtime owns the random source and the player's action provider,
//! steps the core battle state machine, and chains battles into a session.
//! Every event produced along the way is forwarded to the caller's
//! [`EventObserver`] in order.

use arena_core::{
    BattleOutcome, BattlePhase, Combatant, Enemy, GameConfig, PcgRng, ProgressEvent, RngOracle,
    Session, SessionEnd,
};
use tracing::{debug, info};

use crate::api::{ActionProvider, Result, RuntimeError};
use crate::events::{Event, EventObserver};

/// Runtime configuration shared across battles.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Fixed seed for reproducible runs; a fresh one is drawn when absent.
    pub seed: Option<u64>,
}

/// Final counters of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub level: u32,
    pub experience: u32,
    pub victories: u32,
    pub end: SessionEnd,
}

/// Main runtime that drives battles and sessions.
pub struct Runtime {
    config: RuntimeConfig,
    seed: Option<u64>,
    rng: Box<dyn RngOracle>,
    player_provider: Option<Box<dyn ActionProvider>>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Seed of the built-in generator, `None` when a custom RNG was supplied.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Set the player action provider
    pub fn set_player_provider(&mut self, provider: impl ActionProvider + 'static) {
        self.player_provider = Some(Box::new(provider));
    }

    /// Fight one battle between the session's hero and `enemy`.
    ///
    /// Combat events are forwarded as they are produced. The hero's HP,
    /// special cooldown and any attack reductions carry over into the
    /// session afterwards.
    pub fn run_battle(
        &mut self,
        session: &mut Session,
        enemy: Enemy,
        observer: &mut impl EventObserver,
    ) -> Result<BattleOutcome> {
        let provider = self
            .player_provider
            .as_mut()
            .ok_or(RuntimeError::ProviderNotSet)?;
        let rng = &mut *self.rng;
        let config = &self.config.game_config;

        info!(
            enemy = enemy.character().name(),
            hp = enemy.character().hp(),
            attack = enemy.character().attack_power(),
            "battle started"
        );
        let mut battle = session.battle(enemy, config);

        loop {
            for event in battle.take_events() {
                observer.on_event(&Event::Combat(event))?;
            }

            match battle.phase() {
                BattlePhase::Finished(outcome) => {
                    info!(%outcome, rounds = battle.round(), "battle finished");
                    return Ok(outcome);
                }
                BattlePhase::PlayerTurn => {
                    let action = provider.provide_action(&battle.view())?;
                    debug!(round = battle.round(), %action, "player action");
                    battle.submit(action, rng)?;
                }
                phase => {
                    debug!(round = battle.round(), %phase, "advancing");
                    battle.advance(rng)?;
                }
            }
        }
    }

    /// Keep fighting until the hero falls or the provider declines to
    /// continue after a win.
    pub fn run_session(
        &mut self,
        session: &mut Session,
        observer: &mut impl EventObserver,
    ) -> Result<SessionSummary> {
        if self.player_provider.is_none() {
            return Err(RuntimeError::ProviderNotSet);
        }
        info!(
            hero = session.hero().character().name(),
            archetype = %session.hero().archetype(),
            seed = ?self.seed,
            "session started"
        );

        let end = loop {
            if session.is_over() {
                break SessionEnd::Defeated;
            }

            emit(
                observer,
                ProgressEvent::LevelStarted {
                    level: session.level(),
                    experience: session.experience(),
                },
            )?;
            let enemy = session.spawn_enemy(&mut *self.rng);
            let outcome = self.run_battle(session, enemy, observer)?;
            if !outcome.is_victory() {
                break SessionEnd::Defeated;
            }

            for event in session.record_victory(&self.config.game_config, &mut *self.rng) {
                if let ProgressEvent::LevelUp { level, .. } = event {
                    info!(level, "level up");
                }
                emit(observer, event)?;
            }

            let view = session.view();
            let proceed = match self.player_provider.as_mut() {
                Some(provider) => provider.confirm_continue(&view)?,
                None => return Err(RuntimeError::ProviderNotSet),
            };
            if !proceed {
                break SessionEnd::Retired;
            }
        };

        emit(observer, session.end(end))?;
        let summary = SessionSummary {
            level: session.level(),
            experience: session.experience(),
            victories: session.victories(),
            end,
        };
        info!(
            %end,
            level = summary.level,
            victories = summary.victories,
            "session finished"
        );
        Ok(summary)
    }
}

fn emit(observer: &mut impl EventObserver, event: ProgressEvent) -> Result<()> {
    observer.on_event(&Event::Progress(event))
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    rng: Option<Box<dyn RngOracle>>,
    player_provider: Option<Box<dyn ActionProvider>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            rng: None,
            player_provider: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Override only the rule parameters
    pub fn game_config(mut self, game_config: GameConfig) -> Self {
        self.config.game_config = game_config;
        self
    }

    /// Seed the built-in PCG generator
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Use a custom random source instead of the seeded generator
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Set player action provider (optional, may be set later)
    pub fn player_provider(mut self, provider: impl ActionProvider + 'static) -> Self {
        self.player_provider = Some(Box::new(provider));
        self
    }

    /// Build the runtime
    pub fn build(self) -> Runtime {
        let (seed, rng) = match self.rng {
            Some(rng) => (None, rng),
            None => {
                let seed = self.config.seed.unwrap_or_else(rand::random);
                (
                    Some(seed),
                    Box::new(PcgRng::seeded(seed)) as Box<dyn RngOracle>,
                )
            }
        };

        Runtime {
            config: self.config,
            seed,
            rng,
            player_provider: self.player_provider,
        }
    }
}
