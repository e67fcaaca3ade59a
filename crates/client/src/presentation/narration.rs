//! Turns the runtime event stream into what the player reads.
use std::io::Write;
use std::thread;
use std::time::Duration;

use arena_core::{BattleOutcome, CombatEvent, ProgressEvent, SessionEnd, SpecialKind, Strike};
use arena_runtime::{Event, EventObserver, Result, RuntimeError, Topic};
use serde_json::json;

use crate::config::NarrationMode;

/// Event observer that writes one block of text (or one JSON line) per event.
pub struct Narrator<W> {
    writer: W,
    mode: NarrationMode,
    round_delay: Duration,
}

impl<W: Write> Narrator<W> {
    pub fn new(writer: W, mode: NarrationMode) -> Self {
        Self {
            writer,
            mode,
            round_delay: Duration::ZERO,
        }
    }

    /// Pause after every finished round.
    pub fn with_round_delay(mut self, delay: Duration) -> Self {
        self.round_delay = delay;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Text for one event, `None` for events that only pace the output.
    pub fn render(&self, event: &Event) -> Option<String> {
        match event {
            Event::Combat(event) => self.render_combat(event),
            Event::Progress(event) => render_progress(event),
        }
    }

    fn render_combat(&self, event: &CombatEvent) -> Option<String> {
        let text = match event {
            CombatEvent::EnemyAppeared { enemy } => format!(
                "\nA wild {} appears! (HP: {}, Atk: {})",
                enemy.name, enemy.hp, enemy.attack_power
            ),
            CombatEvent::EnemyTurnStarted { .. } => "\n-- Enemy Turn --".to_owned(),
            CombatEvent::Attacked {
                attacker,
                target,
                strike,
            } => format!(
                "{attacker} attacks {target} for {} damage.\n{}",
                strike.damage,
                takes(target, strike)
            ),
            CombatEvent::HeavyBlow {
                attacker,
                target,
                strike,
            } => format!(
                "{attacker} uses a heavy blow for {} damage!\n{}",
                strike.damage,
                takes(target, strike)
            ),
            CombatEvent::Frozen {
                hero,
                target,
                attack_power,
            } => format!(
                "  ❄️ {hero} froze {target}! {target}'s attack power reduced to {attack_power}."
            ),
            CombatEvent::Burned { target, strike } => format!(
                "  🔥 {target} is burning for {} extra damage!\n{}",
                strike.damage,
                takes(target, strike)
            ),
            CombatEvent::FollowUp {
                hero,
                target,
                strike,
            } => format!(
                "  ⚡ Quick follow-up! {hero} hits again for {}.\n{}",
                strike.damage,
                takes(target, strike)
            ),
            CombatEvent::SpecialUsed { hero, special } => match special {
                SpecialKind::Blizzard => format!("{hero} calls down a {special}! ❄️"),
                SpecialKind::Inferno => format!("{hero} unleashes {special}! 🔥🔥"),
                SpecialKind::ChainLightning => format!("{hero} fires {special}! ⚡"),
            },
            CombatEvent::SpecialNotReady { hero, special } => {
                format!("{hero}'s special {special} is not ready!")
            }
            CombatEvent::SpecialHit {
                special,
                target,
                hit,
                strike,
            } => match special {
                SpecialKind::Blizzard => takes(target, strike),
                SpecialKind::Inferno => format!(
                    "  Inferno hit {hit} deals {} damage.\n{}",
                    strike.damage,
                    takes(target, strike)
                ),
                SpecialKind::ChainLightning => format!(
                    "  Chain lightning strike {hit}: {} damage.\n{}",
                    strike.damage,
                    takes(target, strike)
                ),
            },
            CombatEvent::Chilled {
                target,
                attack_power,
            } => format!("  {target} is heavily chilled! Attack lowered to {attack_power}."),
            CombatEvent::Healed {
                name,
                amount,
                hp,
                max_hp,
            } => heals(name, *amount, *hp, *max_hp),
            CombatEvent::StatusReport {
                hero,
                special_ready,
                enemy,
            } => format!(
                "{}: HP {}/{}  Special: {}\n{}: HP {}/{}  Attack: {}",
                hero.name,
                hero.hp,
                hero.max_hp,
                if *special_ready { "Ready" } else { "Cooldown" },
                enemy.name,
                enemy.hp,
                enemy.max_hp,
                enemy.attack_power
            ),
            CombatEvent::Fumbled { .. } => "Invalid! You fumble and lose your turn!".to_owned(),
            CombatEvent::SpecialRecharged { hero, special } => {
                format!("{hero}'s special {special} recharged!")
            }
            CombatEvent::RoundEnded { .. } => return None,
            CombatEvent::BattleEnded { outcome, enemy, .. } => match outcome {
                BattleOutcome::Victory => format!("\n🎉 {enemy} defeated!"),
                BattleOutcome::Defeat => "\n💀 You were defeated... Game Over.".to_owned(),
            },
        };
        Some(text)
    }

    fn write_json(&mut self, event: &Event) -> Result<()> {
        let payload = match event {
            Event::Combat(event) => serde_json::to_value(event),
            Event::Progress(event) => serde_json::to_value(event),
        }
        .map_err(|err| RuntimeError::Observer(err.to_string()))?;
        let topic = match event.topic() {
            Topic::Combat => "combat",
            Topic::Progress => "progress",
        };
        let line = json!({ "topic": topic, "event": payload });
        writeln!(self.writer, "{line}")?;
        Ok(())
    }
}

impl<W: Write> EventObserver for Narrator<W> {
    fn on_event(&mut self, event: &Event) -> Result<()> {
        match self.mode {
            NarrationMode::Text => {
                if let Some(text) = self.render(event) {
                    writeln!(self.writer, "{text}")?;
                }
            }
            NarrationMode::Json => self.write_json(event)?,
        }
        self.writer.flush()?;

        if matches!(event, Event::Combat(CombatEvent::RoundEnded { .. }))
            && !self.round_delay.is_zero()
        {
            thread::sleep(self.round_delay);
        }
        Ok(())
    }
}

fn render_progress(event: &ProgressEvent) -> Option<String> {
    let text = match event {
        ProgressEvent::LevelStarted { level, experience } => {
            format!("\n--- Level {level} - XP: {experience} ---")
        }
        ProgressEvent::VictoryRegen {
            hero,
            amount,
            hp,
            max_hp,
        } => heals(hero, *amount, *hp, *max_hp),
        ProgressEvent::ExperienceGained { amount, .. } => format!("You gained {amount} XP."),
        ProgressEvent::LevelUp { level, .. } => format!(
            "\n✨ Level UP! Now level {level}. HP and attack increased. Special recharged!"
        ),
        ProgressEvent::SessionEnded { end, .. } => match end {
            SessionEnd::Retired => "You exit the arena victoriously. Bye!".to_owned(),
            SessionEnd::Defeated => return None,
        },
    };
    Some(text)
}

fn takes(target: &str, strike: &Strike) -> String {
    format!(
        "  {target} takes {} damage. (HP: {}/{})",
        strike.damage, strike.hp, strike.max_hp
    )
}

fn heals(name: &str, amount: u32, hp: u32, max_hp: u32) -> String {
    format!("{name} heals {amount} HP. (HP: {hp}/{max_hp})")
}
