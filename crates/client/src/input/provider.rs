use std::io::{BufRead, Write};

use arena_core::{BattleView, PlayerAction, SessionView};
use arena_runtime::{ActionProvider, Result};

use super::{prompt, wants_to_continue};

/// Action provider that reads the player's choices line by line.
///
/// Prompts go to `writer`, which is stdout for text narration and stderr
/// when stdout carries JSON.
pub struct CliActionProvider<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> CliActionProvider<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> ActionProvider for CliActionProvider<R, W> {
    fn provide_action(&mut self, _view: &BattleView) -> Result<PlayerAction> {
        writeln!(self.writer, "\n-- Your Turn --")?;
        writeln!(self.writer, "Actions: {}", action_menu())?;
        let input = prompt(
            &mut self.reader,
            &mut self.writer,
            "Choose action (1/2/3/4): ",
        )?;

        let action = PlayerAction::parse(&input);
        if action == PlayerAction::Fumble {
            tracing::warn!(input = %input, "unrecognized action");
        }
        Ok(action)
    }

    fn confirm_continue(&mut self, _session: &SessionView) -> Result<bool> {
        let answer = prompt(
            &mut self.reader,
            &mut self.writer,
            "Continue to next fight? (Y/n): ",
        )?;
        Ok(wants_to_continue(&answer))
    }
}

/// `[1] Attack  [2] Special  [3] Heal  [4] Status`
fn action_menu() -> String {
    PlayerAction::MENU
        .iter()
        .filter_map(|action| action.menu_key().map(|key| format!("[{key}] {action}")))
        .collect::<Vec<_>>()
        .join("  ")
}
