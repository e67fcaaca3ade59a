//! Player turn choices.

use strum::Display;

/// Action the player takes on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerAction {
    /// Standard attack with archetype passive.
    Attack,
    /// Archetype special, if ready.
    Special,
    /// Heal 6-10 HP.
    Heal,
    /// Show both combatants' numbers. Uses up the turn.
    Status,
    /// Unrecognized input: the turn is lost.
    Fumble,
}

impl PlayerAction {
    /// Actions offered in the menu, in menu order.
    pub const MENU: [PlayerAction; 4] = [Self::Attack, Self::Special, Self::Heal, Self::Status];

    /// Parse a menu entry. Empty input attacks; anything unknown fumbles.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "" | "1" | "attack" | "a" => Self::Attack,
            "2" | "special" | "s" => Self::Special,
            "3" | "heal" | "h" => Self::Heal,
            "4" | "status" => Self::Status,
            _ => Self::Fumble,
        }
    }

    /// Menu number, `None` for [`Fumble`](Self::Fumble).
    pub fn menu_key(&self) -> Option<u8> {
        Self::MENU
            .iter()
            .position(|action| action == self)
            .map(|index| index as u8 + 1)
    }
}
