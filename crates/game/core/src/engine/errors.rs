use super::{BattleOutcome, BattlePhase};

/// Errors raised when a battle is driven out of order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error("player action submitted during {phase}")]
    NotPlayerTurn { phase: BattlePhase },

    #[error("battle is waiting for the player's action")]
    AwaitingPlayer,

    #[error("battle already finished ({outcome})")]
    AlreadyFinished { outcome: BattleOutcome },
}
