use bevy::prelude::*;

use crate::game::{Choice, RoundOutcome};

/// Fired when the player's click starts a round
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundStarted {
    pub player: Choice,
    pub computer: Choice,
}

/// Fired when a round is revealed and scored
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResolved {
    pub player: Choice,
    pub computer: Choice,
    pub outcome: RoundOutcome,
    pub score: i32,
}

/// Fired when the session clock runs out
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionExpired {
    pub final_score: i32,
    pub rounds_played: u32,
    pub discarded_round: bool,
}

/// Fired when the player restarts from the game over screen
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReset;

/// Plugin that registers all session messages
pub struct EventPlugin;

impl Plugin for EventPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<RoundStarted>()
            .add_message::<RoundResolved>()
            .add_message::<SessionExpired>()
            .add_message::<SessionReset>();
    }
}
