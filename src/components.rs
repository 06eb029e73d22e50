use bevy::prelude::*;

use crate::buttons::IconButton;
use crate::game::Choice;

/// The filled face of a choice button; recolored on hover.
#[derive(Component)]
pub struct ChoiceButton {
    pub button: IconButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Computer,
}

/// Anchor for the big icon of one side. Children are the icon shapes.
#[derive(Component)]
pub struct ChoiceSlot {
    pub side: Side,
    pub shown: Option<Choice>,
}

#[derive(Component)]
pub struct ScoreText;

#[derive(Component)]
pub struct TimerText;

#[derive(Component)]
pub struct ResultText;

#[derive(Component)]
pub struct GameOverScreen;
