use bevy::prelude::*;

use crate::game::{ChoiceSource, GameState, Phase, RandomChoice};

/// The running session, advanced once per frame.
#[derive(Resource, Deref, DerefMut)]
pub struct Session(pub GameState);

/// Where the computer's moves come from.
#[derive(Resource)]
pub struct ComputerPicker(pub Box<dyn ChoiceSource>);

impl Default for ComputerPicker {
    fn default() -> Self {
        Self(Box::new(RandomChoice::new()))
    }
}

#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    /// A session is running
    #[default]
    InGame,
    /// Game over overlay is up
    GameOver,
}

impl AppState {
    pub fn for_phase(phase: Phase) -> Self {
        match phase {
            Phase::GameOver => AppState::GameOver,
            Phase::Idle | Phase::Animating => AppState::InGame,
        }
    }
}

/// Shared meshes and materials for the icons and buttons.
#[derive(Resource)]
pub struct ShapeAssets {
    pub unit_circle: Handle<Mesh>,
    pub unit_square: Handle<Mesh>,
    pub white: Handle<ColorMaterial>,
    pub ink: Handle<ColorMaterial>,
    pub crimson: Handle<ColorMaterial>,
    pub gold: Handle<ColorMaterial>,
    pub pale_gold: Handle<ColorMaterial>,
    pub rock_outer: Handle<ColorMaterial>,
    pub rock_inner: Handle<ColorMaterial>,
    pub button_idle: Handle<ColorMaterial>,
    pub button_hover: Handle<ColorMaterial>,
}
