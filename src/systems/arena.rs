use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::components::{ChoiceButton, ChoiceSlot, ResultText, Side};
use crate::constants::SLOT_SCALE;
use crate::game::{Choice, GameState};
use crate::resources::{Session, ShapeAssets};
use crate::systems::icons::spawn_icon;

/// Cursor in screen space (top-left origin), if it is over the window.
pub fn cursor_position(windows: &Query<&Window, With<PrimaryWindow>>) -> Option<Vec2> {
    windows.single().ok().and_then(Window::cursor_position)
}

pub fn update_button_hover(
    windows: Query<&Window, With<PrimaryWindow>>,
    shapes: Res<ShapeAssets>,
    mut buttons: Query<(&ChoiceButton, &mut MeshMaterial2d<ColorMaterial>)>,
) {
    let cursor = cursor_position(&windows);

    for (choice_button, mut material) in buttons.iter_mut() {
        let hovered = cursor.is_some_and(|point| choice_button.button.contains(point));
        let wanted = if hovered {
            &shapes.button_hover
        } else {
            &shapes.button_idle
        };
        if material.0 != *wanted {
            material.0 = wanted.clone();
        }
    }
}

/// The icon a slot should currently show.
pub fn slot_choice(game: &GameState, side: Side) -> Option<Choice> {
    match side {
        Side::Player => game.player_choice(),
        Side::Computer => game.revealed_computer_choice(),
    }
}

pub fn refresh_choice_slots(
    mut commands: Commands,
    session: Res<Session>,
    shapes: Res<ShapeAssets>,
    mut slots: Query<(Entity, &mut ChoiceSlot)>,
) {
    for (entity, mut slot) in slots.iter_mut() {
        let wanted = slot_choice(&session, slot.side);
        if slot.shown == wanted {
            continue;
        }

        let mut anchor = commands.entity(entity);
        anchor.despawn_related::<Children>();
        if let Some(choice) = wanted {
            anchor.with_children(|parent| spawn_icon(parent, &shapes, choice, SLOT_SCALE, 0.0));
        }
        slot.shown = wanted;
    }
}

pub fn update_result_text(session: Res<Session>, mut query: Query<&mut Text, With<ResultText>>) {
    for mut text in query.iter_mut() {
        if text.0 != session.result_text() {
            text.0 = session.result_text().to_string();
        }
    }
}
