use bevy::prelude::*;

use crate::constants::{BUTTON_RADIUS, BUTTON_ROW_Y, BUTTON_XS};
use crate::game::Choice;

/// A circular click target bound to one choice. Screen space, y down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconButton {
    pub choice: Choice,
    pub center: Vec2,
    pub radius: f32,
}

impl IconButton {
    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance(point) < self.radius
    }
}

/// The fixed button row, one per choice.
pub fn button_row() -> [IconButton; 3] {
    let mut row = [IconButton {
        choice: Choice::Rock,
        center: Vec2::ZERO,
        radius: BUTTON_RADIUS,
    }; 3];
    for (slot, (choice, x)) in row.iter_mut().zip(Choice::ALL.into_iter().zip(BUTTON_XS)) {
        slot.choice = choice;
        slot.center = Vec2::new(x, BUTTON_ROW_Y);
    }
    row
}

/// Which button, if any, lies under `point`.
pub fn hit_test(point: Vec2) -> Option<Choice> {
    button_row()
        .into_iter()
        .find(|button| button.contains(point))
        .map(|button| button.choice)
}
