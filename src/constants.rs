use std::time::Duration;

use bevy::prelude::*;

// Window, in logical pixels
pub const WINDOW_WIDTH: f32 = 1000.0;
pub const WINDOW_HEIGHT: f32 = 750.0;
pub const WINDOW_TITLE: &str = "Rock Paper Scissors - Competitive Edition";

// Session timing defaults
pub const ROUND_BUDGET: Duration = Duration::from_secs(30);
pub const REVEAL_DELAY: Duration = Duration::from_millis(600);
pub const LOW_TIME_WARNING_SECS: u64 = 5;

// Buttons (screen space, y down)
pub const BUTTON_RADIUS: f32 = 85.0;
pub const BUTTON_RIM: f32 = 3.0;
pub const BUTTON_ROW_Y: f32 = 650.0;
pub const BUTTON_XS: [f32; 3] = [250.0, 500.0, 750.0];

// Arena layout (screen space, y down)
pub const HUD_HEIGHT: f32 = 90.0;
pub const PLAYER_SLOT: Vec2 = Vec2::new(300.0, 350.0);
pub const COMPUTER_SLOT: Vec2 = Vec2::new(700.0, 350.0);
pub const SLOT_SCALE: f32 = 1.5;
pub const COIN_CENTER: Vec2 = Vec2::new(60.0, 45.0);
pub const SANDGLASS_CENTER: Vec2 = Vec2::new(WINDOW_WIDTH - 180.0, 45.0);

// Palette
const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::srgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

pub const WHITE: Color = rgb(255, 255, 255);
pub const INK: Color = rgb(30, 30, 30);
pub const STEEL_BLUE: Color = rgb(70, 130, 180);
pub const CRIMSON: Color = rgb(220, 20, 60);
pub const LIGHT_GRAY: Color = rgb(240, 240, 240);
pub const GOLD: Color = rgb(255, 215, 0);
pub const PALE_GOLD: Color = rgb(255, 235, 120);
pub const ROCK_OUTER: Color = rgb(120, 120, 120);
pub const ROCK_INNER: Color = rgb(90, 90, 90);

// Draw order
pub const Z_BACKGROUND: f32 = 0.0;
pub const Z_ICONS: f32 = 2.0;
pub const Z_BUTTONS: f32 = 3.0;
pub const Z_HUD: f32 = 5.0;
pub const Z_HUD_ICONS: f32 = 6.0;

/// Convert a top-left-origin screen position to 2D world space.
pub fn screen_to_world(screen: Vec2) -> Vec2 {
    Vec2::new(
        screen.x - WINDOW_WIDTH / 2.0,
        WINDOW_HEIGHT / 2.0 - screen.y,
    )
}
