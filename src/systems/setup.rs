use bevy::prelude::*;

use crate::buttons::button_row;
use crate::components::{ChoiceButton, ChoiceSlot, ResultText, Side};
use crate::constants::*;
use crate::resources::ShapeAssets;
use crate::systems::icons::{spawn_disc, spawn_icon};

const BAND_HEIGHT: u32 = 10;

/// Setup camera (runs on startup, needed for all states)
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub fn load_shape_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.insert_resource(ShapeAssets {
        unit_circle: meshes.add(Circle::new(1.0)),
        unit_square: meshes.add(Rectangle::new(1.0, 1.0)),
        white: materials.add(WHITE),
        ink: materials.add(INK),
        crimson: materials.add(CRIMSON),
        gold: materials.add(GOLD),
        pale_gold: materials.add(PALE_GOLD),
        rock_outer: materials.add(ROCK_OUTER),
        rock_inner: materials.add(ROCK_INNER),
        button_idle: materials.add(LIGHT_GRAY),
        button_hover: materials.add(STEEL_BLUE),
    });
}

/// Colour of the background gradient at screen row `y`.
pub fn gradient_color(y: u32) -> Color {
    let red = 200u32.saturating_sub(y / 6) as u8;
    let green = 220u32.saturating_sub(y / 7) as u8;
    Color::srgb_u8(red, green, 255)
}

/// Background, HUD plate, coin, the button row and the two choice slots.
pub fn setup_arena(mut commands: Commands, shapes: Res<ShapeAssets>) {
    let height = WINDOW_HEIGHT as u32;
    for top in (0..height).step_by(BAND_HEIGHT as usize) {
        let center = screen_to_world(Vec2::new(WINDOW_WIDTH / 2.0, (top + BAND_HEIGHT / 2) as f32));
        commands.spawn((
            Sprite::from_color(
                gradient_color(top),
                Vec2::new(WINDOW_WIDTH, BAND_HEIGHT as f32),
            ),
            Transform::from_translation(center.extend(Z_BACKGROUND)),
        ));
    }

    // Translucent HUD plate
    let hud_center = screen_to_world(Vec2::new(WINDOW_WIDTH / 2.0, HUD_HEIGHT / 2.0));
    commands.spawn((
        Sprite::from_color(
            Color::srgba(1.0, 1.0, 1.0, 200.0 / 255.0),
            Vec2::new(WINDOW_WIDTH, HUD_HEIGHT),
        ),
        Transform::from_translation(hud_center.extend(Z_HUD)),
    ));

    commands
        .spawn((
            Transform::from_translation(screen_to_world(COIN_CENTER).extend(Z_HUD_ICONS)),
            Visibility::default(),
        ))
        .with_children(|coin| {
            spawn_disc(coin, &shapes, &shapes.ink, Vec3::ZERO, 18.0);
            spawn_disc(coin, &shapes, &shapes.gold, Vec3::new(0.0, 0.0, 0.01), 16.0);
            spawn_disc(coin, &shapes, &shapes.pale_gold, Vec3::new(0.0, 0.0, 0.02), 13.0);
        });

    for button in button_row() {
        let center = screen_to_world(button.center);
        commands
            .spawn((
                Transform::from_translation(center.extend(Z_BUTTONS)),
                Visibility::default(),
            ))
            .with_children(|parent| {
                spawn_disc(parent, &shapes, &shapes.ink, Vec3::ZERO, button.radius + BUTTON_RIM);
                parent.spawn((
                    Mesh2d(shapes.unit_circle.clone()),
                    MeshMaterial2d(shapes.button_idle.clone()),
                    Transform::from_xyz(0.0, 0.0, 0.01)
                        .with_scale(Vec3::new(button.radius, button.radius, 1.0)),
                    ChoiceButton { button },
                ));
                spawn_icon(parent, &shapes, button.choice, 1.0, 0.02);
            });
    }

    for (side, slot) in [(Side::Player, PLAYER_SLOT), (Side::Computer, COMPUTER_SLOT)] {
        commands.spawn((
            Transform::from_translation(screen_to_world(slot).extend(Z_ICONS)),
            Visibility::default(),
            ChoiceSlot { side, shown: None },
        ));
    }
}

/// Horizontally centred text line whose top edge sits at `top` pixels.
fn spawn_centered_text(
    commands: &mut Commands,
    text: &str,
    top: f32,
    font_size: f32,
    color: Color,
    marker: impl Bundle,
) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(top),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                Text::new(text),
                TextFont {
                    font_size,
                    ..default()
                },
                TextColor(color),
                marker,
            ));
        });
}

pub fn setup_labels(mut commands: Commands) {
    spawn_centered_text(&mut commands, "Rock Paper Scissors", 110.0, 60.0, INK, ());
    spawn_centered_text(&mut commands, "VS", 330.0, 60.0, GOLD, ());
    spawn_centered_text(&mut commands, "", 500.0, 40.0, CRIMSON, ResultText);
}
