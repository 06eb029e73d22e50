use bevy::prelude::*;

use crate::components::GameOverScreen;
use crate::constants::WHITE;
use crate::resources::Session;

pub fn setup_game_over_screen(mut commands: Commands, session: Res<Session>) {
    commands
        .spawn((
            Node {
                // Stretch over whole screen
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(40.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 180.0 / 255.0)),
            GlobalZIndex(10),
            GameOverScreen,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(format!("FINAL SCORE: {}", session.score())),
                TextFont {
                    font_size: 60.0,
                    ..default()
                },
                TextColor(WHITE),
            ));
            parent.spawn((
                Text::new("Click Anywhere to Restart"),
                TextFont {
                    font_size: 30.0,
                    ..default()
                },
                TextColor(WHITE),
            ));
        });
}

pub fn cleanup_game_over_screen(mut commands: Commands, query: Query<Entity, With<GameOverScreen>>) {
    for e in &query {
        commands.entity(e).despawn();
    }
}
