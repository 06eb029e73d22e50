use bevy::prelude::*;

use crate::components::{ScoreText, TimerText};
use crate::constants::{
    CRIMSON, INK, LOW_TIME_WARNING_SECS, SANDGLASS_CENTER, WINDOW_WIDTH, screen_to_world,
};
use crate::resources::Session;

const SANDGLASS_SIZE: f32 = 18.0;

// Setup top bar
pub fn setup_top_bar(mut commands: Commands) {
    spawn_stat_text(&mut commands, 100.0, "Score: 0", ScoreText);
    spawn_stat_text(&mut commands, WINDOW_WIDTH - 150.0, "Time: 0s", TimerText);
}

// Helper function to spawn a stat readout next to its HUD icon
fn spawn_stat_text(commands: &mut Commands, left: f32, initial: &str, marker: impl Component) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(25.0),
            left: Val::Px(left),
            ..default()
        },
        Text::new(initial),
        TextFont {
            font_size: 40.0,
            ..default()
        },
        TextColor(INK),
        marker,
    ));
}

/// Timer readout colour: red once the warning threshold is reached.
pub fn timer_color(remaining_secs: u64) -> Color {
    if remaining_secs <= LOW_TIME_WARNING_SECS {
        CRIMSON
    } else {
        INK
    }
}

// Update function
pub fn update_top_bar(
    time: Res<Time<Real>>,
    session: Res<Session>,
    mut score_query: Query<&mut Text, (With<ScoreText>, Without<TimerText>)>,
    mut timer_query: Query<(&mut Text, &mut TextColor), (With<TimerText>, Without<ScoreText>)>,
) {
    let remaining = session.remaining_seconds(time.elapsed());

    for mut text in score_query.iter_mut() {
        text.0 = format!("Score: {}", session.score());
    }
    for (mut text, mut color) in timer_query.iter_mut() {
        text.0 = format!("Time: {}s", remaining);
        color.0 = timer_color(remaining);
    }
}

/// Hourglass outline beside the timer.
pub fn draw_sandglass(mut gizmos: Gizmos) {
    let center = screen_to_world(SANDGLASS_CENTER);
    let s = SANDGLASS_SIZE;
    let top = [
        center + Vec2::new(-s, s),
        center + Vec2::new(s, s),
        center,
        center + Vec2::new(-s, s),
    ];
    let bottom = [
        center + Vec2::new(-s, -s),
        center + Vec2::new(s, -s),
        center,
        center + Vec2::new(-s, -s),
    ];
    gizmos.linestrip_2d(top, INK);
    gizmos.linestrip_2d(bottom, INK);
}
