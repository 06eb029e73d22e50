use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::buttons::hit_test;
use crate::events::{RoundStarted, SessionReset};
use crate::game::Press;
use crate::resources::{ComputerPicker, Session};
use crate::systems::arena::cursor_position;

/// Route every pointer press of this frame into the session.
pub fn handle_pointer_press(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    time: Res<Time<Real>>,
    mut session: ResMut<Session>,
    mut picker: ResMut<ComputerPicker>,
    mut started: MessageWriter<RoundStarted>,
    mut resets: MessageWriter<SessionReset>,
) {
    let presses = mouse.get_just_pressed().count();
    if presses == 0 {
        return;
    }

    let hit = cursor_position(&windows).and_then(hit_test);
    let now = time.elapsed();

    for _ in 0..presses {
        match session.press(hit, now, picker.0.as_mut()) {
            Press::Started { player, computer } => {
                started.write(RoundStarted { player, computer });
            }
            Press::Reset => {
                resets.write(SessionReset);
            }
            Press::Ignored => {}
        }
    }
}

pub fn quit_on_escape(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        info!("Escape pressed, quitting");
        exit.write(AppExit::Success);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Resource, Default)]
    struct Exits(Vec<AppExit>);

    fn collect_exits(mut exits: MessageReader<AppExit>, mut seen: ResMut<Exits>) {
        seen.0.extend(exits.read().cloned());
    }

    fn quit_app() -> App {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<Exits>()
            .add_systems(Update, (quit_on_escape, collect_exits).chain());
        app
    }

    #[test]
    fn escape_requests_clean_exit() {
        let mut app = quit_app();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Escape);
        app.update();

        assert_eq!(app.world().resource::<Exits>().0, vec![AppExit::Success]);
    }

    #[test]
    fn other_keys_keep_running() {
        let mut app = quit_app();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Space);
        app.update();

        assert!(app.world().resource::<Exits>().0.is_empty());
    }
}
