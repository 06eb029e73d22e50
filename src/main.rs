mod bevy_plugin;
mod buttons;
mod components;
mod config;
mod constants;
mod events;
mod game;
mod resources;
mod systems;

use std::time::Duration;

use bevy::prelude::*;

use bevy_plugin::BevyPlugin;
use config::{GameConfig, GameConfigPlugin};
use events::EventPlugin;
use game::GameState;
use resources::*;
use systems::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(BevyPlugin)
        .add_plugins(GameConfigPlugin)
        .add_plugins(EventPlugin);

    let timing = app.world().resource::<GameConfig>().timing();

    app.init_state::<AppState>()
        .insert_resource(Session(GameState::new(Duration::ZERO, timing)))
        .init_resource::<ComputerPicker>()
        .add_systems(
            Startup,
            (
                setup_camera,
                load_shape_assets,
                setup_arena,
                setup_top_bar,
                setup_labels,
            )
                .chain(),
        )
        .add_systems(
            Update,
            (
                handle_pointer_press,
                advance_session,
                sync_app_state,
                update_button_hover,
                refresh_choice_slots,
                update_top_bar,
                update_result_text,
            )
                .chain(),
        )
        .add_systems(Update, (draw_sandglass, log_session_events, quit_on_escape))
        // Game over screen
        .add_systems(OnEnter(AppState::GameOver), setup_game_over_screen)
        .add_systems(OnExit(AppState::GameOver), cleanup_game_over_screen);

    app.run();
}
