use {
    bevy::{log::LogPlugin, prelude::*},
    game_core::CorePlugin,
};

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins.set(LogPlugin {
                filter: "error,game_core=info,\
                    garden=debug,\
                    progression=debug,\
                    puzzles=debug,\
                    save_load=info"
                    .into(),
                level: bevy::log::Level::TRACE,
                ..Default::default()
            }),
        )
        .add_plugins(CorePlugin)
        .run();
}
