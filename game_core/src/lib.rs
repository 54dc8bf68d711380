use {
    bevy::prelude::*,
    game_rng::GameRng,
    garden::GardenPlugin,
    progression::ProgressionPlugin,
    puzzle_assets::PuzzleAssetsPlugin,
    puzzles::PuzzlesPlugin,
    save_load::SaveLoadPlugin,
    shared_components::SharedComponentsPlugin,
    states::GameState,
};

mod systems;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<GameRng>()
            .add_plugins((
                SharedComponentsPlugin,
                PuzzleAssetsPlugin,
                ProgressionPlugin,
                GardenPlugin,
                PuzzlesPlugin,
                SaveLoadPlugin,
            ))
            .add_systems(Startup, (setup_camera, systems::start_loading))
            .add_systems(
                Update,
                systems::install_catalog.run_if(in_state(GameState::Loading)),
            );
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
