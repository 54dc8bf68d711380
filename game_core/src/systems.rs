use {
    bevy::{asset::LoadState, prelude::*},
    progression::ProgressionState,
    puzzle_assets::PuzzleCatalog,
    states::GameState,
};

#[derive(Resource)]
pub struct CatalogHandle(pub Handle<PuzzleCatalog>);

pub fn start_loading(mut commands: Commands, asset_server: Res<AssetServer>) {
    info!("started loading puzzle catalog");
    commands.insert_resource(CatalogHandle(
        asset_server.load("puzzles/garden.catalog.ron"),
    ));
}

/// Waits for the catalog asset, installs it as the resource, re-validates
/// restored progression against it and enters Running. A failed load keeps
/// the empty default catalog rather than aborting the session.
pub fn install_catalog(
    handle: Res<CatalogHandle>,
    asset_server: Res<AssetServer>,
    mut catalogs: ResMut<Assets<PuzzleCatalog>>,
    mut catalog: ResMut<PuzzleCatalog>,
    mut progression: ResMut<ProgressionState>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    match asset_server.load_state(&handle.0) {
        LoadState::Loaded => {
            if let Some(loaded) = catalogs.remove(&handle.0) {
                info!(puzzles = %loaded.len(), "puzzle catalog installed");
                *catalog = loaded;
            }
        }
        LoadState::Failed(_) => {
            warn!("puzzle catalog failed to load, continuing with an empty catalog");
        }
        _ => return,
    }

    progression.normalize(&catalog);
    next_state.set(GameState::Running);
}
