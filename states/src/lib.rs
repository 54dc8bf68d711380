use bevy::prelude::*;

#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Restoring saved records and waiting for the puzzle catalog asset.
    #[default]
    Loading,
    Running,
}
