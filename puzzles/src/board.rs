//! Spawns and despawns the board entity for the catalog's current puzzle.

use {
    crate::{connecting, matching},
    bevy::prelude::*,
    game_rng::GameRng,
    progression::ProgressionState,
    puzzle_assets::{PuzzleCatalog, PuzzlePayload},
    puzzle_components::{PatternBoard, PuzzleBoard},
    puzzle_events::{ClosePuzzle, OpenCurrentPuzzle},
};

/// Observer that opens the current puzzle, replacing any board already up.
/// A no-op once every catalog entry is completed.
pub fn on_open_current_puzzle(
    _trigger: On<OpenCurrentPuzzle>,
    mut commands: Commands,
    boards: Query<Entity, With<PuzzleBoard>>,
    progression: Res<ProgressionState>,
    catalog: Res<PuzzleCatalog>,
    mut rng: ResMut<GameRng>,
) {
    for entity in &boards {
        commands.entity(entity).despawn();
    }

    let Some(def) = progression.current_puzzle(&catalog) else {
        info!("no puzzle to open, catalog exhausted");
        return;
    };

    info!(puzzle_id = %def.id, kind = ?def.kind(), title = %def.title, "opening puzzle");

    let board = commands
        .spawn(PuzzleBoard {
            puzzle_id: def.id.clone(),
        })
        .id();

    match &def.payload {
        PuzzlePayload::Matching { pairs } => {
            commands
                .entity(board)
                .insert(matching::build_board(pairs, &mut rng));
        }
        PuzzlePayload::Pattern {
            grid_size,
            solution,
        } => {
            commands
                .entity(board)
                .insert(PatternBoard::new(*grid_size, solution.clone()));
        }
        PuzzlePayload::Connecting { nodes, solutions } => {
            commands
                .entity(board)
                .insert(connecting::build_board(nodes, solutions));
        }
    }
}

/// Observer that abandons the open attempt without touching progression.
pub fn on_close_puzzle(
    _trigger: On<ClosePuzzle>,
    mut commands: Commands,
    boards: Query<Entity, With<PuzzleBoard>>,
) {
    for entity in &boards {
        debug!("closing puzzle board");
        commands.entity(entity).despawn();
    }
}
