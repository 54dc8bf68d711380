use {
    crate::ProgressionState,
    bevy::prelude::*,
    puzzle_assets::PuzzleCatalog,
    puzzle_events::{PuzzleSolved, ResetProgression, RewardGranted},
};

/// Observer for solver completion events: records the puzzle, hands out its
/// reward and moves the pointer to the next open puzzle.
pub fn on_puzzle_solved(
    trigger: On<PuzzleSolved>,
    mut progression: ResMut<ProgressionState>,
    catalog: Res<PuzzleCatalog>,
    mut commands: Commands,
) {
    let event = trigger.event();

    if !progression.complete(&event.puzzle_id) {
        debug!(puzzle_id = %event.puzzle_id, "puzzle already completed, ignoring");
        return;
    }

    info!(
        puzzle_id = %event.puzzle_id,
        solved_count = %progression.solved_count,
        "puzzle completed"
    );

    if let Some(reward) = catalog
        .get(&event.puzzle_id)
        .and_then(|def| def.reward.as_ref())
    {
        commands.trigger(RewardGranted {
            kind: reward.kind,
            level: reward.level,
            name: reward.name.clone(),
        });
    }

    progression.advance(&catalog);
}

/// Observer that wipes all progress back to the first puzzle.
pub fn on_reset_progression(
    _trigger: On<ResetProgression>,
    mut progression: ResMut<ProgressionState>,
) {
    progression.reset();
    info!("progression reset");
}
