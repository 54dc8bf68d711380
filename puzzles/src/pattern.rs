//! Toggle-grid solver: reproduce the solution set of cells exactly.

use {
    bevy::prelude::*,
    game_rng::GameRng,
    puzzle_components::{HintFade, PatternBoard, PatternReveal, PatternSolveDelay, PuzzleBoard},
    puzzle_events::{CellToggled, PatternCheckRequested, PatternHintRequested, PuzzleSolved},
    rand::Rng,
};

/// Success display delay before the completion event fires.
const SOLVE_DELAY_SECS: f32 = 1.5;
/// How long the correct solution stays revealed after a wrong attempt.
const REVEAL_SECS: f32 = 2.0;
/// How long a hint cell stays highlighted.
const HINT_FADE_SECS: f32 = 1.0;

/// Observer toggling one cell. Ignored while a result is on display.
pub fn on_cell_toggled(trigger: On<CellToggled>, mut boards: Query<&mut PatternBoard>) {
    let event = trigger.event();
    let Ok(mut board) = boards.get_mut(event.entity) else {
        return;
    };

    if board.locked || board.solved {
        return;
    }
    let Some(cell) = board.cells.get_mut(event.cell) else {
        warn!(cell = %event.cell, "cell toggle outside the grid");
        return;
    };
    cell.active = !cell.active;
}

/// Observer for pattern submission.
///
/// Exact set equality solves the puzzle: the matched cells light up, the
/// board locks, and completion fires after a short delay. Anything else
/// counts an attempt and reveals the full solution before resetting.
pub fn on_check_requested(
    trigger: On<PatternCheckRequested>,
    mut boards: Query<(&PuzzleBoard, &mut PatternBoard)>,
    mut commands: Commands,
) {
    let Ok((meta, mut board)) = boards.get_mut(trigger.event().entity) else {
        return;
    };

    if board.locked || board.solved {
        return;
    }

    if board.matches_solution() {
        board.solved = true;
        board.locked = true;
        let solution = board.solution.clone();
        for index in solution {
            if let Some(cell) = board.cells.get_mut(index) {
                cell.highlight = true;
            }
        }

        info!(
            puzzle_id = %meta.puzzle_id,
            attempts = %board.attempts,
            "pattern puzzle solved"
        );
        commands.entity(trigger.event().entity).insert(PatternSolveDelay {
            timer: Timer::from_seconds(SOLVE_DELAY_SECS, TimerMode::Once),
        });
    } else {
        board.attempts += 1;
        board.locked = true;
        debug!(
            puzzle_id = %meta.puzzle_id,
            attempts = %board.attempts,
            "wrong pattern, revealing solution"
        );

        // Force-display the full correct pattern until the reveal expires.
        let solution = board.solution.clone();
        for (index, cell) in board.cells.iter_mut().enumerate() {
            let in_solution = solution.contains(&index);
            cell.active = in_solution;
            cell.highlight = in_solution;
        }
        commands.entity(trigger.event().entity).insert(PatternReveal {
            timer: Timer::from_seconds(REVEAL_SECS, TimerMode::Once),
        });
    }
}

/// Observer revealing one random remaining solution cell.
///
/// The activation persists and counts toward the next check; only the
/// highlight is transient.
pub fn on_hint_requested(
    trigger: On<PatternHintRequested>,
    mut boards: Query<(&mut PatternBoard, Option<&HintFade>)>,
    mut commands: Commands,
    mut rng: ResMut<GameRng>,
) {
    let Ok((mut board, previous_fade)) = boards.get_mut(trigger.event().entity) else {
        return;
    };

    if board.locked || board.solved {
        return;
    }

    let remaining: Vec<usize> = board
        .solution
        .iter()
        .copied()
        .filter(|&i| board.cells.get(i).is_some_and(|c| !c.active))
        .collect();
    if remaining.is_empty() {
        debug!("no hint left to give");
        return;
    }
    let cell = remaining[rng.random_range(0..remaining.len())];

    // A fresh hint replaces the pending fade; settle the old one first.
    if let Some(fade) = previous_fade
        && let Some(old) = board.cells.get_mut(fade.cell)
    {
        old.highlight = false;
    }

    debug!(%cell, "hint revealed");
    board.cells[cell].active = true;
    board.cells[cell].highlight = true;
    commands.entity(trigger.event().entity).insert(HintFade {
        cell,
        timer: Timer::from_seconds(HINT_FADE_SECS, TimerMode::Once),
    });
}

/// Fires completion once the success display delay has elapsed.
pub fn finish_pattern_solve(
    time: Res<Time>,
    mut boards: Query<(Entity, &PuzzleBoard, &mut PatternSolveDelay)>,
    mut commands: Commands,
) {
    for (entity, meta, mut delay) in &mut boards {
        if !delay.timer.tick(time.delta()).just_finished() {
            continue;
        }
        commands.entity(entity).remove::<PatternSolveDelay>();
        commands.trigger(PuzzleSolved {
            puzzle_id: meta.puzzle_id.clone(),
        });
    }
}

/// Clears the board once a wrong-answer reveal has run its course.
pub fn reset_revealed_pattern(
    time: Res<Time>,
    mut boards: Query<(Entity, &mut PatternBoard, &mut PatternReveal)>,
    mut commands: Commands,
) {
    for (entity, mut board, mut reveal) in &mut boards {
        if !reveal.timer.tick(time.delta()).just_finished() {
            continue;
        }
        commands.entity(entity).remove::<PatternReveal>();

        // The board may have been solved by other means since the reveal
        // was armed; never wipe a solved display.
        if board.solved {
            continue;
        }
        for cell in &mut board.cells {
            cell.active = false;
            cell.highlight = false;
        }
        board.locked = false;
    }
}

/// Drops hint highlights whose display time is up, leaving activation alone.
pub fn fade_hints(
    time: Res<Time>,
    mut boards: Query<(Entity, &mut PatternBoard, &mut HintFade)>,
    mut commands: Commands,
) {
    for (entity, mut board, mut fade) in &mut boards {
        if !fade.timer.tick(time.delta()).just_finished() {
            continue;
        }
        let cell = fade.cell;
        commands.entity(entity).remove::<HintFade>();

        // While a result is on display the board owns the highlights.
        if board.locked {
            continue;
        }
        if let Some(cell) = board.cells.get_mut(cell) {
            cell.highlight = false;
        }
    }
}
