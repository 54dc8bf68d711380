mod board;
mod connecting;
mod matching;
mod pattern;

pub use connecting::node_position;

use bevy::prelude::*;

pub struct PuzzlesPlugin;

impl Plugin for PuzzlesPlugin {
    fn build(&self, app: &mut App) {
        app
            // Board lifecycle
            .add_observer(board::on_open_current_puzzle)
            .add_observer(board::on_close_puzzle)
            // Interaction observers per solver
            .add_observer(matching::on_card_clicked)
            .add_observer(pattern::on_cell_toggled)
            .add_observer(pattern::on_check_requested)
            .add_observer(pattern::on_hint_requested)
            .add_observer(connecting::on_node_clicked)
            // Deferred display-delay timers
            .add_systems(
                Update,
                (
                    matching::resolve_flipped_pairs,
                    pattern::finish_pattern_solve,
                    pattern::reset_revealed_pattern,
                    pattern::fade_hints,
                ),
            );
    }
}
