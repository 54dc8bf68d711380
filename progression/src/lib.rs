mod systems;
#[cfg(test)]
mod tests;

pub use systems::*;

use {
    bevy::prelude::*,
    puzzle_assets::{PuzzleCatalog, PuzzleDefinition},
};

pub struct ProgressionPlugin;

impl Plugin for ProgressionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ProgressionState>()
            .register_type::<ProgressionState>()
            .add_observer(systems::on_puzzle_solved)
            .add_observer(systems::on_reset_progression);
    }
}

/// Persistent record of which puzzles the player has solved and which
/// catalog entry is up next.
#[derive(Resource, Reflect, Default, Debug, Clone)]
#[reflect(Resource)]
pub struct ProgressionState {
    /// Completed puzzle ids. Insertion order is irrelevant; membership is
    /// what matters.
    pub completed: Vec<String>,
    /// Always equal to `completed.len()`, denormalized for display.
    pub solved_count: u32,
    /// Index of the current puzzle in the catalog.
    pub current_index: usize,
}

impl ProgressionState {
    pub fn is_completed(&self, id: &str) -> bool {
        self.completed.iter().any(|c| c == id)
    }

    /// Marks a puzzle completed. Returns false (and changes nothing) when
    /// the id is already present.
    pub fn complete(&mut self, id: &str) -> bool {
        if self.is_completed(id) {
            return false;
        }
        self.completed.push(id.to_string());
        self.solved_count += 1;
        true
    }

    /// Moves the pointer to the first uncompleted puzzle at or after
    /// `current_index`, wrapping circularly. Checks every catalog entry at
    /// most once; when all are completed the pointer stays where it is.
    pub fn advance(&mut self, catalog: &PuzzleCatalog) {
        for offset in 0..catalog.len() {
            let candidate = (self.current_index + offset) % catalog.len();
            if !self.is_completed(&catalog.puzzles[candidate].id) {
                self.current_index = candidate;
                return;
            }
        }
    }

    /// The puzzle the player should see next, or None once every catalog
    /// entry is completed.
    pub fn current_puzzle<'a>(&self, catalog: &'a PuzzleCatalog) -> Option<&'a PuzzleDefinition> {
        if self.completed.len() >= catalog.len() {
            return None;
        }
        catalog.puzzles.get(self.current_index)
    }

    pub fn all_completed(&self, catalog: &PuzzleCatalog) -> bool {
        self.completed.len() >= catalog.len()
    }

    pub fn reset(&mut self) {
        self.completed.clear();
        self.solved_count = 0;
        self.current_index = 0;
    }

    /// Repairs a freshly restored record against the installed catalog:
    /// recomputes the denormalized count, brings the pointer back into
    /// bounds and re-advances it off any completed entry.
    pub fn normalize(&mut self, catalog: &PuzzleCatalog) {
        self.solved_count = self.completed.len() as u32;
        if catalog.is_empty() {
            self.current_index = 0;
            return;
        }
        if self.current_index >= catalog.len() {
            self.current_index = 0;
        }
        self.advance(catalog);
    }
}
