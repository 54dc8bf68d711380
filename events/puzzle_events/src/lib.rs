use {bevy::prelude::*, garden_components::ItemKind};

/// Fired globally, exactly once per attempt, when a solver reaches its
/// solved state. The progression engine records completion and advances.
#[derive(Debug, Event)]
pub struct PuzzleSolved {
    pub puzzle_id: String,
}

/// Fired by the progression engine when a newly completed puzzle carries a
/// reward. The garden store answers by unlocking the matching token.
#[derive(Debug, Event)]
pub struct RewardGranted {
    pub kind: ItemKind,
    pub level: u32,
    pub name: String,
}

/// Spawns a board for the catalog's current puzzle, replacing any open board.
#[derive(Debug, Event)]
pub struct OpenCurrentPuzzle;

/// Despawns any open board without touching progression.
#[derive(Debug, Event)]
pub struct ClosePuzzle;

/// Clears the completed set, solved count and puzzle pointer.
#[derive(Debug, Event)]
pub struct ResetProgression;

/// Click on one card of a matching board.
#[derive(Debug, EntityEvent)]
pub struct CardClicked {
    /// The board entity this event targets.
    #[event_target]
    pub entity: Entity,
    pub card: usize,
}

/// Toggle of one cell on a pattern board.
#[derive(Debug, EntityEvent)]
pub struct CellToggled {
    /// The board entity this event targets.
    #[event_target]
    pub entity: Entity,
    pub cell: usize,
}

/// The player submitted the active pattern for checking.
#[derive(Debug, EntityEvent)]
pub struct PatternCheckRequested {
    /// The board entity this event targets.
    #[event_target]
    pub entity: Entity,
}

/// The player asked for one solution cell to be revealed.
#[derive(Debug, EntityEvent)]
pub struct PatternHintRequested {
    /// The board entity this event targets.
    #[event_target]
    pub entity: Entity,
}

/// Click on one node of a connecting board.
#[derive(Debug, EntityEvent)]
pub struct NodeClicked {
    /// The board entity this event targets.
    #[event_target]
    pub entity: Entity,
    pub node_id: String,
}
