use {
    bevy::prelude::*,
    garden_components::Position,
    puzzle_assets::NodeGroup,
};

/// Tag for the root entity of an open puzzle attempt.
/// Exactly one kind-specific board component sits next to it.
#[derive(Component, Debug)]
pub struct PuzzleBoard {
    pub puzzle_id: String,
}

// ============================================================================
// Matching
// ============================================================================

/// One face of a matching board. `matches` is the symbol on the partner card.
#[derive(Debug, Clone)]
pub struct Card {
    pub symbol: String,
    pub matches: String,
    pub face_up: bool,
    pub matched: bool,
}

/// A 2xN memory board. `flipped` holds at most two card indices; while it
/// holds two, the attempt is resolving and further clicks are ignored.
#[derive(Component, Debug)]
pub struct MatchingBoard {
    pub cards: Vec<Card>,
    pub flipped: Vec<usize>,
    pub moves: u32,
    pub solved: bool,
}

impl MatchingBoard {
    pub fn is_resolving(&self) -> bool {
        self.flipped.len() >= 2
    }

    /// Judged on the live card collection, never on a snapshot.
    pub fn all_matched(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(|c| c.matched)
    }
}

/// Deferred outcome of a pair comparison. The apply system re-validates the
/// two cards when the timer fires; a board reset in the meantime makes the
/// timer a no-op.
#[derive(Component, Debug)]
pub struct MatchResolution {
    pub first: usize,
    pub second: usize,
    pub is_match: bool,
    pub timer: Timer,
}

// ============================================================================
// Pattern
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct PatternCell {
    pub active: bool,
    pub highlight: bool,
}

/// A square toggle grid checked against a solution set.
/// `locked` suspends interaction while a result or reveal is on display.
#[derive(Component, Debug)]
pub struct PatternBoard {
    pub grid_size: usize,
    pub cells: Vec<PatternCell>,
    pub solution: Vec<usize>,
    pub attempts: u32,
    pub locked: bool,
    pub solved: bool,
}

impl PatternBoard {
    pub fn new(grid_size: usize, solution: Vec<usize>) -> Self {
        Self {
            grid_size,
            cells: vec![PatternCell::default(); grid_size * grid_size],
            solution,
            attempts: 0,
            locked: false,
            solved: false,
        }
    }

    pub fn active_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.active)
            .map(|(i, _)| i)
            .collect()
    }

    /// Exact set equality between active cells and the solution.
    pub fn matches_solution(&self) -> bool {
        let mut active = self.active_cells();
        let mut solution = self.solution.clone();
        active.sort_unstable();
        solution.sort_unstable();
        solution.dedup();
        active == solution
    }
}

/// Success display delay before the completion event fires.
#[derive(Component, Debug)]
pub struct PatternSolveDelay {
    pub timer: Timer,
}

/// Wrong-answer reveal: the full solution is on display until the timer
/// fires, then every cell resets and control returns to the player.
#[derive(Component, Debug)]
pub struct PatternReveal {
    pub timer: Timer,
}

/// Transient hint highlight; clearing it leaves the activation in place.
#[derive(Component, Debug)]
pub struct HintFade {
    pub cell: usize,
    pub timer: Timer,
}

// ============================================================================
// Connecting
// ============================================================================

/// A selectable endpoint with its computed layout position.
#[derive(Debug, Clone)]
pub struct PuzzleNode {
    pub id: String,
    pub label: String,
    pub group: NodeGroup,
    pub position: Position,
}

/// An undirected recorded link between two node ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub a: String,
    pub b: String,
}

impl Connection {
    /// True when this connection links the same unordered pair.
    pub fn links(&self, x: &str, y: &str) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}

/// Two node groups and the links drawn between them so far.
/// `pending` is the first endpoint of an in-progress connection.
#[derive(Component, Debug)]
pub struct ConnectingBoard {
    pub nodes: Vec<PuzzleNode>,
    pub connections: Vec<Connection>,
    pub pending: Option<String>,
    pub solutions: Vec<Connection>,
    pub solved: bool,
}

impl ConnectingBoard {
    pub fn node(&self, id: &str) -> Option<&PuzzleNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn has_connection(&self, x: &str, y: &str) -> bool {
        self.connections.iter().any(|c| c.links(x, y))
    }

    /// Count-based completion: every required pair must be present among the
    /// recorded connections; extra correct-looking links never block solving.
    pub fn all_required_connected(&self) -> bool {
        let matched = self
            .solutions
            .iter()
            .filter(|s| self.has_connection(&s.a, &s.b))
            .count();
        matched == self.solutions.len()
    }
}
