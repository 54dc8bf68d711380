use {
    bevy::prelude::*,
    bevy_common_assets::ron::RonAssetPlugin,
    garden_components::ItemKind,
    serde::{Deserialize, Serialize},
};

pub struct PuzzleAssetsPlugin;

impl Plugin for PuzzleAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RonAssetPlugin::<PuzzleCatalog>::new(&["catalog.ron"]))
            .init_resource::<PuzzleCatalog>();
    }
}

/// The fixed, ordered list of puzzle definitions shipped with the game.
///
/// Lives a double life: loaded as a RON asset (`assets/puzzles/*.catalog.ron`)
/// and installed as a plain resource once the asset resolves. The resource
/// defaults to empty so the progression engine stays total before install.
#[derive(Asset, TypePath, Resource, Debug, Clone, Default, Deserialize)]
pub struct PuzzleCatalog {
    pub puzzles: Vec<PuzzleDefinition>,
}

impl PuzzleCatalog {
    pub fn get(&self, id: &str) -> Option<&PuzzleDefinition> {
        self.puzzles.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }
}

/// One catalog entry. Authored in RON, never mutated at runtime.
#[derive(Debug, Clone, Deserialize)]
pub struct PuzzleDefinition {
    /// Unique key for this puzzle (e.g., "puzzle_plant_pairs").
    pub id: String,
    pub title: String,
    pub description: String,
    /// Intended ordering hint, >= 1.
    pub difficulty: u32,
    /// Kind-specific setup data; also determines the puzzle kind.
    pub payload: PuzzlePayload,
    /// Item variant unlocked on completion, if any.
    #[serde(default)]
    pub reward: Option<Reward>,
}

impl PuzzleDefinition {
    pub fn kind(&self) -> PuzzleKind {
        match self.payload {
            PuzzlePayload::Matching { .. } => PuzzleKind::Matching,
            PuzzlePayload::Pattern { .. } => PuzzleKind::Pattern,
            PuzzlePayload::Connecting { .. } => PuzzleKind::Connecting,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleKind {
    Matching,
    Pattern,
    Connecting,
}

/// Kind-specific puzzle setup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub enum PuzzlePayload {
    /// Memory cards: each pair yields two cards, one per symbol.
    Matching { pairs: Vec<SymbolPair> },
    /// Toggle cells on a square grid until they equal the solution set.
    Pattern {
        /// Side length of the grid. Missing in older catalogs, hence the default.
        #[serde(default = "default_grid_size")]
        grid_size: usize,
        /// Row-major 0-based cell indices.
        solution: Vec<usize>,
    },
    /// Link every start-group node to its required end-group partner.
    Connecting {
        nodes: Vec<NodeDef>,
        solutions: Vec<SolutionPair>,
    },
}

fn default_grid_size() -> usize {
    4
}

/// A forward/reverse match: `symbol` matches `partner` and vice versa.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SymbolPair {
    pub symbol: String,
    pub partner: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NodeDef {
    pub id: String,
    pub label: String,
    pub group: NodeGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum NodeGroup {
    Start,
    End,
}

/// A required undirected start-end link.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SolutionPair {
    pub start: String,
    pub end: String,
}

/// Item variant granted when a puzzle is solved.
#[derive(Debug, Clone, Deserialize)]
pub struct Reward {
    pub kind: ItemKind,
    pub level: u32,
    pub name: String,
}

impl Reward {
    pub fn token(&self) -> String {
        self.kind.token(self.level)
    }
}
