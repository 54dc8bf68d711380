use {
    bevy::prelude::*,
    serde::{Deserialize, Serialize},
    shared_components::IncludeInSave,
    std::fmt,
};

/// The three families of placeable garden decorations.
///
/// Together with a level this identifies an unlockable variant; see
/// [`ItemKind::token`].
#[derive(
    Reflect, Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum ItemKind {
    #[default]
    Flower,
    Tree,
    Decoration,
}

impl ItemKind {
    /// Unlock token for a kind/level variant, e.g. `"flower-2"`.
    pub fn token(&self, level: u32) -> String {
        format!("{self}-{level}")
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemKind::Flower => "flower",
            ItemKind::Tree => "tree",
            ItemKind::Decoration => "decoration",
        };
        f.write_str(name)
    }
}

/// A point on the garden canvas, both axes in percent (0..=100).
#[derive(Reflect, Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A single placed decoration.
///
/// One entity per placement; the `id` is allocated by the garden store and
/// stays stable across save/load so move/remove events can address it.
#[derive(Component, Reflect, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[reflect(Component, Default)]
#[require(IncludeInSave)]
pub struct GardenItem {
    pub id: String,
    pub kind: ItemKind,
    pub level: u32,
    pub position: Position,
    pub rotation_degrees: f32,
    pub scale: f32,
}

impl Default for GardenItem {
    fn default() -> Self {
        Self {
            id: String::new(),
            kind: ItemKind::default(),
            level: 1,
            position: Position::default(),
            rotation_degrees: 0.0,
            scale: 1.0,
        }
    }
}
