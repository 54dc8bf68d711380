use {
    bevy::prelude::*,
    garden_components::{ItemKind, Position},
};

/// Request to drop a new decoration onto the canvas.
/// Ignored unless the kind/level token is unlocked.
#[derive(Debug, Event)]
pub struct PlaceItem {
    pub kind: ItemKind,
    pub level: u32,
    pub position: Position,
}

/// Request to move a placed item. No-op if the id is unknown.
#[derive(Debug, Event)]
pub struct MoveItem {
    pub id: String,
    pub position: Position,
}

/// Request to remove a placed item. No-op if the id is unknown.
#[derive(Debug, Event)]
pub struct RemoveItem {
    pub id: String,
}

/// Clears every placed item and the unlocked set.
#[derive(Debug, Event)]
pub struct ResetGarden;
