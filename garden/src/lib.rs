mod systems;

pub use systems::*;

use {
    bevy::prelude::*,
    garden_components::{GardenItem, ItemKind},
    garden_resources::{ItemIdAllocator, RestoredItems, UnlockedItems},
    states::GameState,
};

pub struct GardenPlugin;

impl Plugin for GardenPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UnlockedItems>()
            .init_resource::<ItemIdAllocator>()
            .init_resource::<RestoredItems>()
            .register_type::<GardenItem>()
            .register_type::<UnlockedItems>()
            .register_type::<ItemIdAllocator>()
            .add_systems(OnEnter(GameState::Running), systems::initialize_garden)
            .add_observer(systems::on_place_item)
            .add_observer(systems::on_move_item)
            .add_observer(systems::on_remove_item)
            .add_observer(systems::on_reward_granted)
            .add_observer(systems::on_reset_garden);
    }
}

/// Display name of a kind/level variant, where one is defined.
pub fn variant_name(kind: ItemKind, level: u32) -> Option<&'static str> {
    let name = match (kind, level) {
        (ItemKind::Flower, 1) => "Daisy",
        (ItemKind::Flower, 2) => "Rose",
        (ItemKind::Flower, 3) => "Lily",
        (ItemKind::Tree, 1) => "Maple",
        (ItemKind::Tree, 2) => "Willow",
        (ItemKind::Tree, 3) => "Cherry",
        (ItemKind::Decoration, 1) => "Bench",
        (ItemKind::Decoration, 2) => "Fountain",
        (ItemKind::Decoration, 3) => "Gazebo",
        _ => return None,
    };
    Some(name)
}
