use {
    crate::variant_name,
    bevy::prelude::*,
    game_rng::GameRng,
    garden_components::{GardenItem, ItemKind, Position},
    garden_events::{MoveItem, PlaceItem, RemoveItem, ResetGarden},
    garden_resources::{ItemIdAllocator, RestoredItems, UnlockedItems},
    puzzle_events::RewardGranted,
    rand::Rng,
    shared_components::DisplayName,
};

/// Fixed starter layout for a fresh garden: one of each kind at level 1.
const STARTER_ITEMS: [(ItemKind, Position, f32); 3] = [
    (ItemKind::Flower, Position { x: 30.0, y: 50.0 }, 2.0),
    (ItemKind::Tree, Position { x: 70.0, y: 30.0 }, -3.0),
    (ItemKind::Decoration, Position { x: 50.0, y: 70.0 }, 0.0),
];

fn spawn_item(commands: &mut Commands, item: GardenItem) {
    let name = variant_name(item.kind, item.level)
        .map(DisplayName::from)
        .unwrap_or_else(|| DisplayName(item.kind.token(item.level)));
    commands.spawn((item, name));
}

/// Spawns whatever the save record restored; seeds the starter garden when
/// the record was empty. Seeding runs once per empty-state detection — a
/// restored or already-populated garden is left alone.
pub fn initialize_garden(
    mut commands: Commands,
    existing: Query<(), With<GardenItem>>,
    mut restored: ResMut<RestoredItems>,
    mut unlocked: ResMut<UnlockedItems>,
    mut ids: ResMut<ItemIdAllocator>,
) {
    let items = std::mem::take(&mut restored.0);

    if !existing.is_empty() {
        return;
    }

    if !items.is_empty() {
        info!(count = %items.len(), "restoring placed garden items");
        for item in items {
            spawn_item(&mut commands, item);
        }
        return;
    }

    info!("empty garden, seeding starter items");
    for (kind, position, rotation_degrees) in STARTER_ITEMS {
        let id = ids.allocate(kind, 1);
        spawn_item(
            &mut commands,
            GardenItem {
                id,
                kind,
                level: 1,
                position,
                rotation_degrees,
                scale: 1.0,
            },
        );
        unlocked.unlock(kind.token(1));
    }
}

/// Observer for drop-placement. Rejects locked variants.
pub fn on_place_item(
    trigger: On<PlaceItem>,
    mut commands: Commands,
    unlocked: Res<UnlockedItems>,
    mut ids: ResMut<ItemIdAllocator>,
    mut rng: ResMut<GameRng>,
) {
    let event = trigger.event();
    let token = event.kind.token(event.level);

    if !unlocked.is_unlocked(&token) {
        warn!(%token, "cannot place a locked item");
        return;
    }

    let id = ids.allocate(event.kind, event.level);
    // Slight tilt so hand-placed items don't look stamped.
    let rotation_degrees = rng.random_range(-5.0..5.0);

    debug!(item_id = %id, x = %event.position.x, y = %event.position.y, "placing item");
    spawn_item(
        &mut commands,
        GardenItem {
            id,
            kind: event.kind,
            level: event.level,
            position: event.position,
            rotation_degrees,
            scale: 1.0,
        },
    );
}

/// Observer that repositions a placed item. Unknown ids are ignored.
pub fn on_move_item(trigger: On<MoveItem>, mut items: Query<&mut GardenItem>) {
    let event = trigger.event();

    if let Some(mut item) = items.iter_mut().find(|i| i.id == event.id) {
        item.position = event.position;
    } else {
        debug!(item_id = %event.id, "move for unknown item, ignoring");
    }
}

/// Observer that removes a placed item. Unknown ids are ignored.
pub fn on_remove_item(
    trigger: On<RemoveItem>,
    mut commands: Commands,
    items: Query<(Entity, &GardenItem)>,
) {
    let event = trigger.event();

    if let Some((entity, _)) = items.iter().find(|(_, i)| i.id == event.id) {
        debug!(item_id = %event.id, "removing item");
        commands.entity(entity).despawn();
    } else {
        debug!(item_id = %event.id, "remove for unknown item, ignoring");
    }
}

/// Observer for puzzle rewards: adds the `"{kind}-{level}"` token once.
pub fn on_reward_granted(trigger: On<RewardGranted>, mut unlocked: ResMut<UnlockedItems>) {
    let event = trigger.event();
    let token = event.kind.token(event.level);

    if unlocked.unlock(token.clone()) {
        info!(%token, name = %event.name, "unlocked new garden item");
    } else {
        debug!(%token, "reward already unlocked");
    }
}

/// Observer that clears the whole garden aggregate.
pub fn on_reset_garden(
    _trigger: On<ResetGarden>,
    mut commands: Commands,
    items: Query<Entity, With<GardenItem>>,
    mut unlocked: ResMut<UnlockedItems>,
    mut ids: ResMut<ItemIdAllocator>,
) {
    for entity in &items {
        commands.entity(entity).despawn();
    }
    unlocked.clear();
    *ids = ItemIdAllocator::default();
    info!("garden reset");
}
