//! Save/Load system for persisting the garden and progression records.
//!
//! This crate provides:
//! - Two independently named RON records under `saves/`
//! - A synchronous restore at startup, falling back to defaults
//! - Autosave after every mutating operation via change detection
//! - F5 keyboard shortcut for an additional timestamped snapshot pair

mod records;

pub use records::{GardenRecord, ProgressionRecord};

use {
    bevy::prelude::*,
    chrono::Local,
    garden_components::GardenItem,
    garden_resources::{ItemIdAllocator, RestoredItems, UnlockedItems},
    progression::ProgressionState,
    states::GameState,
    std::{fs, io::Write, path::Path},
};

const SAVES_DIR: &str = "saves";
const GARDEN_RECORD: &str = "garden";
const PROGRESSION_RECORD: &str = "progression";

pub struct SaveLoadPlugin;

impl Plugin for SaveLoadPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, restore_session).add_systems(
            PostUpdate,
            (
                save_garden_on_change,
                save_progression_on_change,
                snapshot_on_keypress,
            )
                .run_if(in_state(GameState::Running)),
        );
    }
}

/// Reads both records back into the stores. Missing or unreadable files
/// leave the defaults in place; there is nothing to recover from on a
/// fresh install.
fn restore_session(
    mut restored: ResMut<RestoredItems>,
    mut unlocked: ResMut<UnlockedItems>,
    mut ids: ResMut<ItemIdAllocator>,
    mut progression: ResMut<ProgressionState>,
) {
    let garden: GardenRecord = load_record(GARDEN_RECORD);
    restored.0 = garden.placed_items;
    unlocked.tokens = garden.unlocked_tokens;
    ids.next = garden.next_item_id;

    let record: ProgressionRecord = load_record(PROGRESSION_RECORD);
    // The denormalized count is never trusted from disk; the pointer is
    // re-validated once the catalog installs.
    let solved_count = record.completed_puzzle_ids.len() as u32;
    progression.completed = record.completed_puzzle_ids;
    progression.current_index = record.current_puzzle_index;
    progression.solved_count = solved_count;
}

fn garden_record<'a>(
    items: impl Iterator<Item = &'a GardenItem>,
    unlocked: &UnlockedItems,
    ids: &ItemIdAllocator,
) -> GardenRecord {
    GardenRecord {
        placed_items: items.cloned().collect(),
        unlocked_tokens: unlocked.tokens.clone(),
        next_item_id: ids.next,
    }
}

fn progression_record(progression: &ProgressionState) -> ProgressionRecord {
    ProgressionRecord {
        completed_puzzle_ids: progression.completed.clone(),
        current_puzzle_index: progression.current_index,
        solved_count: progression.solved_count,
    }
}

/// Writes the garden record whenever an item or the unlocked set mutated
/// this frame. Last-writer-wins; there is only one writer.
fn save_garden_on_change(
    items: Query<Ref<GardenItem>>,
    mut removed: RemovedComponents<GardenItem>,
    unlocked: Res<UnlockedItems>,
    ids: Res<ItemIdAllocator>,
) {
    let removed_any = !removed.is_empty();
    removed.clear();
    let changed_any = items.iter().any(|item| item.is_changed());

    if !(removed_any || changed_any || unlocked.is_changed() || ids.is_changed()) {
        return;
    }

    let record = garden_record(items.iter().map(Ref::into_inner), &unlocked, &ids);
    write_record(GARDEN_RECORD, &record);
}

/// Writes the progression record whenever progression mutated this frame.
fn save_progression_on_change(progression: Res<ProgressionState>) {
    if !progression.is_changed() {
        return;
    }
    write_record(PROGRESSION_RECORD, &progression_record(&progression));
}

/// F5 writes a timestamped snapshot pair next to the live records.
fn snapshot_on_keypress(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    items: Query<&GardenItem>,
    unlocked: Res<UnlockedItems>,
    ids: Res<ItemIdAllocator>,
    progression: Res<ProgressionState>,
) {
    let Some(keyboard) = keyboard else {
        return;
    };
    if !keyboard.just_pressed(KeyCode::F5) {
        return;
    }

    info!("manual snapshot triggered (F5)");
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    write_record(
        &format!("{GARDEN_RECORD}_{timestamp}"),
        &garden_record(items.iter(), &unlocked, &ids),
    );
    write_record(
        &format!("{PROGRESSION_RECORD}_{timestamp}"),
        &progression_record(&progression),
    );
}

fn load_record<T: Default + serde::de::DeserializeOwned>(name: &str) -> T {
    let path = Path::new(SAVES_DIR).join(format!("{name}.ron"));

    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(_) => {
            info!(record = %name, "no saved record, starting fresh");
            return T::default();
        }
    };

    match ron::from_str(&contents) {
        Ok(value) => {
            info!(record = %name, "restored record");
            value
        }
        Err(e) => {
            error!(record = %name, "failed to parse record, starting fresh: {e}");
            T::default()
        }
    }
}

fn write_record<T: serde::Serialize>(name: &str, record: &T) {
    let saves_dir = Path::new(SAVES_DIR);
    if let Err(e) = fs::create_dir_all(saves_dir) {
        error!("failed to create saves directory: {e}");
        return;
    }

    let serialized = match ron::ser::to_string_pretty(record, ron::ser::PrettyConfig::default()) {
        Ok(data) => data,
        Err(e) => {
            error!(record = %name, "failed to serialize record: {e}");
            return;
        }
    };

    let filepath = saves_dir.join(format!("{name}.ron"));
    match fs::File::options()
        .write(true)
        .truncate(true)
        .create(true)
        .open(&filepath)
    {
        Ok(mut file) => {
            if let Err(e) = file.write_all(serialized.as_bytes()) {
                error!("failed to write save file: {e}");
                return;
            }
            debug!(record = %name, path = %filepath.display(), "record saved");
        }
        Err(e) => {
            error!("failed to create save file: {e}");
        }
    }
}
