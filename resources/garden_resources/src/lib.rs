use {
    bevy::prelude::*,
    garden_components::{GardenItem, ItemKind},
};

/// Items read back from the garden save record, waiting to be spawned when
/// the session enters Running. Empty on a fresh install.
#[derive(Resource, Default, Debug)]
pub struct RestoredItems(pub Vec<GardenItem>);

/// Persistent set of `"{kind}-{level}"` tokens the player may place.
///
/// Grows monotonically through puzzle rewards and starter seeding; only a
/// full garden reset clears it.
#[derive(Resource, Reflect, Default, Debug, Clone)]
#[reflect(Resource)]
pub struct UnlockedItems {
    pub tokens: Vec<String>,
}

impl UnlockedItems {
    pub fn is_unlocked(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Adds the token if absent. Returns false when it was already present.
    pub fn unlock(&mut self, token: String) -> bool {
        if self.is_unlocked(&token) {
            return false;
        }
        self.tokens.push(token);
        true
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }
}

/// Hands out stable ids for placed items, e.g. `"flower-2-17"`.
///
/// The counter is part of the garden save record so ids never collide
/// across sessions.
#[derive(Resource, Reflect, Default, Debug, Clone)]
#[reflect(Resource)]
pub struct ItemIdAllocator {
    pub next: u64,
}

impl ItemIdAllocator {
    pub fn allocate(&mut self, kind: ItemKind, level: u32) -> String {
        self.next += 1;
        format!("{kind}-{level}-{}", self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlock_is_idempotent() {
        let mut unlocked = UnlockedItems::default();
        assert!(unlocked.unlock("flower-2".to_string()));
        assert!(!unlocked.unlock("flower-2".to_string()));
        assert_eq!(unlocked.tokens.len(), 1);
        assert!(unlocked.is_unlocked("flower-2"));
    }

    #[test]
    fn test_allocated_ids_are_unique() {
        let mut ids = ItemIdAllocator::default();
        let a = ids.allocate(ItemKind::Flower, 1);
        let b = ids.allocate(ItemKind::Flower, 1);
        assert_ne!(a, b);
    }
}
