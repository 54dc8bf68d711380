use {
    garden_components::GardenItem,
    serde::{Deserialize, Serialize},
};

/// Durable garden record: everything needed to rebuild the placed-item
/// collection and the unlocked set.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GardenRecord {
    pub placed_items: Vec<GardenItem>,
    pub unlocked_tokens: Vec<String>,
    pub next_item_id: u64,
}

/// Durable progression record.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ProgressionRecord {
    pub completed_puzzle_ids: Vec<String>,
    pub current_puzzle_index: usize,
    pub solved_count: u32,
}

#[cfg(test)]
mod tests {
    use {super::*, garden_components::{ItemKind, Position}};

    #[test]
    fn test_garden_record_round_trips_through_ron() {
        let record = GardenRecord {
            placed_items: vec![GardenItem {
                id: "flower-2-8".to_string(),
                kind: ItemKind::Flower,
                level: 2,
                position: Position::new(40.0, 60.0),
                rotation_degrees: -2.5,
                scale: 1.0,
            }],
            unlocked_tokens: vec!["flower-1".to_string(), "flower-2".to_string()],
            next_item_id: 8,
        };

        let serialized =
            ron::ser::to_string_pretty(&record, ron::ser::PrettyConfig::default()).unwrap();
        let restored: GardenRecord = ron::from_str(&serialized).unwrap();

        assert_eq!(restored.placed_items, record.placed_items);
        assert_eq!(restored.unlocked_tokens, record.unlocked_tokens);
        assert_eq!(restored.next_item_id, 8);
    }

    #[test]
    fn test_progression_record_round_trips_through_ron() {
        let record = ProgressionRecord {
            completed_puzzle_ids: vec!["plant_pairs".to_string()],
            current_puzzle_index: 1,
            solved_count: 1,
        };

        let serialized =
            ron::ser::to_string_pretty(&record, ron::ser::PrettyConfig::default()).unwrap();
        let restored: ProgressionRecord = ron::from_str(&serialized).unwrap();

        assert_eq!(restored.completed_puzzle_ids, record.completed_puzzle_ids);
        assert_eq!(restored.current_puzzle_index, 1);
        assert_eq!(restored.solved_count, 1);
    }
}
