//! End-to-end pass over the shipped puzzle kinds: solving each one records
//! progression, grants its reward to the garden and advances the pointer.

use {
    bevy::{prelude::*, time::TimePlugin},
    game_rng::GameRng,
    garden::GardenPlugin,
    garden_components::ItemKind,
    garden_resources::UnlockedItems,
    progression::{ProgressionPlugin, ProgressionState},
    puzzle_assets::{
        NodeDef, NodeGroup, PuzzleCatalog, PuzzleDefinition, PuzzlePayload, Reward, SolutionPair,
        SymbolPair,
    },
    puzzle_components::{ConnectingBoard, MatchingBoard, PatternBoard, PuzzleBoard},
    puzzle_events::{CardClicked, CellToggled, NodeClicked, OpenCurrentPuzzle, PatternCheckRequested},
    puzzles::PuzzlesPlugin,
    std::time::Duration,
};

fn sample_catalog() -> PuzzleCatalog {
    let pair = |symbol: &str, partner: &str| SymbolPair {
        symbol: symbol.to_string(),
        partner: partner.to_string(),
    };
    let node = |id: &str, group| NodeDef {
        id: id.to_string(),
        label: id.to_string(),
        group,
    };
    let link = |start: &str, end: &str| SolutionPair {
        start: start.to_string(),
        end: end.to_string(),
    };
    let reward = |kind, level, name: &str| {
        Some(Reward {
            kind,
            level,
            name: name.to_string(),
        })
    };

    PuzzleCatalog {
        puzzles: vec![
            PuzzleDefinition {
                id: "plant_pairs".to_string(),
                title: "Magical Plant Pairs".to_string(),
                description: String::new(),
                difficulty: 1,
                payload: PuzzlePayload::Matching {
                    pairs: vec![pair("sunflower", "sun"), pair("mushroom", "moon")],
                },
                reward: reward(ItemKind::Flower, 2, "Rose"),
            },
            PuzzleDefinition {
                id: "growth_pattern".to_string(),
                title: "Growth Pattern".to_string(),
                description: String::new(),
                difficulty: 2,
                payload: PuzzlePayload::Pattern {
                    grid_size: 4,
                    solution: vec![0, 5, 6, 9, 10, 15],
                },
                reward: reward(ItemKind::Tree, 2, "Willow"),
            },
            PuzzleDefinition {
                id: "connect_elements".to_string(),
                title: "Connect Elements".to_string(),
                description: String::new(),
                difficulty: 2,
                payload: PuzzlePayload::Connecting {
                    nodes: vec![
                        node("water", NodeGroup::Start),
                        node("light", NodeGroup::Start),
                        node("flower", NodeGroup::End),
                        node("tree", NodeGroup::End),
                    ],
                    solutions: vec![link("water", "tree"), link("light", "flower")],
                },
                reward: reward(ItemKind::Decoration, 2, "Fountain"),
            },
        ],
    }
}

fn step(app: &mut App, secs: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(secs));
    app.update();
}

fn board_entity(app: &mut App) -> Entity {
    let mut query = app.world_mut().query_filtered::<Entity, With<PuzzleBoard>>();
    let boards: Vec<Entity> = query.iter(app.world()).collect();
    assert_eq!(boards.len(), 1, "exactly one open board expected");
    boards[0]
}

#[test]
fn solving_the_catalog_unlocks_every_reward() {
    let mut app = App::new();
    // Manual time stepping; the real TimePlugin would fight the test clock.
    app.add_plugins(MinimalPlugins.build().disable::<TimePlugin>());
    app.init_resource::<Time>();
    app.add_plugins((ProgressionPlugin, GardenPlugin, PuzzlesPlugin));
    app.insert_resource(GameRng::seeded(7));
    app.insert_resource(sample_catalog());
    app.update();

    // --- Puzzle 1: matching ---
    app.world_mut().trigger(OpenCurrentPuzzle);
    let entity = board_entity(&mut app);

    for _ in 0..2 {
        let (first, second) = {
            let board = app.world().get::<MatchingBoard>(entity).unwrap();
            let mut found = None;
            'outer: for (i, card) in board.cards.iter().enumerate() {
                if card.matched {
                    continue;
                }
                for (j, other) in board.cards.iter().enumerate().skip(i + 1) {
                    if !other.matched && other.symbol == card.matches {
                        found = Some((i, j));
                        break 'outer;
                    }
                }
            }
            found.expect("an unmatched pair should remain")
        };
        app.world_mut().trigger(CardClicked {
            entity,
            card: first,
        });
        app.world_mut().trigger(CardClicked {
            entity,
            card: second,
        });
        step(&mut app, 1.0);
    }

    {
        let progression = app.world().resource::<ProgressionState>();
        assert!(progression.is_completed("plant_pairs"));
        assert_eq!(progression.solved_count, 1);
        assert_eq!(progression.current_index, 1);

        let unlocked = app.world().resource::<UnlockedItems>();
        assert!(unlocked.is_unlocked("flower-2"));
    }

    // --- Puzzle 2: pattern ---
    app.world_mut().trigger(OpenCurrentPuzzle);
    let entity = board_entity(&mut app);
    assert!(app.world().get::<PatternBoard>(entity).is_some());

    for cell in [0, 5, 6, 9, 10, 15] {
        app.world_mut().trigger(CellToggled { entity, cell });
    }
    app.world_mut().trigger(PatternCheckRequested { entity });
    step(&mut app, 1.5);

    {
        let progression = app.world().resource::<ProgressionState>();
        assert!(progression.is_completed("growth_pattern"));
        assert_eq!(progression.current_index, 2);
        assert!(app.world().resource::<UnlockedItems>().is_unlocked("tree-2"));
    }

    // --- Puzzle 3: connecting ---
    app.world_mut().trigger(OpenCurrentPuzzle);
    let entity = board_entity(&mut app);
    assert!(app.world().get::<ConnectingBoard>(entity).is_some());

    for id in ["water", "tree", "flower", "light"] {
        app.world_mut().trigger(NodeClicked {
            entity,
            node_id: id.to_string(),
        });
    }
    app.update();

    let progression = app.world().resource::<ProgressionState>();
    assert!(progression.is_completed("connect_elements"));
    assert_eq!(progression.solved_count, 3);
    assert!(
        app.world()
            .resource::<UnlockedItems>()
            .is_unlocked("decoration-2")
    );

    // Catalog exhausted: there is no current puzzle left to open.
    let catalog = app.world().resource::<PuzzleCatalog>();
    assert!(progression.current_puzzle(catalog).is_none());

    app.world_mut().trigger(OpenCurrentPuzzle);
    app.update();
    let mut query = app.world_mut().query_filtered::<Entity, With<PuzzleBoard>>();
    assert_eq!(query.iter(app.world()).count(), 0);
}
