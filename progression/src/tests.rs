use {
    crate::{ProgressionPlugin, ProgressionState},
    bevy::prelude::*,
    garden_components::ItemKind,
    puzzle_assets::{PuzzleCatalog, PuzzleDefinition, PuzzlePayload, Reward},
    puzzle_events::{PuzzleSolved, ResetProgression, RewardGranted},
};

fn pattern_puzzle(id: &str, reward: Option<Reward>) -> PuzzleDefinition {
    PuzzleDefinition {
        id: id.to_string(),
        title: id.to_string(),
        description: String::new(),
        difficulty: 1,
        payload: PuzzlePayload::Pattern {
            grid_size: 4,
            solution: vec![0, 1],
        },
        reward,
    }
}

fn catalog(ids: &[&str]) -> PuzzleCatalog {
    PuzzleCatalog {
        puzzles: ids.iter().map(|id| pattern_puzzle(id, None)).collect(),
    }
}

fn test_app(catalog: PuzzleCatalog) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(ProgressionPlugin);
    app.insert_resource(catalog);
    app.update();
    app
}

#[test]
fn test_complete_keeps_count_in_sync_and_is_idempotent() {
    let mut app = test_app(catalog(&["a", "b", "c"]));

    for id in ["a", "b", "a", "b", "a"] {
        app.world_mut().trigger(PuzzleSolved {
            puzzle_id: id.to_string(),
        });
        app.update();

        let state = app.world().resource::<ProgressionState>();
        assert_eq!(state.solved_count as usize, state.completed.len());
    }

    let state = app.world().resource::<ProgressionState>();
    assert_eq!(state.completed, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(state.solved_count, 2);
}

#[test]
fn test_advance_wraps_to_first_uncompleted() {
    let catalog = catalog(&["a", "b", "c", "d"]);
    let mut state = ProgressionState::default();

    state.complete("c");
    state.complete("d");
    state.current_index = 2;
    state.advance(&catalog);
    assert_eq!(state.current_index, 0, "scan should wrap past c and d");

    state.complete("a");
    state.advance(&catalog);
    assert_eq!(state.current_index, 1);

    // All completed: the pointer stays put.
    state.complete("b");
    state.advance(&catalog);
    assert_eq!(state.current_index, 1);
    assert!(state.all_completed(&catalog));
}

#[test]
fn test_current_puzzle_is_none_when_all_completed() {
    let catalog = catalog(&["a", "b"]);
    let mut state = ProgressionState::default();

    assert_eq!(state.current_puzzle(&catalog).map(|p| p.id.as_str()), Some("a"));

    state.complete("a");
    state.complete("b");
    assert!(state.current_puzzle(&catalog).is_none());
}

#[test]
fn test_reward_granted_exactly_once() {
    #[derive(Resource, Default)]
    struct RewardTracker(Vec<String>);

    let rewarded = PuzzleCatalog {
        puzzles: vec![
            pattern_puzzle(
                "a",
                Some(Reward {
                    kind: ItemKind::Flower,
                    level: 2,
                    name: "Rose".to_string(),
                }),
            ),
            pattern_puzzle("b", None),
        ],
    };

    let mut app = test_app(rewarded);
    app.init_resource::<RewardTracker>();
    app.add_observer(
        |trigger: On<RewardGranted>, mut tracker: ResMut<RewardTracker>| {
            let event = trigger.event();
            tracker.0.push(event.kind.token(event.level));
        },
    );

    // Solving twice must grant once.
    for _ in 0..2 {
        app.world_mut().trigger(PuzzleSolved {
            puzzle_id: "a".to_string(),
        });
        app.update();
    }

    // A rewardless puzzle grants nothing.
    app.world_mut().trigger(PuzzleSolved {
        puzzle_id: "b".to_string(),
    });
    app.update();

    let tracker = app.world().resource::<RewardTracker>();
    assert_eq!(tracker.0, vec!["flower-2".to_string()]);
}

#[test]
fn test_solving_advances_past_completed_puzzle() {
    let mut app = test_app(catalog(&["a", "b", "c"]));

    app.world_mut().trigger(PuzzleSolved {
        puzzle_id: "a".to_string(),
    });
    app.update();

    let state = app.world().resource::<ProgressionState>();
    assert_eq!(state.current_index, 1);
}

#[test]
fn test_reset_clears_everything() {
    let mut app = test_app(catalog(&["a", "b"]));

    app.world_mut().trigger(PuzzleSolved {
        puzzle_id: "a".to_string(),
    });
    app.update();
    app.world_mut().trigger(ResetProgression);
    app.update();

    let state = app.world().resource::<ProgressionState>();
    assert!(state.completed.is_empty());
    assert_eq!(state.solved_count, 0);
    assert_eq!(state.current_index, 0);
}

#[test]
fn test_normalize_repairs_restored_state() {
    let catalog = catalog(&["a", "b", "c"]);
    let mut state = ProgressionState {
        completed: vec!["a".to_string()],
        solved_count: 9,
        current_index: 17,
    };

    state.normalize(&catalog);
    assert_eq!(state.solved_count, 1);
    assert_eq!(state.current_index, 1, "pointer should land on first open puzzle");

    let mut empty_state = ProgressionState {
        completed: vec![],
        solved_count: 3,
        current_index: 5,
    };
    empty_state.normalize(&PuzzleCatalog::default());
    assert_eq!(empty_state.solved_count, 0);
    assert_eq!(empty_state.current_index, 0);
}
