//! Memory-card solver: flip two cards, match their symbols.

use {
    bevy::prelude::*,
    game_rng::GameRng,
    puzzle_assets::SymbolPair,
    puzzle_components::{Card, MatchResolution, MatchingBoard, PuzzleBoard},
    puzzle_events::{CardClicked, PuzzleSolved},
    rand::seq::SliceRandom,
};

/// How long a matched pair stays face-up before locking in.
const MATCH_REVEAL_SECS: f32 = 1.0;
/// How long a mismatched pair stays face-up before flipping back.
const MISMATCH_RESET_SECS: f32 = 1.5;

/// Builds the 2xN shuffled card sequence: each pair contributes one card
/// per symbol, each carrying the symbol it must match.
pub(crate) fn build_board(pairs: &[SymbolPair], rng: &mut GameRng) -> MatchingBoard {
    let mut cards: Vec<Card> = pairs
        .iter()
        .flat_map(|pair| {
            [
                Card {
                    symbol: pair.symbol.clone(),
                    matches: pair.partner.clone(),
                    face_up: false,
                    matched: false,
                },
                Card {
                    symbol: pair.partner.clone(),
                    matches: pair.symbol.clone(),
                    face_up: false,
                    matched: false,
                },
            ]
        })
        .collect();
    cards.shuffle(&mut rng.0);

    MatchingBoard {
        cards,
        flipped: Vec::new(),
        moves: 0,
        solved: false,
    }
}

/// Observer for card clicks.
///
/// Clicks on matched or face-up cards, or while a pair comparison is on
/// display, are no-ops. The second card of a pair arms a [`MatchResolution`]
/// timer; the comparison itself is applied when it fires.
pub fn on_card_clicked(
    trigger: On<CardClicked>,
    mut boards: Query<&mut MatchingBoard>,
    mut commands: Commands,
) {
    let event = trigger.event();
    let Ok(mut board) = boards.get_mut(event.entity) else {
        return;
    };

    if board.solved || board.is_resolving() {
        return;
    }

    let Some(card) = board.cards.get(event.card) else {
        warn!(card = %event.card, "card click outside the board");
        return;
    };
    if card.face_up || card.matched {
        return;
    }

    board.cards[event.card].face_up = true;
    board.flipped.push(event.card);

    if board.flipped.len() == 2 {
        let (first, second) = (board.flipped[0], board.flipped[1]);
        // One move per completed pair comparison, not per click.
        board.moves += 1;

        let a = &board.cards[first];
        let b = &board.cards[second];
        let is_match = a.matches == b.symbol || b.matches == a.symbol;
        let delay = if is_match {
            MATCH_REVEAL_SECS
        } else {
            MISMATCH_RESET_SECS
        };

        debug!(first = %first, second = %second, %is_match, "pair comparison armed");
        commands.entity(event.entity).insert(MatchResolution {
            first,
            second,
            is_match,
            timer: Timer::from_seconds(delay, TimerMode::Once),
        });
    }
}

/// Applies pair comparisons whose display delay has elapsed.
///
/// The timer is fire-and-forget, so the two cards are re-validated before
/// anything is applied; a board that was replaced or reset in the meantime
/// makes the resolution a stale no-op. Solved status is judged on the
/// updated card collection, never a snapshot.
pub fn resolve_flipped_pairs(
    time: Res<Time>,
    mut boards: Query<(Entity, &PuzzleBoard, &mut MatchingBoard, &mut MatchResolution)>,
    mut commands: Commands,
) {
    for (entity, meta, mut board, mut resolution) in &mut boards {
        if !resolution.timer.tick(time.delta()).just_finished() {
            continue;
        }

        let (first, second, is_match) = (resolution.first, resolution.second, resolution.is_match);
        commands.entity(entity).remove::<MatchResolution>();

        let valid = board
            .cards
            .get(first)
            .is_some_and(|c| c.face_up && !c.matched)
            && board
                .cards
                .get(second)
                .is_some_and(|c| c.face_up && !c.matched);
        board.flipped.clear();

        if !valid {
            debug!("stale pair resolution, ignoring");
            continue;
        }

        if is_match {
            board.cards[first].matched = true;
            board.cards[second].matched = true;

            if board.all_matched() && !board.solved {
                board.solved = true;
                info!(
                    puzzle_id = %meta.puzzle_id,
                    moves = %board.moves,
                    "matching puzzle solved"
                );
                commands.trigger(PuzzleSolved {
                    puzzle_id: meta.puzzle_id.clone(),
                });
            }
        } else {
            board.cards[first].face_up = false;
            board.cards[second].face_up = false;
        }
    }
}
