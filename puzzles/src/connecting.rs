//! Node-linking solver: connect each start node to its end partner.

use {
    bevy::prelude::*,
    garden_components::Position,
    puzzle_assets::{NodeDef, NodeGroup, SolutionPair},
    puzzle_components::{Connection, ConnectingBoard, PuzzleBoard, PuzzleNode},
    puzzle_events::{NodeClicked, PuzzleSolved},
};

/// Node counts up to this size use the two-row linear layout.
const LINEAR_LAYOUT_MAX: usize = 6;

/// Canvas position for a node, in percent. Small boards spread across two
/// rows (start on top, end below); larger ones go around a circle. Purely a
/// function of index and count, recomputed at every board spawn.
pub fn node_position(index: usize, total: usize, group: NodeGroup) -> Position {
    if total <= LINEAR_LAYOUT_MAX {
        let x = if total > 1 {
            index as f32 * (100.0 / (total - 1) as f32)
        } else {
            0.0
        };
        let y = match group {
            NodeGroup::Start => 20.0,
            NodeGroup::End => 80.0,
        };
        Position::new(x, y)
    } else {
        let angle = (index as f32 / total as f32) * std::f32::consts::TAU;
        Position::new(50.0 + 40.0 * angle.cos(), 50.0 + 40.0 * angle.sin())
    }
}

pub(crate) fn build_board(nodes: &[NodeDef], solutions: &[SolutionPair]) -> ConnectingBoard {
    let nodes = nodes
        .iter()
        .enumerate()
        .map(|(index, def)| PuzzleNode {
            id: def.id.clone(),
            label: def.label.clone(),
            group: def.group,
            position: node_position(index, nodes.len(), def.group),
        })
        .collect();
    let solutions = solutions
        .iter()
        .map(|pair| Connection {
            a: pair.start.clone(),
            b: pair.end.clone(),
        })
        .collect();

    ConnectingBoard {
        nodes,
        connections: Vec::new(),
        pending: None,
        solutions,
        solved: false,
    }
}

/// Observer driving the selection state machine.
///
/// First click selects; clicking the selection again cancels; a same-group
/// second click is rejected and keeps the selection; a cross-group second
/// click records the undirected pair once and clears the selection. Solved
/// is re-evaluated after every new connection and fires exactly once.
pub fn on_node_clicked(
    trigger: On<NodeClicked>,
    mut boards: Query<(&PuzzleBoard, &mut ConnectingBoard)>,
    mut commands: Commands,
) {
    let event = trigger.event();
    let Ok((meta, mut board)) = boards.get_mut(event.entity) else {
        return;
    };

    if board.solved {
        return;
    }
    let Some(clicked) = board.node(&event.node_id) else {
        warn!(node_id = %event.node_id, "click on unknown node");
        return;
    };
    let clicked_group = clicked.group;

    let Some(selected) = board.pending.take() else {
        debug!(node_id = %event.node_id, "node selected");
        board.pending = Some(event.node_id.clone());
        return;
    };

    if selected == event.node_id {
        debug!(node_id = %event.node_id, "selection cancelled");
        return;
    }

    let selected_group = board.node(&selected).map(|n| n.group);
    if selected_group == Some(clicked_group) {
        debug!(
            from = %selected,
            to = %event.node_id,
            "nodes share a group, connection rejected"
        );
        board.pending = Some(selected);
        return;
    }

    if !board.has_connection(&selected, &event.node_id) {
        debug!(from = %selected, to = %event.node_id, "connection recorded");
        board.connections.push(Connection {
            a: selected,
            b: event.node_id.clone(),
        });

        if board.all_required_connected() {
            board.solved = true;
            info!(
                puzzle_id = %meta.puzzle_id,
                connections = %board.connections.len(),
                "connecting puzzle solved"
            );
            commands.trigger(PuzzleSolved {
                puzzle_id: meta.puzzle_id.clone(),
            });
        }
    }
}
