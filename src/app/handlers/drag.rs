//! Handler für den Node-Drag-Lifecycle.

use crate::app::drag_controller::DragTransition;
use crate::app::history::Snapshot;
use crate::app::AppState;

/// Startet einen Drag, wenn `world_pos` eine Node-Hit-Fläche trifft.
pub fn begin(state: &mut AppState, world_pos: glam::Vec2) {
    if let Some(DragTransition::Started { node_index }) = state.drag.pointer_down(world_pos) {
        let snap = Snapshot::from_state(state);
        state.pending_drag_snapshot = Some(snap);
        log::debug!("Drag gestartet: Node {node_index}");
    }
}

/// Setzt den gezogenen Node auf `world_pos` und erzeugt den Pfad neu.
pub fn update(state: &mut AppState, world_pos: glam::Vec2) {
    if let Some(DragTransition::Moved {
        node_index,
        position,
    }) = state.drag.pointer_move(world_pos)
    {
        let nodes = state.nodes.replace_node(node_index, position);
        state.set_nodes(nodes);
    }
}

/// Beendet den Drag. Nur tatsächlich verschobene Nodes erzeugen einen Undo-Schritt.
pub fn end(state: &mut AppState, outside: bool) {
    let transition = if outside {
        state.drag.pointer_up_outside()
    } else {
        state.drag.pointer_up()
    };

    let Some(DragTransition::Ended { node_index, moved }) = transition else {
        return;
    };

    let snap = state.pending_drag_snapshot.take();
    if moved {
        if let Some(snap) = snap {
            state.history.record_snapshot(snap);
        }
        log::debug!("Drag beendet: Node {node_index}, Pfad: {}", state.path);
    } else {
        log::debug!("Drag beendet ohne Bewegung: Node {node_index}");
    }
}
