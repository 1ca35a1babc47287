//! Handler für das Laden eines Pfad-Strings.

use crate::app::AppState;

/// Parst `path` als neue Knotenliste. Ein laufender Drag wird beendet.
pub fn load(state: &mut AppState, path: &str) {
    if state.drag.pointer_up_outside().is_some() {
        state.pending_drag_snapshot = None;
        log::debug!("Laufender Drag durch Pfad-Laden beendet");
    }

    state.record_undo_snapshot();
    state.load_path(path);

    if state.nodes.is_empty() && !path.trim().is_empty() {
        state.ui.status_message = Some("Pfad enthält keine M/L-Kommandos".to_string());
    } else {
        state.ui.status_message = None;
    }

    log::info!("Pfad geladen: {} Nodes", state.node_count());
}
