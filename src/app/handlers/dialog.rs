//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Pfad-Dialog mit dem aktuellen Pfad als Eingabe.
pub fn open_path_dialog(state: &mut AppState) {
    state.ui.path_input = state.path.clone();
    state.ui.show_path_dialog = true;
}

/// Schließt den Pfad-Dialog.
pub fn close_path_dialog(state: &mut AppState) {
    state.ui.show_path_dialog = false;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = false;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    set_options(state, options);
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    apply_options(state, EditorOptions::default())
}

/// Übernimmt Optionen und bindet die Node-Handles neu (Hit-Größe, Drag-Alpha).
fn set_options(state: &mut AppState, options: EditorOptions) {
    let options = options.normalized();
    state.drag.set_drag_alpha(options.drag_marker_alpha);
    state.options = options;
    let nodes = state.nodes.clone();
    state.set_nodes(nodes);
}
