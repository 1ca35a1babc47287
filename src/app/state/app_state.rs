use crate::app::drag_controller::DragController;
use crate::app::history::{EditHistory, Snapshot};
use crate::app::CommandLog;
use crate::core::NodeStore;
use crate::path::{parse_simple_path, write_simple_path};
use crate::shared::EditorOptions;

use super::{UiState, ViewState};

/// Maximale Anzahl Undo-Schritte.
const HISTORY_DEPTH: usize = 200;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelle Knotenliste (einzige Wahrheitsquelle)
    pub nodes: NodeStore,
    /// Aus `nodes` serialisierter Pfad-String
    pub path: String,
    /// Drag-Zustandsautomat inkl. Node-Handles
    pub drag: DragController,
    /// Snapshot vor Beginn des laufenden Drags (für Undo)
    pub(crate) pending_drag_snapshot: Option<Snapshot>,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen (Farben, Größen, Breiten)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State ohne Knoten.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit Optionen; der Start-Pfad wird nicht geladen.
    pub fn with_options(options: EditorOptions) -> Self {
        let options = options.normalized();
        Self {
            nodes: NodeStore::new(),
            path: String::new(),
            drag: DragController::new(options.drag_marker_alpha),
            pending_drag_snapshot: None,
            view: ViewState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(HISTORY_DEPTH),
            options,
            should_exit: false,
        }
    }

    /// Ersetzt die Knotenliste und zieht Pfad-String und Node-Handles nach.
    ///
    /// Einziger Mutationspunkt für `nodes`.
    pub fn set_nodes(&mut self, nodes: NodeStore) {
        self.path = write_simple_path(nodes.nodes());
        self.drag
            .sync_handles(nodes.nodes(), self.options.marker_half_size);
        if let Some(transition) = self.drag.cancel_if_stale(nodes.len()) {
            log::debug!("Drag beendet, Node existiert nicht mehr: {transition:?}");
            self.pending_drag_snapshot = None;
        }
        self.nodes = nodes;
    }

    /// Parst `path` und übernimmt das Ergebnis als neue Knotenliste.
    pub fn load_path(&mut self, path: &str) {
        self.set_nodes(NodeStore::from_nodes(parse_simple_path(path)));
    }

    /// Gibt die Anzahl der Knoten zurück (für UI-Anzeige)
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_path_sets_nodes_path_and_handles() {
        let mut state = AppState::new();

        state.load_path("C 1 2 3 4 M 10 20 L 30 40");

        assert_eq!(state.node_count(), 2);
        assert_eq!(state.path, "M 10 20 L 30 40");
        assert_eq!(state.drag.handles().len(), 2);
    }

    #[test]
    fn set_nodes_cancels_stale_drag() {
        let mut state = AppState::new();
        state.load_path("M 0 0 L 100 100");
        state.drag.pointer_down(glam::Vec2::new(100.0, 100.0));

        state.load_path("M 0 0");

        assert!(!state.drag.is_dragging());
    }
}
