use crate::app::AppState;
use crate::core::NodeStore;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Die Knotenliste liegt hinter einem Arc: das Erstellen eines Snapshots ist
/// O(1). Der Pfad-String wird beim Anwenden neu serialisiert.
#[derive(Clone)]
pub struct Snapshot {
    /// Knotenliste zum Zeitpunkt des Snapshots
    pub nodes: NodeStore,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone.
    pub fn from_state(state: &AppState) -> Self {
        Self {
            nodes: state.nodes.clone(),
        }
    }

    /// Stellt den Snapshot wieder her (Pfad und Handles werden nachgezogen).
    pub fn apply_to(self, state: &mut AppState) {
        state.set_nodes(self.nodes);
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Nimmt einen fertigen Snapshot auf und leert den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Holt den letzten Undo-Snapshot und legt `current` auf den Redo-Stack.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Holt den letzten Redo-Snapshot und legt `current` auf den Undo-Stack.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }
}
