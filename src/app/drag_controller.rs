//! Drag-Zustandsautomat für einzelne Pfad-Knoten.
//!
//! Zustände: `Idle` und `Dragging { node_index }`. Ein Pointer, ein Drag.
//! Pointer-Up und Pointer-Up-Outside beenden eine Session identisch; die Session
//! wird dabei per `take()` entfernt und damit genau einmal gelöst.

use crate::core::{topmost_hit, HitRect, PathNode};
use glam::Vec2;

/// Stabile Bindung eines Knotens an Hit-Test und Marker-Feedback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeHandle {
    /// Index des gebundenen Knotens
    pub index: usize,
    /// Hit-Fläche um die aktuelle Knotenposition
    pub hit_rect: HitRect,
    /// Marker-Deckkraft (1.0 = normal)
    pub alpha: f32,
}

/// Arena von Node-Handles, indiziert über den Knoten-Index.
///
/// Wird bei jeder Änderung der Knotenliste in place aktualisiert statt pro
/// Frame neu registriert.
#[derive(Debug, Clone, Default)]
pub struct NodeHandles {
    handles: Vec<NodeHandle>,
}

impl NodeHandles {
    /// Gleicht die Handles mit der Knotenliste ab (Positionen, Anzahl).
    /// Die Deckkraft überlebender Handles bleibt erhalten.
    pub fn sync(&mut self, nodes: &[PathNode], half_size: f32) {
        self.handles.truncate(nodes.len());

        for (slot, node) in nodes.iter().enumerate() {
            let hit_rect = HitRect::new(node.position, half_size);
            match self.handles.get_mut(slot) {
                Some(handle) => {
                    handle.index = node.index;
                    handle.hit_rect = hit_rect;
                }
                None => self.handles.push(NodeHandle {
                    index: node.index,
                    hit_rect,
                    alpha: 1.0,
                }),
            }
        }
    }

    /// Index des obersten Handles, dessen Hit-Fläche `position` enthält.
    pub fn hit(&self, position: Vec2) -> Option<usize> {
        let areas = self
            .handles
            .iter()
            .map(|handle| (handle.index, handle.hit_rect));
        topmost_hit(areas, position)
    }

    /// Marker-Deckkraft für `index` (1.0 wenn unbekannt).
    pub fn alpha(&self, index: usize) -> f32 {
        self.handles.get(index).map_or(1.0, |handle| handle.alpha)
    }

    /// Deckkraft aller Handles in Index-Reihenfolge.
    pub fn alphas(&self) -> Vec<f32> {
        self.handles.iter().map(|handle| handle.alpha).collect()
    }

    /// Anzahl gebundener Knoten.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Gibt `true` zurück, wenn keine Knoten gebunden sind.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    fn set_alpha(&mut self, index: usize, alpha: f32) {
        if let Some(handle) = self.handles.get_mut(index) {
            handle.alpha = alpha;
        }
    }
}

/// Beobachtbarer Zustand des Automaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// Kein Drag aktiv
    #[default]
    Idle,
    /// Ein Knoten wird gezogen
    Dragging {
        /// Index des gezogenen Knotens
        node_index: usize,
    },
}

/// Ergebnis eines Pointer-Events, das zu einem Zustandsübergang führte.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragTransition {
    /// `Idle → Dragging`
    Started { node_index: usize },
    /// `Dragging → Dragging` mit neuer Position im Canvas-Koordinatensystem
    Moved { node_index: usize, position: Vec2 },
    /// `Dragging → Idle`; `moved` = mindestens ein Move-Event in der Session
    Ended { node_index: usize, moved: bool },
}

/// Laufzeitdaten einer Drag-Session (Pointer-Down bis Pointer-Up).
#[derive(Debug, Clone, Copy)]
struct DragSession {
    node_index: usize,
    moved: bool,
}

/// Zustandsautomat für das Ziehen einzelner Knoten.
#[derive(Debug, Clone)]
pub struct DragController {
    handles: NodeHandles,
    session: Option<DragSession>,
    drag_alpha: f32,
}

impl DragController {
    /// Erstellt einen Controller im Zustand `Idle`.
    pub fn new(drag_alpha: f32) -> Self {
        Self {
            handles: NodeHandles::default(),
            session: None,
            drag_alpha,
        }
    }

    /// Aktueller Zustand.
    pub fn state(&self) -> DragState {
        match self.session {
            Some(session) => DragState::Dragging {
                node_index: session.node_index,
            },
            None => DragState::Idle,
        }
    }

    /// Gibt `true` zurück, solange eine Session aktiv ist.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Read-only Sicht auf die Node-Handles.
    pub fn handles(&self) -> &NodeHandles {
        &self.handles
    }

    /// Setzt die Deckkraft für künftige (und die laufende) Session.
    pub fn set_drag_alpha(&mut self, alpha: f32) {
        self.drag_alpha = alpha;
        if let Some(session) = self.session {
            self.handles.set_alpha(session.node_index, alpha);
        }
    }

    /// Bindet die Handles an die aktuelle Knotenliste.
    pub fn sync_handles(&mut self, nodes: &[PathNode], half_size: f32) {
        self.handles.sync(nodes, half_size);
    }

    /// Pointer-Down: startet einen Drag, wenn ein Knoten getroffen wurde.
    /// Während eines laufenden Drags ignoriert.
    pub fn pointer_down(&mut self, position: Vec2) -> Option<DragTransition> {
        if let Some(session) = self.session {
            log::debug!(
                "Pointer-Down ignoriert: Drag von Node {} läuft noch",
                session.node_index
            );
            return None;
        }

        let node_index = self.handles.hit(position)?;
        self.handles.set_alpha(node_index, self.drag_alpha);
        self.session = Some(DragSession {
            node_index,
            moved: false,
        });

        Some(DragTransition::Started { node_index })
    }

    /// Pointer-Move: liefert die neue Position des gezogenen Knotens.
    pub fn pointer_move(&mut self, position: Vec2) -> Option<DragTransition> {
        let session = self.session.as_mut()?;

        if !position.is_finite() {
            log::warn!("Pointer-Move mit ungültiger Position verworfen: {position:?}");
            return None;
        }

        session.moved = true;
        Some(DragTransition::Moved {
            node_index: session.node_index,
            position,
        })
    }

    /// Pointer-Up über dem Canvas.
    pub fn pointer_up(&mut self) -> Option<DragTransition> {
        self.end_session()
    }

    /// Pointer-Up außerhalb des Canvas; gleichwertig zu `pointer_up`.
    pub fn pointer_up_outside(&mut self) -> Option<DragTransition> {
        self.end_session()
    }

    /// Beendet einen Drag, dessen Knoten nach einem Neu-Parsen fehlt.
    pub fn cancel_if_stale(&mut self, node_count: usize) -> Option<DragTransition> {
        match self.session {
            Some(session) if session.node_index >= node_count => self.end_session(),
            _ => None,
        }
    }

    fn end_session(&mut self) -> Option<DragTransition> {
        let session = self.session.take()?;
        self.handles.set_alpha(session.node_index, 1.0);
        Some(DragTransition::Ended {
            node_index: session.node_index,
            moved: session.moved,
        })
    }
}
