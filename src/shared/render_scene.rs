//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{Camera2D, NodeStore};

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Aktuelle Knotenliste (Arc-Snapshot, O(1)-Clone)
    pub nodes: NodeStore,
    /// Marker-Deckkraft pro Knoten-Index (Drag-Feedback)
    pub marker_alphas: Vec<f32>,
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera2D,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Deckkraft des Markers für `index` (1.0 wenn unbekannt).
    pub fn marker_alpha(&self, index: usize) -> f32 {
        self.marker_alphas.get(index).copied().unwrap_or(1.0)
    }
}
