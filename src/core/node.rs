//! Einzelner Pfad-Knoten (Endpunkt oder Kontrollpunkt).

use glam::Vec2;

/// Art eines Pfad-Knotens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeKind {
    /// Punkt, durch den der gezeichnete Pfad tatsächlich läuft
    #[default]
    Endpoint,
    /// Bezier-Kontrollpunkt (vom M/L-Parser nie erzeugt)
    Control,
}

/// Ein Knoten des Pfads mit stabiler Identität innerhalb eines Parse-Durchlaufs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathNode {
    /// Fortlaufender Index in Reihenfolge des Auftretens (0-basiert, nie umnummeriert)
    pub index: usize,
    /// Position im Canvas-Koordinatensystem
    pub position: Vec2,
    /// Knotenart
    pub kind: NodeKind,
}

impl PathNode {
    /// Erstellt einen Endpunkt-Knoten.
    pub fn endpoint(index: usize, position: Vec2) -> Self {
        Self {
            index,
            position,
            kind: NodeKind::Endpoint,
        }
    }

    /// Gibt eine Kopie mit neuer Position zurück (Index und Art bleiben).
    pub fn with_position(self, position: Vec2) -> Self {
        Self { position, ..self }
    }
}
