//! Zeichenstile (shared zwischen Optionen und Renderer).

/// Strichstil für Linien.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Linienstärke in Pixeln
    pub width: f32,
    /// Farbe (RGBA, 0.0–1.0)
    pub color: [f32; 4],
}

/// Stil eines quadratischen Node-Markers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    /// Halbe Kantenlänge in Canvas-Einheiten
    pub half_size: f32,
    /// Füllfarbe (RGBA)
    pub fill: [f32; 4],
    /// Randstil
    pub stroke: StrokeStyle,
}
