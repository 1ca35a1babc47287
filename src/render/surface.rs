//! Zeichenflächen-Abstraktion für den Pfad-Renderer.

use crate::shared::{MarkerStyle, StrokeStyle};
use glam::Vec2;

/// Minimale 2D-Zeichenfläche in Canvas-Koordinaten.
///
/// Linienzüge werden mit `move_to`/`line_to` aufgebaut und mit `stroke`
/// im zuletzt gesetzten Strichstil gezeichnet.
pub trait DrawSurface {
    /// Leert die Fläche für einen neuen Frame.
    fn clear(&mut self);

    /// Setzt den Strichstil für folgende `stroke`-Aufrufe.
    fn set_stroke_style(&mut self, style: StrokeStyle);

    /// Beginnt einen neuen Linienzug.
    fn move_to(&mut self, point: Vec2);

    /// Verlängert den aktuellen Linienzug.
    fn line_to(&mut self, point: Vec2);

    /// Zeichnet den aktuellen Linienzug und verwirft ihn.
    fn stroke(&mut self);

    /// Zeichnet einen quadratischen Marker um `center` mit Deckkraft `alpha`.
    fn draw_marker(&mut self, center: Vec2, style: &MarkerStyle, alpha: f32);
}
