//! Quadratische Hit-Fläche um einen Knoten.

use glam::Vec2;

/// Achsenparalleles Quadrat mit fester Halbgröße um einen Mittelpunkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRect {
    /// Mittelpunkt (Knotenposition)
    pub center: Vec2,
    /// Halbe Kantenlänge
    pub half_size: f32,
}

impl HitRect {
    /// Erstellt eine Hit-Fläche um `center`.
    pub fn new(center: Vec2, half_size: f32) -> Self {
        Self { center, half_size }
    }

    /// Prüft, ob `point` innerhalb liegt (Kanten inklusive).
    pub fn contains(&self, point: Vec2) -> bool {
        let d = (point - self.center).abs();
        d.x <= self.half_size && d.y <= self.half_size
    }
}

/// Index der obersten Hit-Fläche, die `point` enthält.
///
/// Später gelieferte Flächen liegen oben (höherer Index gewinnt).
pub fn topmost_hit<I>(areas: I, point: Vec2) -> Option<usize>
where
    I: DoubleEndedIterator<Item = (usize, HitRect)>,
{
    areas
        .rev()
        .find(|(_, rect)| rect.contains(point))
        .map(|(index, _)| index)
}
