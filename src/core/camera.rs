//! 2D-Kamera für Pan und Zoom des Canvas.

use glam::Vec2;

/// Abbildung zwischen Canvas-lokalen Screen-Pixeln und Canvas-Koordinaten.
///
/// `position` ist der Canvas-Punkt an der linken oberen Ecke des Viewports.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Canvas-Koordinate der linken oberen Viewport-Ecke
    pub position: Vec2,
    /// Zoom-Level (1.0 = ein Canvas-Einheit pro Pixel)
    pub zoom: f32,
}

impl Camera2D {
    /// Erstellt eine Kamera ohne Verschiebung und ohne Zoom.
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Verschiebt die Kamera (Pan) um ein Delta in Canvas-Einheiten.
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level innerhalb der Grenzen.
    ///
    /// Vertauschte Grenzen werden getauscht, eine NaN-Grenze ignoriert;
    /// ein nicht-endlicher oder nicht-positiver Zoom wird verworfen.
    pub fn zoom_by(&mut self, factor: f32, zoom_min: f32, zoom_max: f32) {
        let zoom = self.zoom * factor;
        if !zoom.is_finite() || zoom <= 0.0 {
            return;
        }
        let lower = zoom_min.min(zoom_max);
        let upper = zoom_max.max(zoom_min);
        self.zoom = zoom.max(lower).min(upper);
    }

    /// Zoomt so, dass `focus` an derselben Bildschirmposition bleibt.
    pub fn zoom_towards(&mut self, factor: f32, focus: Vec2, zoom_min: f32, zoom_max: f32) {
        let old_zoom = self.zoom;
        self.zoom_by(factor, zoom_min, zoom_max);
        self.position = focus - (focus - self.position) * old_zoom / self.zoom;
    }

    /// Konvertiert Canvas-lokale Screen-Koordinaten zu Canvas-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: Vec2) -> Vec2 {
        screen_pos / self.zoom + self.position
    }

    /// Konvertiert Canvas-Koordinaten zu Canvas-lokalen Screen-Koordinaten.
    pub fn world_to_screen(&self, world_pos: Vec2) -> Vec2 {
        (world_pos - self.position) * self.zoom
    }

    /// Umrechnungsfaktor von Screen-Pixeln zu Canvas-Einheiten.
    pub fn world_per_pixel(&self) -> f32 {
        1.0 / self.zoom
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const ZOOM_MIN: f32 = 0.1;
    const ZOOM_MAX: f32 = 20.0;

    #[test]
    fn test_camera_pan() {
        let mut camera = Camera2D::new();
        camera.pan(Vec2::new(10.0, 5.0));
        assert_relative_eq!(camera.position.x, 10.0);
        assert_relative_eq!(camera.position.y, 5.0);
    }

    #[test]
    fn test_camera_zoom_is_clamped() {
        let mut camera = Camera2D::new();
        camera.zoom_by(2.0, ZOOM_MIN, ZOOM_MAX);
        assert_relative_eq!(camera.zoom, 2.0);

        camera.zoom_by(1000.0, ZOOM_MIN, ZOOM_MAX);
        assert_relative_eq!(camera.zoom, ZOOM_MAX);
    }

    #[test]
    fn test_camera_zoom_with_swapped_limits_does_not_panic() {
        let mut camera = Camera2D::new();
        camera.zoom_by(10.0, 5.0, 2.0);
        assert_relative_eq!(camera.zoom, 5.0);

        camera.zoom_by(0.01, 5.0, 2.0);
        assert_relative_eq!(camera.zoom, 2.0);
    }

    #[test]
    fn test_camera_zoom_ignores_nan_limit_and_factor() {
        let mut camera = Camera2D::new();
        camera.zoom_by(100.0, f32::NAN, 4.0);
        assert_relative_eq!(camera.zoom, 4.0);

        camera.zoom_by(f32::NAN, 0.1, 4.0);
        assert_relative_eq!(camera.zoom, 4.0);
    }

    #[test]
    fn test_identity_camera_maps_screen_to_world_unchanged() {
        let camera = Camera2D::new();
        let world = camera.screen_to_world(Vec2::new(100.0, 350.0));
        assert_relative_eq!(world.x, 100.0);
        assert_relative_eq!(world.y, 350.0);
    }

    #[test]
    fn test_screen_world_roundtrip() {
        let camera = Camera2D {
            position: Vec2::new(-40.0, 12.5),
            zoom: 2.5,
        };
        let screen = Vec2::new(320.0, 200.0);
        let back = camera.world_to_screen(camera.screen_to_world(screen));
        assert_relative_eq!(back.x, screen.x, epsilon = 1e-3);
        assert_relative_eq!(back.y, screen.y, epsilon = 1e-3);
    }

    #[test]
    fn test_zoom_towards_keeps_focus_fixed() {
        let mut camera = Camera2D::new();
        let focus = Vec2::new(200.0, 100.0);
        let screen_before = camera.world_to_screen(focus);

        camera.zoom_towards(2.0, focus, ZOOM_MIN, ZOOM_MAX);

        let screen_after = camera.world_to_screen(focus);
        assert_relative_eq!(screen_after.x, screen_before.x, epsilon = 1e-3);
        assert_relative_eq!(screen_after.y, screen_before.y, epsilon = 1e-3);
        assert_relative_eq!(camera.zoom, 2.0);
    }

    #[test]
    fn test_world_per_pixel() {
        let mut camera = Camera2D::new();
        let wpp1 = camera.world_per_pixel();
        camera.zoom = 2.0;
        let wpp2 = camera.world_per_pixel();
        assert_relative_eq!(wpp2, wpp1 / 2.0);
    }
}
