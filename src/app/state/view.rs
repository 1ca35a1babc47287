use crate::core::Camera2D;

/// View-bezogener Anwendungszustand
#[derive(Default)]
pub struct ViewState {
    /// 2D-Kamera für die Canvas-Ansicht
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: Camera2D::new(),
            viewport_size: [0.0, 0.0],
        }
    }

    /// Mittelpunkt des Viewports in Canvas-Koordinaten.
    pub fn viewport_center_world(&self) -> glam::Vec2 {
        let [w, h] = self.viewport_size;
        self.camera.screen_to_world(glam::Vec2::new(w, h) * 0.5)
    }
}
