//! Handler für Kamera und Viewport.

use crate::app::AppState;
use crate::core::Camera2D;

/// Setzt die Kamera auf den Standardzustand zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = Camera2D::new();
}

/// Zoomt stufenweise hinein (Fokus: Viewport-Mitte).
pub fn zoom_in(state: &mut AppState) {
    let focus = state.view.viewport_center_world();
    let step = state.options.camera_zoom_step;
    zoom_towards(state, step, Some(focus));
}

/// Zoomt stufenweise heraus (Fokus: Viewport-Mitte).
pub fn zoom_out(state: &mut AppState) {
    let focus = state.view.viewport_center_world();
    let step = state.options.camera_zoom_step;
    zoom_towards(state, 1.0 / step, Some(focus));
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Verschiebt die Kamera um ein Canvas-Delta.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    state.view.camera.pan(delta);
}

/// Zoomt mit optionalem Fokuspunkt im Canvas-Koordinatensystem.
pub fn zoom_towards(state: &mut AppState, factor: f32, focus_world: Option<glam::Vec2>) {
    let (min, max) = (state.options.camera_zoom_min, state.options.camera_zoom_max);
    match focus_world {
        Some(focus) => state.view.camera.zoom_towards(factor, focus, min, max),
        None => state.view.camera.zoom_by(factor, min, max),
    }
}
