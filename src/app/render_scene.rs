//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        nodes: state.nodes.clone(),
        marker_alphas: state.drag.handles().alphas(),
        camera: state.view.camera.clone(),
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use glam::Vec2;

    #[test]
    fn build_shares_node_snapshot() {
        let mut state = AppState::new();
        state.load_path("M 0 0 L 10 10");

        let scene = build(&state);

        assert!(scene.nodes.ptr_eq(&state.nodes));
        assert_eq!(scene.marker_alphas, vec![1.0, 1.0]);
    }

    #[test]
    fn build_reflects_drag_alpha() {
        let mut state = AppState::new();
        state.load_path("M 0 0 L 10 10");
        state.drag.pointer_down(Vec2::new(10.0, 10.0));

        let scene = build(&state);

        assert_eq!(scene.marker_alpha(0), 1.0);
        assert_eq!(scene.marker_alpha(1), state.options.drag_marker_alpha);
        assert_eq!(scene.marker_alpha(7), 1.0);
    }
}
