use approx::assert_relative_eq;
use glam::Vec2;
use svg_path_node_editor::{AppController, AppIntent, AppState, DragState, EditorOptions};

#[test]
fn test_zoom_in_keeps_viewport_center_fixed() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [800.0, 600.0],
            },
        )
        .expect("ViewportResized sollte durchlaufen");

    let center_before = state.view.viewport_center_world();
    controller
        .handle_intent(&mut state, AppIntent::ZoomInRequested)
        .expect("ZoomIn sollte durchlaufen");
    let center_after = state.view.viewport_center_world();

    assert_relative_eq!(state.view.camera.zoom, state.options.camera_zoom_step);
    assert_relative_eq!(center_before.x, center_after.x, epsilon = 1e-3);
    assert_relative_eq!(center_before.y, center_after.y, epsilon = 1e-3);
}

#[test]
fn test_drag_after_pan_uses_canvas_coordinates() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.load_path("M 100 100 L 200 200");

    controller
        .handle_intent(
            &mut state,
            AppIntent::CameraPan {
                delta: Vec2::new(50.0, 50.0),
            },
        )
        .expect("CameraPan sollte durchlaufen");

    // Der Canvas-Punkt eines Nodes bleibt unabhängig von der Kamera gleich
    let screen = state.view.camera.world_to_screen(Vec2::new(100.0, 100.0));
    let world = state.view.camera.screen_to_world(screen);
    controller
        .handle_intent(&mut state, AppIntent::PointerPressed { world_pos: world })
        .expect("PointerPressed sollte durchlaufen");

    assert_eq!(state.drag.state(), DragState::Dragging { node_index: 0 });
}

#[test]
fn test_reset_camera_restores_default() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CameraZoom {
                factor: 3.0,
                focus_world: Some(Vec2::new(10.0, 10.0)),
            },
        )
        .expect("CameraZoom sollte durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::ResetCameraRequested)
        .expect("ResetCamera sollte durchlaufen");

    assert_relative_eq!(state.view.camera.zoom, 1.0);
    assert_eq!(state.view.camera.position, Vec2::ZERO);
}

#[test]
fn test_zoom_is_clamped_to_options() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CameraZoom {
                factor: 1000.0,
                focus_world: None,
            },
        )
        .expect("CameraZoom sollte durchlaufen");

    assert_relative_eq!(state.view.camera.zoom, state.options.camera_zoom_max);
}

#[test]
fn test_swapped_zoom_limits_from_config_do_not_crash_zoom() {
    let options: EditorOptions =
        toml::from_str("camera_zoom_min = 5.0\ncamera_zoom_max = 2.0\n").expect("TOML muss parsen");
    let mut controller = AppController::new();
    let mut state = AppState::with_options(options);

    controller
        .handle_intent(&mut state, AppIntent::ZoomInRequested)
        .expect("ZoomIn sollte durchlaufen");

    assert!(state.options.camera_zoom_min <= state.options.camera_zoom_max);
    assert_relative_eq!(state.view.camera.zoom, state.options.camera_zoom_step);
}

#[test]
fn test_invalid_zoom_limits_set_at_runtime_are_tolerated() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.options.camera_zoom_min = f32::NAN;
    state.options.camera_zoom_max = 0.5;

    controller
        .handle_intent(&mut state, AppIntent::ZoomOutRequested)
        .expect("ZoomOut sollte durchlaufen");

    assert!(state.view.camera.zoom.is_finite());
    assert!(state.view.camera.zoom <= 0.5);
}
