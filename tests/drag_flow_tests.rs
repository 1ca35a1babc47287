use glam::Vec2;
use svg_path_node_editor::{AppCommand, AppController, AppIntent, AppState, DragState};

fn demo_state() -> AppState {
    let mut state = AppState::new();
    state.load_path("M 100 350 L 250 50 L 300 300");
    state
}

fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

fn press(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    send(
        controller,
        state,
        AppIntent::PointerPressed {
            world_pos: Vec2::new(x, y),
        },
    );
}

fn move_to(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    send(
        controller,
        state,
        AppIntent::PointerMoved {
            world_pos: Vec2::new(x, y),
        },
    );
}

#[test]
fn test_drag_gesture_moves_node_and_regenerates_path() {
    let mut controller = AppController::new();
    let mut state = demo_state();

    press(&mut controller, &mut state, 100.0, 350.0);
    assert_eq!(state.drag.state(), DragState::Dragging { node_index: 0 });

    move_to(&mut controller, &mut state, 120.0, 360.0);
    send(&mut controller, &mut state, AppIntent::PointerReleased);

    assert_eq!(state.drag.state(), DragState::Idle);
    let node = state.nodes.get(0).expect("Node 0 muss existieren");
    assert_eq!(node.position, Vec2::new(120.0, 360.0));
    assert_eq!(node.index, 0);
    assert_eq!(state.path, "M 120 360 L 250 50 L 300 300");
}

#[test]
fn test_every_move_event_updates_path() {
    let mut controller = AppController::new();
    let mut state = demo_state();

    press(&mut controller, &mut state, 250.0, 50.0);
    move_to(&mut controller, &mut state, 251.0, 51.0);
    assert_eq!(state.path, "M 100 350 L 251 51 L 300 300");
    move_to(&mut controller, &mut state, 260.5, 40.0);
    assert_eq!(state.path, "M 100 350 L 260.5 40 L 300 300");
}

#[test]
fn test_press_on_empty_canvas_starts_nothing() {
    let mut controller = AppController::new();
    let mut state = demo_state();
    let before = state.nodes.clone();

    press(&mut controller, &mut state, 10.0, 10.0);
    move_to(&mut controller, &mut state, 20.0, 20.0);

    assert_eq!(state.drag.state(), DragState::Idle);
    assert!(state.nodes.ptr_eq(&before));
    assert!(!state
        .command_log
        .entries()
        .iter()
        .any(|c| matches!(c, AppCommand::UpdateNodeDrag { .. })));
}

#[test]
fn test_release_outside_ends_drag_and_next_press_works() {
    let mut controller = AppController::new();
    let mut state = demo_state();

    press(&mut controller, &mut state, 100.0, 350.0);
    move_to(&mut controller, &mut state, -500.0, -500.0);
    send(&mut controller, &mut state, AppIntent::PointerReleasedOutside);
    assert_eq!(state.drag.state(), DragState::Idle);

    // Nachfolgende Bewegungen verändern nichts mehr
    move_to(&mut controller, &mut state, 0.0, 0.0);
    assert_eq!(state.path, "M -500 -500 L 250 50 L 300 300");

    press(&mut controller, &mut state, 300.0, 300.0);
    assert_eq!(state.drag.state(), DragState::Dragging { node_index: 2 });
}

#[test]
fn test_press_while_dragging_is_ignored() {
    let mut controller = AppController::new();
    let mut state = demo_state();

    press(&mut controller, &mut state, 100.0, 350.0);
    press(&mut controller, &mut state, 300.0, 300.0);

    assert_eq!(state.drag.state(), DragState::Dragging { node_index: 0 });
}

#[test]
fn test_marker_alpha_reduced_during_drag_and_restored() {
    let mut controller = AppController::new();
    let mut state = demo_state();

    press(&mut controller, &mut state, 250.0, 50.0);
    let scene = controller.build_render_scene(&state);
    assert_eq!(scene.marker_alpha(1), 0.5);
    assert_eq!(scene.marker_alpha(0), 1.0);

    send(&mut controller, &mut state, AppIntent::PointerReleased);
    let scene = controller.build_render_scene(&state);
    assert_eq!(scene.marker_alphas, vec![1.0, 1.0, 1.0]);
}

#[test]
fn test_undo_restores_pre_drag_path() {
    let mut controller = AppController::new();
    let mut state = demo_state();

    press(&mut controller, &mut state, 100.0, 350.0);
    move_to(&mut controller, &mut state, 120.0, 360.0);
    send(&mut controller, &mut state, AppIntent::PointerReleased);
    assert!(state.can_undo());

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.path, "M 100 350 L 250 50 L 300 300");
    assert!(state.can_redo());

    send(&mut controller, &mut state, AppIntent::RedoRequested);
    assert_eq!(state.path, "M 120 360 L 250 50 L 300 300");
}

#[test]
fn test_click_without_move_records_no_undo_step() {
    let mut controller = AppController::new();
    let mut state = demo_state();

    press(&mut controller, &mut state, 100.0, 350.0);
    send(&mut controller, &mut state, AppIntent::PointerReleased);

    assert!(!state.can_undo());
}

#[test]
fn test_undo_during_drag_is_ignored() {
    let mut controller = AppController::new();
    let mut state = demo_state();
    send(
        &mut controller,
        &mut state,
        AppIntent::PathSubmitted {
            path: "M 0 0 L 10 10".to_string(),
        },
    );

    press(&mut controller, &mut state, 10.0, 10.0);
    send(&mut controller, &mut state, AppIntent::UndoRequested);

    assert!(state.drag.is_dragging());
    assert_eq!(state.path, "M 0 0 L 10 10");
}

#[test]
fn test_path_submitted_during_drag_ends_drag() {
    let mut controller = AppController::new();
    let mut state = demo_state();

    press(&mut controller, &mut state, 300.0, 300.0);
    send(
        &mut controller,
        &mut state,
        AppIntent::PathSubmitted {
            path: "M 1 2 L 3 4 L 5 6".to_string(),
        },
    );

    assert_eq!(state.drag.state(), DragState::Idle);
    assert_eq!(state.path, "M 1 2 L 3 4 L 5 6");
    assert!(!state.ui.show_path_dialog);

    move_to(&mut controller, &mut state, 50.0, 50.0);
    assert_eq!(state.path, "M 1 2 L 3 4 L 5 6");
}

#[test]
fn test_path_submitted_can_be_undone() {
    let mut controller = AppController::new();
    let mut state = demo_state();

    send(
        &mut controller,
        &mut state,
        AppIntent::PathSubmitted {
            path: "C 1 2 3 4 5 6".to_string(),
        },
    );
    assert_eq!(state.node_count(), 0);
    assert_eq!(state.path, "");
    assert!(state.ui.status_message.is_some());

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.node_count(), 3);
}

#[test]
fn test_open_path_dialog_prefills_current_path() {
    let mut controller = AppController::new();
    let mut state = demo_state();

    send(&mut controller, &mut state, AppIntent::OpenPathDialogRequested);

    assert!(state.ui.show_path_dialog);
    assert_eq!(state.ui.path_input, state.path);

    send(&mut controller, &mut state, AppIntent::PathDialogCancelled);
    assert!(!state.ui.show_path_dialog);
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(&mut controller, &mut state, AppIntent::ExitRequested);

    assert!(state.should_exit);
    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}
