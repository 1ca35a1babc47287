//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { world_pos } => vec![AppCommand::BeginNodeDrag { world_pos }],
        AppIntent::PointerMoved { world_pos } => {
            // Ohne aktive Session gibt es nichts zu verschieben
            if state.drag.is_dragging() {
                vec![AppCommand::UpdateNodeDrag { world_pos }]
            } else {
                Vec::new()
            }
        }
        AppIntent::PointerReleased => vec![AppCommand::EndNodeDrag { outside: false }],
        AppIntent::PointerReleasedOutside => vec![AppCommand::EndNodeDrag { outside: true }],

        AppIntent::PathSubmitted { path } => {
            vec![AppCommand::LoadPath { path }, AppCommand::ClosePathDialog]
        }
        AppIntent::OpenPathDialogRequested => vec![AppCommand::OpenPathDialog],
        AppIntent::PathDialogCancelled => vec![AppCommand::ClosePathDialog],

        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],

        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom {
            factor,
            focus_world,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_world,
        }],

        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],

        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
