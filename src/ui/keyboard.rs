//! Keyboard-Shortcuts für den Canvas.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let (modifiers, key_z_pressed, key_y_pressed, key_o_pressed, key_home_pressed) =
        ui.input(|i| {
            (
                i.modifiers,
                i.key_pressed(egui::Key::Z),
                i.key_pressed(egui::Key::Y),
                i.key_pressed(egui::Key::O),
                i.key_pressed(egui::Key::Home),
            )
        });

    map_shortcuts(
        modifiers,
        key_z_pressed,
        key_y_pressed,
        key_o_pressed,
        key_home_pressed,
    )
}

fn map_shortcuts(
    modifiers: egui::Modifiers,
    key_z_pressed: bool,
    key_y_pressed: bool,
    key_o_pressed: bool,
    key_home_pressed: bool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Undo / Redo (Cmd/Ctrl + Z / Y, Shift+Cmd+Z)
    if modifiers.command && key_z_pressed && !modifiers.shift {
        events.push(AppIntent::UndoRequested);
    }

    if modifiers.command && (key_y_pressed || (modifiers.shift && key_z_pressed)) {
        events.push(AppIntent::RedoRequested);
    }

    if modifiers.command && key_o_pressed {
        events.push(AppIntent::OpenPathDialogRequested);
    }

    if key_home_pressed {
        events.push(AppIntent::ResetCameraRequested);
    }

    events
}
