//! Pfad-Anzeige (unteres Panel) und Dialog zum Laden eines neuen Pfads.

use crate::app::{AppIntent, AppState};

/// Zeigt den aktuell serialisierten Pfad mit Kopier- und Bearbeiten-Button.
pub fn render_path_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::bottom("path_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Pfad:");

            if ui.button("Kopieren").clicked() {
                ctx.copy_text(state.path.clone());
            }
            if ui.button("Bearbeiten...").clicked() {
                events.push(AppIntent::OpenPathDialogRequested);
            }

            ui.add(egui::Label::new(egui::RichText::new(&state.path).monospace()).truncate());
        });
    });

    events
}

/// Zeigt den Pfad-Dialog, solange `ui.show_path_dialog` gesetzt ist.
pub fn show_path_dialog(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_path_dialog {
        return events;
    }

    egui::Window::new("Pfad laden")
        .collapsible(false)
        .resizable(true)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label("Nur absolute M- und L-Kommandos werden übernommen.");

            ui.add(
                egui::TextEdit::multiline(&mut state.ui.path_input)
                    .code_editor()
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );

            ui.horizontal(|ui| {
                if ui.button("Übernehmen").clicked() {
                    events.push(AppIntent::PathSubmitted {
                        path: state.ui.path_input.clone(),
                    });
                }
                if ui.button("Abbrechen").clicked() {
                    events.push(AppIntent::PathDialogCancelled);
                }
            });
        });

    events
}
