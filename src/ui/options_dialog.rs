//! Optionen-Dialog für Pfad, Marker und Kamera.

use crate::app::{AppIntent, AppState};
use crate::shared::EditorOptions;
use std::ops::RangeInclusive;

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
///
/// Bearbeitet eine Kopie der Optionen; jede Änderung wird sofort als
/// `OptionsChanged` gemeldet.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if !state.ui.show_options_dialog {
        return events;
    }

    let mut draft = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .resizable(false)
        .anchor(egui::Align2::RIGHT_TOP, [-12.0, 36.0])
        .show(ctx, |ui| {
            changed |= path_section(ui, &mut draft);
            ui.add_space(6.0);
            changed |= marker_section(ui, &mut draft);
            ui.add_space(6.0);
            changed |= camera_section(ui, &mut draft);

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    if changed {
        events.push(AppIntent::OptionsChanged { options: draft });
    }
    events
}

fn path_section(ui: &mut egui::Ui, opts: &mut EditorOptions) -> bool {
    ui.strong("Pfad");
    egui::Grid::new("options_path")
        .num_columns(2)
        .show(ui, |ui| {
            let mut changed = number_row(
                ui,
                "Linienbreite (px)",
                &mut opts.path_stroke_width,
                0.5..=10.0,
                0.1,
            );
            changed |= color_row(ui, "Linienfarbe", &mut opts.path_stroke_color);
            changed
        })
        .inner
}

fn marker_section(ui: &mut egui::Ui, opts: &mut EditorOptions) -> bool {
    ui.strong("Marker");
    egui::Grid::new("options_marker")
        .num_columns(2)
        .show(ui, |ui| {
            let mut changed = number_row(
                ui,
                "Halbe Größe",
                &mut opts.marker_half_size,
                1.0..=30.0,
                0.1,
            );
            changed |= number_row(
                ui,
                "Randbreite (px)",
                &mut opts.marker_stroke_width,
                0.0..=10.0,
                0.1,
            );
            changed |= number_row(
                ui,
                "Deckkraft beim Ziehen",
                &mut opts.drag_marker_alpha,
                0.0..=1.0,
                0.01,
            );
            changed |= color_row(ui, "Füllfarbe", &mut opts.marker_fill_color);
            changed |= color_row(ui, "Randfarbe", &mut opts.marker_stroke_color);
            changed
        })
        .inner
}

fn camera_section(ui: &mut egui::Ui, opts: &mut EditorOptions) -> bool {
    ui.strong("Kamera & Canvas");
    egui::Grid::new("options_camera")
        .num_columns(2)
        .show(ui, |ui| {
            let mut changed = number_row(
                ui,
                "Zoom-Schritt (Menü)",
                &mut opts.camera_zoom_step,
                1.01..=3.0,
                0.01,
            );
            changed |= number_row(
                ui,
                "Zoom-Schritt (Mausrad)",
                &mut opts.camera_scroll_zoom_step,
                1.01..=2.0,
                0.01,
            );
            changed |= color_row(ui, "Hintergrund", &mut opts.canvas_background_color);
            changed
        })
        .inner
}

/// Eine Grid-Zeile mit Beschriftung und `DragValue`.
fn number_row(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: RangeInclusive<f32>,
    speed: f64,
) -> bool {
    ui.label(label);
    let changed = ui
        .add(egui::DragValue::new(value).range(range).speed(speed))
        .changed();
    ui.end_row();
    changed
}

/// Eine Grid-Zeile mit Farbwähler für sRGB-Werte (0.0–1.0, Alpha unmultipliziert).
fn color_row(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    ui.label(label);
    let mut srgba = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    let changed = ui.color_edit_button_srgba_unmultiplied(&mut srgba).changed();
    if changed {
        *color = srgba.map(|c| f32::from(c) / 255.0);
    }
    ui.end_row();
    changed
}
