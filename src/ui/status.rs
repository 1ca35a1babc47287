//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, DragState};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Nodes: {}", state.node_count()));

            ui.separator();

            ui.label(format!(
                "Zoom: {:.2}x | Position: ({:.1}, {:.1})",
                state.view.camera.zoom, state.view.camera.position.x, state.view.camera.position.y
            ));

            ui.separator();

            match state.drag.state() {
                DragState::Idle => ui.label("Drag: -"),
                DragState::Dragging { node_index } => ui.label(format!("Drag: Node {node_index}")),
            };

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }
        });
    });
}
