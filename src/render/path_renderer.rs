//! Zeichnet Polylinie und Node-Marker einer Pfad-Szene.

use super::DrawSurface;
use crate::core::PathNode;
use crate::shared::{RenderScene, StrokeStyle};

/// Zeichnet die komplette Szene: Fläche leeren, Pfad, dann Marker darüber.
pub fn draw_scene(surface: &mut dyn DrawSurface, scene: &RenderScene) {
    surface.clear();
    draw_path(surface, scene.nodes.nodes(), scene.options.path_stroke());
    draw_markers(surface, scene);
}

/// Zeichnet den offenen Linienzug durch alle Nodes in Listenreihenfolge.
pub fn draw_path(surface: &mut dyn DrawSurface, nodes: &[PathNode], style: StrokeStyle) {
    let Some((first, rest)) = nodes.split_first() else {
        return;
    };

    surface.set_stroke_style(style);
    surface.move_to(first.position);
    for node in rest {
        surface.line_to(node.position);
    }
    surface.stroke();
}

/// Zeichnet pro Node einen Marker; Deckkraft kommt aus den Node-Handles.
pub fn draw_markers(surface: &mut dyn DrawSurface, scene: &RenderScene) {
    let style = scene.options.marker_style();
    for node in scene.nodes.nodes() {
        surface.draw_marker(node.position, &style, scene.marker_alpha(node.index));
    }
}
