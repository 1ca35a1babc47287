//! `DrawSurface`-Implementierung über den egui-Painter des Canvas.

use super::DrawSurface;
use crate::core::Camera2D;
use crate::shared::{MarkerStyle, StrokeStyle};
use eframe::egui;
use glam::Vec2;

/// Zeichnet in Canvas-Koordinaten; die Kamera rechnet in Bildschirmpixel um.
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
    camera: &'a Camera2D,
    background: egui::Color32,
    stroke: egui::Stroke,
    points: Vec<egui::Pos2>,
}

impl<'a> EguiSurface<'a> {
    /// Erstellt eine Fläche für das Canvas-Rechteck `rect`.
    pub fn new(
        painter: &'a egui::Painter,
        rect: egui::Rect,
        camera: &'a Camera2D,
        background: [f32; 4],
    ) -> Self {
        Self {
            painter,
            rect,
            camera,
            background: to_color32(background, 1.0),
            stroke: egui::Stroke::NONE,
            points: Vec::new(),
        }
    }

    fn to_screen(&self, world: Vec2) -> egui::Pos2 {
        let local = self.camera.world_to_screen(world);
        egui::pos2(self.rect.min.x + local.x, self.rect.min.y + local.y)
    }
}

impl DrawSurface for EguiSurface<'_> {
    fn clear(&mut self) {
        self.points.clear();
        self.painter.rect_filled(self.rect, 0.0, self.background);
    }

    fn set_stroke_style(&mut self, style: StrokeStyle) {
        self.stroke = egui::Stroke::new(style.width, to_color32(style.color, 1.0));
    }

    fn move_to(&mut self, point: Vec2) {
        self.points.clear();
        self.points.push(self.to_screen(point));
    }

    fn line_to(&mut self, point: Vec2) {
        let screen = self.to_screen(point);
        self.points.push(screen);
    }

    fn stroke(&mut self) {
        let points = std::mem::take(&mut self.points);
        if points.len() >= 2 {
            self.painter.add(egui::Shape::line(points, self.stroke));
        }
    }

    fn draw_marker(&mut self, center: Vec2, style: &MarkerStyle, alpha: f32) {
        // Hit-Fläche liegt in Canvas-Einheiten, also mit der Kamera skalieren
        let half = style.half_size * self.camera.zoom;
        let rect = egui::Rect::from_center_size(self.to_screen(center), egui::vec2(half, half) * 2.0);
        let stroke = egui::Stroke::new(style.stroke.width, to_color32(style.stroke.color, alpha));

        self.painter.rect_filled(rect, 0.0, to_color32(style.fill, alpha));
        self.painter
            .rect_stroke(rect, 0.0, stroke, egui::StrokeKind::Middle);
    }
}

/// Wandelt eine RGBA-Farbe (0.0–1.0) mit zusätzlicher Deckkraft in `Color32` um.
fn to_color32(color: [f32; 4], alpha: f32) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0).round() as u8,
        (color[1] * 255.0).round() as u8,
        (color[2] * 255.0).round() as u8,
        (color[3] * alpha * 255.0).round() as u8,
    )
}
