//! Canvas-Input-Handling: Pointer, Scroll und Pan → AppIntent.
//!
//! Pointer-Bewegungen und Loslassen werden während eines Drags global
//! ausgewertet, auch wenn der Pointer den Canvas verlässt.

use super::keyboard;
use crate::app::{AppIntent, Camera2D};
use crate::shared::EditorOptions;

/// Bündelt die gemeinsamen Parameter für Canvas-Event-Verarbeitung.
struct CanvasContext<'a> {
    ui: &'a egui::Ui,
    response: &'a egui::Response,
    camera: &'a Camera2D,
    options: &'a EditorOptions,
    dragging: bool,
}

/// Verwaltet den Input-Zustand für den Canvas (letzte Pointer-Position)
#[derive(Default)]
pub struct InputState {
    last_pointer_pos: Option<egui::Pos2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            last_pointer_pos: None,
        }
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// `dragging` ist der aktuelle Zustand des DragControllers; nur während
    /// eines Drags werden Bewegungen und Loslassen gemeldet.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        camera: &Camera2D,
        options: &EditorOptions,
        dragging: bool,
    ) -> Vec<AppIntent> {
        let ctx = CanvasContext {
            ui,
            response,
            camera,
            options,
            dragging,
        };

        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: [response.rect.width(), response.rect.height()],
        });

        events.extend(keyboard::collect_keyboard_intents(ui));

        self.handle_pointer_move(&ctx, &mut events);
        self.handle_pointer_release(&ctx, &mut events);
        self.handle_pointer_press(&ctx, &mut events);
        self.handle_camera_pan(&ctx, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);

        events
    }

    // ── Pointer-Down ────────────────────────────────────────────

    fn handle_pointer_press(&mut self, ctx: &CanvasContext, events: &mut Vec<AppIntent>) {
        let (pressed, press_origin) =
            ctx.ui
                .input(|i| (i.pointer.primary_pressed(), i.pointer.press_origin()));
        // Überdeckende Fenster (Dialoge) schlucken den Klick
        if !pressed || !ctx.response.contains_pointer() {
            return;
        }

        // press_origin() ist die exakte Klickposition (vor egui-Drag-Schwelle)
        let Some(pointer_pos) = press_origin.filter(|pos| ctx.response.rect.contains(*pos)) else {
            return;
        };

        events.push(AppIntent::PointerPressed {
            world_pos: screen_pos_to_world(pointer_pos, ctx.response, ctx.camera),
        });
        self.last_pointer_pos = Some(pointer_pos);
    }

    // ── Pointer-Move (global) ───────────────────────────────────

    fn handle_pointer_move(&mut self, ctx: &CanvasContext, events: &mut Vec<AppIntent>) {
        if !ctx.dragging {
            self.last_pointer_pos = None;
            return;
        }

        let Some(pointer_pos) = ctx.ui.input(|i| i.pointer.latest_pos()) else {
            return;
        };
        if self.last_pointer_pos == Some(pointer_pos) {
            return;
        }

        self.last_pointer_pos = Some(pointer_pos);
        events.push(AppIntent::PointerMoved {
            world_pos: screen_pos_to_world(pointer_pos, ctx.response, ctx.camera),
        });
    }

    // ── Pointer-Up (global) ─────────────────────────────────────

    fn handle_pointer_release(&mut self, ctx: &CanvasContext, events: &mut Vec<AppIntent>) {
        if !ctx.dragging {
            return;
        }

        let (released, primary_down, latest_pos) = ctx.ui.input(|i| {
            (
                i.pointer.primary_released(),
                i.pointer.primary_down(),
                i.pointer.latest_pos(),
            )
        });

        if released {
            let inside = latest_pos.is_some_and(|pos| ctx.response.rect.contains(pos));
            events.push(if inside {
                AppIntent::PointerReleased
            } else {
                AppIntent::PointerReleasedOutside
            });
            self.last_pointer_pos = None;
        } else if !primary_down {
            // Release außerhalb des Fensters wurde nicht gemeldet
            events.push(AppIntent::PointerReleasedOutside);
            self.last_pointer_pos = None;
        }
    }

    // ── Kamera-Pan (Mitte / Rechts) ─────────────────────────────

    fn handle_camera_pan(&self, ctx: &CanvasContext, events: &mut Vec<AppIntent>) {
        if !(ctx.response.dragged_by(egui::PointerButton::Middle)
            || ctx.response.dragged_by(egui::PointerButton::Secondary))
        {
            return;
        }

        let pointer_delta = ctx.ui.input(|i| i.pointer.delta());
        if pointer_delta == egui::Vec2::ZERO {
            return;
        }

        let wpp = ctx.camera.world_per_pixel();
        events.push(AppIntent::CameraPan {
            delta: glam::Vec2::new(-pointer_delta.x * wpp, -pointer_delta.y * wpp),
        });
    }

    // ── Scroll-Zoom (auf Mausposition) ──────────────────────────

    fn handle_scroll_zoom(&self, ctx: &CanvasContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.hovered() {
            return;
        }

        let scroll = ctx.ui.input(|i| i.smooth_scroll_delta.y);
        if scroll == 0.0 {
            return;
        }

        let step = ctx.options.camera_scroll_zoom_step;
        let factor = if scroll > 0.0 { step } else { 1.0 / step };
        let focus_world = ctx
            .response
            .hover_pos()
            .map(|pos| screen_pos_to_world(pos, ctx.response, ctx.camera));
        events.push(AppIntent::CameraZoom {
            factor,
            focus_world,
        });
    }
}

/// Rechnet eine Bildschirmposition in Canvas-Koordinaten um.
fn screen_pos_to_world(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    camera: &Camera2D,
) -> glam::Vec2 {
    let local = pointer_pos - response.rect.min;
    camera.screen_to_world(glam::Vec2::new(local.x, local.y))
}
