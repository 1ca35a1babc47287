//! SVG Path Node Editor.
//!
//! Minimaler Editor für vereinfachte SVG-Pfade (absolute `M`/`L`):
//! Nodes per Maus verschieben, der Pfad-String wird live neu erzeugt.

use eframe::egui;
use svg_path_node_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};

const APP_TITLE: &str = "SVG Path Node Editor";

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("{} v{} startet...", APP_TITLE, env!("CARGO_PKG_VERSION"));

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(|_cc| Ok(Box::new(EditorApp::from_config()))),
    )
}

/// eframe-Host: hält State, Controller und Input-Zustand des Canvas.
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl EditorApp {
    /// Lädt die Optionen neben der Binary und danach den Start-Pfad.
    fn from_config() -> Self {
        let options = EditorOptions::load_from_file(&EditorOptions::config_path());
        let initial_path = options.initial_path.clone();

        let mut state = AppState::with_options(options);
        state.load_path(&initial_path);
        log::info!("Start-Pfad geladen: {} Nodes", state.node_count());

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }

    /// Panels und Dialoge rund um den Canvas.
    fn show_panels(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut intents = ui::render_menu(ctx, &self.state);
        ui::render_status_bar(ctx, &self.state);
        intents.extend(ui::render_path_panel(ctx, &self.state));
        intents.extend(ui::show_path_dialog(ctx, &mut self.state));
        intents.extend(ui::show_options_dialog(ctx, &self.state));
        intents
    }

    /// Canvas: Input einsammeln und die aktuelle Szene zeichnen.
    fn show_canvas(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let intents = self.input.collect_canvas_events(
                    ui,
                    &response,
                    &self.state.view.camera,
                    &self.state.options,
                    self.state.drag.is_dragging(),
                );

                let painter = ui.painter_at(rect);
                paint_scene(&self.controller, &self.state, &painter, rect);
                intents
            })
            .inner
    }

    fn dispatch(&mut self, intents: Vec<AppIntent>) {
        for intent in intents {
            if let Err(e) = self.controller.handle_intent(&mut self.state, intent) {
                log::error!("Intent-Verarbeitung fehlgeschlagen: {:#}", e);
            }
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut intents = self.show_panels(ctx);
        intents.extend(self.show_canvas(ctx));

        // Viewport-Größe allein löst kein Neuzeichnen aus
        let needs_repaint = self.state.drag.is_dragging()
            || self.state.ui.show_path_dialog
            || self.state.ui.show_options_dialog
            || intents
                .iter()
                .any(|intent| !matches!(intent, AppIntent::ViewportResized { .. }));

        self.dispatch(intents);

        if needs_repaint {
            ctx.request_repaint();
        }
    }
}

/// Zeichnet die Szene des aktuellen States in das Canvas-Rechteck.
fn paint_scene(
    controller: &AppController,
    state: &AppState,
    painter: &egui::Painter,
    rect: egui::Rect,
) {
    let scene = controller.build_render_scene(state);
    let mut surface = render::EguiSurface::new(
        painter,
        rect,
        &scene.camera,
        scene.options.canvas_background_color,
    );
    render::draw_scene(&mut surface, &scene);

    if scene.nodes.is_empty() {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Kein Pfad geladen. Path → Load Path...",
            egui::FontId::proportional(20.0),
            egui::Color32::GRAY,
        );
    }
}
