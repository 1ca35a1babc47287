//! Rendering der Pfad-Szene über eine abstrakte Zeichenfläche.

mod egui_surface;
mod path_renderer;
mod surface;

pub use crate::shared::RenderScene;
pub use egui_surface::EguiSurface;
pub use path_renderer::{draw_markers, draw_path, draw_scene};
pub use surface::DrawSurface;
