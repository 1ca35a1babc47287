//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;
mod render_style;

pub use options::EditorOptions;
pub use render_scene::RenderScene;
pub use render_style::{MarkerStyle, StrokeStyle};
