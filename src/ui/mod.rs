//! UI-Komponenten: Menü, Pfad-Panel, Status, Input-Handling, Dialoge.

pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Menüs, Panels, Dialoge).
/// Keyboard-Shortcuts sind in eine eigene Datei extrahiert.
pub mod menu;
pub mod options_dialog;
pub mod path_panel;
pub mod status;

pub use input::InputState;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use path_panel::{render_path_panel, show_path_dialog};
pub use status::render_status_bar;
