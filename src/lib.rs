//! SVG Path Node Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod path;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DragController, DragState, DragTransition,
    UiState, ViewState,
};
pub use core::{Camera2D, HitRect, NodeKind, NodeStore, PathNode};
pub use path::{parse_simple_path, write_simple_path};
pub use shared::{EditorOptions, RenderScene};
