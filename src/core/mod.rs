//! Core-Domänentypen: Pfad-Knoten, Knotenliste, Hit-Flächen, Kamera.

pub mod camera;
pub mod hit_rect;
/// Core-Datenmodelle des Pfad-Editors
///
/// - PathNode: einzelner Knoten mit stabilem Index
/// - NodeStore: Copy-on-Write-Liste aller Knoten
pub mod node;
pub mod node_store;

pub use camera::Camera2D;
pub use hit_rect::{topmost_hit, HitRect};
pub use node::{NodeKind, PathNode};
pub use node_store::NodeStore;
