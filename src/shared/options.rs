//! Zentrale Konfiguration für den SVG-Pfad-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::{MarkerStyle, StrokeStyle};
use serde::{Deserialize, Serialize};

// ── Pfad ────────────────────────────────────────────────────────────

/// Demo-Pfad beim Start.
pub const INITIAL_PATH: &str = "M 100 350 L 250 50 L 300 300";
/// Linienstärke des Pfads in Pixeln.
pub const PATH_STROKE_WIDTH: f32 = 2.0;
/// Farbe des Pfads (RGBA: #1976d2).
pub const PATH_STROKE_COLOR: [f32; 4] = [25.0 / 255.0, 118.0 / 255.0, 210.0 / 255.0, 1.0];

// ── Node-Marker ─────────────────────────────────────────────────────

/// Halbe Kantenlänge des Marker-Quadrats und der Hit-Fläche (Canvas-Einheiten).
pub const MARKER_HALF_SIZE: f32 = 5.0;
/// Füllfarbe der Marker (RGBA: Weiß).
pub const MARKER_FILL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Randfarbe der Marker.
pub const MARKER_STROKE_COLOR: [f32; 4] = PATH_STROKE_COLOR;
/// Randstärke der Marker in Pixeln.
pub const MARKER_STROKE_WIDTH: f32 = 2.0;
/// Deckkraft des Markers während eines Drags.
pub const DRAG_MARKER_ALPHA: f32 = 0.5;

// ── Canvas ──────────────────────────────────────────────────────────

/// Hintergrundfarbe des Canvas (RGBA: Weiß).
pub const CANVAS_BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = 0.1;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = 20.0;
/// Zoom-Schritt bei stufenweisem Zoom (Menü / Shortcuts).
pub const CAMERA_ZOOM_STEP: f32 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `svg_path_node_editor.toml` neben der Binary gespeichert.
/// Fehlende Felder fallen auf Standardwerte zurück.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Pfad ────────────────────────────────────────────────────
    /// Pfad, der beim Start geladen wird
    pub initial_path: String,
    /// Linienstärke des Pfads in Pixeln
    pub path_stroke_width: f32,
    /// Farbe des Pfads
    pub path_stroke_color: [f32; 4],

    // ── Marker ──────────────────────────────────────────────────
    /// Halbe Kantenlänge von Marker und Hit-Fläche (Canvas-Einheiten)
    pub marker_half_size: f32,
    /// Füllfarbe der Marker
    pub marker_fill_color: [f32; 4],
    /// Randfarbe der Marker
    pub marker_stroke_color: [f32; 4],
    /// Randstärke der Marker in Pixeln
    pub marker_stroke_width: f32,
    /// Deckkraft des gezogenen Markers
    pub drag_marker_alpha: f32,

    // ── Canvas ──────────────────────────────────────────────────
    /// Hintergrundfarbe des Canvas
    pub canvas_background_color: [f32; 4],

    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor
    pub camera_zoom_max: f32,
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts
    pub camera_zoom_step: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            initial_path: INITIAL_PATH.to_string(),
            path_stroke_width: PATH_STROKE_WIDTH,
            path_stroke_color: PATH_STROKE_COLOR,

            marker_half_size: MARKER_HALF_SIZE,
            marker_fill_color: MARKER_FILL_COLOR,
            marker_stroke_color: MARKER_STROKE_COLOR,
            marker_stroke_width: MARKER_STROKE_WIDTH,
            drag_marker_alpha: DRAG_MARKER_ALPHA,

            canvas_background_color: CANVAS_BACKGROUND_COLOR,

            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_or_default(&content, path),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    fn from_toml_or_default(content: &str, path: &std::path::Path) -> Self {
        match toml::from_str::<Self>(content) {
            Ok(opts) => {
                log::info!("Optionen geladen aus: {}", path.display());
                opts.normalized()
            }
            Err(e) => {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }
        }
    }

    /// Ersetzt ungültige Zoom-Werte (nicht endlich, `min > max`, Schritt <= 1)
    /// durch die Standardwerte.
    pub fn normalized(mut self) -> Self {
        let limits_valid = self.camera_zoom_min.is_finite()
            && self.camera_zoom_max.is_finite()
            && self.camera_zoom_min > 0.0
            && self.camera_zoom_min <= self.camera_zoom_max;
        if !limits_valid {
            log::warn!(
                "Ungültige Zoom-Grenzen ({} .. {}), verwende Standardwerte",
                self.camera_zoom_min,
                self.camera_zoom_max
            );
            self.camera_zoom_min = CAMERA_ZOOM_MIN;
            self.camera_zoom_max = CAMERA_ZOOM_MAX;
        }

        if !(self.camera_zoom_step.is_finite() && self.camera_zoom_step > 1.0) {
            self.camera_zoom_step = CAMERA_ZOOM_STEP;
        }
        if !(self.camera_scroll_zoom_step.is_finite() && self.camera_scroll_zoom_step > 1.0) {
            self.camera_scroll_zoom_step = CAMERA_SCROLL_ZOOM_STEP;
        }

        self
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("svg_path_node_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("svg_path_node_editor.toml")
    }

    /// Strichstil für die Pfad-Polylinie.
    pub fn path_stroke(&self) -> StrokeStyle {
        StrokeStyle {
            width: self.path_stroke_width,
            color: self.path_stroke_color,
        }
    }

    /// Stil der Node-Marker.
    pub fn marker_style(&self) -> MarkerStyle {
        MarkerStyle {
            half_size: self.marker_half_size,
            fill: self.marker_fill_color,
            stroke: StrokeStyle {
                width: self.marker_stroke_width,
                color: self.marker_stroke_color,
            },
        }
    }
}
