//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use crate::shared::EditorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primäre Maustaste über dem Canvas gedrückt (Canvas-Koordinaten)
    PointerPressed { world_pos: glam::Vec2 },
    /// Pointer bewegt, während ein Drag läuft (Canvas-Koordinaten)
    PointerMoved { world_pos: glam::Vec2 },
    /// Maustaste über dem Canvas losgelassen
    PointerReleased,
    /// Maustaste außerhalb des Canvas losgelassen (oder Pointer verloren)
    PointerReleasedOutside,

    /// Neuer Pfad-String im Pfad-Dialog bestätigt
    PathSubmitted { path: String },
    /// Pfad-Dialog öffnen
    OpenPathDialogRequested,
    /// Pfad-Dialog ohne Übernahme schließen
    PathDialogCancelled,

    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,

    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Delta verschieben (Canvas-Einheiten)
    CameraPan { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },

    /// Optionen-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Optionen-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,

    /// Anwendung beenden
    ExitRequested,
}

/// Mutierende Commands, die der Controller auf den AppState anwendet.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Drag an Canvas-Position beginnen (Hit-Test auf Node-Handles)
    BeginNodeDrag { world_pos: glam::Vec2 },
    /// Gezogenen Node an Canvas-Position setzen
    UpdateNodeDrag { world_pos: glam::Vec2 },
    /// Drag beenden (`outside` = Release außerhalb des Canvas)
    EndNodeDrag { outside: bool },

    /// Pfad-String parsen und als neue Knotenliste übernehmen
    LoadPath { path: String },
    /// Pfad-Dialog öffnen (Eingabepuffer mit aktuellem Pfad füllen)
    OpenPathDialog,
    /// Pfad-Dialog schließen
    ClosePathDialog,

    /// Undo ausführen
    Undo,
    /// Redo ausführen
    Redo,

    /// Kamera zurücksetzen
    ResetCamera,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera verschieben
    PanCamera { delta: glam::Vec2 },
    /// Kamera zoomen
    ZoomCamera {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },

    /// Optionen-Dialog öffnen
    OpenOptionsDialog,
    /// Optionen-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und persistieren
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen und persistieren
    ResetOptions,

    /// Anwendung beenden
    RequestExit,
}
