/// UI-bezogener Anwendungszustand (Dialoge, Eingabepuffer)
#[derive(Default)]
pub struct UiState {
    /// Ob der Pfad-Dialog angezeigt wird
    pub show_path_dialog: bool,
    /// Bearbeitungspuffer des Pfad-Dialogs
    pub path_input: String,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Statusnachricht für die Status-Bar
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
