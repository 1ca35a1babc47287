//! Parser für vereinfachte SVG-Pfade (nur absolute `M` und `L`).

use crate::core::PathNode;
use glam::Vec2;
use regex::Regex;
use std::sync::LazyLock;

/// Ein Kommando `M`/`L` mit zwei Zahlen. Die y-Zahl folgt nach Trennzeichen
/// (Whitespace/Komma) oder direkt mit Vorzeichen (`M10-20`).
static COMMAND_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    const NUMBER: &str = r"[+-]?(?:\d+(?:\.\d*)?|\.\d+)";
    const SIGNED_NUMBER: &str = r"[+-](?:\d+(?:\.\d*)?|\.\d+)";
    let pattern = format!(r"([ML])[\s,]*({NUMBER})(?:[\s,]+({NUMBER})|({SIGNED_NUMBER}))");
    Regex::new(&pattern).expect("statisches Pfad-Pattern muss kompilieren")
});

/// Parst einen Pfad-String in eine Knotenliste.
///
/// Nicht unterstützte Kommandos (`C`, `Q`, `A`, `Z`, relative Kleinbuchstaben …)
/// und Kommandos mit fehlerhaften Zahlen werden übersprungen. Schlägt nie fehl:
/// leere oder komplett unbekannte Eingaben liefern eine leere Liste.
pub fn parse_simple_path(path: &str) -> Vec<PathNode> {
    let mut nodes = Vec::new();

    for caps in COMMAND_PATTERN.captures_iter(path) {
        let Some(x) = caps.get(2) else {
            continue;
        };
        let Some(y) = caps.get(3).or_else(|| caps.get(4)) else {
            continue;
        };

        let Some(position) = parse_coordinate_pair(x.as_str(), y.as_str()) else {
            log::debug!(
                "Pfad-Kommando übersprungen (Zahl nicht darstellbar): {}",
                &caps[0]
            );
            continue;
        };

        nodes.push(PathNode::endpoint(nodes.len(), position));
    }

    nodes
}

/// Wandelt zwei Zahl-Token in eine endliche Position um.
fn parse_coordinate_pair(x: &str, y: &str) -> Option<Vec2> {
    let x = x.parse::<f32>().ok()?;
    let y = y.parse::<f32>().ok()?;
    let position = Vec2::new(x, y);
    position.is_finite().then_some(position)
}

#[cfg(test)]
mod tests;
