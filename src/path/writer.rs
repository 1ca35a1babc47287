//! Writer für vereinfachte SVG-Pfade.

use crate::core::PathNode;

/// Serialisiert eine Knotenliste als `M x y L x y …`.
///
/// Zahlen nutzen die kürzeste verlustfreie `f32`-Darstellung (`120`, `0.5`),
/// nie Exponent-Schreibweise. Leere Liste ergibt einen leeren String.
pub fn write_simple_path(nodes: &[PathNode]) -> String {
    let mut output = String::with_capacity(nodes.len() * 12);

    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            output.push(' ');
        }
        output.push(if i == 0 { 'M' } else { 'L' });
        output.push(' ');
        output.push_str(&format_coordinate(node.position.x));
        output.push(' ');
        output.push_str(&format_coordinate(node.position.y));
    }

    output
}

fn format_coordinate(value: f32) -> String {
    format!("{}", value)
}
