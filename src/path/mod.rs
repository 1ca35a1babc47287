//! Import/Export des vereinfachten SVG-Pfadformats (`M x y` / `L x y`).
//!
//! Der Parser erzeugt aus einem Pfad-String eine geordnete Knotenliste,
//! der Writer serialisiert sie zurück. `parse(write(nodes)) == nodes`.

pub mod parser;
pub mod writer;

pub use parser::parse_simple_path;
pub use writer::write_simple_path;
