//! Copy-on-Write-Container der aktuellen Knotenliste.

use super::{topmost_hit, HitRect, PathNode};
use glam::Vec2;
use std::sync::Arc;

/// Geordnete Knotenliste als einzige Wahrheitsquelle für Rendering und Drag.
///
/// Mutationen erzeugen eine neue Liste (Whole-List-Replacement); ältere Klone
/// behalten ihren konsistenten Snapshot. Klonen ist O(1).
#[derive(Debug, Clone, Default)]
pub struct NodeStore {
    nodes: Arc<[PathNode]>,
}

impl NodeStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Übernimmt eine frisch geparste Knotenliste.
    pub fn from_nodes(nodes: Vec<PathNode>) -> Self {
        Self {
            nodes: nodes.into(),
        }
    }

    /// Read-only Sicht auf alle Knoten in Pfad-Reihenfolge.
    pub fn nodes(&self) -> &[PathNode] {
        &self.nodes
    }

    /// Anzahl der Knoten.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Gibt `true` zurück, wenn keine Knoten vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Liefert den Knoten mit dem gegebenen Index.
    pub fn get(&self, index: usize) -> Option<&PathNode> {
        self.nodes.iter().find(|node| node.index == index)
    }

    /// Prüft, ob beide Stores dieselbe Allokation teilen.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.nodes, &other.nodes)
    }

    /// Liefert eine neue Liste, in der nur der Knoten `index` die neue Position hat.
    ///
    /// Unbekannter Index oder nicht-endliche Koordinaten: die Liste bleibt
    /// unverändert (gleiche Allokation). Es wird nie umnummeriert.
    pub fn replace_node(&self, index: usize, position: Vec2) -> Self {
        if !position.is_finite() || self.get(index).is_none() {
            return self.clone();
        }

        let nodes: Arc<[PathNode]> = self
            .nodes
            .iter()
            .map(|node| {
                if node.index == index {
                    node.with_position(position)
                } else {
                    *node
                }
            })
            .collect();

        Self { nodes }
    }

    /// Sucht den Knoten, dessen Hit-Fläche `position` enthält.
    ///
    /// Bei Überlappung gewinnt der zuletzt gezeichnete Knoten (höchster Index).
    pub fn hit_test(&self, position: Vec2, half_size: f32) -> Option<usize> {
        let areas = self
            .nodes
            .iter()
            .map(|node| (node.index, HitRect::new(node.position, half_size)));
        topmost_hit(areas, position)
    }
}

impl PartialEq for NodeStore {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_nodes() -> NodeStore {
        NodeStore::from_nodes(vec![
            PathNode::endpoint(0, Vec2::new(100.0, 350.0)),
            PathNode::endpoint(1, Vec2::new(250.0, 50.0)),
            PathNode::endpoint(2, Vec2::new(300.0, 300.0)),
        ])
    }

    #[test]
    fn replace_node_changes_only_target_and_keeps_indices() {
        let store = three_nodes();

        let moved = store.replace_node(1, Vec2::new(7.0, 8.0));

        assert_eq!(moved.len(), store.len());
        for (before, after) in store.nodes().iter().zip(moved.nodes()) {
            assert_eq!(before.index, after.index);
            assert_eq!(before.kind, after.kind);
        }
        assert_eq!(moved.nodes()[0].position, store.nodes()[0].position);
        assert_eq!(moved.nodes()[1].position, Vec2::new(7.0, 8.0));
        assert_eq!(moved.nodes()[2].position, store.nodes()[2].position);
    }

    #[test]
    fn replace_node_is_copy_on_write() {
        let store = three_nodes();
        let snapshot = store.clone();

        let moved = store.replace_node(0, Vec2::new(1.0, 1.0));

        assert!(!moved.ptr_eq(&snapshot));
        assert_eq!(snapshot.nodes()[0].position, Vec2::new(100.0, 350.0));
    }

    #[test]
    fn replace_unknown_index_is_noop() {
        let store = three_nodes();

        let same = store.replace_node(99, Vec2::new(1.0, 1.0));

        assert_eq!(same, store);
        assert!(same.ptr_eq(&store));
    }

    #[test]
    fn replace_with_non_finite_position_is_noop() {
        let store = three_nodes();

        let same = store.replace_node(0, Vec2::new(f32::NAN, 1.0));

        assert!(same.ptr_eq(&store));
    }

    #[test]
    fn hit_test_prefers_topmost_node() {
        let store = NodeStore::from_nodes(vec![
            PathNode::endpoint(0, Vec2::new(10.0, 10.0)),
            PathNode::endpoint(1, Vec2::new(14.0, 10.0)),
        ]);

        assert_eq!(store.hit_test(Vec2::new(12.0, 10.0), 5.0), Some(1));
        assert_eq!(store.hit_test(Vec2::new(6.0, 10.0), 5.0), Some(0));
        assert_eq!(store.hit_test(Vec2::new(40.0, 40.0), 5.0), None);
    }

    #[test]
    fn empty_store_has_no_hits() {
        let store = NodeStore::new();
        assert!(store.is_empty());
        assert_eq!(store.hit_test(Vec2::ZERO, 5.0), None);
    }
}
