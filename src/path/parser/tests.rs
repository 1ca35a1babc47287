use super::*;
use crate::core::NodeKind;

fn positions(path: &str) -> Vec<(f32, f32)> {
    parse_simple_path(path)
        .iter()
        .map(|node| (node.position.x, node.position.y))
        .collect()
}

#[test]
fn test_parse_demo_path() {
    let nodes = parse_simple_path("M 100 350 L 250 50 L 300 300");

    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes[0], PathNode::endpoint(0, Vec2::new(100.0, 350.0)));
    assert_eq!(nodes[1], PathNode::endpoint(1, Vec2::new(250.0, 50.0)));
    assert_eq!(nodes[2], PathNode::endpoint(2, Vec2::new(300.0, 300.0)));
    assert!(nodes.iter().all(|node| node.kind == NodeKind::Endpoint));
}

#[test]
fn test_unsupported_command_is_skipped_without_aborting() {
    let nodes = parse_simple_path("C 1 2 3 4 M 10 20 L 30 40");

    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0], PathNode::endpoint(0, Vec2::new(10.0, 20.0)));
    assert_eq!(nodes[1], PathNode::endpoint(1, Vec2::new(30.0, 40.0)));
}

#[test]
fn test_empty_and_unsupported_input_yield_empty_list() {
    assert!(parse_simple_path("").is_empty());
    assert!(parse_simple_path("   ").is_empty());
    assert!(parse_simple_path("Q 1 2 3 4 Z").is_empty());
    assert!(parse_simple_path("kein pfad").is_empty());
}

#[test]
fn test_relative_lowercase_commands_are_skipped() {
    assert_eq!(positions("m 1 2 l 3 4 L 5 6"), vec![(5.0, 6.0)]);
}

#[test]
fn test_separators_and_signs() {
    assert_eq!(
        positions("M10,20L 30 , 40 L-5-6 L+7 .5 L1. 2"),
        vec![(10.0, 20.0), (30.0, 40.0), (-5.0, -6.0), (7.0, 0.5), (1.0, 2.0)]
    );
}

#[test]
fn test_fractional_values() {
    assert_eq!(positions("M 0.25 -1.5"), vec![(0.25, -1.5)]);
}

#[test]
fn test_malformed_command_emits_no_partial_node() {
    let nodes = parse_simple_path("M 10 L 30 40");

    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0], PathNode::endpoint(0, Vec2::new(30.0, 40.0)));
}

#[test]
fn test_glued_digits_are_not_split_into_two_numbers() {
    assert!(parse_simple_path("M 1234").is_empty());
}

#[test]
fn test_indices_are_dense_after_skips() {
    let nodes = parse_simple_path("M 1 1 Z C 0 0 0 0 0 0 L 2 2 x L 3 3");

    let indices: Vec<usize> = nodes.iter().map(|node| node.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn test_overflowing_number_is_skipped() {
    let huge = "9".repeat(60);
    let path = format!("M {huge} 1 L 2 3");

    assert_eq!(positions(&path), vec![(2.0, 3.0)]);
}
