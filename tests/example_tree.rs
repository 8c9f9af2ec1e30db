//! Integration tests for the example tree document.
//!
//! These tests check the generated document byte for byte and exercise the
//! identifier, ordering and passthrough guarantees through the public API.

use astdot::{
    dot::{create_wrapper, HEADER},
    example::{build_example_tree, emit, EXAMPLE_EDGE_COUNT, EXAMPLE_NODE_COUNT},
    graph::create_child,
    GraphBuilder, Result,
};
use std::{collections::HashSet, process::Command};

const EXPECTED_DOCUMENT: &str = "strict digraph X {
x0 [label=\"-\",shape=circle]
x1 [label=\"+\",shape=circle]
x2 [label=\"1\",shape=circle]
x3 [label=\"2\",shape=circle]
x4 [label=\"3\",shape=circle]
x0 -> x2
x0 -> x3
x1 -> x0
x1 -> x4
}";

/// Shift every `x<N>` identifier in `text` by `offset`.
fn shift_ids(text: &str, offset: usize) -> String {
    let mut shifted = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        shifted.push(c);
        if c == 'x' && chars.peek().is_some_and(char::is_ascii_digit) {
            let mut digits = String::new();
            while let Some(d) = chars.next_if(char::is_ascii_digit) {
                digits.push(d);
            }
            let value: usize = digits.parse().unwrap();
            shifted.push_str(&(value + offset).to_string());
        }
    }
    shifted
}

#[test]
fn test_fresh_builder_produces_reference_document() {
    let mut builder = GraphBuilder::new();
    let document = create_wrapper(&build_example_tree(&mut builder));
    assert_eq!(document, EXPECTED_DOCUMENT);
}

#[test]
fn test_emit_writes_document_once_with_newline() -> Result<()> {
    let mut out = Vec::new();
    emit(&mut GraphBuilder::new(), &mut out)?;

    let written = String::from_utf8(out).unwrap();
    assert_eq!(written, format!("{EXPECTED_DOCUMENT}\n"));
    assert_eq!(written.matches("strict digraph").count(), 1);
    Ok(())
}

#[test]
fn test_binary_prints_reference_document() {
    let output = Command::new(env!("CARGO_BIN_EXE_astdot"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run astdot binary");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!("{EXPECTED_DOCUMENT}\n")
    );
}

#[test]
fn test_second_build_is_offset_by_counter() {
    let mut builder = GraphBuilder::new();
    let first = build_example_tree(&mut builder);
    let offset = builder.node_count();
    let second = build_example_tree(&mut builder);

    assert_eq!(offset, EXAMPLE_NODE_COUNT);
    assert_ne!(first, second);
    assert_eq!(second, shift_ids(&first, offset));
    assert!(second.starts_with("x5 [label=\"-\",shape=circle]\n"));
    assert!(second.ends_with("x6 -> x9\n"));
}

#[test]
fn test_identifiers_unique_across_builds() {
    let mut builder = GraphBuilder::new();
    let mut seen = HashSet::new();

    for _ in 0..10 {
        let body = build_example_tree(&mut builder);
        for line in body.lines().filter(|line| line.contains("[label=")) {
            let id = line.split_whitespace().next().unwrap().to_string();
            assert!(seen.insert(id), "duplicate identifier in: {line}");
        }
    }
    assert_eq!(seen.len(), 10 * EXAMPLE_NODE_COUNT);
}

#[test]
fn test_structure_is_declarations_then_edges() {
    let body = build_example_tree(&mut GraphBuilder::new());
    let lines: Vec<&str> = body.lines().collect();

    assert_eq!(lines.len(), EXAMPLE_NODE_COUNT + EXAMPLE_EDGE_COUNT);
    assert!(lines[..EXAMPLE_NODE_COUNT]
        .iter()
        .all(|line| line.ends_with(",shape=circle]")));
    assert!(lines[EXAMPLE_NODE_COUNT..]
        .iter()
        .all(|line| line.contains(" -> ") && !line.contains("[label=")));
}

#[test]
fn test_wrapper_round_trip() {
    for body in ["", "x0 [label=\"-\",shape=circle]\n", "arbitrary text {}"] {
        let document = create_wrapper(body);
        assert!(document.starts_with(HEADER));
        assert_eq!(&document[HEADER.len()..document.len() - 1], body);
        assert!(document.ends_with('}'));
    }
}

#[test]
fn test_label_passthrough() {
    let node = GraphBuilder::new().create_node("foo");
    assert!(node.declaration().contains("label=\"foo\""));
    assert!(node.declaration().contains("shape=circle"));
}

#[test]
fn test_edge_options_passthrough() {
    assert_eq!(
        create_child("a", "b", " [style=dashed]"),
        "a -> b [style=dashed]\n"
    );
}

#[test]
fn test_malformed_input_is_not_rejected() {
    let mut builder = GraphBuilder::new();
    let node = builder.create_node("a\"b");
    let body = format!("{}{}", node.declaration(), create_child("x0", "ghost", ""));

    let document = create_wrapper(&body);
    assert!(document.contains("label=\"a\"b\""));
    assert!(document.contains("x0 -> ghost\n"));
}
