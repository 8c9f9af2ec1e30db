//! The hardcoded example expression tree and its output.
//!
//! The example is the tree of `(1 - 2) + 3`: a `+` root whose children are a `-`
//! node and the literal `3`, with the `-` node holding the literals `1` and `2`.
//! Its text is laid out as one block of node declarations, in creation order,
//! followed by one block of edges. It is not a traversal of the tree.

use std::io::Write;

use crate::{dot::create_wrapper, graph::GraphBuilder, Result};

/// Number of node declarations in the example tree.
pub const EXAMPLE_NODE_COUNT: usize = 5;

/// Number of edges in the example tree.
pub const EXAMPLE_EDGE_COUNT: usize = 4;

/// Builds the body of the example tree using `builder`'s identifiers.
///
/// Creates the nodes `-`, `+`, `1`, `2`, `3` in that order, then emits their five
/// declarations followed by the edges `- -> 1`, `- -> 2`, `+ -> -`, `+ -> 3`.
/// The builder's counter advances by [`EXAMPLE_NODE_COUNT`].
///
/// # Examples
///
/// ```rust
/// use astdot::{example::build_example_tree, GraphBuilder};
///
/// let mut builder = GraphBuilder::new();
/// let body = build_example_tree(&mut builder);
/// assert!(body.starts_with("x0 [label=\"-\",shape=circle]\n"));
/// assert!(body.ends_with("x1 -> x4\n"));
/// ```
pub fn build_example_tree(builder: &mut GraphBuilder) -> String {
    let minus = builder.create_node("-");
    let plus = builder.create_node("+");
    let one = builder.create_node("1");
    let two = builder.create_node("2");
    let three = builder.create_node("3");

    let mut body = String::new();
    for node in [&minus, &plus, &one, &two, &three] {
        body.push_str(node.declaration());
    }

    body.push_str(&builder.create_child(minus.id(), one.id(), ""));
    body.push_str(&builder.create_child(minus.id(), two.id(), ""));
    body.push_str(&builder.create_child(plus.id(), minus.id(), ""));
    body.push_str(&builder.create_child(plus.id(), three.id(), ""));

    log::debug!(
        "built example tree with {EXAMPLE_NODE_COUNT} nodes and {EXAMPLE_EDGE_COUNT} edges, next id {}{}",
        builder.prefix(),
        builder.node_count()
    );
    body
}

/// Builds, wraps and writes the example document to `out`.
///
/// Writes the document returned by [`create_wrapper`] followed by a single newline,
/// then flushes. The document is written exactly once.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if writing to or flushing `out` fails.
///
/// # Examples
///
/// ```rust
/// use astdot::{example::emit, GraphBuilder};
///
/// let mut out = Vec::new();
/// emit(&mut GraphBuilder::new(), &mut out)?;
/// assert!(out.starts_with(b"strict digraph X {\n"));
/// assert!(out.ends_with(b"}\n"));
/// # Ok::<(), astdot::Error>(())
/// ```
pub fn emit<W: Write>(builder: &mut GraphBuilder, out: &mut W) -> Result<()> {
    let document = create_wrapper(&build_example_tree(builder));

    writeln!(out, "{document}")?;
    out.flush()?;

    log::debug!("emitted document of {} bytes", document.len() + 1);
    Ok(())
}
