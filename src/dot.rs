//! DOT document assembly.
//!
//! This module wraps node and edge fragments into a complete document that Graphviz
//! can render, e.g. with `dot -T jpg tree.dot > tree.jpg`.

/// Opening line of every generated document.
pub const HEADER: &str = "strict digraph X {\n";

/// Closing brace of every generated document. Nothing follows it.
pub const FOOTER: &str = "}";

/// Wraps `body` between [`HEADER`] and [`FOOTER`].
///
/// The body is inserted unchanged and no newline is added after the closing brace,
/// so stripping the header and the final character gives back `body` exactly.
///
/// # Examples
///
/// ```rust
/// use astdot::dot::{create_wrapper, HEADER};
///
/// let document = create_wrapper("x0 -> x1\n");
/// assert_eq!(document, "strict digraph X {\nx0 -> x1\n}");
/// assert_eq!(&document[HEADER.len()..document.len() - 1], "x0 -> x1\n");
/// ```
#[must_use]
pub fn create_wrapper(body: &str) -> String {
    let mut document = String::with_capacity(HEADER.len() + body.len() + FOOTER.len());
    document.push_str(HEADER);
    document.push_str(body);
    document.push_str(FOOTER);
    document
}

/// Escapes a string for safe use in DOT labels.
///
/// Node labels are never escaped automatically. Callers whose labels may contain
/// quotes, backslashes, newlines or angle brackets can run them through this
/// function before handing them to
/// [`GraphBuilder::create_node`](crate::GraphBuilder::create_node).
///
/// # Examples
///
/// ```rust
/// use astdot::{dot::escape_dot, GraphBuilder};
///
/// let mut builder = GraphBuilder::new();
/// let node = builder.create_node(&escape_dot("\"quoted\""));
/// assert_eq!(node.declaration(), "x0 [label=\"\\\"quoted\\\"\",shape=circle]\n");
/// ```
#[must_use]
pub fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "")
        .replace('<', "\\<")
        .replace('>', "\\>")
}
