//! Edge fragments for directed graphs.
//!
//! Edges are not retained by the builder. An [`Edge`] is a borrowed view over two
//! identifiers and an option suffix that exists just long enough to be rendered into
//! a line of DOT text.

use std::fmt;

/// A directed edge from a parent node to a child node.
///
/// Renders as `<source> -> <target><options>` followed by a newline. `options` is
/// inserted verbatim right after the target, so it normally starts with a space,
/// e.g. `" [style=dashed]"`. Neither endpoint is checked against the nodes declared
/// so far; referencing an undeclared identifier produces a document the renderer
/// may reject.
///
/// # Examples
///
/// ```rust
/// use astdot::graph::Edge;
///
/// let edge = Edge::with_options("a", "b", " [style=dashed]");
/// assert_eq!(edge.to_string(), "a -> b [style=dashed]\n");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<'a> {
    source: &'a str,
    target: &'a str,
    options: &'a str,
}

impl<'a> Edge<'a> {
    /// Creates an edge without trailing options.
    #[must_use]
    pub const fn new(source: &'a str, target: &'a str) -> Self {
        Self::with_options(source, target, "")
    }

    /// Creates an edge whose rendered line ends with `options`.
    #[must_use]
    pub const fn with_options(source: &'a str, target: &'a str, options: &'a str) -> Self {
        Edge {
            source,
            target,
            options,
        }
    }

    /// Returns the parent identifier.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.source
    }

    /// Returns the child identifier.
    #[must_use]
    pub const fn target(&self) -> &'a str {
        self.target
    }

    /// Returns the option suffix, empty when none was given.
    #[must_use]
    pub const fn options(&self) -> &'a str {
        self.options
    }
}

impl fmt::Display for Edge<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} -> {}{}", self.source, self.target, self.options)
    }
}
