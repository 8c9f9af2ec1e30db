//! Graph construction primitives for DOT output.
//!
//! [`GraphBuilder`] allocates node identifiers and renders node declarations, while
//! [`create_child`] and [`Edge`] render the edges between them. Everything produced
//! here is plain text; assembling it into a complete document is done by
//! [`create_wrapper`](crate::dot::create_wrapper).
//!
//! # Identifier allocation
//!
//! Each builder owns its own counter, starting at 0 and incremented by one per node.
//! Identifiers are the builder's prefix followed by the counter value, so within one
//! builder they are unique. The counter is never reset: building the same tree twice
//! with one builder yields the same text with every identifier shifted by the number
//! of nodes allocated before.
//!
//! # Examples
//!
//! ```rust
//! use astdot::{dot, graph::create_child, GraphBuilder};
//!
//! let mut builder = GraphBuilder::new();
//! let plus = builder.create_node("+");
//! let one = builder.create_node("1");
//!
//! let mut body = String::new();
//! body.push_str(plus.declaration());
//! body.push_str(one.declaration());
//! body.push_str(&create_child(plus.id().as_str(), one.id().as_str(), ""));
//!
//! assert_eq!(
//!     dot::create_wrapper(&body),
//!     "strict digraph X {\nx0 [label=\"+\",shape=circle]\nx1 [label=\"1\",shape=circle]\nx0 -> x1\n}"
//! );
//! ```

mod edge;
mod node;

pub use edge::Edge;
pub use node::{Node, NodeId, NODE_SHAPE};

/// The identifier prefix used by [`GraphBuilder::new`].
pub const DEFAULT_PREFIX: &str = "x";

/// Allocates node identifiers and renders node declarations.
///
/// The builder holds the only mutable state of the crate: a counter that starts at 0
/// and grows by exactly one per [`create_node`](Self::create_node) call. Builders are
/// independent of each other, so separate runs (or tests) never observe each other's
/// identifiers.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    prefix: String,
    counter: usize,
}

impl GraphBuilder {
    /// Creates a builder using the default `"x"` prefix with its counter at 0.
    #[must_use]
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }

    /// Creates a builder whose identifiers start with `prefix` instead of `"x"`.
    ///
    /// The prefix is used verbatim; it is the caller's job to pick one that forms a
    /// valid DOT identifier when followed by digits.
    #[must_use]
    pub fn with_prefix(prefix: &str) -> Self {
        GraphBuilder {
            prefix: prefix.to_string(),
            counter: 0,
        }
    }

    /// Returns the identifier prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns how many identifiers this builder has allocated so far.
    ///
    /// This is also the counter value the next node will receive.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.counter
    }

    /// Declares a new node labelled `label`.
    ///
    /// Takes the current counter value as the node's identifier suffix, then advances
    /// the counter by one. The label is accepted unconditionally and embedded without
    /// escaping.
    ///
    /// # Arguments
    ///
    /// * `label` - The text shown inside the node
    ///
    /// # Returns
    ///
    /// The new [`Node`], carrying both its identifier and its declaration fragment.
    pub fn create_node(&mut self, label: &str) -> Node {
        let id = NodeId::new(&self.prefix, self.counter);
        self.counter += 1;

        log::trace!("declared node {id} with label {label:?}");
        Node::new(id, label)
    }

    /// Renders an edge between two nodes created by a builder.
    ///
    /// Typed counterpart of [`create_child`]; the output is identical.
    #[must_use]
    pub fn create_child(&self, parent: &NodeId, child: &NodeId, options: &str) -> String {
        create_child(parent.as_str(), child.as_str(), options)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders an edge fragment `<parent> -> <child><options>` followed by a newline.
///
/// Pure function: neither identifier is checked, and `options` (usually empty) is
/// appended verbatim.
///
/// # Examples
///
/// ```rust
/// use astdot::graph::create_child;
///
/// assert_eq!(create_child("x1", "x0", ""), "x1 -> x0\n");
/// assert_eq!(create_child("a", "b", " [style=dashed]"), "a -> b [style=dashed]\n");
/// ```
#[must_use]
pub fn create_child(parent: &str, child: &str, options: &str) -> String {
    let edge = Edge::with_options(parent, child, options);
    log::trace!("rendered edge {parent} -> {child}");
    edge.to_string()
}
