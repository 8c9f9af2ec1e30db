//! Node identifiers and node declarations.
//!
//! This module provides [`NodeId`], the textual identifier a [`GraphBuilder`](crate::GraphBuilder)
//! hands out for every node, and [`Node`], which pairs that identifier with the
//! one-line DOT declaration that introduces it.

use std::fmt;

/// The shape every declared node is drawn with.
pub const NODE_SHAPE: &str = "circle";

/// A textual identifier for a node within one generated document.
///
/// A `NodeId` is the builder's identifier prefix followed by the value the builder's
/// counter had when the node was created, e.g. `x0`, `x1`, `x2`. Because the counter
/// only ever moves forward, two identifiers from the same builder never collide.
///
/// # Examples
///
/// ```rust
/// use astdot::GraphBuilder;
///
/// let mut builder = GraphBuilder::new();
/// let first = builder.create_node("-");
/// let second = builder.create_node("+");
///
/// assert_eq!(first.id().as_str(), "x0");
/// assert_eq!(second.id().index(), 1);
/// assert_ne!(first.id(), second.id());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NodeId {
    name: String,
    index: usize,
}

impl NodeId {
    /// Creates a new `NodeId` from a prefix and a counter value.
    ///
    /// Normal usage obtains identifiers from [`GraphBuilder::create_node`](crate::GraphBuilder::create_node);
    /// this constructor exists for tests and for callers assembling fragments by hand.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The identifier prefix, `"x"` for a default builder
    /// * `index` - The counter value the identifier is derived from
    #[must_use]
    pub fn new(prefix: &str, index: usize) -> Self {
        NodeId {
            name: format!("{prefix}{index}"),
            index,
        }
    }

    /// Returns the counter value this identifier was derived from.
    #[must_use]
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the identifier as it appears in the document.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.name)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

/// A declared node: its identifier plus the line of DOT text declaring it.
///
/// The declaration has the form `<id> [label="<label>",shape=circle]` followed by a
/// newline. The label is copied verbatim, so a label containing a double quote yields
/// a malformed declaration; use [`escape_dot`](crate::dot::escape_dot) beforehand if
/// that matters to the caller.
///
/// A `Node` is immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    declaration: String,
}

impl Node {
    /// Declares a node with the given identifier and display label.
    #[must_use]
    pub fn new(id: NodeId, label: &str) -> Self {
        let declaration = format!("{id} [label=\"{label}\",shape={NODE_SHAPE}]\n");
        Node { id, declaration }
    }

    /// Returns the node's identifier.
    #[must_use]
    #[inline]
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// Returns the node's declaration fragment, including its trailing newline.
    #[must_use]
    #[inline]
    pub fn declaration(&self) -> &str {
        &self.declaration
    }

    /// Splits the node into its identifier and declaration fragment.
    #[must_use]
    pub fn into_parts(self) -> (NodeId, String) {
        (self.id, self.declaration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_node_id_formatting() {
        let id = NodeId::new("x", 7);
        assert_eq!(id.to_string(), "x7");
        assert_eq!(id.as_str(), "x7");
        assert_eq!(id.index(), 7);
        assert_eq!(format!("{id:?}"), "NodeId(x7)");
    }

    #[test]
    fn test_node_id_custom_prefix() {
        let id = NodeId::new("node_", 12);
        assert_eq!(id.as_str(), "node_12");
        assert_eq!(id.index(), 12);
    }

    #[test]
    fn test_node_id_hash_and_eq() {
        let mut set = HashSet::new();
        set.insert(NodeId::new("x", 0));
        set.insert(NodeId::new("x", 1));
        set.insert(NodeId::new("x", 0));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_node_declaration() {
        let node = Node::new(NodeId::new("x", 0), "-");
        assert_eq!(node.declaration(), "x0 [label=\"-\",shape=circle]\n");
        assert_eq!(node.id().as_str(), "x0");
    }

    #[test]
    fn test_node_label_is_not_escaped() {
        let node = Node::new(NodeId::new("x", 3), "say \"hi\"");
        assert_eq!(node.declaration(), "x3 [label=\"say \"hi\"\",shape=circle]\n");
    }

    #[test]
    fn test_node_empty_label() {
        let node = Node::new(NodeId::new("x", 1), "");
        assert_eq!(node.declaration(), "x1 [label=\"\",shape=circle]\n");
    }

    #[test]
    fn test_node_into_parts() {
        let (id, declaration) = Node::new(NodeId::new("x", 4), "3").into_parts();
        assert_eq!(id, NodeId::new("x", 4));
        assert_eq!(declaration, "x4 [label=\"3\",shape=circle]\n");
    }
}
