//! Pre-order flattening for nested tree structures.

/// Implemented by any value that carries a child sequence, so that nested
/// hierarchies (module trees, menu trees) can be enumerated linearly.
///
/// The `has_children` flag is independent of whether the child sequence is
/// empty: traversal descends only when the flag is set, and a node whose flag
/// is set but whose sequence is empty still appears in the output exactly
/// once.
pub trait TreeNode {
    /// Whether traversal should descend into this node's children.
    fn has_children(&self) -> bool;

    /// The node's children, in source order.
    fn children(&self) -> &[Self]
    where
        Self: Sized;
}

/// Flatten the tree rooted at `root` into a pre-order sequence of node
/// references.
///
/// The input must be a finite, acyclic tree; cyclic input recurses without
/// bound. Callers that cannot guarantee acyclicity must not use this.
pub fn flatten<Node: TreeNode>(root: &Node) -> Vec<&Node> {
    let mut nodes = Vec::new();
    collect_nodes(root, &mut nodes);
    nodes
}

/// Accumulate the pre-order sequence of the tree rooted at `root` into a
/// caller-supplied vector. The root is appended before any of its children.
pub fn collect_nodes<'a, Node: TreeNode>(root: &'a Node, nodes: &mut Vec<&'a Node>) {
    nodes.push(root);
    if root.has_children() {
        for child in root.children() {
            collect_nodes(child, nodes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Node {
        label: &'static str,
        has_children: bool,
        children: Vec<Node>,
    }

    impl Node {
        fn leaf(label: &'static str) -> Self {
            Node {
                label,
                has_children: false,
                children: Vec::new(),
            }
        }

        fn branch(label: &'static str, children: Vec<Node>) -> Self {
            Node {
                label,
                has_children: true,
                children,
            }
        }
    }

    impl TreeNode for Node {
        fn has_children(&self) -> bool {
            self.has_children
        }

        fn children(&self) -> &[Self] {
            &self.children
        }
    }

    fn labels(nodes: &[&Node]) -> Vec<&'static str> {
        nodes.iter().map(|node| node.label).collect()
    }

    #[test]
    fn it_visits_every_node_once_in_pre_order() {
        let root = Node::branch(
            "Root",
            vec![
                Node::branch("Admin", vec![Node::leaf("Identity"), Node::leaf("Security")]),
                Node::leaf("Site"),
            ],
        );

        let nodes = flatten(&root);

        assert_eq!(
            labels(&nodes),
            vec!["Root", "Admin", "Identity", "Security", "Site"]
        );
    }

    #[test]
    fn it_includes_interior_nodes_with_empty_child_sequences() {
        let root = Node::branch("Root", vec![Node::branch("Empty", Vec::new())]);

        let nodes = flatten(&root);

        assert_eq!(labels(&nodes), vec!["Root", "Empty"]);
    }

    #[test]
    fn it_does_not_descend_when_the_flag_is_unset() {
        // The flag gates descent even when children are present
        let mut root = Node::branch("Root", vec![Node::leaf("Hidden")]);
        root.has_children = false;

        let nodes = flatten(&root);

        assert_eq!(labels(&nodes), vec!["Root"]);
    }

    #[test]
    fn it_accumulates_into_a_caller_supplied_vector() {
        let first = Node::leaf("First");
        let second = Node::branch("Second", vec![Node::leaf("Third")]);

        let mut nodes = Vec::new();
        collect_nodes(&first, &mut nodes);
        collect_nodes(&second, &mut nodes);

        assert_eq!(labels(&nodes), vec!["First", "Second", "Third"]);
    }
}
