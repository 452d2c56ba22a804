//! Structural checks shared by the test suites
use super::node::Node;
use super::BTree;

/// Panic if any of the tree invariants is broken:
/// - every node holds at most `order - 1` elements, strictly increasing by key
/// - every internal node has one more child than elements
/// - keys of child `i` sit strictly between elements `i - 1` and `i` of the parent
/// - every leaf is at depth `height - 1`
pub(crate) fn assert_invariants(tree: &BTree) {
    let mut len = 0;
    check_node(tree, &tree.root, 0, None, None, &mut len);
    assert_eq!(len, tree.len(), "element count mismatch");
}

fn check_node(
    tree: &BTree,
    node: &Node,
    depth: usize,
    lower: Option<&str>,
    upper: Option<&str>,
    len: &mut usize,
) {
    let elements = node.elements();
    assert!(
        elements.len() <= tree.order() - 1,
        "node {} is over capacity",
        node.debug_string()
    );
    assert!(
        elements.windows(2).all(|w| w[0].key() < w[1].key()),
        "node {} is not sorted",
        node.debug_string()
    );
    for element in elements {
        assert!(lower.map_or(true, |lower| lower < element.key()));
        assert!(upper.map_or(true, |upper| element.key() < upper));
    }
    *len += elements.len();

    if node.is_leaf() {
        assert_eq!(depth + 1, tree.height(), "leaf {} at wrong depth", node.debug_string());
        return;
    }

    assert_eq!(node.children().len(), elements.len() + 1);
    for (i, child) in node.children().iter().enumerate() {
        let child_lower = if i == 0 { lower } else { Some(elements[i - 1].key()) };
        let child_upper = if i == elements.len() { upper } else { Some(elements[i].key()) };
        check_node(tree, child, depth + 1, child_lower, child_upper, len);
    }
}

/// Collect every key with an in-order traversal
pub(crate) fn in_order_keys(tree: &BTree) -> Vec<String> {
    fn walk(node: &Node, keys: &mut Vec<String>) {
        for i in 0..node.len() {
            if !node.is_leaf() {
                walk(node.get_child(i), keys);
            }
            keys.push(node.get_element(i).key().to_owned());
        }
        if !node.is_leaf() {
            walk(node.get_child(node.len()), keys);
        }
    }

    let mut keys = Vec::with_capacity(tree.len());
    walk(&tree.root, &mut keys);
    keys
}
