use super::node::Node;
use super::*;
use crate::{Error, Result};
use std::collections::VecDeque;
use std::fmt;

/// An ordered index from string keys to string values.
///
/// Every node holds at most `order - 1` elements and every internal node has one more child
/// than elements. All leaves are at the same depth: the tree only grows in height when a
/// split reaches the root.
#[derive(Clone)]
pub struct BTree {
    pub(super) root: Node,
    order: usize,
    len: usize,
    height: usize,
}

impl BTree {
    /// Create an empty tree.
    /// `order` is the maximum number of children of a node and must be odd and at least 3.
    /// This is not checked in release builds, see `try_new` for a checked constructor
    pub fn new(order: usize) -> Self {
        debug_assert!(is_valid_order(order), "invalid order {}", order);
        BTree {
            root: Node::new(),
            order,
            len: 0,
            height: 1,
        }
    }

    /// Create an empty tree, rejecting even orders and orders smaller than 3
    pub fn try_new(order: usize) -> Result<Self> {
        if !is_valid_order(order) {
            return Err(Error::InvalidOrder(order));
        }
        Ok(BTree::new(order))
    }

    /// Insert a new key or overwrite the value of an existing one.
    /// Updating an existing key never changes the shape of the tree
    pub fn insert_or_update<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        // Delegate logic to root node
        match self.root.insert_or_update(key.into(), value.into(), self.order) {
            InsertResult::Updated => {}
            InsertResult::Inserted => self.len += 1,
            InsertResult::PendingSplit(median, right) => {
                self.len += 1;
                self.grow_root(median, right);
            }
        }
    }

    /// Return the value stored for `key`, if any
    pub fn get(&self, key: &str) -> Option<&str> {
        self.root.get(key)
    }

    /// Removal is not supported: this always returns `false` and leaves the tree untouched
    pub fn remove(&mut self, _key: &str) -> bool {
        false
    }

    /// Return the number of distinct keys in the tree
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return the number of levels, 1 for a tree made of only its root
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Render the tree level by level, one line per depth. Leaves are written as `{a, b}`,
    /// internal nodes as `[a, b]` and each node is followed by two spaces
    pub fn debug_string(&self) -> String {
        let mut result = String::new();
        let mut nodes = VecDeque::new();
        nodes.push_back((&self.root, 0));
        let mut current_level = 0;

        while let Some((node, level)) = nodes.pop_front() {
            if level > current_level {
                result.push('\n');
                current_level = level;
            }
            result.push_str(&node.debug_string());
            result.push_str("  ");
            nodes.extend(node.children().iter().map(|child| (child, level + 1)));
        }

        result
    }

    /// Splitting reached the root: build a new root over the old one and its new sibling
    fn grow_root(&mut self, median: Element, right: Node) {
        let prev_root = std::mem::replace(&mut self.root, Node::new());
        self.root = Node::with_elements_and_children(vec![median], vec![prev_root, right]);
        self.height += 1;
        tracing::debug!(height = self.height, len = self.len, "new root");
    }
}

impl Default for BTree {
    fn default() -> Self {
        BTree::new(DEFAULT_ORDER)
    }
}

impl fmt::Display for BTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.debug_string())
    }
}

impl fmt::Debug for BTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BTree")
            .field("order", &self.order)
            .field("len", &self.len)
            .field("height", &self.height)
            .finish()
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for BTree {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert_or_update(key, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> std::iter::FromIterator<(K, V)> for BTree {
    /// Create a tree of `DEFAULT_ORDER` from key/value pairs. Later pairs win over earlier
    /// ones with the same key
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = BTree::default();
        tree.extend(iter);
        tree
    }
}

fn is_valid_order(order: usize) -> bool {
    order >= MIN_ORDER && order % 2 == 1
}
