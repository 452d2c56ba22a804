use super::*;

#[derive(Clone)]
pub(super) struct Node {
    /// Ordered by key, at most `order - 1` of them
    elements: Vec<Element>,
    /// Empty for a leaf, otherwise exactly `elements.len() + 1` nodes.
    /// Node `i` holds the keys between `elements[i - 1]` and `elements[i]`
    children: Vec<Node>,
}

impl Node {
    /// Build an empty leaf, used as the initial root
    pub(super) fn new() -> Self {
        Node {
            elements: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Build a new node (leaf or internal).
    /// Panics if `children` is neither empty nor one longer than `elements`
    pub(super) fn with_elements_and_children(elements: Vec<Element>, children: Vec<Node>) -> Self {
        assert!(children.is_empty() || children.len() == elements.len() + 1);
        Node { elements, children }
    }

    /// Return the total number of elements in this node
    pub(super) fn len(&self) -> usize {
        self.elements.len()
    }

    /// Return the element at the given index.
    /// Panics if out-of-bounds
    #[cfg(test)]
    pub(super) fn get_element(&self, index: usize) -> &Element {
        &self.elements[index]
    }

    #[cfg(test)]
    pub(super) fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Return whether the node is a leaf
    pub(super) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Return the child at the given index.
    /// Panics if it is a leaf node or out-of-bounds access
    #[cfg(test)]
    pub(super) fn get_child(&self, index: usize) -> &Node {
        &self.children[index]
    }

    pub(super) fn children(&self) -> &[Node] {
        &self.children
    }

    /// Binary search for `key` among the elements of this node.
    /// `Ok(i)` is an exact match at `i`. `Err(i)` is the first element with a greater key
    /// (or `len`), which is also the only child that may contain `key`
    fn lower_bound(&self, key: &str) -> Result<usize, usize> {
        self.elements
            .binary_search_by(|element| element.key().cmp(key))
    }

    /// Look `key` up in the subtree rooted at this node
    pub(super) fn get(&self, key: &str) -> Option<&str> {
        let mut node = self;
        loop {
            match node.lower_bound(key) {
                Ok(index) => return Some(node.elements[index].value()),
                Err(_) if node.is_leaf() => return None,
                Err(index) => node = &node.children[index],
            }
        }
    }

    /// Recursive implementation of `BTree::insert_or_update`.
    /// When this node splits, it will return the median and new right node
    pub(super) fn insert_or_update(
        &mut self,
        key: String,
        value: String,
        order: usize,
    ) -> InsertResult {
        let index = match self.lower_bound(&key) {
            Ok(index) => {
                self.elements[index].set_value(value);
                return InsertResult::Updated;
            }
            Err(index) => index,
        };

        if self.is_leaf() {
            return self.insert_and_split(Element::new(key, value), None, index, order);
        }

        // Recursively insert into the child and absorb a split bubbling up
        match self.children[index].insert_or_update(key, value, order) {
            InsertResult::PendingSplit(median, new_right_node) => {
                self.insert_and_split(median, Some(new_right_node), index, order)
            }
            x => x,
        }
    }

    /// Insert `element` (and the right child that follows it, for internal nodes) at `index`.
    /// If the node is full, it will be split around `order / 2` into (left, median, right).
    /// Self will become left and the other two values will be returned
    fn insert_and_split(
        &mut self,
        element: Element,
        right_child: Option<Node>,
        index: usize,
        order: usize,
    ) -> InsertResult {
        if self.len() < order - 1 {
            self.insert(element, right_child, index);
            return InsertResult::Inserted;
        }

        // Node is full: everything from `middle` on goes to a new right node, then the new
        // element is placed on the side it belongs to
        let middle = order / 2;
        let is_leaf = right_child.is_none();
        let mut right_elements = self.elements.split_off(middle);
        let mut right_children = if is_leaf {
            Vec::new()
        } else {
            self.children.split_off(middle + 1)
        };

        let median = if index <= middle {
            // After the insertion the left side has one element too many: the one now at
            // `middle` is promoted and the child after it opens the right node
            self.insert(element, right_child, index);
            if !is_leaf {
                right_children.insert(0, self.children.remove(middle + 1));
            }
            self.elements.remove(middle)
        } else {
            // The old median is not displaced by the insertion, so it is promoted as is
            let median = right_elements.remove(0);
            right_elements.insert(index - middle - 1, element);
            if let Some(child) = right_child {
                right_children.insert(index - middle, child);
            }
            median
        };

        tracing::trace!(
            median = median.key(),
            leaf = is_leaf,
            left_len = self.len(),
            right_len = right_elements.len(),
            "node split"
        );

        InsertResult::PendingSplit(
            median,
            Node::with_elements_and_children(right_elements, right_children),
        )
    }

    /// Insert `element` (and optional right child) at `index`, without checking capacity.
    /// Elements and children are always shifted together
    fn insert(&mut self, element: Element, right_child: Option<Node>, index: usize) {
        assert!(index <= self.len());

        // If this is a leaf node no child can be inserted.
        // Conversely, in an internal node a child must be inserted
        assert_eq!(self.is_leaf(), right_child.is_none());

        self.elements.insert(index, element);
        if let Some(child) = right_child {
            self.children.insert(index + 1, child);
        }
    }

    /// Render the keys of this node: `{a, b}` for a leaf, `[a, b]` for an internal node
    pub(super) fn debug_string(&self) -> String {
        let (open, close) = if self.is_leaf() { ('{', '}') } else { ('[', ']') };
        let mut result = String::new();
        result.push(open);
        for (i, element) in self.elements.iter().enumerate() {
            if i != 0 {
                result.push_str(", ");
            }
            result.push_str(element.key());
        }
        result.push(close);
        result
    }
}
