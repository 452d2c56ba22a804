mod element;
mod node;
mod tree;

#[cfg(test)]
pub(crate) mod validate;

pub use element::Element;
pub use tree::BTree;

/// Order used by `BTree::default()`.
/// Splitting assumes the order is odd, so that a full node holds an even number of elements
pub const DEFAULT_ORDER: usize = 11;

/// Smallest order accepted by `BTree::try_new`
pub const MIN_ORDER: usize = 3;

/// Outcome of inserting into a node
enum InsertResult {
    /// The key was already present and only its value changed
    Updated,
    /// A new element was stored and the node still fits
    Inserted,
    /// A new element was stored but the node had to split: the median and the new right
    /// sibling must be absorbed by the parent
    PendingSplit(Element, node::Node),
}
