
pub mod btree;

mod error;

#[cfg(any(test, feature = "key-generator"))]
pub mod key_generator;

pub use btree::{BTree, Element, DEFAULT_ORDER};
pub use error::{Error, Result};
