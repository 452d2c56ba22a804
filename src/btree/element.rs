use std::fmt;

/// A key/value pair stored in a tree node.
/// The key never changes once the element is created, only the value does
#[derive(Clone, PartialEq, Eq)]
pub struct Element {
    key: String,
    value: String,
}

impl Element {
    pub fn new(key: String, value: String) -> Self {
        Element { key, value }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub(super) fn set_value(&mut self, value: String) {
        self.value = value;
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} => {:?}", self.key, self.value)
    }
}
