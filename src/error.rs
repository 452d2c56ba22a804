use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Splitting needs an odd number of children per node, and at least 3 of them
    #[error("invalid order {0}: must be odd and at least 3")]
    InvalidOrder(usize),
}
