//! Error surface. Traversal exhaustion is not an error: the traversal
//! iterators signal end-of-sequence with `None`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    /// Contract violation: the operation is not defined for the node kind
    /// it was invoked on (e.g. `add_child` on a leaf).
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}

pub type TreeResult<T> = Result<T, TreeError>;
