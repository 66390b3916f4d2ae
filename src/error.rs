use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The operation needs at least one element.
    #[error("cannot {operation} from an empty heap")]
    EmptyStructure { operation: &'static str },

    /// The node at `index` has no children in a heap of `len` elements.
    #[error("index {index} has no children in a heap of {len} elements")]
    InvalidIndex { index: usize, len: usize },

    /// Reported by `validate` for the lowest index that breaks heap order.
    #[error("element {value} at index {index} is smaller than its parent {parent}")]
    HeapInvariantViolation {
        index: usize,
        value: String,
        parent: String,
    },
}

pub type Result<T> = std::result::Result<T, HeapError>;
