pub mod error;
pub mod heap;

pub use error::{HeapError, Result};
pub use heap::BinaryHeap;
