mod error;
mod heap;
mod priority_queue;
mod tree;

pub use error::HeapError;
pub use heap::VectorHeap;
pub use priority_queue::PriorityQueue;
