use super::HeapError;

/// A container that always hands out its smallest element first.
///
/// Callers only rely on this contract, so the array-backed [`VectorHeap`]
/// can be swapped for another backing structure.
///
/// [`VectorHeap`]: crate::VectorHeap
pub trait PriorityQueue<T> {
    fn insert(&mut self, value: T);

    /// Returns the smallest element without removing it.
    fn peek_min(&self) -> Result<&T, HeapError>;

    /// Removes and returns the smallest element.
    fn extract_min(&mut self) -> Result<T, HeapError>;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;

    fn clear(&mut self);
}
