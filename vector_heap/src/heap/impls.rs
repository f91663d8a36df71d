use super::VectorHeap;
use crate::{HeapError, PriorityQueue};

impl<T: Ord> PriorityQueue<T> for VectorHeap<T> {
    fn insert(&mut self, value: T) {
        let leaf = self.tree.push(value);
        self.sift_up(leaf);
    }

    fn peek_min(&self) -> Result<&T, HeapError> {
        if self.tree.is_empty() {
            return Err(HeapError::EmptyContainer);
        }
        Ok(self.tree.value(self.tree.root()))
    }

    fn extract_min(&mut self) -> Result<T, HeapError> {
        let mut min = self.tree.pop().ok_or(HeapError::EmptyContainer)?;
        // the popped leaf takes over the root unless it was the root
        if !self.tree.is_empty() {
            let root = self.tree.root();
            std::mem::swap(&mut min, self.tree.value_mut(root));
            self.sift_down(root);
        }
        Ok(min)
    }

    fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    fn len(&self) -> usize {
        self.tree.len()
    }

    fn clear(&mut self) {
        self.tree.clear();
    }
}

impl<T: Ord> From<Vec<T>> for VectorHeap<T> {
    fn from(values: Vec<T>) -> Self {
        Self::build_from(values)
    }
}

impl<T: Ord> FromIterator<T> for VectorHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build_from(iter)
    }
}
