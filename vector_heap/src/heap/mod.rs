mod impls;

use super::tree::Tree;

/// A binary min-heap stored in a growable array.
///
/// The smallest element under `Ord` sits at the root. Equal elements come
/// out in no particular order.
#[derive(Debug, Clone)]
pub struct VectorHeap<T: Ord> {
    tree: Tree<T>,
}

impl<T: Ord> VectorHeap<T> {
    pub fn new() -> Self {
        Self { tree: Tree::new() }
    }

    /// Builds a heap over all items at once in linear time.
    pub fn build_from<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut heap = Self {
            tree: Tree::from_nodes(items.into_iter().collect()),
        };
        heap.heapify();
        heap
    }

    // bottom-up: every subtree below `node` is already a heap when it is sifted
    fn heapify(&mut self) {
        let Some(last_parent) = self.tree.last().and_then(|last| self.tree.parent(last)) else {
            return;
        };
        for node in (self.tree.root()..=last_parent).rev() {
            self.sift_down(node);
        }
    }

    fn sift_up(&mut self, mut node: usize) {
        while let Some(parent) = self.tree.parent(node) {
            if self.tree.value(node) >= self.tree.value(parent) {
                break;
            }
            self.tree.swap(node, parent);
            node = parent;
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        loop {
            let child = match self.tree.children(node) {
                (None, _) => break,
                (Some(left), None) => left,
                (Some(left), Some(right)) => {
                    if self.tree.value(right) < self.tree.value(left) {
                        right
                    } else {
                        left
                    }
                }
            };
            if self.tree.value(node) <= self.tree.value(child) {
                break;
            }
            self.tree.swap(node, child);
            node = child;
        }
    }
}

impl<T: Ord> Default for VectorHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
