enum TreeDir {
    Left,
    Right,
}

// implicit complete binary tree laid out breadth-first in a vec
#[derive(Debug, Clone)]
pub struct Tree<T> {
    nodes: Vec<T>,
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Self { nodes: vec![] }
    }

    pub fn from_nodes(nodes: Vec<T>) -> Self {
        Self { nodes }
    }

    pub fn parent(&self, node: usize) -> Option<usize> {
        if node == self.root() {
            None
        } else {
            Some((node - 1) / 2)
        }
    }

    fn child(&self, node: usize, dir: TreeDir) -> Option<usize> {
        let child = match dir {
            TreeDir::Left => 2 * node + 1,
            TreeDir::Right => 2 * node + 2,
        };
        if child < self.nodes.len() {
            Some(child)
        } else {
            None
        }
    }

    pub fn children(&self, node: usize) -> (Option<usize>, Option<usize>) {
        (
            self.child(node, TreeDir::Left),
            self.child(node, TreeDir::Right),
        )
    }

    pub fn root(&self) -> usize {
        0
    }

    // None while the tree is empty
    pub fn last(&self) -> Option<usize> {
        self.nodes.len().checked_sub(1)
    }

    pub fn value(&self, node: usize) -> &T {
        &self.nodes[node]
    }

    pub fn value_mut(&mut self, node: usize) -> &mut T {
        &mut self.nodes[node]
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.nodes.swap(a, b);
    }

    pub fn push(&mut self, value: T) -> usize {
        self.nodes.push(value);
        self.nodes.len() - 1
    }

    pub fn pop(&mut self) -> Option<T> {
        self.nodes.pop()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    #[cfg(test)]
    pub fn nodes(&self) -> &[T] {
        &self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_arithmetic() {
        let tree = Tree::from_nodes(vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(tree.parent(0), None);
        assert_eq!(tree.parent(1), Some(0));
        assert_eq!(tree.parent(2), Some(0));
        assert_eq!(tree.parent(5), Some(2));
        assert_eq!(tree.children(0), (Some(1), Some(2)));
        assert_eq!(tree.children(2), (Some(5), None));
        assert_eq!(tree.children(3), (None, None));
        assert_eq!(tree.last(), Some(5));
    }

    #[test]
    fn empty_tree_has_no_last_node() {
        let tree: Tree<u32> = Tree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.last(), None);
        assert_eq!(tree.children(0), (None, None));
    }
}
