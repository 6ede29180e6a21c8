use std::cell::Cell;

use crate::config::Linking;

/// A node of a pointer-linked disjoint-set forest. Nodes are meant to live in
/// an arena so that parent links can be plain shared references.
#[derive(Debug)]
pub struct DisjointSet<'a, T> {
    id: T,
    parent: Cell<Option<&'a DisjointSet<'a, T>>>,
    /// Only valid for roots.
    size: Cell<usize>,
}

impl<T> PartialEq for DisjointSet<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl<T> Eq for DisjointSet<'_, T> {}

impl<'a, T> DisjointSet<'a, T> {
    #[inline]
    pub fn new(id: T) -> Self {
        DisjointSet {
            id,
            parent: Cell::new(None),
            size: Cell::new(1),
        }
    }

    #[inline]
    pub fn id(&self) -> &T {
        &self.id
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.get().is_none()
    }

    /// The node this one points at, itself for roots.
    #[inline]
    pub fn parent(&'a self) -> &'a Self {
        self.parent.get().unwrap_or(self)
    }

    #[inline]
    pub fn size(&'a self) -> usize {
        self.find_root().size.get()
    }

    /// Walks up to the root without touching any links.
    pub fn find_root(&'a self) -> &'a Self {
        let mut node = self;
        while let Some(parent) = node.parent.get() {
            node = parent;
        }
        node
    }

    /// Finds the root and re-points every node on the way directly at it.
    pub fn find_set(&'a self) -> &'a Self {
        let root = self.find_root();
        let mut node = self;
        while let Some(parent) = node.parent.get() {
            if parent != root {
                node.parent.set(Some(root));
            }
            node = parent;
        }
        root
    }

    /// Merges the sets of `self` and `other`, returning the surviving root, or
    /// `None` if both were already in the same set.
    pub fn union(&'a self, other: &'a Self, linking: Linking) -> Option<&'a Self> {
        let this = self.find_set();
        let that = other.find_set();
        if this == that {
            return None;
        }
        Some(this.link(that, linking))
    }

    fn link(&'a self, other: &'a Self, linking: Linking) -> &'a Self {
        let (child, root) = if linking.first_under_second(self.size.get(), other.size.get()) {
            (self, other)
        } else {
            (other, self)
        };
        child.parent.set(Some(root));
        root.size.set(root.size.get() + child.size.get());
        root
    }
}
