use crate::{config::Config, error::Result};

/// The operations shared by every disjoint-set representation in this crate.
///
/// Every query taking an element fails with
/// [`ForestError::NotFound`](crate::ForestError::NotFound) if the element was
/// never added.
pub trait Partition<T> {
    /// Adds `x` as a singleton set. Returns `false`, changing nothing, if `x`
    /// is already present.
    fn add(&mut self, x: T) -> bool;

    /// Returns the representative of the set containing `x`, compressing the
    /// path from `x` on the way.
    fn find(&mut self, x: &T) -> Result<&T>;

    /// Merges the sets containing `x` and `y`. Returns `true` if they were
    /// distinct.
    fn union(&mut self, x: &T, y: &T) -> Result<bool>;

    fn connected(&mut self, x: &T, y: &T) -> Result<bool>;

    /// Number of distinct sets.
    fn num_sets(&self) -> usize;

    /// Number of elements in the set containing `x`.
    fn size_of_set(&mut self, x: &T) -> Result<usize>;

    /// Number of elements ever added.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, x: &T) -> bool;

    /// Element to parent pairs in insertion order.
    fn parents(&self) -> Vec<(&T, &T)>;

    /// Members of every set, grouped by root.
    fn sets(&mut self) -> Vec<Vec<&T>>;

    fn config(&self) -> &Config;
}
