//! Disjoint-set forest over arbitrary hashable elements.
//!
//! Each element is given a dense slot when it is added; `parent` and `size`
//! are plain vectors indexed by slot, and a hash map resolves elements to
//! their slots. Slots are never reused since elements are never removed.

use std::{collections::HashMap, fmt::Debug, hash::Hash};

use etrace::some_or;

use crate::{
    config::Config,
    error::{ForestError, Result},
    partition::Partition,
};

#[derive(Debug, Clone)]
pub struct DisjointSetForest<T> {
    index: HashMap<T, usize>,
    elems: Vec<T>,
    parent: Vec<usize>,
    /// Only valid for roots.
    size: Vec<usize>,
    num_sets: usize,
    config: Config,
}

impl<T> Default for DisjointSetForest<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DisjointSetForest<T> {
    #[inline]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            index: HashMap::new(),
            elems: vec![],
            parent: vec![],
            size: vec![],
            num_sets: 0,
            config,
        }
    }

    #[inline]
    pub fn num_sets(&self) -> usize {
        self.num_sets
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Locates the root of `i` without mutation, then re-points every slot on
    /// the path directly at it.
    fn find_slot(&mut self, mut i: usize) -> usize {
        let root = self.root_slot(i);
        let mut compressed = 0;
        while i != root {
            let next = self.parent[i];
            if next != root {
                self.parent[i] = root;
                compressed += 1;
            }
            i = next;
        }
        if compressed > 0 {
            tracing::trace!("compressed {} slots onto {}", compressed, root);
        }
        root
    }

    fn root_slot(&self, mut i: usize) -> usize {
        while self.parent[i] != i {
            i = self.parent[i];
        }
        i
    }

    /// Element to parent pairs in insertion order.
    pub fn parents(&self) -> Vec<(&T, &T)> {
        self.parent
            .iter()
            .enumerate()
            .map(|(i, p)| (&self.elems[i], &self.elems[*p]))
            .collect()
    }

    /// Current representatives in insertion order.
    pub fn roots(&self) -> Vec<&T> {
        self.parent
            .iter()
            .enumerate()
            .filter_map(|(i, p)| if i == *p { Some(&self.elems[i]) } else { None })
            .collect()
    }

    /// Members of every set. Sets are ordered by their earliest added member
    /// and members by insertion order.
    pub fn sets(&mut self) -> Vec<Vec<&T>> {
        let roots: Vec<_> = (0..self.elems.len()).map(|i| self.find_slot(i)).collect();
        let mut groups: HashMap<usize, usize> = HashMap::new();
        let mut sets: Vec<Vec<&T>> = vec![];
        for (i, root) in roots.into_iter().enumerate() {
            let group = *groups.entry(root).or_insert_with(|| {
                sets.push(vec![]);
                sets.len() - 1
            });
            sets[group].push(&self.elems[i]);
        }
        sets
    }
}

impl<T: Hash + Eq + Clone + Debug> DisjointSetForest<T> {
    /// Creates a forest whose elements are `elems`, each in its own set.
    pub fn from_elems<I: IntoIterator<Item = T>>(elems: I, config: Config) -> Self {
        let mut forest = Self::with_config(config);
        for x in elems {
            forest.add(x);
        }
        forest
    }

    pub fn add(&mut self, x: T) -> bool {
        if self.index.contains_key(&x) {
            if self.config.report_duplicates {
                tracing::info!("Node {:?} already exists", x);
            } else {
                tracing::debug!("Node {:?} already exists", x);
            }
            return false;
        }
        let i = self.elems.len();
        tracing::debug!("Add {:?} at slot {}", x, i);
        self.index.insert(x.clone(), i);
        self.elems.push(x);
        self.parent.push(i);
        self.size.push(1);
        self.num_sets += 1;
        true
    }

    #[inline]
    pub fn contains(&self, x: &T) -> bool {
        self.index.contains_key(x)
    }

    #[inline]
    fn slot(&self, x: &T) -> Result<usize> {
        let i = some_or!(self.index.get(x), return Err(ForestError::not_found(x)));
        Ok(*i)
    }

    pub fn find(&mut self, x: &T) -> Result<&T> {
        let i = self.slot(x)?;
        let root = self.find_slot(i);
        Ok(&self.elems[root])
    }

    /// Like [`find`](Self::find) but leaves the forest untouched.
    pub fn root_of(&self, x: &T) -> Result<&T> {
        let i = self.slot(x)?;
        Ok(&self.elems[self.root_slot(i)])
    }

    pub fn union(&mut self, x: &T, y: &T) -> Result<bool> {
        let i = self.slot(x)?;
        let j = self.slot(y)?;
        let rx = self.find_slot(i);
        let ry = self.find_slot(j);
        if rx == ry {
            return Ok(false);
        }

        let (child, root) = if self
            .config
            .linking
            .first_under_second(self.size[rx], self.size[ry])
        {
            (rx, ry)
        } else {
            (ry, rx)
        };
        self.parent[child] = root;
        self.size[root] += self.size[child];
        self.num_sets -= 1;
        tracing::debug!(
            "Union {:?} under {:?} ({} sets left)",
            self.elems[child],
            self.elems[root],
            self.num_sets
        );
        Ok(true)
    }

    pub fn connected(&mut self, x: &T, y: &T) -> Result<bool> {
        let i = self.slot(x)?;
        let j = self.slot(y)?;
        Ok(self.find_slot(i) == self.find_slot(j))
    }

    pub fn size_of_set(&mut self, x: &T) -> Result<usize> {
        let i = self.slot(x)?;
        let root = self.find_slot(i);
        Ok(self.size[root])
    }

    /// Members of the set containing `x`, in insertion order.
    pub fn members(&mut self, x: &T) -> Result<Vec<&T>> {
        let i = self.slot(x)?;
        let root = self.find_slot(i);
        let roots: Vec<_> = (0..self.elems.len()).map(|j| self.find_slot(j)).collect();
        Ok(roots
            .into_iter()
            .enumerate()
            .filter_map(|(j, r)| if r == root { Some(&self.elems[j]) } else { None })
            .collect())
    }
}

impl<T: Hash + Eq + Clone + Debug> Partition<T> for DisjointSetForest<T> {
    #[inline]
    fn add(&mut self, x: T) -> bool {
        DisjointSetForest::add(self, x)
    }

    #[inline]
    fn find(&mut self, x: &T) -> Result<&T> {
        DisjointSetForest::find(self, x)
    }

    #[inline]
    fn union(&mut self, x: &T, y: &T) -> Result<bool> {
        DisjointSetForest::union(self, x, y)
    }

    #[inline]
    fn connected(&mut self, x: &T, y: &T) -> Result<bool> {
        DisjointSetForest::connected(self, x, y)
    }

    #[inline]
    fn num_sets(&self) -> usize {
        self.num_sets
    }

    #[inline]
    fn size_of_set(&mut self, x: &T) -> Result<usize> {
        DisjointSetForest::size_of_set(self, x)
    }

    #[inline]
    fn len(&self) -> usize {
        self.elems.len()
    }

    #[inline]
    fn contains(&self, x: &T) -> bool {
        self.index.contains_key(x)
    }

    #[inline]
    fn parents(&self) -> Vec<(&T, &T)> {
        DisjointSetForest::parents(self)
    }

    #[inline]
    fn sets(&mut self) -> Vec<Vec<&T>> {
        DisjointSetForest::sets(self)
    }

    #[inline]
    fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests;
