//! Disjoint-set forest whose nodes live in a caller-owned arena.

use std::{collections::HashMap, fmt::Debug, hash::Hash};

use etrace::some_or;
use typed_arena::Arena;

use crate::{
    config::Config,
    disjoint_set::DisjointSet,
    error::{ForestError, Result},
    partition::Partition,
};

pub type Node<'a, T> = DisjointSet<'a, T>;

pub struct LinkedForest<'a, T> {
    arena: &'a Arena<Node<'a, T>>,
    nodes: HashMap<T, &'a Node<'a, T>>,
    order: Vec<&'a Node<'a, T>>,
    num_sets: usize,
    config: Config,
}

impl<'a, T> LinkedForest<'a, T> {
    #[inline]
    pub fn new(arena: &'a Arena<Node<'a, T>>) -> Self {
        Self::with_config(arena, Config::default())
    }

    pub fn with_config(arena: &'a Arena<Node<'a, T>>, config: Config) -> Self {
        Self {
            arena,
            nodes: HashMap::new(),
            order: vec![],
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
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn parents(&self) -> Vec<(&T, &T)> {
        self.order
            .iter()
            .map(|node| (node.id(), node.parent().id()))
            .collect()
    }

    pub fn roots(&self) -> Vec<&T> {
        self.order
            .iter()
            .filter(|node| node.is_root())
            .map(|node| node.id())
            .collect()
    }
}

impl<'a, T: Hash + Eq + Clone + Debug> LinkedForest<'a, T> {
    pub fn add(&mut self, x: T) -> bool {
        if self.nodes.contains_key(&x) {
            if self.config.report_duplicates {
                tracing::info!("Node {:?} already exists", x);
            } else {
                tracing::debug!("Node {:?} already exists", x);
            }
            return false;
        }
        tracing::debug!("Add {:?}", x);
        let node: &'a Node<'a, T> = self.arena.alloc(DisjointSet::new(x.clone()));
        self.nodes.insert(x, node);
        self.order.push(node);
        self.num_sets += 1;
        true
    }

    #[inline]
    pub fn contains(&self, x: &T) -> bool {
        self.nodes.contains_key(x)
    }

    /// The arena node holding `x`.
    pub fn node(&self, x: &T) -> Result<&'a Node<'a, T>> {
        let node = some_or!(self.nodes.get(x), return Err(ForestError::not_found(x)));
        Ok(*node)
    }

    pub fn find(&mut self, x: &T) -> Result<&T> {
        Ok(self.node(x)?.find_set().id())
    }

    pub fn union(&mut self, x: &T, y: &T) -> Result<bool> {
        let nx = self.node(x)?;
        let ny = self.node(y)?;
        let root = some_or!(nx.union(ny, self.config.linking), return Ok(false));
        self.num_sets -= 1;
        tracing::debug!(
            "Union {:?} and {:?} under {:?} ({} sets left)",
            x,
            y,
            root.id(),
            self.num_sets
        );
        Ok(true)
    }

    pub fn connected(&mut self, x: &T, y: &T) -> Result<bool> {
        let nx = self.node(x)?;
        let ny = self.node(y)?;
        Ok(nx.find_set() == ny.find_set())
    }

    pub fn size_of_set(&mut self, x: &T) -> Result<usize> {
        Ok(self.node(x)?.find_set().size())
    }

    pub fn sets(&mut self) -> Vec<Vec<&T>> {
        let mut groups: HashMap<&T, usize> = HashMap::new();
        let mut sets: Vec<Vec<&T>> = vec![];
        for node in &self.order {
            let root = node.find_set().id();
            let group = *groups.entry(root).or_insert_with(|| {
                sets.push(vec![]);
                sets.len() - 1
            });
            sets[group].push(node.id());
        }
        sets
    }
}

impl<'a, T: Hash + Eq + Clone + Debug> Partition<T> for LinkedForest<'a, T> {
    #[inline]
    fn add(&mut self, x: T) -> bool {
        LinkedForest::add(self, x)
    }

    #[inline]
    fn find(&mut self, x: &T) -> Result<&T> {
        LinkedForest::find(self, x)
    }

    #[inline]
    fn union(&mut self, x: &T, y: &T) -> Result<bool> {
        LinkedForest::union(self, x, y)
    }

    #[inline]
    fn connected(&mut self, x: &T, y: &T) -> Result<bool> {
        LinkedForest::connected(self, x, y)
    }

    #[inline]
    fn num_sets(&self) -> usize {
        self.num_sets
    }

    #[inline]
    fn size_of_set(&mut self, x: &T) -> Result<usize> {
        LinkedForest::size_of_set(self, x)
    }

    #[inline]
    fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    fn contains(&self, x: &T) -> bool {
        self.nodes.contains_key(x)
    }

    #[inline]
    fn parents(&self) -> Vec<(&T, &T)> {
        LinkedForest::parents(self)
    }

    #[inline]
    fn sets(&mut self) -> Vec<Vec<&T>> {
        LinkedForest::sets(self)
    }

    #[inline]
    fn config(&self) -> &Config {
        &self.config
    }
}
