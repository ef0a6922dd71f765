use std::{cell::Cell, mem};

use crate::error::{Error, Result};

/// Union-find over `0..n` with path compression and union by rank.
///
/// `find` takes `&self`; compression goes through `Cell`s.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<Cell<usize>>,
    // upper bound on tree height, only used to pick the new root
    rank: Vec<u8>,
}

impl DisjointSet {
    pub fn new(n: usize) -> Self {
        log::debug!("disjoint set with {n} singletons");
        Self {
            parent: (0..n).map(Cell::new).collect(),
            rank: vec![0; n],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn find_root(&self, u: usize) -> usize {
        let mut root = u;
        while self.parent[root].get() != root {
            root = self.parent[root].get();
        }
        let mut u = u;
        while u != root {
            u = self.parent[u].replace(root);
        }
        root
    }

    /// Representative of `u`'s set. Every node on the way is relinked
    /// directly to the root.
    pub fn find(&self, u: usize) -> Result<usize> {
        Error::check_index(u, self.len())?;
        Ok(self.find_root(u))
    }

    /// Returns true iff the two sets were previously disjoint.
    pub fn union(&mut self, u: usize, v: usize) -> Result<bool> {
        let mut u = self.find(u)?;
        let mut v = self.find(v)?;
        if u == v {
            return Ok(false);
        }

        if self.rank[u] < self.rank[v] {
            mem::swap(&mut u, &mut v);
        }
        self.parent[v].set(u);
        if self.rank[u] == self.rank[v] {
            self.rank[u] += 1;
        }
        Ok(true)
    }

    pub fn connected(&self, u: usize, v: usize) -> Result<bool> {
        Ok(self.find(u)? == self.find(v)?)
    }

    /// Number of disjoint sets, counted by scanning for roots.
    pub fn count(&self) -> usize {
        (0..self.len())
            .filter(|&u| self.parent[u].get() == u)
            .count()
    }

    /// Makes `u` its own singleton root again.
    ///
    /// Only `u`'s own link is reset. If `u` was the root of a larger set,
    /// the other members still resolve to `u` and stay connected to it.
    pub fn make_set(&mut self, u: usize) -> Result<()> {
        Error::check_index(u, self.len())?;
        let prev = self.parent[u].replace(u);
        if prev != u {
            log::trace!("make_set({u}) detached it from parent {prev}");
        }
        self.rank[u] = 0;
        Ok(())
    }

    /// Number of elements in `u`'s set.
    pub fn size_of(&self, u: usize) -> Result<usize> {
        let root = self.find(u)?;
        Ok((0..self.len())
            .filter(|&v| self.find_root(v) == root)
            .count())
    }

    /// Members of every set, each sorted, ordered by smallest member.
    pub fn groups(&self) -> Vec<Vec<usize>> {
        let mut by_root: Vec<Vec<usize>> = vec![Vec::new(); self.len()];
        for u in 0..self.len() {
            by_root[self.find_root(u)].push(u);
        }
        by_root.retain(|group| !group.is_empty());
        by_root.sort_unstable_by_key(|group| group[0]);
        by_root
    }
}
