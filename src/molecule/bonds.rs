//! Connectivity between the particles of one molecule.
//!
//! Bonds carry no force; they only decide which particle pairs the renderer
//! joins with a line.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::MoleculeError;

/// Symmetric adjacency over particle indices. No self-loops, no duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondGraph {
    adjacency: Vec<SmallVec<[usize; 4]>>,
}

impl BondGraph {
    /// `n` particles, no bonds.
    pub fn new(n: usize) -> Self {
        Self {
            adjacency: vec![SmallVec::new(); n],
        }
    }

    /// Particle `i` bonded to `i - 1` for every `i > 0`.
    pub fn chain(n: usize) -> Self {
        let mut graph = Self::new(n);
        for i in 1..n {
            graph.link(i - 1, i);
        }
        graph
    }

    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self, MoleculeError> {
        let mut graph = Self::new(n);
        for &(a, b) in edges {
            graph.bond(a, b)?;
        }
        Ok(graph)
    }

    /// Number of particles the graph spans.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Add the bond `a - b`. Adding an existing bond is a no-op.
    pub fn bond(&mut self, a: usize, b: usize) -> Result<(), MoleculeError> {
        if a == b || a >= self.len() || b >= self.len() {
            return Err(MoleculeError::InvalidBond { a, b });
        }
        self.link(a, b);
        Ok(())
    }

    // Callers guarantee a != b and both are in range.
    pub(crate) fn link(&mut self, a: usize, b: usize) {
        if self.contains(a, b) {
            return;
        }
        insert_sorted(&mut self.adjacency[a], b);
        insert_sorted(&mut self.adjacency[b], a);
    }

    pub fn contains(&self, a: usize, b: usize) -> bool {
        self.adjacency
            .get(a)
            .map_or(false, |n| n.binary_search(&b).is_ok())
    }

    pub fn neighbors(&self, i: usize) -> &[usize] {
        self.adjacency.get(i).map_or(&[][..], |n| n.as_slice())
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|n| n.len()).sum::<usize>() / 2
    }

    /// Every bond once as `(i, j)` with `i < j`, ordered by `i` then `j`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(i, n)| {
            n.iter().copied().filter(move |&j| j > i).map(move |j| (i, j))
        })
    }

    /// True when every particle can be reached from particle 0.
    pub fn is_connected(&self) -> bool {
        if self.is_empty() {
            return true;
        }
        let mut visited = vec![false; self.len()];
        let mut stack = vec![0];
        let mut reached = 0;
        while let Some(idx) = stack.pop() {
            if visited[idx] {
                continue;
            }
            visited[idx] = true;
            reached += 1;
            stack.extend(self.adjacency[idx].iter().copied().filter(|&j| !visited[j]));
        }
        reached == self.len()
    }

    /// Connected with exactly `n - 1` bonds, hence acyclic.
    pub fn is_spanning_tree(&self) -> bool {
        !self.is_empty() && self.edge_count() == self.len() - 1 && self.is_connected()
    }
}

fn insert_sorted(list: &mut SmallVec<[usize; 4]>, value: usize) {
    if let Err(pos) = list.binary_search(&value) {
        list.insert(pos, value);
    }
}
