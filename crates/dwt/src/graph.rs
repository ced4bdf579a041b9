//! Small undirected multigraphs and the isomorphism-aware graph store.
//!
//! Purpose
//! - Represent the glued graphs (loops and parallel edges allowed) and
//!   decide, exactly, whether a newly built graph is combinatorially new.
//!
//! Why this design
//! - Isomorphism is tested by adjacency-matrix equality: inserting a graph
//!   stores the matrix of every vertex permutation, so a membership query
//!   only evaluates its own fixed order. The factorial insertion cost is the
//!   accepted ceiling for the graph sizes in scope; queries stay O(1)
//!   amortized and insertions are rare (only genuinely new graphs).
//! - Vertex sets and edge tables are ordered maps, so matrices and
//!   discovery output are deterministic across runs.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use itertools::Itertools;

/// Adjacency matrix under a fixed vertex order; the unit of comparison for
/// isomorphism testing.
pub type AdjMatrix = Vec<Vec<u32>>;

/// Undirected multigraph over an explicit vertex set.
///
/// Loops and parallel edges are permitted; vertices exist independently of
/// edges, so isolated vertices still show up in the matrix.
#[derive(Clone, Debug)]
pub struct Graph<V> {
    verts: BTreeSet<V>,
    /// Multiplicity per unordered pair, keyed with endpoints in order.
    edges: BTreeMap<(V, V), u32>,
}

impl<V: Clone + Ord> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Ord> Graph<V> {
    pub fn new() -> Self {
        Self { verts: BTreeSet::new(), edges: BTreeMap::new() }
    }

    /// Add a vertex without edges.
    pub fn add_node(&mut self, v: V) {
        self.verts.insert(v);
    }

    /// Add one undirected edge; `v == w` adds a loop.
    pub fn add_edge(&mut self, v: V, w: V) {
        self.verts.insert(v.clone());
        self.verts.insert(w.clone());
        let key = if v <= w { (v, w) } else { (w, v) };
        *self.edges.entry(key).or_insert(0) += 1;
    }

    /// Vertices in sorted order.
    pub fn vertices(&self) -> Vec<V> {
        self.verts.iter().cloned().collect()
    }

    /// Total number of edges, loops counted once.
    pub fn edge_count(&self) -> u32 {
        self.edges.values().sum()
    }

    /// Adjacency entry for `(v, w)`: the edge multiplicity, with a loop
    /// contributing 2 to its diagonal entry.
    pub fn multiplicity(&self, v: &V, w: &V) -> u32 {
        let key = if v <= w { (v.clone(), w.clone()) } else { (w.clone(), v.clone()) };
        let m = self.edges.get(&key).copied().unwrap_or(0);
        if v == w {
            2 * m
        } else {
            m
        }
    }

    /// Adjacency matrix under the given vertex order.
    pub fn adj_mat(&self, order: &[V]) -> AdjMatrix {
        order
            .iter()
            .map(|v| order.iter().map(|w| self.multiplicity(v, w)).collect())
            .collect()
    }

    /// Adjacency matrix under the graph's own sorted vertex order.
    pub fn adj_mat_sorted(&self) -> AdjMatrix {
        self.adj_mat(&self.vertices())
    }
}

/// Deduplicating store of graphs up to relabeling (isomorphism).
///
/// Also serves as the membership oracle for the fixed target set: queries
/// may use a different vertex type than insertions, since adjacency
/// matrices are the common currency.
#[derive(Debug, Default)]
pub struct GraphBag {
    keys: HashMap<AdjMatrix, usize>,
    len: usize,
}

impl GraphBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of members (not stored matrices).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insertion index of the member isomorphic to `g`, if any.
    pub fn index_of<V: Clone + Ord>(&self, g: &Graph<V>) -> Option<usize> {
        self.keys.get(&g.adj_mat_sorted()).copied()
    }

    pub fn contains<V: Clone + Ord>(&self, g: &Graph<V>) -> bool {
        self.index_of(g).is_some()
    }

    /// Add `g` unless an isomorphic member already exists; returns whether
    /// `g` was new. Stores one matrix per vertex permutation of `g`, so
    /// later queries need only their own fixed order.
    pub fn insert<V: Clone + Ord>(&mut self, g: &Graph<V>) -> bool {
        if self.contains(g) {
            return false;
        }
        let verts = g.vertices();
        let n = verts.len();
        for perm in verts.into_iter().permutations(n) {
            self.keys.insert(g.adj_mat(&perm), self.len);
        }
        self.len += 1;
        true
    }
}
