//! Graph adapter traits and the default adjacency-list backend.
//!
//! The estimator only ever reads the graph, through two capabilities:
//! - [`Graph`]: vertex enumeration and neighbor lookup.
//! - [`GeodesicGraph`]: shortest-path queries and the connectivity check.
//!
//! `GeodesicGraph` has default implementations written against `Graph`, so a backend that can
//! list neighbors gets the rest for free. Backends with better shortest-path machinery can
//! override them.

use std::ops::Range;

use crate::{geodesic, partition};
use crate::{Error, Result};

pub trait Graph {
    fn node_count(&self) -> usize;
    fn neighbors(&self, node: usize) -> Vec<usize>;

    /// Vertex ids, always the dense range `0..node_count()`.
    fn nodes(&self) -> Range<usize> {
        0..self.node_count()
    }

    fn degree(&self, node: usize) -> usize {
        self.neighbors(node).len()
    }
}

/// Shortest-path and connectivity queries over an undirected graph.
pub trait GeodesicGraph: Graph {
    /// All shortest paths from `source` to `target`, each including both endpoints.
    ///
    /// Paths are sorted lexicographically. Unreachable targets yield no paths;
    /// `source == target` yields the single path `[source]`.
    fn shortest_paths(&self, source: usize, target: usize) -> Vec<Vec<usize>> {
        geodesic::all_shortest_paths(self, source, target)
    }

    /// Distinct second vertices over all shortest paths from `source` to `target`, sorted.
    ///
    /// Equivalent to collecting `path[1]` from [`GeodesicGraph::shortest_paths`], without
    /// enumerating the (possibly exponential) path set.
    fn geodesic_neighbors(&self, source: usize, target: usize) -> Vec<usize> {
        geodesic::first_hops(self, source, target)
    }

    /// True iff the graph has exactly one connected component.
    ///
    /// An empty graph has zero components and is not connected.
    fn is_weakly_connected(&self) -> bool {
        partition::component_count(self) == 1
    }
}

/// Undirected graph stored as sorted, deduplicated adjacency lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UndirectedGraph {
    adj: Vec<Vec<usize>>,
}

impl UndirectedGraph {
    /// `n` isolated vertices.
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n],
        }
    }

    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut g = Self::new(n);
        for &(u, v) in edges {
            g.add_edge(u, v)?;
        }
        Ok(g)
    }

    /// Add the undirected edge `{u, v}`. Repeated edges are collapsed.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        let n = self.adj.len();
        if u >= n {
            return Err(Error::IndexOutOfBounds(u));
        }
        if v >= n {
            return Err(Error::IndexOutOfBounds(v));
        }
        insert_sorted(&mut self.adj[u], v);
        insert_sorted(&mut self.adj[v], u);
        Ok(())
    }

    pub fn neighbors_ref(&self, node: usize) -> &[usize] {
        &self.adj[node]
    }

    pub fn edge_count(&self) -> usize {
        let ends: usize = self.adj.iter().map(Vec::len).sum();
        let loops = self
            .adj
            .iter()
            .enumerate()
            .filter(|(u, nbrs)| nbrs.binary_search(u).is_ok())
            .count();
        (ends + loops) / 2
    }
}

fn insert_sorted(list: &mut Vec<usize>, x: usize) {
    if let Err(pos) = list.binary_search(&x) {
        list.insert(pos, x);
    }
}

impl Graph for UndirectedGraph {
    fn node_count(&self) -> usize {
        self.adj.len()
    }
    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.adj[node].clone()
    }
    fn degree(&self, node: usize) -> usize {
        self.adj[node].len()
    }
}

impl GeodesicGraph for UndirectedGraph {}

#[cfg(feature = "petgraph")]
impl<N, E, Ix> Graph for petgraph::Graph<N, E, petgraph::Undirected, Ix>
where
    Ix: petgraph::graph::IndexType,
{
    fn node_count(&self) -> usize {
        self.node_count()
    }
    fn neighbors(&self, node: usize) -> Vec<usize> {
        let mut out: Vec<usize> = self
            .neighbors(petgraph::graph::NodeIndex::new(node))
            .map(|idx| idx.index())
            .collect();
        // petgraph reports parallel edges once per edge.
        out.sort_unstable();
        out.dedup();
        out
    }
}

#[cfg(feature = "petgraph")]
impl<N, E, Ix> GeodesicGraph for petgraph::Graph<N, E, petgraph::Undirected, Ix> where
    Ix: petgraph::graph::IndexType
{
}
