//! Breadth-first shortest-path queries (unweighted).
//!
//! These back the default methods of [`crate::GeodesicGraph`].

use std::collections::VecDeque;

use crate::graph::{GeodesicGraph, Graph};

const UNSEEN: usize = usize::MAX;

/// Hop distances from `source` to every vertex; `None` for unreachable vertices.
pub fn bfs_distances<G: Graph + ?Sized>(graph: &G, source: usize) -> Vec<Option<usize>> {
    let n = graph.node_count();
    let mut dist = vec![None; n];
    if source >= n {
        return dist;
    }
    dist[source] = Some(0);
    let mut queue = VecDeque::from([source]);
    while let Some(u) = queue.pop_front() {
        let du = dist[u].unwrap_or(0);
        for v in graph.neighbors(u) {
            if v < n && dist[v].is_none() {
                dist[v] = Some(du + 1);
                queue.push_back(v);
            }
        }
    }
    dist
}

/// Distinct first hops on shortest paths from `source` to `target`, sorted.
///
/// Runs BFS outward from `target` and stops as soon as `source` is labelled: at that point
/// every vertex one layer closer to `target` is already labelled, so the first hops are the
/// neighbors of `source` at distance `d(source, target) - 1`.
pub fn first_hops<G: Graph + ?Sized>(graph: &G, source: usize, target: usize) -> Vec<usize> {
    let n = graph.node_count();
    if source >= n || target >= n || source == target {
        return Vec::new();
    }

    let mut dist = vec![UNSEEN; n];
    dist[target] = 0;
    let mut queue = VecDeque::from([target]);
    'bfs: while let Some(u) = queue.pop_front() {
        for v in graph.neighbors(u) {
            if v < n && dist[v] == UNSEEN {
                dist[v] = dist[u] + 1;
                if v == source {
                    break 'bfs;
                }
                queue.push_back(v);
            }
        }
    }

    let d = dist[source];
    if d == UNSEEN {
        return Vec::new();
    }
    let mut hops: Vec<usize> = graph
        .neighbors(source)
        .into_iter()
        .filter(|&w| w < n && dist[w] == d - 1)
        .collect();
    hops.sort_unstable();
    hops.dedup();
    hops
}

/// Every shortest path from `source` to `target`, endpoints included, sorted.
///
/// The number of shortest paths can grow exponentially with graph size; prefer
/// [`first_hops`] when only the next step matters.
pub fn all_shortest_paths<G: Graph + ?Sized>(
    graph: &G,
    source: usize,
    target: usize,
) -> Vec<Vec<usize>> {
    let n = graph.node_count();
    if source >= n || target >= n {
        return Vec::new();
    }
    if source == target {
        return vec![vec![source]];
    }

    // Forward BFS from source, recording shortest-path predecessors.
    let mut dist = vec![UNSEEN; n];
    let mut pred: Vec<Vec<usize>> = vec![Vec::new(); n];
    dist[source] = 0;
    let mut queue = VecDeque::from([source]);
    while let Some(u) = queue.pop_front() {
        if dist[target] != UNSEEN && dist[u] >= dist[target] {
            break;
        }
        for v in graph.neighbors(u) {
            if v >= n {
                continue;
            }
            if dist[v] == UNSEEN {
                dist[v] = dist[u] + 1;
                queue.push_back(v);
            }
            if dist[v] == dist[u] + 1 && !pred[v].contains(&u) {
                pred[v].push(u);
            }
        }
    }
    if dist[target] == UNSEEN {
        return Vec::new();
    }

    // Walk the predecessor DAG back from target.
    let mut paths = Vec::new();
    let mut stack: Vec<(usize, Vec<usize>)> = vec![(target, vec![target])];
    while let Some((v, suffix)) = stack.pop() {
        if v == source {
            let mut path = suffix;
            path.reverse();
            paths.push(path);
            continue;
        }
        for &p in &pred[v] {
            let mut next = suffix.clone();
            next.push(p);
            stack.push((p, next));
        }
    }
    paths.sort();
    paths
}

/// A graph view with hop distances to one fixed target precomputed.
///
/// Every step of a walk asks for the geodesic neighbors towards the same end vertex, so the
/// BFS is done once here and each query is `O(degree)`. Queries for any other target fall
/// through to the wrapped graph.
#[derive(Debug)]
pub struct TargetDistances<'a, G: ?Sized> {
    graph: &'a G,
    target: usize,
    dist: Vec<Option<usize>>,
}

impl<'a, G: GeodesicGraph + ?Sized> TargetDistances<'a, G> {
    pub fn new(graph: &'a G, target: usize) -> Self {
        Self {
            graph,
            target,
            dist: bfs_distances(graph, target),
        }
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// Hop distance from `node` to the target; `None` if unreachable or out of range.
    pub fn distance(&self, node: usize) -> Option<usize> {
        self.dist.get(node).copied().flatten()
    }
}

impl<G: GeodesicGraph + ?Sized> Graph for TargetDistances<'_, G> {
    fn node_count(&self) -> usize {
        self.graph.node_count()
    }
    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.graph.neighbors(node)
    }
    fn degree(&self, node: usize) -> usize {
        self.graph.degree(node)
    }
}

impl<G: GeodesicGraph + ?Sized> GeodesicGraph for TargetDistances<'_, G> {
    fn shortest_paths(&self, source: usize, target: usize) -> Vec<Vec<usize>> {
        self.graph.shortest_paths(source, target)
    }

    fn geodesic_neighbors(&self, source: usize, target: usize) -> Vec<usize> {
        if target != self.target {
            return self.graph.geodesic_neighbors(source, target);
        }
        let d = match self.distance(source) {
            Some(d) if d > 0 => d,
            _ => return Vec::new(),
        };
        let mut hops: Vec<usize> = self
            .graph
            .neighbors(source)
            .into_iter()
            .filter(|&w| self.distance(w) == Some(d - 1))
            .collect();
        hops.sort_unstable();
        hops.dedup();
        hops
    }

    fn is_weakly_connected(&self) -> bool {
        self.graph.is_weakly_connected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UndirectedGraph;
    use proptest::prelude::*;

    fn cycle(n: usize) -> UndirectedGraph {
        let edges: Vec<(usize, usize)> = (0..n).map(|i| (i, (i + 1) % n)).collect();
        UndirectedGraph::from_edges(n, &edges).unwrap()
    }

    #[test]
    fn square_has_two_shortest_paths_across() {
        let g = cycle(4);
        let paths = all_shortest_paths(&g, 0, 2);
        assert_eq!(paths, vec![vec![0, 1, 2], vec![0, 3, 2]]);
        assert_eq!(first_hops(&g, 0, 2), vec![1, 3]);
    }

    #[test]
    fn adjacent_vertices_have_direct_path_only() {
        let g = cycle(5);
        assert_eq!(all_shortest_paths(&g, 0, 1), vec![vec![0, 1]]);
        assert_eq!(first_hops(&g, 0, 1), vec![1]);
    }

    #[test]
    fn unreachable_target_has_no_paths() {
        let g = UndirectedGraph::from_edges(4, &[(0, 1), (2, 3)]).unwrap();
        assert!(all_shortest_paths(&g, 0, 3).is_empty());
        assert!(first_hops(&g, 0, 3).is_empty());
        assert_eq!(bfs_distances(&g, 0), vec![Some(0), Some(1), None, None]);
    }

    #[test]
    fn same_vertex_is_trivial_path() {
        let g = cycle(3);
        assert_eq!(all_shortest_paths(&g, 1, 1), vec![vec![1]]);
        assert!(first_hops(&g, 1, 1).is_empty());
    }

    #[test]
    fn target_distances_delegate_other_targets() {
        let g = cycle(6);
        let view = TargetDistances::new(&g, 3);
        assert_eq!(view.target(), 3);
        assert_eq!(view.distance(0), Some(3));
        assert_eq!(view.distance(9), None);
        assert_eq!(view.geodesic_neighbors(0, 3), vec![1, 5]);
        assert_eq!(view.geodesic_neighbors(0, 2), vec![1]);
        assert!(view.geodesic_neighbors(3, 3).is_empty());
        assert!(view.is_weakly_connected());
    }

    proptest! {
        #[test]
        fn prop_target_distances_match_first_hops(
            n in 2usize..9,
            edges in proptest::collection::vec((0usize..9, 0usize..9), 0..20),
            t in 0usize..9,
        ) {
            let mut g = UndirectedGraph::new(n);
            for (u, v) in edges {
                if u < n && v < n {
                    g.add_edge(u, v).unwrap();
                }
            }
            let t = t % n;
            let view = TargetDistances::new(&g, t);
            for s in 0..n {
                prop_assert_eq!(view.geodesic_neighbors(s, t), first_hops(&g, s, t));
            }
        }

        #[test]
        fn prop_first_hops_match_path_enumeration(
            n in 2usize..9,
            edges in proptest::collection::vec((0usize..9, 0usize..9), 0..20),
            s in 0usize..9,
            t in 0usize..9,
        ) {
            let mut g = UndirectedGraph::new(n);
            for (u, v) in edges {
                if u < n && v < n {
                    g.add_edge(u, v).unwrap();
                }
            }
            let (s, t) = (s % n, t % n);
            prop_assume!(s != t);

            let paths = all_shortest_paths(&g, s, t);
            let mut expected: Vec<usize> = paths.iter().map(|p| p[1]).collect();
            expected.sort_unstable();
            expected.dedup();
            prop_assert_eq!(first_hops(&g, s, t), expected);

            let dist = bfs_distances(&g, s);
            for p in &paths {
                prop_assert_eq!(p[0], s);
                prop_assert_eq!(*p.last().unwrap(), t);
                prop_assert_eq!(Some(p.len() - 1), dist[t]);
            }
        }
    }
}
