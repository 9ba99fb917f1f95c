//! Connected components.
//!
//! Output is a partition of nodes: `labels[i] = component_id`, contiguous in `0..k`
//! in order of each component's smallest vertex.

use std::collections::VecDeque;

use crate::graph::Graph;

/// Connected components of an **undirected** graph, using BFS.
///
/// On a directed adapter this yields weakly-connected components only if its neighbor
/// lists include both in- and out-neighbors.
pub fn connected_components<G: Graph + ?Sized>(graph: &G) -> Vec<usize> {
    let n = graph.node_count();
    let mut labels = vec![usize::MAX; n];
    let mut queue: VecDeque<usize> = VecDeque::new();

    let mut comp = 0usize;
    for start in 0..n {
        if labels[start] != usize::MAX {
            continue;
        }
        labels[start] = comp;
        queue.push_back(start);
        while let Some(u) = queue.pop_front() {
            for v in graph.neighbors(u) {
                if v >= n {
                    // Adapter contract violation; ignore out-of-range neighbor.
                    continue;
                }
                if labels[v] == usize::MAX {
                    labels[v] = comp;
                    queue.push_back(v);
                }
            }
        }
        comp += 1;
    }

    labels
}

/// Number of connected components (0 for an empty graph).
pub fn component_count<G: Graph + ?Sized>(graph: &G) -> usize {
    let n = graph.node_count();
    let mut seen = vec![false; n];
    let mut queue: VecDeque<usize> = VecDeque::new();

    let mut count = 0usize;
    for start in 0..n {
        if seen[start] {
            continue;
        }
        count += 1;
        seen[start] = true;
        queue.push_back(start);
        while let Some(u) = queue.pop_front() {
            for v in graph.neighbors(u) {
                if v < n && !seen[v] {
                    seen[v] = true;
                    queue.push_back(v);
                }
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    struct VecGraph {
        adj: Vec<Vec<usize>>,
    }

    impl Graph for VecGraph {
        fn node_count(&self) -> usize {
            self.adj.len()
        }
        fn neighbors(&self, node: usize) -> Vec<usize> {
            self.adj[node].clone()
        }
    }

    #[test]
    fn connected_components_two_components() {
        // 0-1-2 and 3-4
        let g = VecGraph {
            adj: vec![vec![1], vec![0, 2], vec![1], vec![4], vec![3]],
        };
        let labels = connected_components(&g);
        assert_eq!(labels, vec![0, 0, 0, 1, 1]);
        assert_eq!(component_count(&g), 2);
    }

    #[test]
    fn isolated_vertices_are_their_own_components() {
        let g = VecGraph {
            adj: vec![vec![], vec![2], vec![1], vec![]],
        };
        assert_eq!(connected_components(&g), vec![0, 1, 1, 2]);
        assert_eq!(component_count(&g), 3);
    }

    #[test]
    fn out_of_range_neighbors_are_ignored() {
        let g = VecGraph {
            adj: vec![vec![1, 7], vec![0]],
        };
        assert_eq!(component_count(&g), 1);
    }

    #[test]
    fn component_count_agrees_with_labels() {
        let g = VecGraph {
            adj: vec![vec![1], vec![0], vec![], vec![4], vec![3], vec![5]],
        };
        let labels = connected_components(&g);
        let distinct = labels.iter().max().map_or(0, |m| m + 1);
        assert_eq!(component_count(&g), distinct);
        assert_eq!(component_count(&g), 4);
    }

    #[test]
    fn empty_graph_has_no_components() {
        let g = VecGraph { adj: vec![] };
        assert!(connected_components(&g).is_empty());
        assert_eq!(component_count(&g), 0);
    }
}
