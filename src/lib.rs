//! `rwbetweenness`: random-walk (Monte-Carlo) betweenness centrality.
//!
//! Instead of enumerating shortest paths exactly, every vertex pair is sampled with walks
//! that are steered toward geodesics by a bias `beta`, and per-vertex visit counts are
//! aggregated into a centrality score.
//!
//! Layers, leaf first:
//! - [`step()`]: one transition (geodesic vs free neighbor).
//! - [`sample_path`]: one walk, truncated at `step_cap`.
//! - [`sample_pair`]: many walks for one pair, aggregated into visit counts.
//! - [`rw_betweenness`]: all pairs, summed into the score vector.
//!
//! Public invariants (must not drift):
//! - **Node order**: outputs are indexed by vertex id \(0..n-1\) of the input graph adapter.
//! - **Connectivity**: disconnected graphs are rejected up front, never partially scored.
//! - **Determinism**: all randomness comes from explicitly seeded RNGs; identical
//!   `(graph, config)` give identical scores, serial or parallel.
//! - **No silent normalization**: scores are raw sums; rescale with [`normalize`].
//!
//! Swappable (allowed to change without breaking the contract):
//! - iteration strategy (serial vs parallel)
//! - how geodesic neighbors are computed (so long as they equal the first hops of all
//!   shortest paths)

pub mod betweenness;
pub mod geodesic;
pub mod graph;
pub mod pair;
pub mod partition;
pub mod path;
pub mod step;
pub mod topk;

pub use betweenness::{
    rw_betweenness, rw_betweenness_run, vertex_pairs, RwBetweennessConfig, RwBetweennessRun,
};
#[cfg(feature = "parallel")]
pub use betweenness::{rw_betweenness_parallel, rw_betweenness_parallel_run};
pub use geodesic::{all_shortest_paths, bfs_distances, first_hops, TargetDistances};
pub use graph::{GeodesicGraph, Graph, UndirectedGraph};
pub use pair::{sample_pair, PairSample, VisitCounts};
pub use partition::{component_count, connected_components};
pub use path::{sample_path, WalkConfig, WalkPath};
pub use step::{step, Step, StepKind};
pub use topk::{normalize, top_k};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("index out of bounds: {0}")]
    IndexOutOfBounds(usize),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("graph must be connected, found {components} components")]
    DisconnectedGraph { components: usize },
    #[error("vertex {0} has no neighbors")]
    NoNeighbors(usize),
    #[error("no path from {from} to {to}")]
    NoPath { from: usize, to: usize },
    #[error("cannot min-max normalize {len} scores with zero span")]
    ZeroSpanNormalization { len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
