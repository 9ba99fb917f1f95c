//! Random-walk betweenness centrality.
//!
//! For every unordered vertex pair `(u, v)`, draw `num_samples` geodesic-biased walks from `u`
//! to `v` and count how often each vertex is crossed. Each pair contributes its *average*
//! visits per walk, and contributions are summed over all pairs:
//!
//! ```text
//! C_RW(x) = Σ_{u<v} visits_uv(x) / num_samples
//! ```
//!
//! With `beta >= 1` every walk is a uniformly-branching shortest path, so on trees this is
//! exactly the (unnormalized, undirected) shortest-path betweenness.
//!
//! Public invariants:
//! - The output vector is indexed by vertex id `0..n`.
//! - The graph must be connected; anything else is rejected before sampling.
//! - Output is a pure function of `(graph, config)`: every pair draws from its own RNG, seeded
//!   from `config.seed` and the pair's position in [`vertex_pairs`] order.
//! - Scores are not normalized; see [`crate::normalize`].

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::graph::GeodesicGraph;
use crate::pair::{sample_pair, PairSample};
use crate::partition::component_count;
use crate::path::WalkConfig;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RwBetweennessConfig {
    pub walk: WalkConfig,
    /// Walks per vertex pair.
    pub num_samples: usize,
    /// Seed for the per-pair RNGs.
    pub seed: u64,
}

impl Default for RwBetweennessConfig {
    fn default() -> Self {
        Self {
            walk: WalkConfig::default(),
            num_samples: 3,
            seed: 42,
        }
    }
}

impl RwBetweennessConfig {
    pub fn validate(&self) -> Result<()> {
        self.walk.validate()?;
        if self.num_samples == 0 {
            return Err(Error::InvalidParameter(
                "num_samples must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RwBetweennessRun {
    pub scores: Vec<f64>,
    /// Vertex pairs sampled.
    pub pairs: usize,
    /// Walks drawn in total (`pairs * num_samples`).
    pub walks: usize,
    /// Walks cut off by `step_cap`; their partial paths are still counted.
    pub truncated_walks: usize,
}

/// Every unordered pair `(u, v)` with `u < v < n`, in lexicographic order.
pub fn vertex_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |u| (u + 1..n).map(move |v| (u, v)))
}

pub fn rw_betweenness<G>(graph: &G, config: RwBetweennessConfig) -> Result<Vec<f64>>
where
    G: GeodesicGraph + ?Sized,
{
    Ok(rw_betweenness_run(graph, config)?.scores)
}

/// Random-walk betweenness with sampling diagnostics.
///
/// Errors with `DisconnectedGraph` (before any walk is drawn) unless the graph has exactly
/// one connected component, and with `InvalidParameter` for an invalid `config`.
pub fn rw_betweenness_run<G>(graph: &G, config: RwBetweennessConfig) -> Result<RwBetweennessRun>
where
    G: GeodesicGraph + ?Sized,
{
    config.validate()?;
    ensure_connected(graph)?;

    let n = graph.node_count();
    tracing::debug!(
        nodes = n,
        beta = config.walk.beta,
        num_samples = config.num_samples,
        "estimating random-walk betweenness"
    );

    let mut run = RwBetweennessRun {
        scores: vec![0.0; n],
        pairs: 0,
        walks: 0,
        truncated_walks: 0,
    };
    for (index, (start, end)) in vertex_pairs(n).enumerate() {
        let sample = sample_pair_seeded(graph, index, start, end, &config)?;
        accumulate(&mut run, &sample);
    }

    finish(&run);
    Ok(run)
}

/// Parallel random-walk betweenness (pairs fanned out over Rayon).
///
/// Invariant: output is bit-identical to [`rw_betweenness`] for the same config, independent
/// of thread count.
#[cfg(feature = "parallel")]
pub fn rw_betweenness_parallel<G>(graph: &G, config: RwBetweennessConfig) -> Result<Vec<f64>>
where
    G: GeodesicGraph + Sync + ?Sized,
{
    Ok(rw_betweenness_parallel_run(graph, config)?.scores)
}

#[cfg(feature = "parallel")]
pub fn rw_betweenness_parallel_run<G>(
    graph: &G,
    config: RwBetweennessConfig,
) -> Result<RwBetweennessRun>
where
    G: GeodesicGraph + Sync + ?Sized,
{
    use rayon::prelude::*;

    config.validate()?;
    ensure_connected(graph)?;

    let n = graph.node_count();
    let pairs: Vec<(usize, usize)> = vertex_pairs(n).collect();
    let samples: Vec<PairSample> = pairs
        .par_iter()
        .enumerate()
        .map(|(index, &(start, end))| sample_pair_seeded(graph, index, start, end, &config))
        .collect::<Result<Vec<_>>>()?;

    // Reduce in pair order so float sums match the serial estimator exactly.
    let mut run = RwBetweennessRun {
        scores: vec![0.0; n],
        pairs: 0,
        walks: 0,
        truncated_walks: 0,
    };
    for sample in &samples {
        accumulate(&mut run, sample);
    }

    finish(&run);
    Ok(run)
}

fn ensure_connected<G: GeodesicGraph + ?Sized>(graph: &G) -> Result<()> {
    if graph.is_weakly_connected() {
        return Ok(());
    }
    Err(Error::DisconnectedGraph {
        components: component_count(graph),
    })
}

fn sample_pair_seeded<G: GeodesicGraph + ?Sized>(
    graph: &G,
    index: usize,
    start: usize,
    end: usize,
    config: &RwBetweennessConfig,
) -> Result<PairSample> {
    let mut rng = ChaCha8Rng::seed_from_u64(mix64(config.seed ^ (index as u64)));
    sample_pair(graph, start, end, &config.walk, config.num_samples, &mut rng)
}

fn accumulate(run: &mut RwBetweennessRun, sample: &PairSample) {
    for (v, avg) in sample.contributions() {
        run.scores[v] += avg;
    }
    run.pairs += 1;
    run.walks += sample.num_samples;
    run.truncated_walks += sample.truncated;
}

fn finish(run: &RwBetweennessRun) {
    if run.truncated_walks > 0 {
        tracing::warn!(
            truncated = run.truncated_walks,
            walks = run.walks,
            "some walks hit the step cap; scores are biased toward their partial paths"
        );
    }
    tracing::debug!(pairs = run.pairs, walks = run.walks, "random-walk betweenness done");
}

fn mix64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xbf58476d1ce4e5b9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94d049bb133111eb);
    x ^= x >> 31;
    x
}
