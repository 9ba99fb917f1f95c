//! Single step of a geodesic-biased random walk.
//!
//! From `source`, heading for `target`, the neighbors of `source` split into:
//! - **geodesic** neighbors: first hops of some shortest path to `target`;
//! - **free** neighbors: everything else.
//!
//! With probability `beta` the walker takes a uniform geodesic step, otherwise a uniform free
//! step. When there is no free neighbor the geodesic step is forced. `beta >= 1` therefore
//! always follows a shortest path; `beta = 0` never does unless forced.

use rand::Rng;

use crate::graph::GeodesicGraph;
use crate::{Error, Result};

/// Which branch of the transition rule produced a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepKind {
    /// No free neighbor existed; a geodesic neighbor was the only option.
    Forced,
    /// Drew below `beta`: moved to a geodesic neighbor.
    Biased,
    /// Drew at or above `beta`: moved to a free neighbor.
    Unbiased,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub next: usize,
    pub kind: StepKind,
}

/// Take one walk step from `source` towards `target`.
///
/// Errors:
/// - `IndexOutOfBounds` if either vertex is not in the graph.
/// - `InvalidParameter` if `source == target` or `beta` is negative/NaN.
/// - `NoNeighbors` if `source` is isolated.
/// - `NoPath` if `target` is unreachable from `source`.
pub fn step<G, R>(graph: &G, source: usize, target: usize, beta: f64, rng: &mut R) -> Result<Step>
where
    G: GeodesicGraph + ?Sized,
    R: Rng,
{
    let n = graph.node_count();
    if source >= n {
        return Err(Error::IndexOutOfBounds(source));
    }
    if target >= n {
        return Err(Error::IndexOutOfBounds(target));
    }
    if source == target {
        return Err(Error::InvalidParameter(format!(
            "step source and target must differ (both {source})"
        )));
    }
    if !(beta >= 0.0) {
        return Err(Error::InvalidParameter(
            "beta must be non-negative".to_string(),
        ));
    }

    let mut neighbors = graph.neighbors(source);
    if neighbors.is_empty() {
        return Err(Error::NoNeighbors(source));
    }
    neighbors.sort_unstable();
    neighbors.dedup();

    let mut geodesic = graph.geodesic_neighbors(source, target);
    geodesic.sort_unstable();
    geodesic.dedup();
    if geodesic.is_empty() {
        return Err(Error::NoPath {
            from: source,
            to: target,
        });
    }

    let free: Vec<usize> = neighbors
        .into_iter()
        .filter(|v| geodesic.binary_search(v).is_err())
        .collect();

    let (next, kind) = if free.is_empty() {
        (pick(&geodesic, rng), StepKind::Forced)
    } else if rng.random::<f64>() < beta {
        (pick(&geodesic, rng), StepKind::Biased)
    } else {
        (pick(&free, rng), StepKind::Unbiased)
    };

    tracing::trace!(
        source,
        target,
        next,
        ?kind,
        geodesic = geodesic.len(),
        free = free.len(),
        "walk step"
    );
    Ok(Step { next, kind })
}

fn pick<R: Rng>(options: &[usize], rng: &mut R) -> usize {
    debug_assert!(!options.is_empty());
    if options.len() == 1 {
        return options[0];
    }
    options[rng.random_range(0..options.len())]
}
