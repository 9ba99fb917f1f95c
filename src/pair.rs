//! Repeated walks for one vertex pair.

use std::collections::BTreeMap;

use rand::Rng;

use crate::geodesic::TargetDistances;
use crate::graph::GeodesicGraph;
use crate::path::{check_walk, walk_to, WalkConfig};
use crate::{Error, Result};

/// Visit counts for one pair's samples: vertex id -> number of recorded visits.
pub type VisitCounts = BTreeMap<usize, usize>;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairSample {
    pub counts: VisitCounts,
    /// Number of walks drawn; the divisor for [`PairSample::contributions`].
    pub num_samples: usize,
    /// Walks that hit the step cap before reaching the end vertex.
    pub truncated: usize,
}

impl PairSample {
    /// Average visits per walk for every vertex seen, in vertex order.
    pub fn contributions(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        let denom = self.num_samples as f64;
        self.counts
            .iter()
            .map(move |(&v, &c)| (v, c as f64 / denom))
    }
}

/// Draw `num_samples` walks from `start` to `end` and count vertex visits.
///
/// Every sample continues the same `rng` stream, so samples are independent draws. Distances
/// to `end` are computed once and shared by all walks of the pair.
pub fn sample_pair<G, R>(
    graph: &G,
    start: usize,
    end: usize,
    config: &WalkConfig,
    num_samples: usize,
    rng: &mut R,
) -> Result<PairSample>
where
    G: GeodesicGraph + ?Sized,
    R: Rng,
{
    if num_samples == 0 {
        return Err(Error::InvalidParameter(
            "num_samples must be > 0".to_string(),
        ));
    }

    check_walk(graph, start, end, config)?;
    let view = TargetDistances::new(graph, end);

    let mut counts = VisitCounts::new();
    let mut truncated = 0usize;
    for _ in 0..num_samples {
        let path = walk_to(&view, start, end, config, rng)?;
        if !path.converged {
            truncated += 1;
        }
        for v in path.vertices {
            *counts.entry(v).or_insert(0) += 1;
        }
    }

    tracing::debug!(
        start,
        end,
        num_samples,
        truncated,
        visited = counts.len(),
        "sampled vertex pair"
    );
    Ok(PairSample {
        counts,
        num_samples,
        truncated,
    })
}
