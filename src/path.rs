//! One complete walk from a start vertex to an end vertex.

use rand::Rng;

use crate::geodesic::TargetDistances;
use crate::graph::GeodesicGraph;
use crate::step::step;
use crate::{Error, Result};

/// Per-walk parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkConfig {
    /// Probability of a geodesic step when a free alternative exists. Values `>= 1` always
    /// follow shortest paths.
    pub beta: f64,
    /// Walks that have not reached the end after this many steps are truncated.
    pub step_cap: usize,
    /// Record the start and final landing vertex as visits.
    pub count_endpoints: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            beta: 0.5,
            step_cap: 10_000,
            count_endpoints: false,
        }
    }
}

impl WalkConfig {
    pub fn validate(&self) -> Result<()> {
        if self.beta.is_nan() {
            return Err(Error::InvalidParameter("beta must not be NaN".to_string()));
        }
        if self.beta < 0.0 {
            return Err(Error::InvalidParameter(
                "beta must be >= 0".to_string(),
            ));
        }
        if self.step_cap == 0 {
            return Err(Error::InvalidParameter(
                "step_cap must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Vertices recorded by one walk, in visiting order. Revisits appear once per visit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkPath {
    pub vertices: Vec<usize>,
    /// Steps actually taken.
    pub steps: usize,
    /// False when the walk hit `step_cap` before reaching the end vertex.
    pub converged: bool,
}

/// Walk from `start` until landing on `end` or taking `config.step_cap` steps.
///
/// Unless `config.count_endpoints` is set, the walk's origin is not recorded and the final
/// landing vertex (`end`, for a converged walk) is dropped before returning, so only
/// interior traversal is counted. A walk that wanders back through `start` records those
/// returns like any other visit.
///
/// A truncated walk is not an error: its partial path is returned with `converged = false`
/// and a warning is emitted.
pub fn sample_path<G, R>(
    graph: &G,
    start: usize,
    end: usize,
    config: &WalkConfig,
    rng: &mut R,
) -> Result<WalkPath>
where
    G: GeodesicGraph + ?Sized,
    R: Rng,
{
    check_walk(graph, start, end, config)?;
    let view = TargetDistances::new(graph, end);
    walk_to(&view, start, end, config, rng)
}

/// Argument checks shared by every walk entry point.
pub(crate) fn check_walk<G: GeodesicGraph + ?Sized>(
    graph: &G,
    start: usize,
    end: usize,
    config: &WalkConfig,
) -> Result<()> {
    config.validate()?;
    let n = graph.node_count();
    if start >= n {
        return Err(Error::IndexOutOfBounds(start));
    }
    if end >= n {
        return Err(Error::IndexOutOfBounds(end));
    }
    if start == end {
        return Err(Error::InvalidParameter(format!(
            "walk start and end must differ (both {start})"
        )));
    }
    Ok(())
}

/// The walk loop proper; arguments must already have passed [`check_walk`].
pub(crate) fn walk_to<G, R>(
    graph: &G,
    start: usize,
    end: usize,
    config: &WalkConfig,
    rng: &mut R,
) -> Result<WalkPath>
where
    G: GeodesicGraph + ?Sized,
    R: Rng,
{
    let mut vertices = Vec::new();
    if config.count_endpoints {
        vertices.push(start);
    }

    let mut current = start;
    let mut steps = 0usize;
    while current != end && steps < config.step_cap {
        current = step(graph, current, end, config.beta, rng)?.next;
        vertices.push(current);
        steps += 1;
    }
    let converged = current == end;

    if !converged {
        tracing::warn!(
            start,
            end,
            stopped_at = current,
            step_cap = config.step_cap,
            "random walk did not reach its target; keeping partial path"
        );
    }
    if !config.count_endpoints {
        vertices.pop();
    }

    Ok(WalkPath {
        vertices,
        steps,
        converged,
    })
}
