//! Node weighing: feasibility filtering and load scoring

use std::fmt;

use tracing::{debug, warn};
use weigher_core::{
    FeasibilityError, FeasibilityResult, NodeSnapshot, ResourceRequest, ScoreBreakdown,
    ScoredCandidate,
};

/// Score pinned to an axis the request does not reserve.
const UNREQUESTED_AXIS_SCORE: f64 = 100.0;

/// Whether a node's total capacity can ever hold the request.
///
/// Current usage is not considered here.
pub fn is_feasible<N>(request: &ResourceRequest, node: &NodeSnapshot<N>) -> bool {
    if node.has_zero_capacity() {
        return false;
    }

    node.total_memory_bytes >= request.memory_bytes
        && f64::from(node.total_cpu_cores) >= request.normalized_cpu(node.total_cpu_cores)
}

/// Projected per-axis utilization of a node after placing the request.
///
/// The node must have non-zero capacity on both axes.
pub fn project_utilization<N>(request: &ResourceRequest, node: &NodeSnapshot<N>) -> ScoreBreakdown {
    let cpu = if request.cpu_shares == 0 {
        UNREQUESTED_AXIS_SCORE
    } else {
        let total = f64::from(node.total_cpu_cores);
        (node.used_cpu_share_equivalent + request.normalized_cpu(node.total_cpu_cores)) * 100.0
            / total
    };

    let memory = if request.memory_bytes == 0 {
        UNREQUESTED_AXIS_SCORE
    } else {
        let projected = node.used_memory_bytes as f64 + request.memory_bytes as f64;
        projected * 100.0 / node.total_memory_bytes as f64
    };

    ScoreBreakdown { cpu, memory }
}

/// Score a single node, or `None` if it cannot take the request.
pub fn score_node<N>(request: &ResourceRequest, node: &NodeSnapshot<N>) -> Option<ScoredCandidate<N>>
where
    N: Clone + fmt::Debug,
{
    if !is_feasible(request, node) {
        debug!(
            node = ?node.identity,
            total_memory_bytes = node.total_memory_bytes,
            total_cpu_cores = node.total_cpu_cores,
            memory_bytes = request.memory_bytes,
            cpu_shares = request.cpu_shares,
            "Node too small for request"
        );
        return None;
    }

    let breakdown = project_utilization(request, node);
    if !breakdown.is_admissible() {
        debug!(
            node = ?node.identity,
            cpu_score = breakdown.cpu,
            memory_score = breakdown.memory,
            "Node would be overcommitted"
        );
        return None;
    }

    debug!(
        node = ?node.identity,
        cpu_score = breakdown.cpu,
        memory_score = breakdown.memory,
        "Node admitted"
    );

    Some(ScoredCandidate::new(node.identity.clone(), breakdown))
}

/// Filter and score `nodes` for `request`, least loaded first.
///
/// Nodes with equal score keep their input order. Fails with
/// [`FeasibilityError::NoResourcesAvailable`] when no node survives.
pub fn weigh<'a, N, I>(
    request: &ResourceRequest,
    nodes: I,
) -> FeasibilityResult<Vec<ScoredCandidate<N>>>
where
    N: Clone + fmt::Debug + 'a,
    I: IntoIterator<Item = &'a NodeSnapshot<N>>,
{
    let mut candidates: Vec<ScoredCandidate<N>> = nodes
        .into_iter()
        .filter_map(|node| score_node(request, node))
        .collect();

    if candidates.is_empty() {
        warn!(
            memory_bytes = request.memory_bytes,
            cpu_shares = request.cpu_shares,
            "No node can host the request"
        );
        return Err(FeasibilityError::NoResourcesAvailable);
    }

    // sort_by is stable
    candidates.sort_by(|a, b| a.score.total_cmp(&b.score));

    Ok(candidates)
}
