//! Placement strategies built on node weighing

use std::fmt;

use weigher_core::{
    FeasibilityError, FeasibilityResult, NodeSnapshot, ResourceRequest, ScoredCandidate,
    StrategyConfig, StrategyKind,
};

use crate::weigh::weigh;

/// Strategy for ordering candidate nodes for a container
pub trait PlacementStrategy<N>: Send + Sync {
    /// Name of the strategy
    fn name(&self) -> &'static str;

    /// Rank the feasible nodes, first choice first
    fn rank(
        &self,
        request: &ResourceRequest,
        nodes: &[NodeSnapshot<N>],
    ) -> FeasibilityResult<Vec<ScoredCandidate<N>>>;

    /// Pick the node the container should go to
    fn place(&self, request: &ResourceRequest, nodes: &[NodeSnapshot<N>]) -> FeasibilityResult<N> {
        self.rank(request, nodes)?
            .into_iter()
            .next()
            .map(|candidate| candidate.node)
            .ok_or(FeasibilityError::NoResourcesAvailable)
    }
}

/// Places containers on the least loaded feasible node
#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadStrategy;

impl<N> PlacementStrategy<N> for SpreadStrategy
where
    N: Clone + fmt::Debug,
{
    fn name(&self) -> &'static str {
        StrategyKind::Spread.as_str()
    }

    fn rank(
        &self,
        request: &ResourceRequest,
        nodes: &[NodeSnapshot<N>],
    ) -> FeasibilityResult<Vec<ScoredCandidate<N>>> {
        weigh(request, nodes)
    }
}

/// Places containers on the most loaded node that still fits them
#[derive(Debug, Clone, Copy, Default)]
pub struct BinpackStrategy;

impl<N> PlacementStrategy<N> for BinpackStrategy
where
    N: Clone + fmt::Debug,
{
    fn name(&self) -> &'static str {
        StrategyKind::Binpack.as_str()
    }

    fn rank(
        &self,
        request: &ResourceRequest,
        nodes: &[NodeSnapshot<N>],
    ) -> FeasibilityResult<Vec<ScoredCandidate<N>>> {
        let mut candidates = weigh(request, nodes)?;
        // Stable on a reversed key so ties stay in input order.
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
        Ok(candidates)
    }
}

/// Get the strategy implementation for a configured kind
pub fn strategy_for<N>(kind: StrategyKind) -> Box<dyn PlacementStrategy<N>>
where
    N: Clone + fmt::Debug,
{
    match kind {
        StrategyKind::Spread => Box::new(SpreadStrategy),
        StrategyKind::Binpack => Box::new(BinpackStrategy),
    }
}

/// Get the strategy implementation selected by a configuration
pub fn strategy_from_config<N>(config: &StrategyConfig) -> Box<dyn PlacementStrategy<N>>
where
    N: Clone + fmt::Debug,
{
    strategy_for(config.strategy)
}
