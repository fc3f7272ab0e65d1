//! weigher-strategy: Resource-aware node weighing
//!
//! This crate turns a container's resource request and a set of node
//! snapshots into an ordered list of candidate nodes:
//! - Feasibility filtering against total capacity
//! - Usage-aware scoring and admission
//! - Spread and binpack placement strategies

pub mod placement;
pub mod weigh;

pub use placement::{
    strategy_for, strategy_from_config, BinpackStrategy, PlacementStrategy, SpreadStrategy,
};
pub use weigh::{is_feasible, project_utilization, score_node, weigh};
