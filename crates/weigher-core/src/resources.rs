//! Resource request, node snapshot and scored candidate definitions

use serde::{Deserialize, Serialize};

/// Number of CPU shares that make up one whole core
pub const CPU_SHARES_PER_CORE: u64 = 1024;

/// Convert a share-based CPU request into the core-equivalent unit of a node.
///
/// 1024 shares on an 8-core node is a different amount of CPU than 1024
/// shares on a 2-core node; the result is directly comparable with
/// [`NodeSnapshot::total_cpu_cores`] and
/// [`NodeSnapshot::used_cpu_share_equivalent`].
pub fn normalize_cpu(cpu_shares: u64, total_cpu_cores: u32) -> f64 {
    cpu_shares as f64 * f64::from(total_cpu_cores) / CPU_SHARES_PER_CORE as f64
}

/// Resources a container asks for
///
/// A zero on either axis means "no explicit reservation".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRequest {
    /// Requested memory reservation in bytes
    pub memory_bytes: u64,
    /// Requested CPU shares (1024 per core)
    pub cpu_shares: u64,
}

impl ResourceRequest {
    /// Create a new resource request
    pub fn new(memory_bytes: u64, cpu_shares: u64) -> Self {
        Self {
            memory_bytes,
            cpu_shares,
        }
    }

    /// CPU request expressed in the unit of a node with `total_cpu_cores`
    pub fn normalized_cpu(&self, total_cpu_cores: u32) -> f64 {
        normalize_cpu(self.cpu_shares, total_cpu_cores)
    }
}

/// Point-in-time view of one node's capacity and usage
///
/// Snapshots are produced by the node registry and are only ever read
/// here. `identity` is opaque and is carried through to the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot<N> {
    /// Handle identifying the node
    pub identity: N,
    /// Total memory in bytes
    pub total_memory_bytes: u64,
    /// Logical CPU count
    pub total_cpu_cores: u32,
    /// Current CPU consumption, in the same unit as [`normalize_cpu`]
    pub used_cpu_share_equivalent: f64,
    /// Memory currently in use, in bytes
    pub used_memory_bytes: u64,
}

impl<N> NodeSnapshot<N> {
    /// Create an idle snapshot with the given capacity
    pub fn new(identity: N, total_memory_bytes: u64, total_cpu_cores: u32) -> Self {
        Self {
            identity,
            total_memory_bytes,
            total_cpu_cores,
            used_cpu_share_equivalent: 0.0,
            used_memory_bytes: 0,
        }
    }

    /// Set current usage
    pub fn with_usage(mut self, used_memory_bytes: u64, used_cpu_share_equivalent: f64) -> Self {
        self.used_memory_bytes = used_memory_bytes;
        self.used_cpu_share_equivalent = used_cpu_share_equivalent;
        self
    }

    /// Whether the node reports no capacity on some axis.
    ///
    /// Such nodes can never host anything and must be dropped before any
    /// utilization is computed against them.
    pub fn has_zero_capacity(&self) -> bool {
        self.total_memory_bytes == 0 || self.total_cpu_cores == 0
    }
}

/// Per-axis utilization scores of a candidate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Projected CPU utilization in percent, or 100 when CPU is unrequested
    pub cpu: f64,
    /// Projected memory utilization in percent, or 100 when memory is unrequested
    pub memory: f64,
}

impl ScoreBreakdown {
    /// Both axes fit within the node after placement
    pub fn is_admissible(&self) -> bool {
        self.cpu <= 100.0 && self.memory <= 100.0
    }

    /// Combined weight used for ordering
    pub fn total(&self) -> f64 {
        self.cpu + self.memory
    }
}

/// A node that passed feasibility, with its weight
///
/// `score` is only meaningful relative to other candidates of the same
/// call; lower means less loaded after the hypothetical placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate<N> {
    /// Identity of the node
    pub node: N,
    /// Sum of the per-axis scores
    pub score: f64,
    /// Per-axis scores
    pub breakdown: ScoreBreakdown,
}

impl<N> ScoredCandidate<N> {
    /// Create a candidate from its per-axis scores
    pub fn new(node: N, breakdown: ScoreBreakdown) -> Self {
        Self {
            node,
            score: breakdown.total(),
            breakdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_normalize_cpu_scales_with_cores() {
        assert_eq!(normalize_cpu(1024, 2), 2.0);
        assert_eq!(normalize_cpu(1024, 8), 8.0);
        assert_eq!(normalize_cpu(512, 2), 1.0);
        assert_eq!(normalize_cpu(0, 16), 0.0);
    }

    #[test]
    fn test_normalize_cpu_does_not_overflow() {
        let normalized = normalize_cpu(u64::MAX, u32::MAX);
        assert!(normalized.is_finite());
        assert!(normalized > 0.0);
    }

    #[test]
    fn test_request_normalized_cpu() {
        let request = ResourceRequest::new(512, 256);
        assert_eq!(request.normalized_cpu(4), 1.0);
    }

    #[test]
    fn test_snapshot_builder() {
        let id = Uuid::new_v4();
        let node = NodeSnapshot::new(id, 2048, 2).with_usage(1024, 1.0);

        assert_eq!(node.identity, id);
        assert_eq!(node.used_memory_bytes, 1024);
        assert_eq!(node.used_cpu_share_equivalent, 1.0);
        assert!(!node.has_zero_capacity());
    }

    #[test]
    fn test_zero_capacity() {
        assert!(NodeSnapshot::new("a", 0, 4).has_zero_capacity());
        assert!(NodeSnapshot::new("b", 1024, 0).has_zero_capacity());
    }

    #[test]
    fn test_breakdown_admissibility() {
        let full = ScoreBreakdown {
            cpu: 100.0,
            memory: 100.0,
        };
        assert!(full.is_admissible());
        assert_eq!(full.total(), 200.0);

        let over = ScoreBreakdown {
            cpu: 100.5,
            memory: 10.0,
        };
        assert!(!over.is_admissible());

        let nan = ScoreBreakdown {
            cpu: f64::NAN,
            memory: 10.0,
        };
        assert!(!nan.is_admissible());
    }

    #[test]
    fn test_snapshot_deserialize() {
        let json = r#"{
            "identity": "node-1",
            "total_memory_bytes": 2048,
            "total_cpu_cores": 2,
            "used_cpu_share_equivalent": 0.5,
            "used_memory_bytes": 512
        }"#;
        let node: NodeSnapshot<String> = serde_json::from_str(json).unwrap();
        assert_eq!(node.identity, "node-1");
        assert_eq!(node.total_cpu_cores, 2);
        assert_eq!(node.used_cpu_share_equivalent, 0.5);
    }
}
