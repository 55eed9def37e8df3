//! Routing resource cost of a placement.

use super::level::RoutingLevel;
use crate::hw::RoutingContext;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Number of routing nodes a placement needs at levels L0..=L4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoutingCost {
    pub n_l0: u64,
    pub n_l1: u64,
    pub n_l2: u64,
    pub n_l3: u64,
    pub n_l4: u64,
}

impl RoutingCost {
    pub const fn new(n_l0: u64, n_l1: u64, n_l2: u64, n_l3: u64, n_l4: u64) -> Self {
        Self { n_l0, n_l1, n_l2, n_l3, n_l4 }
    }

    /// Counts indexed by level, L0 first.
    pub fn counts(&self) -> [u64; 5] {
        [self.n_l0, self.n_l1, self.n_l2, self.n_l3, self.n_l4]
    }

    /// Level of the smallest cluster able to hold the whole placement.
    ///
    /// Scanning from L4 down, the first level needing more than one node
    /// must be aggregated by a cluster one level above it. A placement that
    /// needs one node everywhere still gets an L1 cluster.
    pub fn minimal_containing_level(&self) -> RoutingLevel {
        let counts = self.counts();

        for i in (0..counts.len()).rev() {
            if counts[i] > 1 {
                return RoutingLevel::ALL[i + 1];
            }
        }

        RoutingLevel::L1
    }
}

impl fmt::Display for RoutingCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "L0={} L1={} L2={} L3={} L4={}",
            self.n_l0, self.n_l1, self.n_l2, self.n_l3, self.n_l4
        )
    }
}

/// Computes how many nodes per level are required to host `n_core` cores.
///
/// L0 is rounded up to a power of two so leaf groups stay bit-aligned for
/// multicast masking. Each higher level divides by the branching factor,
/// bottoming out at one node.
pub fn compute_routing_cost(ctx: &RoutingContext, n_core: u32) -> RoutingCost {
    let n_sub = u64::from(ctx.branching_factor());
    let next_level = |n: u64| if n < n_sub { 1 } else { n / n_sub };

    let n_l0 = u64::from(n_core).next_power_of_two();
    let n_l1 = next_level(n_l0);
    let n_l2 = next_level(n_l1);
    let n_l3 = next_level(n_l2);
    let n_l4 = next_level(n_l3);

    let cost = RoutingCost::new(n_l0, n_l1, n_l2, n_l3, n_l4);
    trace!("Routing cost for {} cores: {}", n_core, cost);
    cost
}
