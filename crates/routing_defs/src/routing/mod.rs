//! Routing Tree Addressing
//!
//! This module implements the hierarchical addressing scheme of the routing
//! tree: per-level resource costs, the mapping between tree paths and mesh
//! coordinates, and multicast group masks.

mod coord;
mod cost;
mod level;
mod multicast;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use coord::{RoutingCoord, ROUTING_PATH_LEN};
pub use cost::{compute_routing_cost, RoutingCost};
pub use level::{RoutingDirection, RoutingLevel, RoutingStatus, N_ROUTING_LEVELS};
pub use multicast::{derive_replication_mask, expand_multicast_group};
