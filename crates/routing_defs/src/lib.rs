//! # Routing Definitions
//!
//! Hierarchical multicast routing addresses for a tree-structured on-chip
//! interconnect, where every routing node aggregates four children and the
//! leaves are the physical cores of a 2D mesh.
//!
//! ## Operations
//!
//! - [`compute_routing_cost`] - nodes needed per level to host a number of cores
//! - [`RoutingCost::minimal_containing_level`] - smallest cluster holding a placement
//! - [`RoutingCoord::level`] / [`RoutingCoord::coordinate`] - tree path to mesh coordinate
//! - [`derive_replication_mask`] - "don't care" mask covering a set of cores
//! - [`expand_multicast_group`] - exact core set addressed by a base and a mask
//!
//! Hardware parameters are carried by a [`RoutingContext`], built once from
//! an [`HwConfig`] and passed to the operations that depend on it. All
//! operations are pure and may be called concurrently.
//!
//! ## Example
//!
//! ```rust
//! use routing_defs::*;
//!
//! let ctx = RoutingContext::new(HwConfig::default())?;
//!
//! let cost = compute_routing_cost(&ctx, 5);
//! assert_eq!(cost, RoutingCost::new(8, 2, 1, 1, 1));
//! assert_eq!(cost.minimal_containing_level(), RoutingLevel::L2);
//!
//! let rid = derive_replication_mask(&[Coord::new(0, 0), Coord::new(1, 1)])?;
//! let cores = expand_multicast_group(&ctx, Coord::new(0, 0), rid);
//! assert_eq!(cores.len(), 4);
//! # Ok::<(), RoutingError>(())
//! ```

pub mod coordinate;
pub mod error;
pub mod hw;
pub mod routing;

pub use coordinate::{Coord, ReplicationId};
pub use error::{RoutingError, RoutingResult};
pub use hw::{HwConfig, RoutingContext, MAX_COORD_ADDR_NBIT};
pub use routing::{
    compute_routing_cost, derive_replication_mask, expand_multicast_group, RoutingCoord,
    RoutingCost, RoutingDirection, RoutingLevel, RoutingStatus, N_ROUTING_LEVELS,
    ROUTING_PATH_LEN,
};
