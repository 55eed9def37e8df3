//! Hardware parameters and the routing context built from them.
//!
//! The parameters are read once at initialization. [`RoutingContext`] then
//! carries them, together with the derived children iteration order, into
//! every operation that depends on the hardware.

use crate::error::{RoutingError, RoutingResult};
use crate::routing::RoutingDirection;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Largest per-axis coordinate width accepted by [`HwConfig::validate`].
pub const MAX_COORD_ADDR_NBIT: u32 = 16;

fn default_coord_y_priority() -> bool {
    true
}

fn default_n_sub_routing_node() -> u32 {
    4
}

fn default_coord_addr_nbit() -> u32 {
    5
}

/// Hardware parameters of the routing fabric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HwConfig {
    /// Whether Y has iteration priority over X when enumerating children
    #[serde(default = "default_coord_y_priority")]
    pub coord_y_priority: bool,
    /// Number of level-(N-1) nodes aggregated by one level-N node
    #[serde(default = "default_n_sub_routing_node")]
    pub n_sub_routing_node: u32,
    /// Bit width of each coordinate axis
    #[serde(default = "default_coord_addr_nbit")]
    pub coord_addr_nbit: u32,
}

impl Default for HwConfig {
    fn default() -> Self {
        Self {
            coord_y_priority: default_coord_y_priority(),
            n_sub_routing_node: default_n_sub_routing_node(),
            coord_addr_nbit: default_coord_addr_nbit(),
        }
    }
}

impl HwConfig {
    /// Checks the parameters for values the addressing scheme cannot handle.
    pub fn validate(&self) -> RoutingResult<()> {
        if self.n_sub_routing_node == 0 {
            return Err(RoutingError::Configuration(
                "n_sub_routing_node must be a positive integer, got 0".to_string(),
            ));
        }

        if self.coord_addr_nbit == 0 || self.coord_addr_nbit > MAX_COORD_ADDR_NBIT {
            return Err(RoutingError::Configuration(format!(
                "coord_addr_nbit must be in 1..={MAX_COORD_ADDR_NBIT}, got {}",
                self.coord_addr_nbit
            )));
        }

        Ok(())
    }

    /// Children iteration order for the configured axis priority.
    pub fn children_order(&self) -> [RoutingDirection; 4] {
        if self.coord_y_priority {
            [
                RoutingDirection::X0Y0,
                RoutingDirection::X0Y1,
                RoutingDirection::X1Y0,
                RoutingDirection::X1Y1,
            ]
        } else {
            [
                RoutingDirection::X0Y0,
                RoutingDirection::X1Y0,
                RoutingDirection::X0Y1,
                RoutingDirection::X1Y1,
            ]
        }
    }
}

/// Read-only routing context, constructed once per process or compilation.
///
/// Holds the validated hardware parameters and the children iteration
/// order derived from them. It contains no interior mutability and can be
/// shared freely across threads.
///
/// # Examples
///
/// ```rust
/// use routing_defs::{HwConfig, RoutingContext, RoutingDirection};
///
/// let ctx = RoutingContext::new(HwConfig::default())?;
/// assert_eq!(ctx.child_direction(1), Some(RoutingDirection::X0Y1));
/// # Ok::<(), routing_defs::RoutingError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingContext {
    hw: HwConfig,
    children: [RoutingDirection; 4],
}

impl RoutingContext {
    /// Validates `hw` and precomputes the children iteration order.
    pub fn new(hw: HwConfig) -> RoutingResult<Self> {
        hw.validate()?;
        let children = hw.children_order();

        debug!(
            "Routing context initialized: y_priority={}, branching={}, coord_nbit={}",
            hw.coord_y_priority, hw.n_sub_routing_node, hw.coord_addr_nbit
        );

        Ok(Self { hw, children })
    }

    pub fn hw(&self) -> &HwConfig {
        &self.hw
    }

    pub fn branching_factor(&self) -> u32 {
        self.hw.n_sub_routing_node
    }

    pub fn coord_width(&self) -> u32 {
        self.hw.coord_addr_nbit
    }

    /// The four concrete directions in children iteration order.
    pub fn child_directions(&self) -> &[RoutingDirection; 4] {
        &self.children
    }

    /// Direction of the child at `slot` in iteration order.
    pub fn child_direction(&self, slot: usize) -> Option<RoutingDirection> {
        self.children.get(slot).copied()
    }
}
