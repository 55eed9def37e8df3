//! Routing levels, child directions and L0-cluster status.

use crate::error::{RoutingError, RoutingResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of levels in the routing tree (L0..=L5).
pub const N_ROUTING_LEVELS: usize = 6;

/// Depth of a node in the routing tree.
///
/// `L0` is a leaf, i.e. one physical core. Each higher level is a cluster
/// of the level below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum RoutingLevel {
    L0 = 0,
    L1 = 1,
    L2 = 2,
    L3 = 3,
    L4 = 4,
    L5 = 5,
}

impl RoutingLevel {
    pub const ALL: [RoutingLevel; N_ROUTING_LEVELS] = [
        RoutingLevel::L0,
        RoutingLevel::L1,
        RoutingLevel::L2,
        RoutingLevel::L3,
        RoutingLevel::L4,
        RoutingLevel::L5,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for RoutingLevel {
    type Error = RoutingError;

    fn try_from(value: u8) -> RoutingResult<Self> {
        RoutingLevel::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| RoutingError::InvalidOperation(format!("no routing level {value}")))
    }
}

impl fmt::Display for RoutingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", *self as u8)
    }
}

/// Which of the four children of a cluster a path descends into.
///
/// The concrete variants name the (x, y) quadrant bit pair. `Any` means the
/// level is left unspecified and carries no coordinate bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoutingDirection {
    X0Y0,
    X0Y1,
    X1Y0,
    X1Y1,
    Any,
}

impl RoutingDirection {
    /// Builds the concrete direction for a quadrant bit pair.
    ///
    /// Only the lowest bit of each argument is used.
    pub fn from_bits(x: u32, y: u32) -> Self {
        match (x & 1, y & 1) {
            (0, 0) => RoutingDirection::X0Y0,
            (0, _) => RoutingDirection::X0Y1,
            (_, 0) => RoutingDirection::X1Y0,
            _ => RoutingDirection::X1Y1,
        }
    }

    /// Quadrant bits `(x, y)`, or `None` for `Any`.
    pub fn bits(self) -> Option<(u32, u32)> {
        match self {
            RoutingDirection::X0Y0 => Some((0, 0)),
            RoutingDirection::X0Y1 => Some((0, 1)),
            RoutingDirection::X1Y0 => Some((1, 0)),
            RoutingDirection::X1Y1 => Some((1, 1)),
            RoutingDirection::Any => None,
        }
    }

    pub fn is_any(self) -> bool {
        self == RoutingDirection::Any
    }

    /// Child-slot index `(x << 1) + y` of a concrete direction.
    ///
    /// # Errors
    ///
    /// `InvalidOperation` for `Any`, which has no single child slot.
    pub fn to_index(self) -> RoutingResult<usize> {
        let (x, y) = self.bits().ok_or_else(|| {
            RoutingError::InvalidOperation("the direction of routing is not specified".to_string())
        })?;

        Ok(((x << 1) + y) as usize)
    }

    /// Inverse of [`to_index`](Self::to_index).
    pub fn from_index(index: usize) -> RoutingResult<Self> {
        if index > 3 {
            return Err(RoutingError::InvalidOperation(format!(
                "child index {index} is out of range 0..4"
            )));
        }

        Ok(Self::from_bits((index >> 1) as u32, index as u32))
    }
}

impl fmt::Display for RoutingDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bits() {
            Some((x, y)) => write!(f, "X{x}Y{y}"),
            None => write!(f, "ANY"),
        }
    }
}

/// Status of an L0-level cluster.
///
/// Informational only; nothing in the addressing scheme branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoutingStatus {
    /// Free for an item to attach
    #[default]
    Available,
    /// An item is attached
    Used,
    /// Wasted by a placement
    Occupied,
    AllEmpty,
}
