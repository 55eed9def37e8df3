//! Hierarchical routing paths and their mapping to mesh coordinates.

use super::level::{RoutingDirection, RoutingLevel};
use crate::coordinate::Coord;
use crate::error::{RoutingError, RoutingResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of direction entries in a routing path (L4 down to L0).
pub const ROUTING_PATH_LEN: usize = 5;

/// A node of the routing tree, written as the child choice at each level
/// from L4 down to L0.
///
/// Once an entry is [`RoutingDirection::Any`] every lower entry is `Any` as
/// well; the constructors reject paths that break this. The level and the
/// coordinate are derived from the path on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[RoutingDirection; 5]", into = "[RoutingDirection; 5]")]
pub struct RoutingCoord {
    path: [RoutingDirection; ROUTING_PATH_LEN],
}

impl RoutingCoord {
    pub fn new(
        l4: RoutingDirection,
        l3: RoutingDirection,
        l2: RoutingDirection,
        l1: RoutingDirection,
        l0: RoutingDirection,
    ) -> RoutingResult<Self> {
        Self::from_path([l4, l3, l2, l1, l0])
    }

    /// Builds a routing coordinate from a path ordered L4 first.
    ///
    /// # Errors
    ///
    /// `MalformedPath` if a concrete direction follows an `Any`.
    pub fn from_path(path: [RoutingDirection; ROUTING_PATH_LEN]) -> RoutingResult<Self> {
        if let Some(first_any) = path.iter().position(|d| d.is_any()) {
            if let Some(offset) = path[first_any..].iter().position(|d| !d.is_any()) {
                let index = first_any + offset;
                return Err(RoutingError::MalformedPath(format!(
                    "L{} is {} below an unspecified L{}",
                    ROUTING_PATH_LEN - 1 - index,
                    path[index],
                    ROUTING_PATH_LEN - 1 - first_any
                )));
            }
        }

        Ok(Self { path })
    }

    /// Routing path of the leaf at `coord`.
    ///
    /// # Errors
    ///
    /// `InvalidState` if either axis does not fit in the five path levels.
    pub fn from_coord(coord: Coord) -> RoutingResult<Self> {
        let limit = 1u32 << ROUTING_PATH_LEN;
        if coord.x >= limit || coord.y >= limit {
            return Err(RoutingError::InvalidState(format!(
                "coordinate {coord} is outside the {limit}x{limit} routing address space"
            )));
        }

        let mut path = [RoutingDirection::Any; ROUTING_PATH_LEN];
        for (i, entry) in path.iter_mut().enumerate() {
            let shift = (ROUTING_PATH_LEN - 1 - i) as u32;
            *entry = RoutingDirection::from_bits(coord.x >> shift, coord.y >> shift);
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &[RoutingDirection; ROUTING_PATH_LEN] {
        &self.path
    }

    /// Direction chosen at `level`, or `None` for L5 which has no entry.
    pub fn direction(&self, level: RoutingLevel) -> Option<RoutingDirection> {
        (level.index() < ROUTING_PATH_LEN).then(|| self.path[ROUTING_PATH_LEN - 1 - level.index()])
    }

    /// Level of the node this path denotes.
    ///
    /// The first `Any` from the top fixes the level; a fully specified path
    /// denotes a leaf.
    pub fn level(&self) -> RoutingLevel {
        match self.path.iter().position(|d| d.is_any()) {
            Some(i) => RoutingLevel::ALL[ROUTING_PATH_LEN - i],
            None => RoutingLevel::L0,
        }
    }

    /// Absolute mesh coordinate of the leaf this path denotes.
    ///
    /// The L4 entry supplies the most significant bit of each axis and the
    /// L0 entry the least significant one.
    ///
    /// # Errors
    ///
    /// `InvalidState` if the path stops above L0.
    pub fn coordinate(&self) -> RoutingResult<Coord> {
        let level = self.level();
        if level > RoutingLevel::L0 {
            return Err(RoutingError::InvalidState(format!(
                "coordinate is only defined for L0-level clusters, this path denotes {level}"
            )));
        }

        let mut coord = Coord::default();
        for direction in self.path {
            let (x, y) = direction.bits().ok_or_else(|| {
                RoutingError::InvalidState("fully specified path contains ANY".to_string())
            })?;
            coord = (coord << 1) ^ Coord::new(x, y);
        }

        Ok(coord)
    }
}

impl TryFrom<[RoutingDirection; ROUTING_PATH_LEN]> for RoutingCoord {
    type Error = RoutingError;

    fn try_from(path: [RoutingDirection; ROUTING_PATH_LEN]) -> RoutingResult<Self> {
        Self::from_path(path)
    }
}

impl From<RoutingCoord> for [RoutingDirection; ROUTING_PATH_LEN] {
    fn from(coord: RoutingCoord) -> Self {
        coord.path
    }
}

impl fmt::Display for RoutingCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.path.iter().map(|d| d.to_string()).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}
