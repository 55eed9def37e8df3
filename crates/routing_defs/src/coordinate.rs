//! # Mesh Coordinates
//!
//! Absolute 2D coordinates of physical cores and the replication masks that
//! describe multicast groups over them.
//!
//! - [`Coord`] - position of one core in the mesh
//! - [`ReplicationId`] - per-axis "don't care" bit mask
//!
//! Both are plain `Copy` values. XOR of two coordinates yields the bits in
//! which they differ, which converts directly into a replication mask.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, BitXor, Shl, Shr};

/// Absolute coordinate of a core in the 2D mesh.
///
/// # Examples
///
/// ```rust
/// use routing_defs::Coord;
///
/// let a = Coord::new(3, 1);
/// let b = Coord::new(1, 1);
/// assert_eq!(a ^ b, Coord::new(2, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Coord {
    pub x: u32,
    pub y: u32,
}

impl Coord {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl BitXor for Coord {
    type Output = Coord;

    fn bitxor(self, rhs: Coord) -> Coord {
        Coord::new(self.x ^ rhs.x, self.y ^ rhs.y)
    }
}

impl BitAnd for Coord {
    type Output = Coord;

    fn bitand(self, rhs: Coord) -> Coord {
        Coord::new(self.x & rhs.x, self.y & rhs.y)
    }
}

impl Shl<u32> for Coord {
    type Output = Coord;

    fn shl(self, rhs: u32) -> Coord {
        Coord::new(self.x << rhs, self.y << rhs)
    }
}

impl Shr<u32> for Coord {
    type Output = Coord;

    fn shr(self, rhs: u32) -> Coord {
        Coord::new(self.x >> rhs, self.y >> rhs)
    }
}

/// Replication identifier of a multicast group.
///
/// A set bit `k` in `x` (resp. `y`) marks bit `k` of the x (resp. y)
/// coordinate as "don't care" for every member of the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ReplicationId {
    pub x: u32,
    pub y: u32,
}

impl ReplicationId {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Returns true if no bit is "don't care", i.e. the group is a single core.
    pub fn is_unicast(&self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Number of coordinates addressed by this mask, or `None` if it does
    /// not fit in a `u64`.
    pub fn group_size(&self) -> Option<u64> {
        1u64.checked_shl(self.x.count_ones() + self.y.count_ones())
    }
}

impl fmt::Display for ReplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:#07b}, {:#07b})", self.x, self.y)
    }
}

impl From<Coord> for ReplicationId {
    fn from(diff: Coord) -> Self {
        Self::new(diff.x, diff.y)
    }
}

impl BitOr for ReplicationId {
    type Output = ReplicationId;

    fn bitor(self, rhs: ReplicationId) -> ReplicationId {
        ReplicationId::new(self.x | rhs.x, self.y | rhs.y)
    }
}

impl BitOr<Coord> for ReplicationId {
    type Output = ReplicationId;

    fn bitor(self, rhs: Coord) -> ReplicationId {
        self | ReplicationId::from(rhs)
    }
}

impl BitOrAssign for ReplicationId {
    fn bitor_assign(&mut self, rhs: ReplicationId) {
        *self = *self | rhs;
    }
}

impl BitOrAssign<Coord> for ReplicationId {
    fn bitor_assign(&mut self, rhs: Coord) {
        *self = *self | rhs;
    }
}
