//! Multicast group addressing.
//!
//! A multicast group is described by a base coordinate and a replication
//! mask. The group is the cartesian product of all x values reachable from
//! the base by toggling masked x bits, and likewise for y.

use crate::coordinate::{Coord, ReplicationId};
use crate::error::{RoutingError, RoutingResult};
use crate::hw::RoutingContext;
use std::collections::HashSet;
use tracing::{debug, trace};

/// Derives the replication mask covering `coords`, measured from `coords[0]`.
///
/// Every bit in which some coordinate differs from the base becomes a
/// "don't care" bit. The target set is assumed to be an axis-aligned,
/// power-of-two aligned block; for any other set the mask addresses a
/// superset of the targets.
///
/// # Errors
///
/// `EmptyInput` if `coords` is empty.
pub fn derive_replication_mask(coords: &[Coord]) -> RoutingResult<ReplicationId> {
    let (base, rest) = coords.split_first().ok_or_else(|| {
        RoutingError::EmptyInput("at least one coordinate is needed as the base".to_string())
    })?;

    let rid = rest
        .iter()
        .fold(ReplicationId::default(), |rid, coord| rid | (*base ^ *coord));

    trace!("Replication mask for {} coordinates from base {}: {}", coords.len(), base, rid);
    Ok(rid)
}

/// Values reachable from `base` by toggling any subset of the `mask` bits below `width`.
fn expand_axis(base: u32, mask: u32, width: u32) -> Vec<u32> {
    let mut values = vec![base];

    for bit in 0..width {
        if (mask >> bit) & 1 == 1 {
            let toggled: Vec<u32> = values.iter().map(|v| v ^ (1 << bit)).collect();
            values.extend(toggled);
        }
    }

    values
}

/// Returns exactly the coordinates addressed by `base` and `rid`.
///
/// Only bits below the configured coordinate width are considered. Mask
/// bits at or above the width are a caller error and are asserted against
/// in debug builds.
pub fn expand_multicast_group(ctx: &RoutingContext, base: Coord, rid: ReplicationId) -> HashSet<Coord> {
    let width = ctx.coord_width();
    debug_assert!(
        rid.x >> width == 0 && rid.y >> width == 0,
        "replication mask {rid} has bits beyond the {width}-bit coordinate width"
    );

    let xs = expand_axis(base.x, rid.x, width);
    let ys = expand_axis(base.y, rid.y, width);

    let cores: HashSet<Coord> = xs
        .iter()
        .flat_map(|&x| ys.iter().map(move |&y| Coord::new(x, y)))
        .collect();

    debug!("Multicast group from base {} with mask {}: {} cores", base, rid, cores.len());
    cores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hw::HwConfig;

    fn ctx() -> RoutingContext {
        RoutingContext::new(HwConfig::default()).unwrap()
    }

    #[test]
    fn test_mask_of_diagonal_pair() {
        let rid = derive_replication_mask(&[Coord::new(0, 0), Coord::new(1, 1)]).unwrap();
        assert_eq!(rid, ReplicationId::new(1, 1));

        let cores = expand_multicast_group(&ctx(), Coord::new(0, 0), rid);
        let expected: HashSet<Coord> = [(0, 0), (0, 1), (1, 0), (1, 1)]
            .into_iter()
            .map(|(x, y)| Coord::new(x, y))
            .collect();
        assert_eq!(cores, expected);
    }

    #[test]
    fn test_single_axis_mask() {
        let cores = expand_multicast_group(&ctx(), Coord::new(0, 0), ReplicationId::new(1, 0));
        let expected: HashSet<Coord> = [Coord::new(0, 0), Coord::new(1, 0)].into_iter().collect();
        assert_eq!(cores, expected);
    }

    #[test]
    fn test_single_coordinate_is_unicast() {
        let rid = derive_replication_mask(&[Coord::new(7, 3)]).unwrap();
        assert!(rid.is_unicast());

        let cores = expand_multicast_group(&ctx(), Coord::new(7, 3), rid);
        assert_eq!(cores.len(), 1);
        assert!(cores.contains(&Coord::new(7, 3)));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(
            derive_replication_mask(&[]),
            Err(RoutingError::EmptyInput(_))
        ));
    }

    #[test]
    fn test_base_need_not_be_block_origin() {
        let cores = expand_multicast_group(&ctx(), Coord::new(3, 2), ReplicationId::new(0b01, 0b10));
        let expected: HashSet<Coord> = [(3, 2), (2, 2), (3, 0), (2, 0)]
            .into_iter()
            .map(|(x, y)| Coord::new(x, y))
            .collect();
        assert_eq!(cores, expected);
    }

    #[test]
    fn test_full_mask_covers_whole_mesh() {
        let cores = expand_multicast_group(&ctx(), Coord::new(0, 0), ReplicationId::new(0x1f, 0x1f));
        assert_eq!(cores.len(), 1024);
        assert!(cores.iter().all(|c| c.x < 32 && c.y < 32));
    }

    #[test]
    fn test_axis_width_is_configurable() {
        let wide = RoutingContext::new(HwConfig {
            coord_addr_nbit: 8,
            ..HwConfig::default()
        })
        .unwrap();

        let cores = expand_multicast_group(&wide, Coord::new(0, 0), ReplicationId::new(0x80, 0));
        let expected: HashSet<Coord> = [Coord::new(0, 0), Coord::new(0x80, 0)].into_iter().collect();
        assert_eq!(cores, expected);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "bits beyond")]
    fn test_oversized_mask_asserts_in_debug() {
        expand_multicast_group(&ctx(), Coord::new(0, 0), ReplicationId::new(1 << 5, 0));
    }
}
