//! End-to-end addressing scenarios.
//!
//! These tests walk a placement through the whole scheme: size it, pick
//! leaves under its containing cluster, derive the multicast mask for them
//! and check that the mask addresses exactly those leaves.

use super::*;
use crate::coordinate::{Coord, ReplicationId};
use crate::hw::{HwConfig, RoutingContext};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

fn ctx() -> RoutingContext {
    RoutingContext::new(HwConfig::default()).unwrap()
}

/// Leaves of the `size_x` by `size_y` block at `origin`, origin first.
fn block(origin: Coord, size_x: u32, size_y: u32) -> Vec<Coord> {
    let mut coords = vec![origin];
    for x in 0..size_x {
        for y in 0..size_y {
            let coord = Coord::new(origin.x + x, origin.y + y);
            if coord != origin {
                coords.push(coord);
            }
        }
    }
    coords
}

#[test]
fn test_every_concrete_path_round_trips() {
    let directions = [
        RoutingDirection::X0Y0,
        RoutingDirection::X0Y1,
        RoutingDirection::X1Y0,
        RoutingDirection::X1Y1,
    ];

    for index in 0..(4usize.pow(ROUTING_PATH_LEN as u32)) {
        let mut path = [RoutingDirection::Any; ROUTING_PATH_LEN];
        for (i, entry) in path.iter_mut().enumerate() {
            *entry = directions[(index >> (2 * i)) & 3];
        }

        let routing = RoutingCoord::from_path(path).unwrap();
        let coord = routing.coordinate().unwrap();

        for level in [
            RoutingLevel::L0,
            RoutingLevel::L1,
            RoutingLevel::L2,
            RoutingLevel::L3,
            RoutingLevel::L4,
        ] {
            let (x, y) = routing.direction(level).unwrap().bits().unwrap();
            let shift = level.index() as u32;
            assert_eq!((coord.x >> shift) & 1, x, "x bit at {level} of {routing}");
            assert_eq!((coord.y >> shift) & 1, y, "y bit at {level} of {routing}");
        }
    }
}

#[test]
fn test_aligned_blocks_expand_to_themselves() {
    let ctx = ctx();
    let cases = [
        (Coord::new(0, 0), 2, 2),
        (Coord::new(4, 8), 4, 2),
        (Coord::new(16, 16), 8, 8),
        (Coord::new(6, 3), 2, 1),
        (Coord::new(0, 0), 32, 32),
    ];

    for (origin, size_x, size_y) in cases {
        let coords = block(origin, size_x, size_y);
        let rid = derive_replication_mask(&coords).unwrap();
        assert_eq!(rid, ReplicationId::new(size_x - 1, size_y - 1));

        let expanded = expand_multicast_group(&ctx, origin, rid);
        let expected: HashSet<Coord> = coords.into_iter().collect();
        assert_eq!(expanded, expected, "block at {origin} of {size_x}x{size_y}");
    }
}

#[test]
fn test_unaligned_targets_expand_to_superset() {
    let ctx = ctx();
    let coords = [Coord::new(1, 0), Coord::new(2, 0), Coord::new(1, 1)];

    let rid = derive_replication_mask(&coords).unwrap();
    assert_eq!(rid, ReplicationId::new(0b11, 0b01));

    let expanded = expand_multicast_group(&ctx, coords[0], rid);
    assert_eq!(expanded.len(), 8);
    assert!(coords.iter().all(|c| expanded.contains(c)));
}

#[test]
fn test_placement_sized_by_cost_fits_containing_cluster() {
    let ctx = ctx();

    for n_core in [1u32, 3, 4, 5, 16, 17, 64, 200, 1024] {
        let cost = compute_routing_cost(&ctx, n_core);
        let level = cost.minimal_containing_level();

        // A cluster at `level` spans 4^level leaves.
        let capacity = 4u64.pow(level.index() as u32);
        assert!(cost.n_l0 <= capacity, "n_core={n_core} cost={cost} level={level}");
        assert!(cost.n_l0 >= u64::from(n_core));
    }
}

#[test]
fn test_cluster_path_addresses_its_leaves() {
    let ctx = ctx();
    let cluster = RoutingCoord::new(
        RoutingDirection::X1Y0,
        RoutingDirection::X0Y1,
        RoutingDirection::X1Y1,
        RoutingDirection::Any,
        RoutingDirection::Any,
    )
    .unwrap();
    assert_eq!(cluster.level(), RoutingLevel::L2);

    let mut leaves = Vec::new();
    for l1 in ctx.child_directions() {
        for l0 in ctx.child_directions() {
            let mut path = *cluster.path();
            path[3] = *l1;
            path[4] = *l0;
            leaves.push(RoutingCoord::from_path(path).unwrap().coordinate().unwrap());
        }
    }

    let rid = derive_replication_mask(&leaves).unwrap();
    assert_eq!(rid, ReplicationId::new(0b11, 0b11));

    let expanded = expand_multicast_group(&ctx, leaves[0], rid);
    assert_eq!(expanded, leaves.iter().copied().collect::<HashSet<_>>());
}

#[test]
fn test_operations_are_thread_safe() {
    let ctx = Arc::new(ctx());
    let handles: Vec<_> = (0..4u32)
        .map(|i| {
            let ctx = Arc::clone(&ctx);
            thread::spawn(move || {
                let base = Coord::new(i * 8, i * 8);
                let coords = block(base, 8, 8);
                let rid = derive_replication_mask(&coords).unwrap();
                expand_multicast_group(&ctx, base, rid).len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 64);
    }
}
