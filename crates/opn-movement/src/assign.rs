//! Place-assignment algorithms, shared by every place kind.
//!
//! An assignment is chosen exactly once per behavior instance (at
//! construction or replication) through one of three routes:
//!
//! 1. **List pick** — a point list from an external source, transformed into
//!    map space, one entry drawn uniformly.
//! 2. **Graph partition** — the node array split into `nr_of_places`
//!    equal-width index buckets; the node at a uniformly drawn bucket
//!    boundary becomes the assignment.
//! 3. **Fixed coordinate** — a configured point, transformed into map space.
//!
//! The random draw is separated from the index arithmetic so the arithmetic
//! stays a pure, directly testable function.

use opn_core::{AgentRng, Location, NodeId};
use opn_map::{world_point, LocationSource, SimMap};

use crate::{MovementError, MovementResult};

/// Node index at the boundary of `bucket` when `node_count` nodes are split
/// into `nr_of_places` equal-width buckets.
///
/// For every `bucket < nr_of_places` the result lies in
/// `[0, node_count - 1]`; with `nr_of_places == 1` the single bucket spans
/// the whole node list and the boundary is node 0.  When there are more
/// buckets than nodes the width collapses to zero and every bucket maps to
/// node 0.
pub(crate) fn partition_index(node_count: usize, nr_of_places: u32, bucket: u32) -> usize {
    debug_assert!(node_count > 0);
    debug_assert!(nr_of_places > 0 && bucket < nr_of_places);
    let width = node_count / nr_of_places as usize;
    (bucket as usize * width).min(node_count - 1)
}

/// Draw a partition-based assignment from the graph.
pub(crate) fn pick_partition(
    map:          &dyn SimMap,
    nr_of_places: u32,
    rng:          &mut AgentRng,
) -> MovementResult<Location> {
    let node_count = map.node_count();
    if node_count == 0 {
        return Err(MovementError::EmptyGraph);
    }
    let bucket = rng.gen_range(0..nr_of_places);
    let index = partition_index(node_count, nr_of_places, bucket);
    Ok(map.location_of(NodeId(index as u32)))
}

/// Read a source's point list, transform every point into map space, and
/// verify each resolves to a graph node.
///
/// Any failure — source error, empty list, unmappable point — aborts
/// construction; a place list is never silently partial.
pub(crate) fn load_points(
    map:    &dyn SimMap,
    source: &dyn LocationSource,
) -> MovementResult<Vec<Location>> {
    let raw = source.read_points()?;
    if raw.is_empty() {
        return Err(MovementError::EmptyLocations);
    }
    let mut points = Vec::with_capacity(raw.len());
    for p in raw {
        let mapped = world_point(map, p);
        if map.node_at(mapped).is_none() {
            return Err(MovementError::Unmapped(mapped));
        }
        points.push(mapped);
    }
    Ok(points)
}

/// Transform and validate a fixed assignment coordinate.
pub(crate) fn resolve_fixed(map: &dyn SimMap, point: Location) -> MovementResult<Location> {
    let mapped = world_point(map, point);
    if map.node_at(mapped).is_none() {
        return Err(MovementError::Unmapped(mapped));
    }
    Ok(mapped)
}
