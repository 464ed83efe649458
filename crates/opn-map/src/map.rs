//! The `SimMap` contract — read-only access to the location graph.

use opn_core::{Location, NodeId};

/// Read-only view of the location graph an agent moves on.
///
/// Implementations are shared (`Arc<dyn SimMap>`) across every behavior of
/// every agent and are never mutated after construction.
///
/// # "Graph not ready"
///
/// A map that has not finished loading may answer [`node_at`](Self::node_at)
/// with `None` for every query.  Behaviors treat that as a transient
/// condition and retry on the next tick; it is never an error.
pub trait SimMap: Send + Sync {
    /// The graph node at (or, at the implementation's discretion, nearest
    /// to) `point`.  `None` if the point cannot be resolved.
    fn node_at(&self, point: Location) -> Option<NodeId>;

    /// Position of a graph node.
    ///
    /// # Panics
    /// May panic if `node` is out of range; callers only pass IDs obtained
    /// from the same map.
    fn location_of(&self, node: NodeId) -> Location;

    /// Number of nodes in the graph.
    fn node_count(&self) -> usize;

    /// Translation applied when the source data was projected into
    /// simulation coordinates.
    fn offset(&self) -> Location;

    /// `true` if the source coordinate system grew downward, i.e. external
    /// y-coordinates must be negated before comparison with map nodes.
    fn is_mirrored(&self) -> bool;
}

/// Transform an externally supplied point into this map's coordinate space:
/// mirror first, then translate by the map offset.
///
/// External point lists (and fixed configured coordinates) are given in the
/// source data's frame; map nodes are in the simulation frame.  Both place
/// assignment routes apply this before any node lookup.
pub fn world_point(map: &dyn SimMap, point: Location) -> Location {
    let p = if map.is_mirrored() { point.mirrored_y() } else { point };
    let off = map.offset();
    p.translated(off.x, off.y)
}
