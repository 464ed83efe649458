//! The `PathFinder` contract — shortest paths over the location graph.

use opn_core::NodeId;

/// Shortest-path oracle over the same graph a [`SimMap`](crate::SimMap)
/// exposes.
///
/// Implementations typically capture their graph at construction; Dijkstra,
/// contraction hierarchies, or precomputed tables are all fair game — the
/// simulator only consumes the ordered node list.
///
/// # Contract
///
/// - The returned list is ordered `from → … → to` and includes both
///   endpoints (a query with `from == to` yields `[from]`).
/// - `None` means "no route available *right now*": the nodes are
///   disconnected, unknown, or the graph is still loading.  Callers retry
///   on a later tick; `None` is not an error.
pub trait PathFinder: Send + Sync {
    fn shortest_path(&self, from: NodeId, to: NodeId) -> Option<Vec<NodeId>>;
}
