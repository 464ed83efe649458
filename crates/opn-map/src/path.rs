//! Speed-annotated waypoint lists handed from behaviors to the driver.

use opn_core::Location;

/// One leg of movement: an ordered waypoint list plus the speed at which the
/// agent walks it.
///
/// Behaviors produce a path, the external driver animates the agent along
/// it.  A **stationary** path (single waypoint, zero speed) parks the agent
/// in place — place behaviors emit one when a dwell completes so the driver
/// has something well-formed to hold the agent at.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementPath {
    /// Travel speed in metres per simulated second.
    pub speed: f64,
    waypoints: Vec<Location>,
}

impl MovementPath {
    /// An empty path to be filled with [`push`](Self::push).
    pub fn new(speed: f64) -> Self {
        Self { speed, waypoints: Vec::new() }
    }

    /// A single-waypoint path that keeps the agent at `at`.
    pub fn stationary(at: Location) -> Self {
        Self { speed: 0.0, waypoints: vec![at] }
    }

    /// Append a waypoint.
    pub fn push(&mut self, waypoint: Location) {
        self.waypoints.push(waypoint);
    }

    /// Waypoints in travel order.
    pub fn waypoints(&self) -> &[Location] {
        &self.waypoints
    }

    /// The final waypoint, if any.
    pub fn destination(&self) -> Option<Location> {
        self.waypoints.last().copied()
    }

    /// `true` if the path holds at most one waypoint (no distance to cover).
    pub fn is_stationary(&self) -> bool {
        self.waypoints.len() <= 1
    }

    /// Total polyline length in metres.
    pub fn length(&self) -> f64 {
        self.waypoints
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .sum()
    }
}
