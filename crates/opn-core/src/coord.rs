//! Projected-plane coordinate type.
//!
//! Simulated areas are metric x/y planes (map data is projected before it
//! reaches the simulator), so `Location` is a plain `f64` pair rather than a
//! lat/lon type.  It is `Copy`: every hand-off across a behavior boundary is
//! a by-value copy, so no reader can mutate another owner's coordinate.

/// A point on the simulation plane, in metres.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`, in metres.
    #[inline]
    pub fn distance(self, other: Location) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// The point shifted by `(dx, dy)`.
    #[inline]
    pub fn translated(self, dx: f64, dy: f64) -> Location {
        Location { x: self.x + dx, y: self.y + dy }
    }

    /// The point mirrored across the x-axis (`y → -y`).
    ///
    /// Map data whose source coordinate system grows downward arrives
    /// mirrored; external point lists must be flipped the same way before
    /// they can be compared against map nodes.
    #[inline]
    pub fn mirrored_y(self) -> Location {
        Location { x: self.x, y: -self.y }
    }

    /// Clamp both components into `[0, max_x] × [0, max_y]`.
    pub fn clamped(self, max_x: f64, max_y: f64) -> Location {
        Location {
            x: self.x.clamp(0.0, max_x),
            y: self.y.clamp(0.0, max_y),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
