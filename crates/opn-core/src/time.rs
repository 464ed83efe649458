//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter where **one tick is one
//! simulated second**.  The clock itself is owned by the external driver;
//! every per-tick entry point in the `opn-*` crates receives the current
//! tick as an argument.  Keeping time integral makes dwell arithmetic exact
//! (no floating-point drift) and comparisons O(1).

use std::fmt;

/// An absolute simulation tick counter (simulated seconds since start).
///
/// Stored as `u64`: at one tick per simulated second a `u64` outlasts any
/// conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }

    /// Seconds into the current simulated day (`self mod 86 400`).
    ///
    /// Day-cycle rules (e.g. "no more lectures after 18:00") compare against
    /// this rather than the absolute tick.
    #[inline]
    pub fn secs_of_day(self) -> u64 {
        self.0 % 86_400
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
