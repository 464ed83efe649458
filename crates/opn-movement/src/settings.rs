//! Movement configuration records.
//!
//! These are typed equivalents of the recognized option keys; parsing a
//! settings file into them is the application's job (serde derives are
//! available behind the `serde` feature).  Validation happens when a
//! behavior is constructed — a behavior is never built from a half-valid
//! record.

use opn_core::{AgentRng, Location};

use crate::{MovementError, MovementResult};

// ── PlaceKind ─────────────────────────────────────────────────────────────────

/// The named place varieties a routine composes.
///
/// Kinds do not change the visit state machine — they exist so settings,
/// errors, and logs can talk about "the lecture place" instead of an index.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PlaceKind {
    /// Shared transit hub (u-bahn station, bus terminal).
    TransitHub,
    Lecture,
    Library,
    Seminar,
    Office,
    Home,
}

impl PlaceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PlaceKind::TransitHub => "transit_hub",
            PlaceKind::Lecture    => "lecture",
            PlaceKind::Library    => "library",
            PlaceKind::Seminar    => "seminar",
            PlaceKind::Office     => "office",
            PlaceKind::Home       => "home",
        }
    }
}

impl std::fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DwellWindow ───────────────────────────────────────────────────────────────

/// Dwell-duration bound in simulated seconds (the `<place>Length` pair).
///
/// Each visit samples one concrete wait time uniformly in `[lower, upper]`;
/// the draw is frozen for the duration of that visit.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DwellWindow {
    pub lower: f64,
    pub upper: f64,
}

impl DwellWindow {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// One uniform draw from the window.
    pub fn sample(&self, rng: &mut AgentRng) -> f64 {
        (self.upper - self.lower) * rng.random::<f64>() + self.lower
    }

    pub(crate) fn validate(&self) -> MovementResult<()> {
        if !(self.lower.is_finite() && self.upper.is_finite()) {
            return Err(MovementError::Config("dwell bounds must be finite".into()));
        }
        if self.lower < 0.0 || self.upper < self.lower {
            return Err(MovementError::Config(format!(
                "dwell window [{}, {}] must satisfy 0 <= lower <= upper",
                self.lower, self.upper
            )));
        }
        Ok(())
    }
}

// ── WorldSettings ─────────────────────────────────────────────────────────────

/// Simulation-area geometry and travel-speed range, shared by every
/// behavior of an agent population.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldSettings {
    /// Extent of the simulated area along x, metres.
    pub width: f64,
    /// Extent of the simulated area along y, metres.
    pub height: f64,
    /// Slowest sampled travel speed, m/s.
    pub min_speed: f64,
    /// Fastest sampled travel speed, m/s.
    pub max_speed: f64,
}

impl WorldSettings {
    /// Uniform speed draw from `[min_speed, max_speed]`, made once per
    /// travel leg.
    pub fn sample_speed(&self, rng: &mut AgentRng) -> f64 {
        (self.max_speed - self.min_speed) * rng.random::<f64>() + self.min_speed
    }

    /// A uniform draw over the world's bounding rectangle.
    pub fn sample_point(&self, rng: &mut AgentRng) -> Location {
        Location::new(
            rng.random::<f64>() * self.width,
            rng.random::<f64>() * self.height,
        )
    }

    pub(crate) fn validate(&self) -> MovementResult<()> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(MovementError::Config(format!(
                "world extent {}x{} must be positive",
                self.width, self.height
            )));
        }
        if !(self.min_speed >= 0.0 && self.max_speed >= self.min_speed) {
            return Err(MovementError::Config(format!(
                "speed range [{}, {}] must satisfy 0 <= min <= max",
                self.min_speed, self.max_speed
            )));
        }
        Ok(())
    }
}

// ── PlaceSettings ─────────────────────────────────────────────────────────────

/// Configuration record for one place behavior.
///
/// Option keys map onto the fields as:
///
/// | Key pattern          | Field            |
/// |----------------------|------------------|
/// | `<place>Length`      | `dwell`          |
/// | `nrOf<Places>`       | `nr_of_places`   |
/// | `<place>Size`        | `jitter_radius`  |
/// | `<place>Location`    | `fixed_location` |
///
/// A `<place>LocationsFile` key is resolved by the application into a
/// [`LocationSource`](opn_map::LocationSource) and passed to
/// [`PlaceBehavior::with_source`](crate::PlaceBehavior::with_source).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceSettings {
    pub kind: PlaceKind,

    /// Per-visit dwell-duration bound.
    pub dwell: DwellWindow,

    /// Bucket count for partition-based placement when neither a location
    /// list nor a fixed coordinate is supplied.
    #[cfg_attr(feature = "serde", serde(default = "default_nr_of_places"))]
    pub nr_of_places: u32,

    /// Scatter radius around the assignment applied to the final travel
    /// waypoint; `0.0` disables the jitter.
    #[cfg_attr(feature = "serde", serde(default))]
    pub jitter_radius: f64,

    /// A fixed assignment coordinate in the *source* frame (the
    /// `<place>Location` key); transformed into map space at construction.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fixed_location: Option<Location>,
}

#[cfg(feature = "serde")]
fn default_nr_of_places() -> u32 {
    1
}

impl PlaceSettings {
    pub fn new(kind: PlaceKind, dwell: DwellWindow) -> Self {
        Self {
            kind,
            dwell,
            nr_of_places: 1,
            jitter_radius: 0.0,
            fixed_location: None,
        }
    }

    /// Set the partition bucket count (`nrOf<Places>`).
    pub fn with_places(mut self, nr_of_places: u32) -> Self {
        self.nr_of_places = nr_of_places;
        self
    }

    /// Set the arrival scatter radius (`<place>Size`).
    pub fn with_jitter(mut self, radius: f64) -> Self {
        self.jitter_radius = radius;
        self
    }

    /// Pin the assignment to a fixed source-frame coordinate.
    pub fn at_fixed(mut self, location: Location) -> Self {
        self.fixed_location = Some(location);
        self
    }

    pub(crate) fn validate(&self) -> MovementResult<()> {
        self.dwell.validate()?;
        if self.nr_of_places == 0 {
            return Err(MovementError::Config(format!(
                "{}: nr_of_places must be at least 1",
                self.kind
            )));
        }
        if !(self.jitter_radius.is_finite() && self.jitter_radius >= 0.0) {
            return Err(MovementError::Config(format!(
                "{}: jitter radius {} must be a non-negative finite value",
                self.kind, self.jitter_radius
            )));
        }
        Ok(())
    }
}
