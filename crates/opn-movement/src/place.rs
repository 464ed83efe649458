//! The two-phase place-visit state machine.
//!
//! One generic `PlaceBehavior` covers every place kind — transit hub,
//! lecture, library, seminar, office, home.  The kinds differ only in their
//! [`PlaceSettings`](crate::PlaceSettings); the machine itself is always:
//!
//! ```text
//! Travelling ──(route produced)──▶ AtPlace ──(dwell elapsed)──▶ Ready
//!      ▲                                                          │
//!      └───────────────────────── relocate ◀──────────────────────┘
//! ```
//!
//! A visit never moves backwards; only an explicit [`relocate`] restarts the
//! cycle.  Shared immutable configuration (settings, world geometry, map,
//! path finder, candidate location list) lives behind one `Arc` so
//! [`replicate`](PlaceBehavior::replicate) is cheap: a replica re-draws its
//! own assignment and starts with fresh mutable state.
//!
//! [`relocate`]: crate::Movement::relocate

use std::sync::Arc;

use opn_core::{AgentRng, Location, Tick};
use opn_map::{LocationSource, MovementPath, PathFinder, SimMap};

use crate::assign::{load_points, pick_partition, resolve_fixed};
use crate::settings::{PlaceKind, PlaceSettings, WorldSettings};
use crate::switchable::Movement;
use crate::MovementResult;

// ── VisitMode ─────────────────────────────────────────────────────────────────

/// Phase of the current visit cycle.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisitMode {
    /// Heading toward the assigned place.
    Travelling,
    /// Arrived; waiting out the frozen dwell draw.
    AtPlace,
    /// Dwell complete; holding position until relocated.
    Ready,
}

// ── Shared immutable configuration ────────────────────────────────────────────

/// Everything replicas of one place share.  Immutable after construction.
struct PlaceShared {
    settings:   PlaceSettings,
    world:      WorldSettings,
    map:        Arc<dyn SimMap>,
    pathfinder: Arc<dyn PathFinder>,
    /// Candidate assignments from an external source, already transformed
    /// into map space.  `None` → fixed/partition placement.
    locations:  Option<Arc<Vec<Location>>>,
    /// Fixed assignment coordinate, already transformed into map space.
    fixed:      Option<Location>,
}

// ── PlaceBehavior ─────────────────────────────────────────────────────────────

/// A single place's visit behavior for one agent.
pub struct PlaceBehavior {
    shared:     Arc<PlaceShared>,
    /// The coordinate this instance is bound to.  Never changes after
    /// construction.
    assignment: Location,
    mode:       VisitMode,
    position:   Option<Location>,
    entered_at: Option<Tick>,
    dwell_secs: Option<f64>,
}

impl std::fmt::Debug for PlaceBehavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaceBehavior")
            .field("assignment", &self.assignment)
            .field("mode", &self.mode)
            .field("position", &self.position)
            .field("entered_at", &self.entered_at)
            .field("dwell_secs", &self.dwell_secs)
            .finish_non_exhaustive()
    }
}

impl PlaceBehavior {
    /// Construct with partition-based or fixed-coordinate placement.
    pub fn new(
        settings:   PlaceSettings,
        world:      WorldSettings,
        map:        Arc<dyn SimMap>,
        pathfinder: Arc<dyn PathFinder>,
        rng:        &mut AgentRng,
    ) -> MovementResult<Self> {
        Self::build(settings, world, map, pathfinder, None, rng)
    }

    /// Construct with list-based placement from an external point source.
    ///
    /// The source is read once; its points are transformed into map space and
    /// each must resolve to a graph node.  Source failures, empty lists, and
    /// unmappable points abort construction.
    pub fn with_source(
        settings:   PlaceSettings,
        world:      WorldSettings,
        map:        Arc<dyn SimMap>,
        pathfinder: Arc<dyn PathFinder>,
        source:     &dyn LocationSource,
        rng:        &mut AgentRng,
    ) -> MovementResult<Self> {
        Self::build(settings, world, map, pathfinder, Some(source), rng)
    }

    fn build(
        settings:   PlaceSettings,
        world:      WorldSettings,
        map:        Arc<dyn SimMap>,
        pathfinder: Arc<dyn PathFinder>,
        source:     Option<&dyn LocationSource>,
        rng:        &mut AgentRng,
    ) -> MovementResult<Self> {
        settings.validate()?;
        world.validate()?;

        let locations = match source {
            Some(src) => Some(Arc::new(load_points(map.as_ref(), src)?)),
            None => None,
        };
        let fixed = match settings.fixed_location {
            Some(p) => Some(resolve_fixed(map.as_ref(), p)?),
            None => None,
        };

        let shared = Arc::new(PlaceShared {
            settings,
            world,
            map,
            pathfinder,
            locations,
            fixed,
        });
        let assignment = pick_assignment(&shared, rng)?;
        Ok(Self::fresh(shared, assignment))
    }

    fn fresh(shared: Arc<PlaceShared>, assignment: Location) -> Self {
        Self {
            shared,
            assignment,
            mode:       VisitMode::Travelling,
            position:   None,
            entered_at: None,
            dwell_secs: None,
        }
    }

    /// A new instance for another agent, sharing this one's immutable
    /// configuration but drawing its own assignment and starting a fresh
    /// visit cycle.
    pub fn replicate(&self, rng: &mut AgentRng) -> MovementResult<PlaceBehavior> {
        let assignment = pick_assignment(&self.shared, rng)?;
        Ok(Self::fresh(Arc::clone(&self.shared), assignment))
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The immutable coordinate this behavior is bound to — routines route
    /// other behaviors toward and away from it.
    pub fn assigned_place(&self) -> Location {
        self.assignment
    }

    pub fn kind(&self) -> PlaceKind {
        self.shared.settings.kind
    }

    pub fn mode(&self) -> VisitMode {
        self.mode
    }

    // ── Phase steps ───────────────────────────────────────────────────────

    /// Travelling phase: route from the current position to the assignment.
    ///
    /// `None` when the position or assignment cannot be resolved to graph
    /// nodes, or the path finder has no route yet — the caller retries next
    /// tick and no state changes.
    fn travel_leg(&mut self, rng: &mut AgentRng) -> Option<MovementPath> {
        let here = self.position?;
        let map = self.shared.map.as_ref();
        let from = map.node_at(here)?;
        let to = map.node_at(self.assignment)?;
        let nodes = self.shared.pathfinder.shortest_path(from, to)?;

        let mut path = MovementPath::new(self.shared.world.sample_speed(rng));
        for node in nodes {
            path.push(map.location_of(node));
        }

        // Arrival is logical: the position snaps to the assignment now and
        // the driver animates the returned path over the coming ticks.
        self.position = Some(self.assignment);
        self.mode = VisitMode::AtPlace;

        let radius = self.shared.settings.jitter_radius;
        if radius > 0.0 {
            let scattered = Location::new(
                self.assignment.x + (rng.random::<f64>() - 0.5) * radius,
                self.assignment.y + (rng.random::<f64>() - 0.5) * radius,
            )
            .clamped(self.shared.world.width, self.shared.world.height);
            path.push(scattered);
        }

        Some(path)
    }

    /// Dwelling phase: freeze one dwell draw on entry, idle until it
    /// elapses, then report ready with a stationary path.
    fn dwell_leg(&mut self, now: Tick, rng: &mut AgentRng) -> Option<MovementPath> {
        if self.dwell_secs.is_none() {
            self.dwell_secs = Some(self.shared.settings.dwell.sample(rng));
            self.entered_at = Some(now);
        }
        let entered = self.entered_at.unwrap_or(now);
        let frozen = self.dwell_secs.unwrap_or(0.0);

        if (now.since(entered) as f64) < frozen {
            return None;
        }
        self.mode = VisitMode::Ready;
        Some(MovementPath::stationary(self.position.unwrap_or(self.assignment)))
    }
}

impl Movement for PlaceBehavior {
    fn initial_location(&mut self, rng: &mut AgentRng) -> Location {
        let point = self.shared.world.sample_point(rng);
        self.position = Some(point);
        point
    }

    fn next_path(&mut self, now: Tick, rng: &mut AgentRng) -> Option<MovementPath> {
        match self.mode {
            VisitMode::Travelling => self.travel_leg(rng),
            VisitMode::AtPlace => self.dwell_leg(now, rng),
            VisitMode::Ready => {
                Some(MovementPath::stationary(self.position.unwrap_or(self.assignment)))
            }
        }
    }

    fn is_ready(&self) -> bool {
        self.mode == VisitMode::Ready
    }

    fn current_location(&self) -> Option<Location> {
        self.position
    }

    fn relocate(&mut self, to: Location) {
        self.position = Some(to);
        self.mode = VisitMode::Travelling;
        self.entered_at = None;
        self.dwell_secs = None;
    }
}

// ── Assignment picking ────────────────────────────────────────────────────────

/// Draw an assignment for a fresh instance.  Precedence: external list,
/// fixed coordinate, graph partition.
fn pick_assignment(shared: &PlaceShared, rng: &mut AgentRng) -> MovementResult<Location> {
    if let Some(list) = &shared.locations {
        return rng
            .choose(list.as_slice())
            .copied()
            .ok_or(crate::MovementError::EmptyLocations);
    }
    if let Some(fixed) = shared.fixed {
        return Ok(fixed);
    }
    pick_partition(shared.map.as_ref(), shared.settings.nr_of_places, rng)
}
