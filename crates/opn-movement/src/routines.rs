//! Named routine builders.
//!
//! These wire up the two canonical day cycles with their branch tables.
//! Custom compositions (different place sets, list-based placement via
//! [`PlaceBehavior::with_source`]) go through [`Routine::new`] directly.

use std::sync::Arc;

use opn_core::AgentRng;
use opn_map::{PathFinder, SimMap};

use crate::place::PlaceBehavior;
use crate::routine::{Branch, Routine};
use crate::settings::{PlaceSettings, WorldSettings};
use crate::switchable::TransferMovement;
use crate::MovementResult;

// ── Student day: hub / lecture / library / seminar ────────────────────────────

/// Place indices within a [`student_day`] routine.
pub const HUB: usize = 0;
pub const LECTURE: usize = 1;
pub const LIBRARY: usize = 2;
pub const SEMINAR: usize = 3;

/// Configuration for the four-place student day.
///
/// The cascade order below each place is fixed; the library is the default
/// destination everywhere except from the library itself, where the seminar
/// is.  `to_hub_prob` covers the `toUbahnProb`-style return leg.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StudentDaySettings {
    pub hub:     PlaceSettings,
    pub lecture: PlaceSettings,
    pub library: PlaceSettings,
    pub seminar: PlaceSettings,

    pub to_lecture_prob: f64,
    pub to_seminar_prob: f64,
    pub to_hub_prob:     f64,
}

/// Build the hub → lecture/library/seminar day cycle.  The day starts at
/// the hub.
pub fn student_day<T: TransferMovement>(
    settings:   StudentDaySettings,
    world:      WorldSettings,
    map:        Arc<dyn SimMap>,
    pathfinder: Arc<dyn PathFinder>,
    transfer:   T,
    rng:        &mut AgentRng,
) -> MovementResult<Routine<T>> {
    let places = vec![
        PlaceBehavior::new(settings.hub, world, Arc::clone(&map), Arc::clone(&pathfinder), rng)?,
        PlaceBehavior::new(settings.lecture, world, Arc::clone(&map), Arc::clone(&pathfinder), rng)?,
        PlaceBehavior::new(settings.library, world, Arc::clone(&map), Arc::clone(&pathfinder), rng)?,
        PlaceBehavior::new(settings.seminar, world, map, pathfinder, rng)?,
    ];

    let branches = vec![
        // At the hub.
        vec![
            Branch::new(LECTURE, settings.to_lecture_prob),
            Branch::new(SEMINAR, settings.to_seminar_prob),
            Branch::new(LIBRARY, 1.0),
        ],
        // At a lecture.
        vec![
            Branch::new(HUB, settings.to_hub_prob),
            Branch::new(SEMINAR, settings.to_seminar_prob),
            Branch::new(LIBRARY, 1.0),
        ],
        // At the library.
        vec![
            Branch::new(HUB, settings.to_hub_prob),
            Branch::new(LECTURE, settings.to_lecture_prob),
            Branch::new(SEMINAR, 1.0),
        ],
        // At a seminar.
        vec![
            Branch::new(HUB, settings.to_hub_prob),
            Branch::new(LECTURE, settings.to_lecture_prob),
            Branch::new(LIBRARY, 1.0),
        ],
    ];

    Routine::new(places, branches, transfer, HUB)
}

// ── Office day: home / office ─────────────────────────────────────────────────

/// Place indices within an [`office_day`] routine.
pub const HOME: usize = 0;
pub const OFFICE: usize = 1;

/// Configuration for the two-place commute day.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OfficeDaySettings {
    pub home:   PlaceSettings,
    pub office: PlaceSettings,

    /// Probability of starting another work block instead of heading home.
    /// `0.0` disables the loop.
    pub keep_working_prob: f64,
    /// Seconds-of-day deadline after which the keep-working branch is no
    /// longer considered.
    pub day_end: Option<u64>,
}

/// Build the home ⇄ office day cycle.  The day starts at home.
pub fn office_day<T: TransferMovement>(
    settings:   OfficeDaySettings,
    world:      WorldSettings,
    map:        Arc<dyn SimMap>,
    pathfinder: Arc<dyn PathFinder>,
    transfer:   T,
    rng:        &mut AgentRng,
) -> MovementResult<Routine<T>> {
    let places = vec![
        PlaceBehavior::new(settings.home, world, Arc::clone(&map), Arc::clone(&pathfinder), rng)?,
        PlaceBehavior::new(settings.office, world, map, pathfinder, rng)?,
    ];

    let mut at_office = Vec::new();
    if settings.keep_working_prob > 0.0 {
        let mut keep = Branch::new(OFFICE, settings.keep_working_prob);
        if let Some(end) = settings.day_end {
            keep = keep.until(end);
        }
        at_office.push(keep);
    }
    at_office.push(Branch::new(HOME, 1.0));

    let branches = vec![
        // At home: always commute to the office.
        vec![Branch::new(OFFICE, 1.0)],
        at_office,
    ];

    Routine::new(places, branches, transfer, HOME)
}
