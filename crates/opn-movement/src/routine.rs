//! The daily-routine orchestrator.
//!
//! A `Routine` owns one [`PlaceBehavior`] per composed place plus one shared
//! transfer behavior and runs the top-level state machine over
//! `At(place) | To(place)` tags.  Transitions fire only on readiness
//! signals, never on timeouts: however many ticks a dwell or a transfer
//! takes, the routine waits.
//!
//! # Branch tables
//!
//! Each place carries an ordered list of outgoing [`Branch`]es.  When the
//! place reports ready, candidates are evaluated **in declared order**: each
//! draws one independent uniform sample and the first whose sample falls
//! below its probability wins.  The **last entry is the default** and draws
//! no sample.  This is a short-circuit Bernoulli cascade, not a normalized
//! distribution — earlier entries are favored beyond their nominal
//! probability, and that bias is part of the model's observed behavior.
//! Do not normalize.

use opn_core::{AgentRng, Location, Tick};
use opn_map::MovementPath;

use crate::place::PlaceBehavior;
use crate::switchable::{Movement, TransferMovement};
use crate::{MovementError, MovementResult};

// ── RoutineState ──────────────────────────────────────────────────────────────

/// The orchestrator's top-level tag.  Exactly one is active at a time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoutineState {
    /// Settled at (or travelling within) place `i` — its behavior is live.
    At(usize),
    /// Being carried toward place `i` — the transfer behavior is live.
    To(usize),
}

// ── Branch ────────────────────────────────────────────────────────────────────

/// One outgoing candidate in a place's branch table.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Branch {
    /// Index of the destination place within the routine.
    pub target: usize,
    /// Bernoulli probability for this candidate's draw.  Ignored on the
    /// table's final (default) entry.
    pub prob: f64,
    /// Optional seconds-of-day deadline: once the simulated day has passed
    /// this, the candidate is skipped without drawing.
    pub until: Option<u64>,
}

impl Branch {
    pub fn new(target: usize, prob: f64) -> Self {
        Self { target, prob, until: None }
    }

    /// Gate the candidate to the part of the day before `secs_of_day`.
    pub fn until(mut self, secs_of_day: u64) -> Self {
        self.until = Some(secs_of_day);
        self
    }
}

/// Evaluate a branch table: per-candidate independent draws in declared
/// order, first hit wins, final entry is the default.  `None` only for an
/// empty table (excluded at routine construction).
pub(crate) fn select_branch(
    table:    &[Branch],
    now:      Tick,
    mut draw: impl FnMut() -> f64,
) -> Option<usize> {
    let (default, candidates) = table.split_last()?;
    for branch in candidates {
        if let Some(limit) = branch.until {
            if now.secs_of_day() >= limit {
                continue;
            }
        }
        if draw() < branch.prob {
            return Some(branch.target);
        }
    }
    Some(default.target)
}

// ── Routine ───────────────────────────────────────────────────────────────────

/// Composes place behaviors and a transfer behavior into one probabilistic
/// day cycle.  Implements [`Movement`] itself, so a driver treats an
/// orchestrated agent exactly like a single behavior.
pub struct Routine<T: TransferMovement> {
    places:   Vec<PlaceBehavior>,
    /// Outgoing branch table per place, same indexing as `places`.
    branches: Vec<Vec<Branch>>,
    transfer: T,
    /// The place an agent's day starts at.
    home:     usize,
    state:    RoutineState,
}

impl<T: TransferMovement> std::fmt::Debug for Routine<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Routine")
            .field("places", &self.places)
            .field("branches", &self.branches)
            .field("home", &self.home)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<T: TransferMovement> Routine<T> {
    pub fn new(
        places:   Vec<PlaceBehavior>,
        branches: Vec<Vec<Branch>>,
        transfer: T,
        home:     usize,
    ) -> MovementResult<Self> {
        if places.is_empty() {
            return Err(MovementError::Config("a routine needs at least one place".into()));
        }
        if branches.len() != places.len() {
            return Err(MovementError::Config(format!(
                "{} branch tables for {} places",
                branches.len(),
                places.len()
            )));
        }
        if home >= places.len() {
            return Err(MovementError::Config(format!(
                "home index {home} out of range for {} places",
                places.len()
            )));
        }
        for (i, table) in branches.iter().enumerate() {
            if table.is_empty() {
                return Err(MovementError::Config(format!(
                    "place {} ({}) has an empty branch table",
                    i,
                    places[i].kind()
                )));
            }
            for branch in table {
                if branch.target >= places.len() {
                    return Err(MovementError::Config(format!(
                        "branch target {} out of range for {} places",
                        branch.target,
                        places.len()
                    )));
                }
                if !(branch.prob.is_finite() && (0.0..=1.0).contains(&branch.prob)) {
                    return Err(MovementError::Config(format!(
                        "branch probability {} must lie in [0, 1]",
                        branch.prob
                    )));
                }
            }
        }
        Ok(Self {
            places,
            branches,
            transfer,
            home,
            state: RoutineState::At(home),
        })
    }

    pub fn state(&self) -> RoutineState {
        self.state
    }

    pub fn places(&self) -> &[PlaceBehavior] {
        &self.places
    }

    pub fn transfer(&self) -> &T {
        &self.transfer
    }

    /// Evaluate at most one state transition for this tick.
    ///
    /// `At(i)` advances only when place `i` reports ready; `To(j)` advances
    /// only when the transfer reports ready.  A live behavior yielding
    /// nothing for any number of consecutive ticks changes no state here.
    fn advance(&mut self, now: Tick, rng: &mut AgentRng) {
        match self.state {
            RoutineState::At(i) => {
                if !self.places[i].is_ready() {
                    return;
                }
                let from = self.places[i].assigned_place();
                let Some(target) = select_branch(&self.branches[i], now, || rng.random::<f64>())
                else {
                    return;
                };
                if target == i {
                    // Linger: restart a fresh visit in place, no transfer.
                    self.places[i].relocate(from);
                    return;
                }
                let dest = self.places[target].assigned_place();
                self.transfer.relocate(from);
                self.transfer.set_route(from, dest);
                self.state = RoutineState::To(target);
            }
            RoutineState::To(j) => {
                if !self.transfer.is_ready() {
                    return;
                }
                // Hand the agent over wherever the transfer dropped it.
                let arrived = self
                    .transfer
                    .current_location()
                    .unwrap_or_else(|| self.places[j].assigned_place());
                self.places[j].relocate(arrived);
                self.state = RoutineState::At(j);
            }
        }
    }

    /// Replicate for another agent: places re-draw their assignments, the
    /// transfer is cloned, and the routine starts a fresh day at home.
    pub fn replicate(&self, rng: &mut AgentRng) -> MovementResult<Self>
    where
        T: Clone,
    {
        let places = self
            .places
            .iter()
            .map(|p| p.replicate(rng))
            .collect::<MovementResult<Vec<_>>>()?;
        Ok(Self {
            places,
            branches: self.branches.clone(),
            transfer: self.transfer.clone(),
            home:     self.home,
            state:    RoutineState::At(self.home),
        })
    }
}

impl<T: TransferMovement> Movement for Routine<T> {
    /// Starts the day settled at the home place: the home behavior is
    /// relocated onto its own assignment and that coordinate is returned,
    /// so the agent begins at a valid place rather than an arbitrary point.
    fn initial_location(&mut self, _rng: &mut AgentRng) -> Location {
        let assignment = self.places[self.home].assigned_place();
        self.places[self.home].relocate(assignment);
        assignment
    }

    fn next_path(&mut self, now: Tick, rng: &mut AgentRng) -> Option<MovementPath> {
        self.advance(now, rng);
        match self.state {
            RoutineState::At(i) => self.places[i].next_path(now, rng),
            RoutineState::To(_) => self.transfer.next_path(now, rng),
        }
    }

    /// A routine is never "ready" — it is the top of the behavior stack.
    fn is_ready(&self) -> bool {
        false
    }

    fn current_location(&self) -> Option<Location> {
        match self.state {
            RoutineState::At(i) => self.places[i].current_location(),
            RoutineState::To(_) => self.transfer.current_location(),
        }
    }

    fn relocate(&mut self, to: Location) {
        match self.state {
            RoutineState::At(i) => self.places[i].relocate(to),
            RoutineState::To(_) => self.transfer.relocate(to),
        }
    }
}
