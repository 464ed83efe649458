//! `opn-movement` — where agents go: place visits and daily routines.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                        |
//! |----------------|-----------------------------------------------------------------|
//! | [`switchable`] | `Movement` / `TransferMovement` traits                          |
//! | [`settings`]   | `WorldSettings`, `PlaceSettings`, `PlaceKind`, `DwellWindow`    |
//! | [`assign`]     | place-assignment algorithms (list pick, graph partition)        |
//! | [`place`]      | `PlaceBehavior`, `VisitMode` — the two-phase visit machine      |
//! | [`routine`]    | `Routine`, `RoutineState`, `Branch` — the day orchestrator      |
//! | [`routines`]   | named routine builders (`student_day`, `office_day`)            |
//! | [`error`]      | `MovementError`, `MovementResult<T>`                            |
//!
//! # Model
//!
//! A **place behavior** drives an agent to its assigned coordinate, dwells
//! there for a sampled duration, then reports readiness.  A **routine**
//! composes several place behaviors plus one transfer behavior into a
//! probabilistic day cycle: whenever the live place reports ready, the
//! routine rolls its branch table, programs the transfer with the two
//! endpoints, and hands control over; when the transfer reports ready it
//! hands control to the destination place for a fresh visit.
//!
//! Everything here is per-tick and pull-based: the external driver calls
//! [`Movement::next_path`] once per agent per tick with the current
//! [`Tick`](opn_core::Tick); a `None` yield means "nothing new, ask again
//! next tick" and never advances any state machine.

pub mod assign;
pub mod error;
pub mod place;
pub mod routine;
pub mod routines;
pub mod settings;
pub mod switchable;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{MovementError, MovementResult};
pub use place::{PlaceBehavior, VisitMode};
pub use routine::{Branch, Routine, RoutineState};
pub use settings::{DwellWindow, PlaceKind, PlaceSettings, WorldSettings};
pub use switchable::{Movement, TransferMovement};
