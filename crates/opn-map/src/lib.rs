//! `opn-map` — contracts toward the location graph and external point data.
//!
//! The simulator never builds maps or computes shortest paths itself; it
//! consumes them through the traits defined here.  Concrete graph formats,
//! spatial indexes, and file readers live in the application (or in test
//! fakes).
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`map`]        | `SimMap` trait — node lookup + coordinate-system metadata |
//! | [`pathfinder`] | `PathFinder` trait — shortest paths between graph nodes   |
//! | [`path`]       | `MovementPath` — speed-annotated waypoint list            |
//! | [`source`]     | `LocationSource` trait — external point lists             |
//! | [`error`]      | `MapError`, `MapResult<T>`                                |

pub mod error;
pub mod map;
pub mod path;
pub mod pathfinder;
pub mod source;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{MapError, MapResult};
pub use map::{world_point, SimMap};
pub use path::MovementPath;
pub use pathfinder::PathFinder;
pub use source::LocationSource;
