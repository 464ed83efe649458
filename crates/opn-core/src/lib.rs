//! `opn-core` — foundational types for the `opn` opportunistic-network
//! simulator.
//!
//! This crate is a dependency of every other `opn-*` crate.  It intentionally
//! has no `opn-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                      |
//! |-----------|-----------------------------------------------|
//! | [`coord`] | `Location` — projected-plane 2D coordinate    |
//! | [`ids`]   | `AgentId`, `NodeId`, `MessageId`              |
//! | [`time`]  | `Tick` — the simulated-seconds counter        |
//! | [`rng`]   | `AgentRng` — per-agent deterministic RNG      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod coord;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use coord::Location;
pub use ids::{AgentId, MessageId, NodeId};
pub use rng::AgentRng;
pub use time::Tick;
