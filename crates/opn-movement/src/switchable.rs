//! The switchable-movement capability traits.
//!
//! Every behavior a routine can hand an agent to — place visits and
//! transfers alike — exposes the same small surface: produce the next leg of
//! movement, report readiness, tell where the agent is, and accept a
//! relocation.  The routine switches the "live" behavior by relocating the
//! next one to wherever the previous one left the agent.

use opn_core::{AgentRng, Location, Tick};
use opn_map::MovementPath;

/// A behavior that can be the agent's live movement source.
pub trait Movement {
    /// One-time starting position for the agent, drawn before any ticks.
    /// Also records the position as the behavior's current location.
    fn initial_location(&mut self, rng: &mut AgentRng) -> Location;

    /// The per-tick step function.
    ///
    /// Returns the next leg of movement, or `None` when there is nothing to
    /// do this tick — the agent is dwelling, or a collaborator (map, path
    /// finder) cannot answer yet.  A `None` yield is always retried by the
    /// driver on the next tick; it never signals an error and never advances
    /// higher-level state.
    fn next_path(&mut self, now: Tick, rng: &mut AgentRng) -> Option<MovementPath>;

    /// `true` once the behavior's current activity (travel or dwell) is
    /// complete and control may be handed to the next behavior.
    fn is_ready(&self) -> bool;

    /// Where this behavior last left the agent.  `None` before the first
    /// placement.
    fn current_location(&self) -> Option<Location>;

    /// Hand the agent to this behavior at `to`: sets the current position
    /// and restarts the behavior's cycle from its travelling phase,
    /// clearing any readiness.
    fn relocate(&mut self, to: Location);
}

/// A movement behavior that carries an agent between two arbitrary
/// endpoints — the glue a routine uses between place visits.
///
/// Implementations are external (bus lines, walking, teleports for tests);
/// the routine programs the endpoints and then drives the behavior through
/// [`Movement`] until it reports ready.
pub trait TransferMovement: Movement {
    /// Program the next carry: pick the agent up at `from`, deliver at `to`.
    fn set_route(&mut self, from: Location, to: Location);
}
