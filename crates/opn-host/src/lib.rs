//! `opn-host` — one mobile network node, assembled.
//!
//! A [`Host`] bundles what the external driver needs per agent: a movement
//! behavior (usually a [`Routine`](opn_movement::Routine)), an
//! [`EpidemicRouter`](opn_routing::EpidemicRouter), and the agent's own
//! deterministic RNG.  [`Host::tick`] is the once-per-tick entry point and
//! fixes the intra-tick order: the movement step runs to completion before
//! the router looks at the contact substrate.
//!
//! Populations are built with [`spawn_population`]: one factory call per
//! agent, each handed a freshly seeded [`AgentRng`](opn_core::AgentRng) —
//! the prototype/replicate pattern, with shared immutable configuration
//! living behind `Arc`s inside the replicated behaviors.

pub mod host;


pub use host::{spawn_population, Host, TickOutcome};
