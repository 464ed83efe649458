//! The per-agent host and population spawning.

use opn_core::{AgentId, AgentRng, Location, Tick};
use opn_map::MovementPath;
use opn_movement::{Movement, MovementResult};
use opn_routing::{ContactSubstrate, EpidemicRouter, StartedTransfer};

/// What one host did during one tick.
#[derive(Debug, Clone)]
pub struct TickOutcome {
    /// Movement produced this tick, if the live behavior had any.
    pub path: Option<MovementPath>,
    /// Transfer the router started this tick, if any.
    pub transfer: Option<StartedTransfer>,
}

/// One mobile network node: movement behavior, router, and RNG.
pub struct Host<M: Movement> {
    id:       AgentId,
    movement: M,
    router:   EpidemicRouter,
    rng:      AgentRng,
}

impl<M: Movement> Host<M> {
    pub fn new(id: AgentId, movement: M, router: EpidemicRouter, rng: AgentRng) -> Self {
        Self { id, movement, router, rng }
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn movement(&self) -> &M {
        &self.movement
    }

    /// Place the agent for tick zero.  Call once before the first
    /// [`tick`](Self::tick).
    pub fn initial_location(&mut self) -> Location {
        self.movement.initial_location(&mut self.rng)
    }

    /// Advance this host by one tick.
    ///
    /// The movement step always completes before the router step — message
    /// decisions see the tick's settled movement state, never the other way
    /// around.  Both sub-steps are total: a tick can produce movement, a
    /// transfer, both, or neither.
    pub fn tick(&mut self, now: Tick, substrate: &mut dyn ContactSubstrate) -> TickOutcome {
        let path = self.movement.next_path(now, &mut self.rng);
        let transfer = self.router.update(substrate);
        TickOutcome { path, transfer }
    }
}

/// Build `count` independent hosts.
///
/// The factory is called once per agent with that agent's own seeded RNG;
/// it typically replicates a prototype behavior.  A factory error aborts the
/// whole population — half-built populations are not a thing.
pub fn spawn_population<M, F>(
    count:  u32,
    seed:   u64,
    router: EpidemicRouter,
    mut factory: F,
) -> MovementResult<Vec<Host<M>>>
where
    M: Movement,
    F: FnMut(AgentId, &mut AgentRng) -> MovementResult<M>,
{
    let mut hosts = Vec::with_capacity(count as usize);
    for i in 0..count {
        let id = AgentId(i);
        let mut rng = AgentRng::new(seed, id);
        let movement = factory(id, &mut rng)?;
        hosts.push(Host::new(id, movement, router, rng));
    }
    Ok(hosts)
}
