//! Epidemic message router with direct-delivery preference.
//!
//! Per tick the router decides whether to start one message transfer over an
//! established contact:
//!
//! 1. **Tier 1 — deliver.**  Any buffered message whose final destination is
//!    a connected peer goes to that peer first.
//! 2. **Tier 2 — flood.**  Otherwise every buffered message is offered to
//!    every connected peer; the substrate's admission policy (which includes
//!    "peer already has it") accepts or rejects each proposal.
//!
//! Direct delivery always preempting the flood bounds unnecessary
//! network-wide copies while epidemic spread still guarantees eventual
//! delivery when no direct contact exists.  At most one transfer starts per
//! tick, and none while one is already in progress.

use opn_core::{AgentId, MessageId};

use crate::substrate::ContactSubstrate;

/// The transfer a router tick kicked off.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartedTransfer {
    pub peer: AgentId,
    pub message: MessageId,
}

/// The flooding router.  Stateless between ticks: every decision is a total
/// function of the substrate's current state (plus the substrate's own
/// admission answers), so replication is a plain copy.
#[derive(Copy, Clone, Debug, Default)]
pub struct EpidemicRouter;

impl EpidemicRouter {
    pub fn new() -> Self {
        EpidemicRouter
    }

    /// The per-tick decision.  Returns the transfer that was started, if any.
    pub fn update(&self, substrate: &mut dyn ContactSubstrate) -> Option<StartedTransfer> {
        if substrate.is_transferring() || !substrate.can_start_transfer() {
            return None; // transferring, don't try other connections yet
        }

        // Try first the messages that can be delivered to a final recipient.
        if let Some(started) = self.exchange_deliverable(substrate) {
            return Some(started); // started a transfer, don't try others
        }

        // Then try any/all message to any/all connection.
        self.flood_all(substrate)
    }

    /// Tier 1: direct delivery to a connected final recipient.
    fn exchange_deliverable(
        &self,
        substrate: &mut dyn ContactSubstrate,
    ) -> Option<StartedTransfer> {
        for peer in substrate.connections() {
            for message in substrate.deliverable_messages_to(peer) {
                if substrate.start_transfer(peer, message) {
                    return Some(StartedTransfer { peer, message });
                }
            }
        }
        None
    }

    /// Tier 2: offer every local message to every connection; the first
    /// proposal the substrate admits wins.
    fn flood_all(&self, substrate: &mut dyn ContactSubstrate) -> Option<StartedTransfer> {
        let messages: Vec<MessageId> = substrate.all_local_messages();
        for peer in substrate.connections() {
            for &message in &messages {
                if substrate.start_transfer(peer, message) {
                    return Some(StartedTransfer { peer, message });
                }
            }
        }
        None
    }
}
