//! Message vocabulary shared with substrate implementations.

use opn_core::{AgentId, MessageId, Tick};

/// A message travelling through the network.
///
/// Owned, stored, copied, and evicted entirely by the contact substrate —
/// the router only ever refers to messages by [`MessageId`].  The struct
/// exists so substrate implementations and drivers share one definition of
/// what a message is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    pub id: MessageId,
    /// The agent that created the message.
    pub origin: AgentId,
    /// The final recipient.
    pub destination: AgentId,
    /// Tick at which the message was created.
    pub created: Tick,
}

impl Message {
    pub fn new(id: MessageId, origin: AgentId, destination: AgentId, created: Tick) -> Self {
        Self { id, origin, destination, created }
    }
}
