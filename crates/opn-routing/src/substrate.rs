//! The `ContactSubstrate` contract — one node's view of its connections and
//! buffer.
//!
//! The substrate owns everything stateful about communication: which peers
//! are in radio range, whether a transfer is running, what the local buffer
//! holds, and whether a proposed transfer is admissible.  The router only
//! queries and proposes.

use opn_core::{AgentId, MessageId};

/// Per-node communication substrate, queried by the router every tick.
///
/// All query methods describe the state *at the current tick*; the substrate
/// refreshes them as contacts come and go.  [`start_transfer`] is the single
/// mutating entry point.
///
/// [`start_transfer`]: Self::start_transfer
pub trait ContactSubstrate {
    /// Peers currently connected to this node, in the substrate's stable
    /// iteration order.
    fn connections(&self) -> Vec<AgentId>;

    /// `true` while this node is the sender or receiver of an in-progress
    /// transfer.  A node carries at most one at a time.
    fn is_transferring(&self) -> bool;

    /// `true` if at least one connection could accept a new transfer this
    /// tick.
    fn can_start_transfer(&self) -> bool;

    /// Messages in the local buffer whose final destination is `peer`.
    fn deliverable_messages_to(&self, peer: AgentId) -> Vec<MessageId>;

    /// Every message currently held in the local buffer.
    fn all_local_messages(&self) -> Vec<MessageId>;

    /// Propose sending `message` to `peer`.  The substrate applies its
    /// admission policy — peer already holds the message, no capacity,
    /// connection busy — and returns whether the transfer actually started.
    fn start_transfer(&mut self, peer: AgentId, message: MessageId) -> bool;
}
