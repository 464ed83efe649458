//! Unit tests for opn-routing.

use std::collections::{HashMap, HashSet};

use opn_core::{AgentId, MessageId, Tick};

use crate::{ContactSubstrate, EpidemicRouter, Message, StartedTransfer};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// In-memory substrate: a fixed peer set, a message buffer, and an admission
/// policy that rejects proposals the peer already holds.
struct FakeSubstrate {
    transferring: bool,
    can_start:    bool,
    peers:        Vec<AgentId>,
    buffer:       Vec<Message>,
    peer_holds:   HashMap<AgentId, HashSet<MessageId>>,
    started:      Vec<StartedTransfer>,
}

impl FakeSubstrate {
    fn new(peers: Vec<AgentId>, buffer: Vec<Message>) -> Self {
        Self {
            transferring: false,
            can_start:    true,
            peers,
            buffer,
            peer_holds:   HashMap::new(),
            started:      Vec::new(),
        }
    }

    fn peer_already_has(&mut self, peer: AgentId, message: MessageId) {
        self.peer_holds.entry(peer).or_default().insert(message);
    }
}

impl ContactSubstrate for FakeSubstrate {
    fn connections(&self) -> Vec<AgentId> {
        self.peers.clone()
    }

    fn is_transferring(&self) -> bool {
        self.transferring
    }

    fn can_start_transfer(&self) -> bool {
        self.can_start
    }

    fn deliverable_messages_to(&self, peer: AgentId) -> Vec<MessageId> {
        self.buffer
            .iter()
            .filter(|m| m.destination == peer)
            .map(|m| m.id)
            .collect()
    }

    fn all_local_messages(&self) -> Vec<MessageId> {
        self.buffer.iter().map(|m| m.id).collect()
    }

    fn start_transfer(&mut self, peer: AgentId, message: MessageId) -> bool {
        if self
            .peer_holds
            .get(&peer)
            .is_some_and(|held| held.contains(&message))
        {
            return false;
        }
        self.started.push(StartedTransfer { peer, message });
        self.transferring = true;
        self.peer_holds.entry(peer).or_default().insert(message);
        true
    }
}

fn msg(id: u32, origin: u32, destination: u32) -> Message {
    Message::new(MessageId(id), AgentId(origin), AgentId(destination), Tick(0))
}

// ── Gating ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod gating {
    use super::*;

    #[test]
    fn idle_while_transferring() {
        let mut sub = FakeSubstrate::new(vec![AgentId(1)], vec![msg(0, 0, 1)]);
        sub.transferring = true;
        assert!(EpidemicRouter::new().update(&mut sub).is_none());
        assert!(sub.started.is_empty());
    }

    #[test]
    fn idle_when_no_connection_can_start() {
        let mut sub = FakeSubstrate::new(vec![AgentId(1)], vec![msg(0, 0, 1)]);
        sub.can_start = false;
        assert!(EpidemicRouter::new().update(&mut sub).is_none());
        assert!(sub.started.is_empty());
    }

    #[test]
    fn nothing_buffered_starts_nothing() {
        let mut sub = FakeSubstrate::new(vec![AgentId(1), AgentId(2)], vec![]);
        assert!(EpidemicRouter::new().update(&mut sub).is_none());
        assert!(sub.started.is_empty());
    }
}

// ── Tier ordering ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod tiering {
    use super::*;

    #[test]
    fn direct_delivery_preempts_flood() {
        // Connected to an unrelated peer (listed first) and to the final
        // recipient.  The direct transfer must win, and nothing else may
        // start in the same tick.
        let recipient = AgentId(7);
        let bystander = AgentId(3);
        let m = msg(0, 1, 7);
        let mut sub = FakeSubstrate::new(vec![bystander, recipient], vec![m]);

        let started = EpidemicRouter::new().update(&mut sub).unwrap();
        assert_eq!(started, StartedTransfer { peer: recipient, message: m.id });
        assert_eq!(sub.started.len(), 1);
    }

    #[test]
    fn deliverable_beats_earlier_flood_candidate() {
        // m0 is only floodable; m1 can be delivered to the connected peer.
        // Tier 1 must pick m1 even though m0 sits first in the buffer.
        let peer = AgentId(2);
        let m0 = msg(0, 1, 9);
        let m1 = msg(1, 1, 2);
        let mut sub = FakeSubstrate::new(vec![peer], vec![m0, m1]);

        let started = EpidemicRouter::new().update(&mut sub).unwrap();
        assert_eq!(started.message, m1.id);
    }

    #[test]
    fn floods_when_no_direct_contact() {
        // Destination 9 is not connected; the message floods to the first
        // peer that admits it.
        let m = msg(0, 1, 9);
        let mut sub = FakeSubstrate::new(vec![AgentId(2), AgentId(3)], vec![m]);

        let started = EpidemicRouter::new().update(&mut sub).unwrap();
        assert_eq!(started, StartedTransfer { peer: AgentId(2), message: m.id });
        assert_eq!(sub.started.len(), 1);
    }
}

// ── Admission and single-transfer ─────────────────────────────────────────────

#[cfg(test)]
mod admission {
    use super::*;

    #[test]
    fn flood_skips_peers_that_already_hold_the_copy() {
        let m = msg(0, 1, 9);
        let mut sub = FakeSubstrate::new(vec![AgentId(2), AgentId(3)], vec![m]);
        sub.peer_already_has(AgentId(2), m.id);

        let started = EpidemicRouter::new().update(&mut sub).unwrap();
        assert_eq!(started.peer, AgentId(3));
    }

    #[test]
    fn at_most_one_transfer_per_tick() {
        // Plenty of work available; exactly one transfer may start.
        let m0 = msg(0, 1, 9);
        let m1 = msg(1, 1, 8);
        let mut sub = FakeSubstrate::new(vec![AgentId(2), AgentId(3)], vec![m0, m1]);

        EpidemicRouter::new().update(&mut sub).unwrap();
        assert_eq!(sub.started.len(), 1);
        assert!(sub.is_transferring());

        // The next tick is gated by the in-progress transfer.
        assert!(EpidemicRouter::new().update(&mut sub).is_none());
        assert_eq!(sub.started.len(), 1);
    }

    #[test]
    fn fully_rejected_tick_starts_nothing() {
        let m = msg(0, 1, 9);
        let mut sub = FakeSubstrate::new(vec![AgentId(2), AgentId(3)], vec![m]);
        sub.peer_already_has(AgentId(2), m.id);
        sub.peer_already_has(AgentId(3), m.id);

        assert!(EpidemicRouter::new().update(&mut sub).is_none());
        assert!(sub.started.is_empty());
        assert!(!sub.is_transferring());
    }

    #[test]
    fn rejected_delivery_falls_through_to_flood() {
        // The recipient already has the copy (delivery is inadmissible), so
        // the tier-2 flood to the other peer runs in the same tick.
        let recipient = AgentId(7);
        let other = AgentId(3);
        let m = msg(0, 1, 7);
        let mut sub = FakeSubstrate::new(vec![recipient, other], vec![m]);
        sub.peer_already_has(recipient, m.id);

        let started = EpidemicRouter::new().update(&mut sub).unwrap();
        assert_eq!(started.peer, other);
    }
}

// ── Message vocabulary ────────────────────────────────────────────────────────

#[cfg(test)]
mod message {
    use super::*;

    #[test]
    fn fields_round_trip() {
        let m = Message::new(MessageId(5), AgentId(1), AgentId(2), Tick(99));
        assert_eq!(m.id, MessageId(5));
        assert_eq!(m.origin, AgentId(1));
        assert_eq!(m.destination, AgentId(2));
        assert_eq!(m.created, Tick(99));
    }
}
