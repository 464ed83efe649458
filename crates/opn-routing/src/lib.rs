//! `opn-routing` — message dissemination over opportunistic contacts.
//!
//! # Crate layout
//!
//! | Module        | Contents                                          |
//! |---------------|---------------------------------------------------|
//! | [`message`]   | `Message` — contract vocabulary for buffers       |
//! | [`substrate`] | `ContactSubstrate` — the connection/buffer seam   |
//! | [`epidemic`]  | `EpidemicRouter` — the two-tier flooding protocol |
//!
//! The router is deliberately thin: connection detection, per-connection
//! transfer state, and buffer admission/eviction all live behind the
//! [`ContactSubstrate`] contract.  Per tick the router makes exactly one
//! decision — whether to start a transfer, and which one.

pub mod epidemic;
pub mod message;
pub mod substrate;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use epidemic::{EpidemicRouter, StartedTransfer};
pub use message::Message;
pub use substrate::ContactSubstrate;
