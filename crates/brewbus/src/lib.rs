//! Mesh frame protocol for the brewbus espresso-machine head unit.
//!
//! brewbus moves commands, events, and telemetry between a coordinator
//! and the machine's peripheral devices over any byte-oriented link. The
//! wire format is a sentinel-framed 9-byte header plus up to 230 payload
//! bytes; after link corruption the decoder resynchronizes by hunting
//! for the next sentinel. Payloads use compact fixed-point layouts.
//!
//! # Crate Structure
//!
//! - [`wire`] — Frame codec with stream resynchronization, device and
//!   message registries, blocking reader/writer
//! - [`payload`] — Typed payload codecs (behind `payload` feature)

/// Re-export wire types.
pub mod wire {
    pub use brewbus_wire::*;
}

/// Re-export payload types (requires `payload` feature).
#[cfg(feature = "payload")]
pub mod payload {
    pub use brewbus_payload::*;
}
