//! Sentinel-framed wire codec for the brewbus espresso-machine mesh.
//!
//! Every message on the bus is a frame with a fixed 9-byte header:
//!
//! ```text
//! ┌──────┬───────┬─────┬─────┬───────┬──────┬──────────┬─────┬────────────┐
//! │ 0xA5 │ Flags │ Src │ Dst │ Relay │ Type │ Seq (2B) │ Len │ Payload    │
//! │  1B  │  1B   │ 1B  │ 1B  │  1B   │ 1B   │    LE    │ 1B  │ 0..=230B   │
//! └──────┴───────┴─────┴─────┴───────┴──────┴──────────┴─────┴────────────┘
//! ```
//!
//! After link corruption the decoder hunts for the next sentinel, discarding
//! one byte per step. There is no checksum; integrity stays with the link
//! layer, and a stray 0xA5 inside skipped garbage can briefly masquerade as
//! a frame start.
//!
//! [`decode_frame`] is the pure single-step codec over a caller-owned
//! buffer; [`FrameReader`]/[`FrameWriter`] wrap it around blocking streams.

pub mod codec;
pub mod device;
pub mod error;
pub mod flags;
pub mod message;
pub mod reader;
pub mod writer;

pub use codec::{
    decode_frame, encode_frame, Frame, HEADER_SIZE, MAGIC, MAX_FRAME_SIZE, MAX_PAYLOAD,
    PROTOCOL_VERSION,
};
pub use device::DeviceId;
pub use error::{Result, WireError};
pub use message::{MessageClass, MsgType};
pub use reader::{FrameReader, StreamStats};
pub use writer::FrameWriter;
