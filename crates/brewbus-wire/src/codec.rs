use bytes::{Buf, BufMut, Bytes, BytesMut};
use tracing::trace;

use crate::device::DeviceId;
use crate::error::{Result, WireError};
use crate::message::MsgType;

/// Frame header: sentinel (1) + flags (1) + source (1) + destination (1)
/// + relay (1) + type (1) + sequence (2 LE) + payload length (1) = 9 bytes.
pub const HEADER_SIZE: usize = 9;

/// Sentinel byte opening every frame.
pub const MAGIC: u8 = 0xA5;

/// Protocol revision; carried in discovery payloads, not in the header.
pub const PROTOCOL_VERSION: u8 = 0x02;

/// Hard payload cap. A full frame always fits a 239-byte link MTU.
pub const MAX_PAYLOAD: usize = 230;

/// Largest possible wire frame (header + full payload).
pub const MAX_FRAME_SIZE: usize = HEADER_SIZE + MAX_PAYLOAD;

/// A routed bus message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Flag bits (see [`crate::flags`]). Transported, never interpreted.
    pub flags: u8,
    /// Originating device.
    pub source: DeviceId,
    /// Target device, or `Broadcast`.
    pub destination: DeviceId,
    /// Forwarding hop; `Unassigned` when delivered directly.
    pub relay: DeviceId,
    /// What the payload means.
    pub msg_type: MsgType,
    /// Caller-assigned sequence number; the codec never inspects it.
    pub sequence: u16,
    /// The message payload.
    pub payload: Bytes,
}

impl Frame {
    /// Create a direct frame with zeroed flags and sequence.
    pub fn new(
        source: DeviceId,
        destination: DeviceId,
        msg_type: MsgType,
        payload: impl Into<Bytes>,
    ) -> Self {
        Self {
            flags: 0,
            source,
            destination,
            relay: DeviceId::Unassigned,
            msg_type,
            sequence: 0,
            payload: payload.into(),
        }
    }

    /// The total wire size of this frame (header + payload).
    pub fn wire_size(&self) -> usize {
        HEADER_SIZE + self.payload.len()
    }
}

/// Encode a frame into the wire format.
///
/// Wire format (multi-byte integers little-endian):
/// ```text
/// ┌──────┬───────┬─────┬─────┬───────┬──────┬──────────┬─────┬────────────┐
/// │ 0xA5 │ Flags │ Src │ Dst │ Relay │ Type │ Seq (2B) │ Len │ Payload    │
/// │  1B  │  1B   │ 1B  │ 1B  │  1B   │ 1B   │    LE    │ 1B  │ Len bytes  │
/// └──────┴───────┴─────┴─────┴───────┴──────┴──────────┴─────┴────────────┘
/// ```
///
/// Fails with [`WireError::PayloadTooLarge`] before writing anything if the
/// payload exceeds [`MAX_PAYLOAD`].
pub fn encode_frame(frame: &Frame, dst: &mut BytesMut) -> Result<()> {
    if frame.payload.len() > MAX_PAYLOAD {
        return Err(WireError::PayloadTooLarge {
            size: frame.payload.len(),
            max: MAX_PAYLOAD,
        });
    }
    dst.reserve(HEADER_SIZE + frame.payload.len());
    dst.put_u8(MAGIC);
    dst.put_u8(frame.flags);
    dst.put_u8(frame.source.code());
    dst.put_u8(frame.destination.code());
    dst.put_u8(frame.relay.code());
    dst.put_u8(frame.msg_type.code());
    dst.put_u16_le(frame.sequence);
    dst.put_u8(frame.payload.len() as u8);
    dst.put_slice(&frame.payload);
    Ok(())
}

/// Decode one frame from a buffer, resynchronizing on stray bytes.
///
/// Each call takes exactly one step:
/// - fewer than [`HEADER_SIZE`] bytes buffered: `None`, buffer untouched;
/// - first byte is not the sentinel: `None`, one byte discarded. Call again
///   until a frame lines up at the front of the buffer;
/// - header complete but payload still short: `None`, buffer untouched;
/// - otherwise the whole frame is consumed and returned.
///
/// There is no checksum; resynchronization trusts the sentinel alone, so a
/// payload byte equal to `0xA5` can masquerade as a frame start after
/// corruption.
pub fn decode_frame(src: &mut BytesMut) -> Option<Frame> {
    if src.len() < HEADER_SIZE {
        return None; // Need more data
    }

    if src[0] != MAGIC {
        trace!(byte = src[0], "skipping stray byte before frame sentinel");
        src.advance(1);
        return None;
    }

    // Declared length sizes the frame; the cap applies at encode time only.
    let payload_len = src[8] as usize;
    let total = HEADER_SIZE + payload_len;
    if src.len() < total {
        return None; // Need more data
    }

    let flags = src[1];
    let source = DeviceId::from_code(src[2]);
    let destination = DeviceId::from_code(src[3]);
    let relay = DeviceId::from_code(src[4]);
    let msg_type = MsgType::from_code(src[5]);
    let sequence = u16::from_le_bytes([src[6], src[7]]);

    src.advance(HEADER_SIZE);
    let payload = src.split_to(payload_len).freeze();

    Some(Frame {
        flags,
        source,
        destination,
        relay,
        msg_type,
        sequence,
        payload,
    })
}
