//! Drip-tray scale telemetry payload.

use bytes::{BufMut, BytesMut};

use brewbus_wire::MsgType;

use crate::dispatch::Payload;
use crate::error::Result;

/// Weight reading has settled.
pub const STATUS_STABLE: u8 = 0x01;

/// A commanded tare has completed.
pub const STATUS_TARE_DONE: u8 = 0x02;

/// One scale reading with its flow derivative.
///
/// Wire layout (11 bytes, little-endian): timestamp u32 (ms), weight i32
/// (mg), flow i16 (mg/s), status u8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleReport {
    /// Device-local timestamp, milliseconds.
    pub timestamp_ms: u32,
    /// Current weight in milligrams; negative after an overshoot tare.
    pub weight_mg: i32,
    /// Output flow in mg/s, derived on the device.
    pub flow_mg_s: i16,
    /// Status bits (`STATUS_STABLE`, `STATUS_TARE_DONE`).
    pub status: u8,
}

impl ScaleReport {
    pub const SIZE: usize = 11;

    pub fn is_stable(&self) -> bool {
        self.status & STATUS_STABLE != 0
    }

    pub fn tare_done(&self) -> bool {
        self.status & STATUS_TARE_DONE != 0
    }
}

impl Payload for ScaleReport {
    const MESSAGE_TYPE: MsgType = MsgType::DataScale;

    fn encoded_len(&self) -> usize {
        Self::SIZE
    }

    fn encode(&self, dst: &mut BytesMut) -> Result<()> {
        dst.reserve(Self::SIZE);
        dst.put_u32_le(self.timestamp_ms);
        dst.put_i32_le(self.weight_mg);
        dst.put_i16_le(self.flow_mg_s);
        dst.put_u8(self.status);
        Ok(())
    }

    fn decode(src: &[u8]) -> Option<Self> {
        if src.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            timestamp_ms: u32::from_le_bytes([src[0], src[1], src[2], src[3]]),
            weight_mg: i32::from_le_bytes([src[4], src[5], src[6], src[7]]),
            flow_mg_s: i16::from_le_bytes([src[8], src[9]]),
            status: src[10],
        })
    }
}
