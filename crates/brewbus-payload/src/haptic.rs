//! Haptic knob configuration payload.

use bytes::{BufMut, BytesMut};

use brewbus_wire::MsgType;

use crate::dispatch::Payload;
use crate::error::Result;

/// Force-feedback behavior of an encoder knob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticMode {
    /// Free-spinning bearing.
    Free,
    /// Detent clicks for menu scrolling.
    Detents,
    /// Spring return toward a center point.
    Spring,
    /// Hard stops at both ends of travel.
    Barrier,
    /// Motor drives the knob to a commanded position.
    Servo,
    /// A code this revision does not know.
    Unknown(u8),
}

impl HapticMode {
    pub fn code(self) -> u8 {
        match self {
            HapticMode::Free => 0,
            HapticMode::Detents => 1,
            HapticMode::Spring => 2,
            HapticMode::Barrier => 3,
            HapticMode::Servo => 4,
            HapticMode::Unknown(code) => code,
        }
    }

    pub fn from_code(code: u8) -> Self {
        match code {
            0 => HapticMode::Free,
            1 => HapticMode::Detents,
            2 => HapticMode::Spring,
            3 => HapticMode::Barrier,
            4 => HapticMode::Servo,
            other => HapticMode::Unknown(other),
        }
    }
}

/// Knob physics configuration.
///
/// Wire layout (6 bytes): mode u8, strength u8, param1 i16 LE, param2
/// i16 LE. The params change meaning with the mode: detent count and
/// snap strength, spring center and stiffness, or travel limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HapticConfig {
    pub mode: HapticMode,
    /// Force as a percentage, 0-100 by convention; transported as-is.
    pub strength: u8,
    pub param1: i16,
    pub param2: i16,
}

impl HapticConfig {
    pub const SIZE: usize = 6;
}

impl Payload for HapticConfig {
    const MESSAGE_TYPE: MsgType = MsgType::CmdHapticConfig;

    fn encoded_len(&self) -> usize {
        Self::SIZE
    }

    fn encode(&self, dst: &mut BytesMut) -> Result<()> {
        dst.reserve(Self::SIZE);
        dst.put_u8(self.mode.code());
        dst.put_u8(self.strength);
        dst.put_i16_le(self.param1);
        dst.put_i16_le(self.param2);
        Ok(())
    }

    fn decode(src: &[u8]) -> Option<Self> {
        if src.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            mode: HapticMode::from_code(src[0]),
            strength: src[1],
            param1: i16::from_le_bytes([src[2], src[3]]),
            param2: i16::from_le_bytes([src[4], src[5]]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_bytes() {
        let cfg = HapticConfig {
            mode: HapticMode::Detents,
            strength: 80,
            param1: 24,
            param2: -300,
        };

        let mut buf = BytesMut::new();
        cfg.encode(&mut buf).unwrap();
        assert_eq!(buf.as_ref(), [0x01, 0x50, 0x18, 0x00, 0xD4, 0xFE]);
    }

    #[test]
    fn test_roundtrip() {
        let cfg = HapticConfig {
            mode: HapticMode::Spring,
            strength: 100,
            param1: -1800,
            param2: 450,
        };

        let mut buf = BytesMut::new();
        cfg.encode(&mut buf).unwrap();
        assert_eq!(HapticConfig::decode(&buf).unwrap(), cfg);
    }

    #[test]
    fn test_short_buffer() {
        assert!(HapticConfig::decode(&[0, 1, 2, 3, 4]).is_none());
    }

    #[test]
    fn test_unknown_mode_passes_through() {
        let buf = [0x07, 0x10, 0x00, 0x00, 0x00, 0x00];
        let cfg = HapticConfig::decode(&buf).unwrap();
        assert_eq!(cfg.mode, HapticMode::Unknown(7));
        assert_eq!(cfg.mode.code(), 7);
    }
}
