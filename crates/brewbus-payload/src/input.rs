//! User input event payload.

use bytes::{BufMut, BytesMut};

use brewbus_wire::MsgType;

use crate::dispatch::Payload;
use crate::error::Result;

/// What the user did to a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    ClickShort,
    ClickLong,
    HoldStart,
    HoldEnd,
    /// Encoder rotation; `value` carries the signed delta.
    Rotate,
    Touch,
    /// A code this revision does not know.
    Unknown(u8),
}

impl InputKind {
    pub fn code(self) -> u8 {
        match self {
            InputKind::ClickShort => 0,
            InputKind::ClickLong => 1,
            InputKind::HoldStart => 2,
            InputKind::HoldEnd => 3,
            InputKind::Rotate => 4,
            InputKind::Touch => 5,
            InputKind::Unknown(code) => code,
        }
    }

    pub fn from_code(code: u8) -> Self {
        match code {
            0 => InputKind::ClickShort,
            1 => InputKind::ClickLong,
            2 => InputKind::HoldStart,
            3 => InputKind::HoldEnd,
            4 => InputKind::Rotate,
            5 => InputKind::Touch,
            other => InputKind::Unknown(other),
        }
    }
}

/// One input event from a knob, lever, or button pad.
///
/// Wire layout (6 bytes): source index u8, kind u8, value i32 LE. The
/// value is a hold duration in ms, an encoder delta, or an absolute
/// position depending on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    /// Which control on the reporting board (0, 1, ...).
    pub source_index: u8,
    pub kind: InputKind,
    pub value: i32,
}

impl InputEvent {
    pub const SIZE: usize = 6;
}

impl Payload for InputEvent {
    const MESSAGE_TYPE: MsgType = MsgType::EventUiInput;

    fn encoded_len(&self) -> usize {
        Self::SIZE
    }

    fn encode(&self, dst: &mut BytesMut) -> Result<()> {
        dst.reserve(Self::SIZE);
        dst.put_u8(self.source_index);
        dst.put_u8(self.kind.code());
        dst.put_i32_le(self.value);
        Ok(())
    }

    fn decode(src: &[u8]) -> Option<Self> {
        if src.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            source_index: src[0],
            kind: InputKind::from_code(src[1]),
            value: i32::from_le_bytes([src[2], src[3], src[4], src[5]]),
        })
    }
}
