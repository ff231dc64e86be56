//! Binding payloads to frames.
//!
//! [`Payload`] is the seam every typed payload implements; [`FrameBody`]
//! demultiplexes a received frame into the right codec by message type.
//! Types without a fixed layout, and types this revision does not know,
//! pass through as [`FrameBody::Opaque`].

use bytes::{Bytes, BytesMut};

use brewbus_wire::{DeviceId, Frame, MsgType};

use crate::error::Result;
use crate::haptic::HapticConfig;
use crate::input::InputEvent;
use crate::menu::MenuWindow;
use crate::profile::{ProfileStep, ProfileTable};
use crate::scale::ScaleReport;

/// A payload with a fixed binary layout bound to one message type.
pub trait Payload: Sized {
    /// The message type carrying this payload.
    const MESSAGE_TYPE: MsgType;

    /// Encoded size in bytes.
    fn encoded_len(&self) -> usize;

    /// Append the wire encoding to `dst`.
    ///
    /// Fails only on construction limits (element counts); nothing is
    /// written on failure.
    fn encode(&self, dst: &mut BytesMut) -> Result<()>;

    /// Decode from the front of `src`.
    ///
    /// Returns `None` when `src` is shorter than the layout requires;
    /// trailing bytes are ignored.
    fn decode(src: &[u8]) -> Option<Self>;

    /// Wrap this payload in a direct frame.
    fn to_frame(&self, source: DeviceId, destination: DeviceId) -> Result<Frame> {
        let mut buf = BytesMut::with_capacity(self.encoded_len());
        self.encode(&mut buf)?;
        Ok(Frame::new(
            source,
            destination,
            Self::MESSAGE_TYPE,
            buf.freeze(),
        ))
    }
}

/// A frame payload decoded according to its message type.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameBody {
    ProfileStep(ProfileStep),
    ProfileTable(ProfileTable),
    HapticConfig(HapticConfig),
    MenuWindow(MenuWindow),
    InputEvent(InputEvent),
    ScaleReport(ScaleReport),
    /// A type with no fixed layout, or one this revision does not know.
    Opaque { msg_type: MsgType, payload: Bytes },
}

impl FrameBody {
    /// Decode the payload of `frame` by its message type.
    ///
    /// Returns `None` only when a fixed-layout type arrives with fewer
    /// bytes than its layout requires.
    pub fn from_frame(frame: &Frame) -> Option<FrameBody> {
        Some(match frame.msg_type {
            MsgType::CmdProfileStep => {
                FrameBody::ProfileStep(ProfileStep::decode(&frame.payload)?)
            }
            MsgType::CmdProfileTable => {
                FrameBody::ProfileTable(ProfileTable::decode(&frame.payload)?)
            }
            MsgType::CmdHapticConfig => {
                FrameBody::HapticConfig(HapticConfig::decode(&frame.payload)?)
            }
            MsgType::CmdUiMenu => FrameBody::MenuWindow(MenuWindow::decode(&frame.payload)?),
            MsgType::EventUiInput => FrameBody::InputEvent(InputEvent::decode(&frame.payload)?),
            MsgType::DataScale => FrameBody::ScaleReport(ScaleReport::decode(&frame.payload)?),
            other => FrameBody::Opaque {
                msg_type: other,
                payload: frame.payload.clone(),
            },
        })
    }
}
