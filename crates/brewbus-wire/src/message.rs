//! Message type registry.
//!
//! Type codes are grouped by class: 0x0X link upkeep, 0x1X commands,
//! 0x2X events, 0x3X telemetry. The codec transports any code; payload
//! interpretation is layered on top.

/// Broad category of a message type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageClass {
    /// Link upkeep: ping, ack, error, discovery.
    System,
    /// Coordinator-to-device instructions.
    Command,
    /// Device-originated notifications.
    Event,
    /// Periodic sensor readings.
    Telemetry,
    /// Category of a code this revision does not know.
    Unknown,
}

/// What a frame's payload means.
///
/// Decoding is total: unrecognized codes become [`MsgType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MsgType {
    /// Liveness probe.
    Ping,
    /// Acknowledgement of a frame sent with the NEED_ACK flag.
    Ack,
    /// Fault report.
    Error,
    /// Device roster announcement.
    Discovery,
    /// Set a device operating state.
    CmdSetState,
    /// Single brew profile step.
    CmdProfileStep,
    /// Haptic feedback configuration for an encoder knob.
    CmdHapticConfig,
    /// Update one UI widget.
    CmdUiWidget,
    /// Replace a window of UI menu items.
    CmdUiMenu,
    /// Full brew profile as a node table.
    CmdProfileTable,
    /// User input from a knob, lever, or button.
    EventUiInput,
    /// Critical fault requiring immediate attention.
    EventCritical,
    /// Flow has started through the group head.
    EventFlowStart,
    /// Single sensor reading.
    DataSensor,
    /// Batched sensor readings.
    DataMulti,
    /// Scale weight report.
    DataScale,
    /// A code this revision does not know.
    Unknown(u8),
}

impl MsgType {
    /// The wire code for this type.
    pub fn code(self) -> u8 {
        match self {
            MsgType::Ping => 0x01,
            MsgType::Ack => 0x02,
            MsgType::Error => 0x03,
            MsgType::Discovery => 0x04,
            MsgType::CmdSetState => 0x10,
            MsgType::CmdProfileStep => 0x11,
            MsgType::CmdHapticConfig => 0x12,
            MsgType::CmdUiWidget => 0x13,
            MsgType::CmdUiMenu => 0x14,
            MsgType::CmdProfileTable => 0x15,
            MsgType::EventUiInput => 0x20,
            MsgType::EventCritical => 0x21,
            MsgType::EventFlowStart => 0x22,
            MsgType::DataSensor => 0x30,
            MsgType::DataMulti => 0x31,
            MsgType::DataScale => 0x32,
            MsgType::Unknown(code) => code,
        }
    }

    /// Decode a wire code.
    pub fn from_code(code: u8) -> Self {
        match code {
            0x01 => MsgType::Ping,
            0x02 => MsgType::Ack,
            0x03 => MsgType::Error,
            0x04 => MsgType::Discovery,
            0x10 => MsgType::CmdSetState,
            0x11 => MsgType::CmdProfileStep,
            0x12 => MsgType::CmdHapticConfig,
            0x13 => MsgType::CmdUiWidget,
            0x14 => MsgType::CmdUiMenu,
            0x15 => MsgType::CmdProfileTable,
            0x20 => MsgType::EventUiInput,
            0x21 => MsgType::EventCritical,
            0x22 => MsgType::EventFlowStart,
            0x30 => MsgType::DataSensor,
            0x31 => MsgType::DataMulti,
            0x32 => MsgType::DataScale,
            other => MsgType::Unknown(other),
        }
    }

    /// The semantic class of this type.
    pub fn class(self) -> MessageClass {
        match self {
            MsgType::Ping | MsgType::Ack | MsgType::Error | MsgType::Discovery => {
                MessageClass::System
            }
            MsgType::CmdSetState
            | MsgType::CmdProfileStep
            | MsgType::CmdHapticConfig
            | MsgType::CmdUiWidget
            | MsgType::CmdUiMenu
            | MsgType::CmdProfileTable => MessageClass::Command,
            MsgType::EventUiInput | MsgType::EventCritical | MsgType::EventFlowStart => {
                MessageClass::Event
            }
            MsgType::DataSensor | MsgType::DataMulti | MsgType::DataScale => {
                MessageClass::Telemetry
            }
            MsgType::Unknown(_) => MessageClass::Unknown,
        }
    }

    /// Returns a human-readable name for logs and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            MsgType::Ping => "PING",
            MsgType::Ack => "ACK",
            MsgType::Error => "ERROR",
            MsgType::Discovery => "DISCOVERY",
            MsgType::CmdSetState => "CMD_SET_STATE",
            MsgType::CmdProfileStep => "CMD_PROFILE_STEP",
            MsgType::CmdHapticConfig => "CMD_HAPTIC_CFG",
            MsgType::CmdUiWidget => "CMD_UI_WIDGET",
            MsgType::CmdUiMenu => "CMD_UI_MENU",
            MsgType::CmdProfileTable => "CMD_PROFILE_TABLE",
            MsgType::EventUiInput => "EVENT_UI_INPUT",
            MsgType::EventCritical => "EVENT_CRITICAL",
            MsgType::EventFlowStart => "EVENT_FLOW_START",
            MsgType::DataSensor => "DATA_SENSOR",
            MsgType::DataMulti => "DATA_MULTI",
            MsgType::DataScale => "DATA_SCALE",
            MsgType::Unknown(_) => "UNKNOWN",
        }
    }
}

impl From<u8> for MsgType {
    fn from(code: u8) -> Self {
        MsgType::from_code(code)
    }
}

impl From<MsgType> for u8 {
    fn from(ty: MsgType) -> Self {
        ty.code()
    }
}
