//! Bus device addresses.
//!
//! Addresses are handed out in blocks: 0x10-0x1F brew hardware,
//! 0x20-0x2F sensors, 0x30-0x3F human interface devices. 0x00 marks an
//! unprovisioned node and doubles as "no relay" in the frame header;
//! 0xFF addresses every device at once.

/// A device address on the bus.
///
/// Decoding is total: codes outside the roster become [`DeviceId::Unknown`]
/// so frames from newer firmware still pass through intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceId {
    /// Factory-fresh node awaiting an address; also "direct" in the relay field.
    Unassigned,
    /// The gateway node driving the bus.
    Coordinator,
    /// Brew boiler controller.
    BoilerMain,
    /// Steam boiler controller.
    BoilerSteam,
    /// Group head heater.
    GroupHead,
    /// Main pump driver.
    PumpMain,
    /// Drip-tray scales.
    Scales,
    /// Left haptic encoder knob.
    HapticKnobLeft,
    /// Right haptic encoder knob.
    HapticKnobRight,
    /// Steam actuation lever.
    SteamLever,
    /// Front-panel button pad.
    ButtonPad,
    /// Every device on the bus.
    Broadcast,
    /// An address this revision does not know.
    Unknown(u8),
}

impl DeviceId {
    /// The wire code for this address.
    pub fn code(self) -> u8 {
        match self {
            DeviceId::Unassigned => 0x00,
            DeviceId::Coordinator => 0x01,
            DeviceId::BoilerMain => 0x10,
            DeviceId::BoilerSteam => 0x11,
            DeviceId::GroupHead => 0x12,
            DeviceId::PumpMain => 0x13,
            DeviceId::Scales => 0x20,
            DeviceId::HapticKnobLeft => 0x30,
            DeviceId::HapticKnobRight => 0x31,
            DeviceId::SteamLever => 0x32,
            DeviceId::ButtonPad => 0x33,
            DeviceId::Broadcast => 0xFF,
            DeviceId::Unknown(code) => code,
        }
    }

    /// Decode a wire code.
    pub fn from_code(code: u8) -> Self {
        match code {
            0x00 => DeviceId::Unassigned,
            0x01 => DeviceId::Coordinator,
            0x10 => DeviceId::BoilerMain,
            0x11 => DeviceId::BoilerSteam,
            0x12 => DeviceId::GroupHead,
            0x13 => DeviceId::PumpMain,
            0x20 => DeviceId::Scales,
            0x30 => DeviceId::HapticKnobLeft,
            0x31 => DeviceId::HapticKnobRight,
            0x32 => DeviceId::SteamLever,
            0x33 => DeviceId::ButtonPad,
            0xFF => DeviceId::Broadcast,
            other => DeviceId::Unknown(other),
        }
    }

    /// Returns a human-readable name for logs and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            DeviceId::Unassigned => "UNASSIGNED",
            DeviceId::Coordinator => "COORDINATOR",
            DeviceId::BoilerMain => "BOILER_MAIN",
            DeviceId::BoilerSteam => "BOILER_STEAM",
            DeviceId::GroupHead => "GROUP_HEAD",
            DeviceId::PumpMain => "PUMP_MAIN",
            DeviceId::Scales => "SCALES",
            DeviceId::HapticKnobLeft => "HAPTIC_KNOB_L",
            DeviceId::HapticKnobRight => "HAPTIC_KNOB_R",
            DeviceId::SteamLever => "STEAM_LEVER",
            DeviceId::ButtonPad => "BUTTON_PAD",
            DeviceId::Broadcast => "BROADCAST",
            DeviceId::Unknown(_) => "UNKNOWN",
        }
    }

    /// Returns true for addresses that never identify one concrete device.
    pub fn is_reserved(self) -> bool {
        matches!(self, DeviceId::Unassigned | DeviceId::Broadcast)
    }
}

impl From<u8> for DeviceId {
    fn from(code: u8) -> Self {
        DeviceId::from_code(code)
    }
}

impl From<DeviceId> for u8 {
    fn from(id: DeviceId) -> Self {
        id.code()
    }
}
