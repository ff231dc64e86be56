//! Brew profile payloads.
//!
//! Profiles travel in two shapes. [`ProfileStep`] is the just-in-time
//! form: one vector of targets the coordinator streams to the machine as
//! the shot progresses. [`ProfileTable`] is the stored form: a whole
//! profile as compact 13-byte nodes, small enough that a full table fits
//! one frame.

use bytes::{BufMut, BytesMut};

use brewbus_wire::{MsgType, MAX_PAYLOAD};

use crate::dispatch::Payload;
use crate::error::{PayloadError, Result};
use crate::fixed::{
    decode_centi, decode_step, encode_centi, encode_step, ENERGY_STEP, FLOW_STEP_ML_S,
    PRESSURE_STEP_BAR, TEMP_STEP_C, VOLUME_STEP_ML,
};

/// Most nodes one frame can carry after the two-byte table prefix.
pub const MAX_NODES: usize = (MAX_PAYLOAD - 2) / ProfileNode::SIZE;

/// Which target wins when flow and pressure cannot both be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilePriority {
    /// Hold flow, let pressure drift.
    Flow,
    /// Hold pressure, sacrifice flow.
    Pressure,
    /// Energy-balanced control.
    Hybrid,
    /// A code this revision does not know.
    Unknown(u8),
}

impl ProfilePriority {
    pub fn code(self) -> u8 {
        match self {
            ProfilePriority::Flow => 0,
            ProfilePriority::Pressure => 1,
            ProfilePriority::Hybrid => 2,
            ProfilePriority::Unknown(code) => code,
        }
    }

    pub fn from_code(code: u8) -> Self {
        match code {
            0 => ProfilePriority::Flow,
            1 => ProfilePriority::Pressure,
            2 => ProfilePriority::Hybrid,
            other => ProfilePriority::Unknown(other),
        }
    }
}

/// How a node blends into the next one.
///
/// Stored in a two-bit field, so all four codes are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpolation {
    /// Jump to the targets immediately.
    Step,
    /// Linear ramp across the node duration.
    Linear,
    EaseIn,
    EaseOut,
}

impl Interpolation {
    pub fn bits(self) -> u8 {
        match self {
            Interpolation::Step => 0,
            Interpolation::Linear => 1,
            Interpolation::EaseIn => 2,
            Interpolation::EaseOut => 3,
        }
    }

    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Interpolation::Step,
            1 => Interpolation::Linear,
            2 => Interpolation::EaseIn,
            _ => Interpolation::EaseOut,
        }
    }
}

/// A setpoint with a tolerance band around it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Band {
    pub target: f32,
    pub tolerance: f32,
}

impl Band {
    pub fn new(target: f32, tolerance: f32) -> Self {
        Self { target, tolerance }
    }
}

/// One just-in-time profile vector.
///
/// Wire layout (10 bytes, little-endian): duration u16, temperature i16
/// (centi-degrees), flow i16 (centi-ml/s), pressure i16 (centi-bar),
/// priority u8, flags u8.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileStep {
    /// How long to hold this vector, in milliseconds.
    pub duration_ms: u16,
    /// Target water temperature, degrees Celsius.
    pub temperature_c: f32,
    /// Target flow, ml/s.
    pub flow_ml_s: f32,
    /// Target pressure, bar.
    pub pressure_bar: f32,
    /// Which target wins under conflict.
    pub priority: ProfilePriority,
    /// Bitmask assigned by the profile engine; transported untouched.
    pub flags: u8,
}

impl ProfileStep {
    pub const SIZE: usize = 10;
}

impl Payload for ProfileStep {
    const MESSAGE_TYPE: MsgType = MsgType::CmdProfileStep;

    fn encoded_len(&self) -> usize {
        Self::SIZE
    }

    fn encode(&self, dst: &mut BytesMut) -> Result<()> {
        dst.reserve(Self::SIZE);
        dst.put_u16_le(self.duration_ms);
        dst.put_i16_le(encode_centi(self.temperature_c));
        dst.put_i16_le(encode_centi(self.flow_ml_s));
        dst.put_i16_le(encode_centi(self.pressure_bar));
        dst.put_u8(self.priority.code());
        dst.put_u8(self.flags);
        Ok(())
    }

    fn decode(src: &[u8]) -> Option<Self> {
        if src.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            duration_ms: u16::from_le_bytes([src[0], src[1]]),
            temperature_c: decode_centi(i16::from_le_bytes([src[2], src[3]])),
            flow_ml_s: decode_centi(i16::from_le_bytes([src[4], src[5]])),
            pressure_bar: decode_centi(i16::from_le_bytes([src[6], src[7]])),
            priority: ProfilePriority::from_code(src[8]),
            flags: src[9],
        })
    }
}

/// One stored profile node.
///
/// Wire layout (13 bytes): time offset u16 LE, a config byte (bits 0-1
/// interpolation, bits 2-3 priority, high bits zero), then five
/// target/tolerance pairs as step-scaled bytes: temperature (0.5 C),
/// pressure (0.1 bar), flow (0.1 ml/s), volume (1 ml), energy (1 unit).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileNode {
    /// Offset from shot start, in milliseconds.
    pub time_offset_ms: u16,
    /// Blend into the next node.
    pub interpolation: Interpolation,
    /// Which target wins under conflict. Two-bit field: only the low
    /// two bits of the code survive the wire.
    pub priority: ProfilePriority,
    pub temperature_c: Band,
    pub pressure_bar: Band,
    pub flow_ml_s: Band,
    pub volume_ml: Band,
    pub energy: Band,
}

impl ProfileNode {
    pub const SIZE: usize = 13;

    /// Append the 13-byte wire encoding to `dst`.
    pub fn encode(&self, dst: &mut BytesMut) {
        dst.reserve(Self::SIZE);
        dst.put_u16_le(self.time_offset_ms);
        dst.put_u8(self.interpolation.bits() | ((self.priority.code() & 0x03) << 2));
        dst.put_u8(encode_step(self.temperature_c.target, TEMP_STEP_C));
        dst.put_u8(encode_step(self.temperature_c.tolerance, TEMP_STEP_C));
        dst.put_u8(encode_step(self.pressure_bar.target, PRESSURE_STEP_BAR));
        dst.put_u8(encode_step(self.pressure_bar.tolerance, PRESSURE_STEP_BAR));
        dst.put_u8(encode_step(self.flow_ml_s.target, FLOW_STEP_ML_S));
        dst.put_u8(encode_step(self.flow_ml_s.tolerance, FLOW_STEP_ML_S));
        dst.put_u8(encode_step(self.volume_ml.target, VOLUME_STEP_ML));
        dst.put_u8(encode_step(self.volume_ml.tolerance, VOLUME_STEP_ML));
        dst.put_u8(encode_step(self.energy.target, ENERGY_STEP));
        dst.put_u8(encode_step(self.energy.tolerance, ENERGY_STEP));
    }

    /// Decode a node from the front of `src`.
    pub fn decode(src: &[u8]) -> Option<Self> {
        if src.len() < Self::SIZE {
            return None;
        }
        let config = src[2];
        Some(Self {
            time_offset_ms: u16::from_le_bytes([src[0], src[1]]),
            interpolation: Interpolation::from_bits(config),
            priority: ProfilePriority::from_code((config >> 2) & 0x03),
            temperature_c: Band::new(
                decode_step(src[3], TEMP_STEP_C),
                decode_step(src[4], TEMP_STEP_C),
            ),
            pressure_bar: Band::new(
                decode_step(src[5], PRESSURE_STEP_BAR),
                decode_step(src[6], PRESSURE_STEP_BAR),
            ),
            flow_ml_s: Band::new(
                decode_step(src[7], FLOW_STEP_ML_S),
                decode_step(src[8], FLOW_STEP_ML_S),
            ),
            volume_ml: Band::new(
                decode_step(src[9], VOLUME_STEP_ML),
                decode_step(src[10], VOLUME_STEP_ML),
            ),
            energy: Band::new(
                decode_step(src[11], ENERGY_STEP),
                decode_step(src[12], ENERGY_STEP),
            ),
        })
    }
}

/// A whole stored profile: id, node count, then the nodes back to back.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileTable {
    pub profile_id: u8,
    pub nodes: Vec<ProfileNode>,
}

impl Payload for ProfileTable {
    const MESSAGE_TYPE: MsgType = MsgType::CmdProfileTable;

    fn encoded_len(&self) -> usize {
        2 + self.nodes.len() * ProfileNode::SIZE
    }

    fn encode(&self, dst: &mut BytesMut) -> Result<()> {
        if self.nodes.len() > MAX_NODES {
            return Err(PayloadError::TooManyNodes {
                count: self.nodes.len(),
                max: MAX_NODES,
            });
        }
        dst.reserve(self.encoded_len());
        dst.put_u8(self.profile_id);
        dst.put_u8(self.nodes.len() as u8);
        for node in &self.nodes {
            node.encode(dst);
        }
        Ok(())
    }

    fn decode(src: &[u8]) -> Option<Self> {
        if src.len() < 2 {
            return None;
        }
        let profile_id = src[0];
        let count = src[1] as usize;
        if src.len() < 2 + count * ProfileNode::SIZE {
            return None;
        }

        let mut nodes = Vec::with_capacity(count);
        for i in 0..count {
            let offset = 2 + i * ProfileNode::SIZE;
            nodes.push(ProfileNode::decode(&src[offset..])?);
        }
        Some(Self { profile_id, nodes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_node(time_offset_ms: u16) -> ProfileNode {
        ProfileNode {
            time_offset_ms,
            interpolation: Interpolation::Linear,
            priority: ProfilePriority::Flow,
            temperature_c: Band::new(92.0, 1.0),
            pressure_bar: Band::new(9.0, 0.5),
            flow_ml_s: Band::new(2.5, 0.5),
            volume_ml: Band::new(36.0, 2.0),
            energy: Band::new(0.0, 0.0),
        }
    }

    #[test]
    fn test_step_wire_bytes() {
        let step = ProfileStep {
            duration_ms: 30000,
            temperature_c: 93.5,
            flow_ml_s: 2.0,
            pressure_bar: 9.0,
            priority: ProfilePriority::Pressure,
            flags: 0,
        };

        let mut buf = BytesMut::new();
        step.encode(&mut buf).unwrap();
        assert_eq!(
            buf.as_ref(),
            [0x30, 0x75, 0x86, 0x24, 0xC8, 0x00, 0x84, 0x03, 0x01, 0x00]
        );
    }

    #[test]
    fn test_step_roundtrip_within_centi_precision() {
        let step = ProfileStep {
            duration_ms: 4500,
            temperature_c: 88.73,
            flow_ml_s: 1.37,
            pressure_bar: 6.42,
            priority: ProfilePriority::Hybrid,
            flags: 0x01,
        };

        let mut buf = BytesMut::new();
        step.encode(&mut buf).unwrap();
        let decoded = ProfileStep::decode(&buf).unwrap();

        assert_eq!(decoded.duration_ms, step.duration_ms);
        assert!((decoded.temperature_c - step.temperature_c).abs() < 0.01);
        assert!((decoded.flow_ml_s - step.flow_ml_s).abs() < 0.01);
        assert!((decoded.pressure_bar - step.pressure_bar).abs() < 0.01);
        assert_eq!(decoded.priority, step.priority);
        assert_eq!(decoded.flags, step.flags);
    }

    #[test]
    fn test_step_saturates_out_of_range_targets() {
        let step = ProfileStep {
            duration_ms: 0,
            temperature_c: 400.0,
            flow_ml_s: -400.0,
            pressure_bar: 0.0,
            priority: ProfilePriority::Flow,
            flags: 0,
        };

        let mut buf = BytesMut::new();
        step.encode(&mut buf).unwrap();
        let decoded = ProfileStep::decode(&buf).unwrap();

        assert_eq!(decoded.temperature_c, i16::MAX as f32 / 100.0);
        assert_eq!(decoded.flow_ml_s, i16::MIN as f32 / 100.0);
    }

    #[test]
    fn test_step_short_buffer() {
        assert!(ProfileStep::decode(&[0u8; 9]).is_none());
    }

    #[test]
    fn test_step_unknown_priority_passes_through() {
        let mut buf = BytesMut::new();
        let step = ProfileStep {
            duration_ms: 1,
            temperature_c: 0.0,
            flow_ml_s: 0.0,
            pressure_bar: 0.0,
            priority: ProfilePriority::Unknown(9),
            flags: 0,
        };
        step.encode(&mut buf).unwrap();
        assert_eq!(ProfileStep::decode(&buf).unwrap().priority, ProfilePriority::Unknown(9));
    }

    #[test]
    fn test_node_wire_bytes() {
        let node = ProfileNode {
            time_offset_ms: 1500,
            ..sample_node(0)
        };

        let mut buf = BytesMut::new();
        node.encode(&mut buf);
        assert_eq!(
            buf.as_ref(),
            [0xDC, 0x05, 0x01, 0xB8, 0x02, 0x5A, 0x05, 0x19, 0x05, 0x24, 0x02, 0x00, 0x00]
        );
    }

    #[test]
    fn test_node_config_byte_packs_both_fields() {
        let node = ProfileNode {
            interpolation: Interpolation::EaseOut,
            priority: ProfilePriority::Hybrid,
            ..sample_node(0)
        };

        let mut buf = BytesMut::new();
        node.encode(&mut buf);
        assert_eq!(buf[2], 0x0B);

        let decoded = ProfileNode::decode(&buf).unwrap();
        assert_eq!(decoded.interpolation, Interpolation::EaseOut);
        assert_eq!(decoded.priority, ProfilePriority::Hybrid);
    }

    #[test]
    fn test_node_roundtrip_within_step_precision() {
        let node = sample_node(12000);

        let mut buf = BytesMut::new();
        node.encode(&mut buf);
        assert_eq!(buf.len(), ProfileNode::SIZE);

        let decoded = ProfileNode::decode(&buf).unwrap();
        assert_eq!(decoded.time_offset_ms, 12000);
        assert!((decoded.temperature_c.target - 92.0).abs() < TEMP_STEP_C);
        assert!((decoded.pressure_bar.target - 9.0).abs() < PRESSURE_STEP_BAR);
        assert!((decoded.flow_ml_s.tolerance - 0.5).abs() < FLOW_STEP_ML_S);
        assert_eq!(decoded.volume_ml.target, 36.0);
    }

    #[test]
    fn test_node_saturates_out_of_range_fields() {
        let node = ProfileNode {
            temperature_c: Band::new(200.0, -3.0),
            ..sample_node(0)
        };

        let mut buf = BytesMut::new();
        node.encode(&mut buf);
        // 200 C is 400 half-degree steps, pinned to 255; negative pins to 0.
        assert_eq!(buf[3], 255);
        assert_eq!(buf[4], 0);
    }

    #[test]
    fn test_table_roundtrip() {
        let table = ProfileTable {
            profile_id: 3,
            nodes: (0..5).map(|i| sample_node(i * 1000)).collect(),
        };

        let mut buf = BytesMut::new();
        table.encode(&mut buf).unwrap();
        assert_eq!(buf.len(), 2 + 5 * ProfileNode::SIZE);

        let decoded = ProfileTable::decode(&buf).unwrap();
        assert_eq!(decoded, table);
    }

    #[test]
    fn test_table_at_capacity_fits_one_frame() {
        let table = ProfileTable {
            profile_id: 1,
            nodes: (0..MAX_NODES as u16).map(|i| sample_node(i)).collect(),
        };

        let mut buf = BytesMut::new();
        table.encode(&mut buf).unwrap();
        assert_eq!(MAX_NODES, 17);
        assert!(buf.len() <= MAX_PAYLOAD);
    }

    #[test]
    fn test_table_over_capacity_rejected() {
        let table = ProfileTable {
            profile_id: 1,
            nodes: (0..=MAX_NODES as u16).map(|i| sample_node(i)).collect(),
        };

        let mut buf = BytesMut::new();
        let err = table.encode(&mut buf).unwrap_err();
        assert!(matches!(
            err,
            PayloadError::TooManyNodes { count: 18, max: 17 }
        ));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_table_decode_short_buffer() {
        assert!(ProfileTable::decode(&[]).is_none());
        assert!(ProfileTable::decode(&[1]).is_none());

        // Count byte promises two nodes, buffer holds one.
        let mut buf = BytesMut::new();
        buf.put_u8(1);
        buf.put_u8(2);
        sample_node(0).encode(&mut buf);
        assert!(ProfileTable::decode(&buf).is_none());
    }

    #[test]
    fn test_empty_table() {
        let table = ProfileTable {
            profile_id: 0,
            nodes: Vec::new(),
        };

        let mut buf = BytesMut::new();
        table.encode(&mut buf).unwrap();
        assert_eq!(buf.len(), 2);
        assert_eq!(ProfileTable::decode(&buf).unwrap(), table);
    }
}
