//! Stream-level recovery scenarios: noisy links, partial delivery, EOF.

use std::io::{Cursor, Read};

use brewbus::payload::{
    FrameBody, HapticConfig, HapticMode, InputEvent, InputKind, Payload, ScaleReport,
};
use brewbus::wire::{
    encode_frame, DeviceId, Frame, FrameReader, FrameWriter, MsgType, WireError,
};
use bytes::{Bytes, BytesMut};

fn scale_frame(sequence: u16, weight_mg: i32) -> Frame {
    let report = ScaleReport {
        timestamp_ms: u32::from(sequence) * 250,
        weight_mg,
        flow_mg_s: 95,
        status: 0,
    };
    let mut frame = report
        .to_frame(DeviceId::Scales, DeviceId::Coordinator)
        .unwrap();
    frame.sequence = sequence;
    frame
}

fn encode_to_vec(frame: &Frame) -> Vec<u8> {
    let mut buf = BytesMut::new();
    encode_frame(frame, &mut buf).unwrap();
    buf.to_vec()
}

#[test]
fn reader_recovers_across_noise_bursts() {
    let frames = [
        scale_frame(1, 4200),
        scale_frame(2, 4750),
        scale_frame(3, 5300),
    ];

    let mut stream = Vec::new();
    stream.extend_from_slice(&[0x00, 0xFF, 0x13, 0x37]);
    stream.extend_from_slice(&encode_to_vec(&frames[0]));
    stream.extend_from_slice(&[0x21, 0x22]);
    stream.extend_from_slice(&encode_to_vec(&frames[1]));
    stream.extend_from_slice(&[0x42]);
    stream.extend_from_slice(&encode_to_vec(&frames[2]));

    let mut reader = FrameReader::new(Cursor::new(stream));
    for expected in &frames {
        assert_eq!(&reader.read_frame().unwrap(), expected);
    }
    assert!(matches!(
        reader.read_frame(),
        Err(WireError::ConnectionClosed)
    ));

    let stats = reader.stats();
    assert_eq!(stats.frames_decoded, 3);
    assert_eq!(stats.bytes_skipped, 7);
}

/// Delivers one byte per `read` call, the worst case a slow serial
/// bridge can produce.
struct DrippingReader {
    data: Vec<u8>,
    pos: usize,
}

impl Read for DrippingReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if self.pos >= self.data.len() || buf.is_empty() {
            return Ok(0);
        }
        buf[0] = self.data[self.pos];
        self.pos += 1;
        Ok(1)
    }
}

#[test]
fn byte_by_byte_delivery_with_noise() {
    let frame = scale_frame(7, 12345);
    let mut data = vec![0x6E, 0x6F];
    data.extend_from_slice(&encode_to_vec(&frame));

    let mut reader = FrameReader::new(DrippingReader { data, pos: 0 });
    assert_eq!(reader.read_frame().unwrap(), frame);
    assert_eq!(reader.stats().bytes_skipped, 2);
}

#[test]
fn eof_mid_frame_after_good_frames() {
    let first = scale_frame(10, 8000);
    let second = scale_frame(11, 8100);

    let mut stream = encode_to_vec(&first);
    stream.extend_from_slice(&encode_to_vec(&second));
    let cut = encode_to_vec(&scale_frame(12, 8200));
    stream.extend_from_slice(&cut[..12]);

    let mut reader = FrameReader::new(Cursor::new(stream));
    assert_eq!(reader.read_frame().unwrap(), first);
    assert_eq!(reader.read_frame().unwrap(), second);
    assert!(matches!(
        reader.read_frame(),
        Err(WireError::ConnectionClosed)
    ));
    assert_eq!(reader.stats().frames_decoded, 2);
}

#[test]
fn writer_reader_roundtrip_mixed_payloads() {
    let knob_event = InputEvent {
        source_index: 0,
        kind: InputKind::Rotate,
        value: -3,
    };
    let haptic = HapticConfig {
        mode: HapticMode::Spring,
        strength: 55,
        param1: 200,
        param2: -80,
    };
    let report = ScaleReport {
        timestamp_ms: 60_000,
        weight_mg: 36_200,
        flow_mg_s: 0,
        status: 0x01,
    };

    let mut writer = FrameWriter::new(Vec::new());
    writer
        .send(
            DeviceId::HapticKnobLeft,
            DeviceId::Coordinator,
            MsgType::Ping,
            Bytes::new(),
        )
        .unwrap();
    writer
        .write_frame(
            &knob_event
                .to_frame(DeviceId::HapticKnobLeft, DeviceId::Coordinator)
                .unwrap(),
        )
        .unwrap();
    writer
        .write_frame(
            &haptic
                .to_frame(DeviceId::Coordinator, DeviceId::HapticKnobLeft)
                .unwrap(),
        )
        .unwrap();
    writer
        .write_frame(
            &report
                .to_frame(DeviceId::Scales, DeviceId::Coordinator)
                .unwrap(),
        )
        .unwrap();
    let stream = writer.into_inner();

    let mut reader = FrameReader::new(Cursor::new(stream));

    let ping = reader.read_frame().unwrap();
    assert_eq!(ping.msg_type, MsgType::Ping);
    assert!(ping.payload.is_empty());

    match FrameBody::from_frame(&reader.read_frame().unwrap()) {
        Some(FrameBody::InputEvent(ev)) => assert_eq!(ev, knob_event),
        other => panic!("expected input event, got {other:?}"),
    }
    match FrameBody::from_frame(&reader.read_frame().unwrap()) {
        Some(FrameBody::HapticConfig(cfg)) => assert_eq!(cfg, haptic),
        other => panic!("expected haptic config, got {other:?}"),
    }
    match FrameBody::from_frame(&reader.read_frame().unwrap()) {
        Some(FrameBody::ScaleReport(rep)) => {
            assert_eq!(rep, report);
            assert!(rep.is_stable());
        }
        other => panic!("expected scale report, got {other:?}"),
    }

    assert!(matches!(
        reader.read_frame(),
        Err(WireError::ConnectionClosed)
    ));
    assert_eq!(reader.stats().frames_decoded, 4);
    assert_eq!(reader.stats().bytes_skipped, 0);
}
