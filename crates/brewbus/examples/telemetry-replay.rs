//! Telemetry replay — decodes a captured scale byte log with injected noise.
//!
//! Run with:
//!   RUST_LOG=trace cargo run --example telemetry-replay

use std::io::Cursor;

use brewbus::payload::{FrameBody, Payload, ScaleReport};
use brewbus::wire::{encode_frame, DeviceId, FrameReader, WireError};
use bytes::BytesMut;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Replay log: three scale reports with line noise between them, as a
    // flaky serial link would deliver them.
    let mut log = BytesMut::new();
    for (i, weight_mg) in [12_000i32, 15_400, 18_500].iter().enumerate() {
        if i > 0 {
            log.extend_from_slice(&[0x00, 0xFF, 0x5A]);
        }
        let report = ScaleReport {
            timestamp_ms: 500 * (i as u32 + 1),
            weight_mg: *weight_mg,
            flow_mg_s: 120,
            status: 0,
        };
        let mut frame = report.to_frame(DeviceId::Scales, DeviceId::Coordinator)?;
        frame.sequence = i as u16;
        encode_frame(&frame, &mut log)?;
    }

    let mut reader = FrameReader::new(Cursor::new(log.to_vec()));
    loop {
        let frame = match reader.read_frame() {
            Ok(frame) => frame,
            Err(WireError::ConnectionClosed) => break,
            Err(err) => return Err(err.into()),
        };

        match FrameBody::from_frame(&frame) {
            Some(FrameBody::ScaleReport(report)) => eprintln!(
                "[replay] seq={} t={}ms weight={:.1}g flow={}mg/s",
                frame.sequence,
                report.timestamp_ms,
                report.weight_mg as f32 / 1000.0,
                report.flow_mg_s
            ),
            Some(body) => eprintln!("[replay] seq={} unexpected body: {body:?}", frame.sequence),
            None => eprintln!("[replay] seq={} undersized payload", frame.sequence),
        }
    }

    let stats = reader.stats();
    eprintln!(
        "[replay] done: {} frames, {} noise bytes skipped",
        stats.frames_decoded, stats.bytes_skipped
    );
    Ok(())
}
