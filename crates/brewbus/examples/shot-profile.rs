//! Shot profile — packs a whole brew profile into a single frame.
//!
//! Run with:
//!   cargo run --example shot-profile

use brewbus::payload::{
    Band, FrameBody, Interpolation, Payload, ProfileNode, ProfilePriority, ProfileTable,
};
use brewbus::wire::{decode_frame, encode_frame, DeviceId};
use bytes::BytesMut;

fn node(
    time_offset_ms: u16,
    pressure: f32,
    flow: f32,
    interpolation: Interpolation,
) -> ProfileNode {
    ProfileNode {
        time_offset_ms,
        interpolation,
        priority: ProfilePriority::Pressure,
        temperature_c: Band::new(93.0, 0.5),
        pressure_bar: Band::new(pressure, 0.3),
        flow_ml_s: Band::new(flow, 0.5),
        volume_ml: Band::new(36.0, 2.0),
        energy: Band::new(0.0, 0.0),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Classic lever-style shot: soak, ramp to nine bar, hold, decline.
    let table = ProfileTable {
        profile_id: 1,
        nodes: vec![
            node(0, 2.0, 4.0, Interpolation::Step),
            node(8_000, 9.0, 2.5, Interpolation::Linear),
            node(12_000, 9.0, 2.0, Interpolation::Step),
            node(22_000, 6.0, 1.5, Interpolation::EaseOut),
        ],
    };

    let frame = table.to_frame(DeviceId::Coordinator, DeviceId::GroupHead)?;
    let mut wire = BytesMut::new();
    encode_frame(&frame, &mut wire)?;

    eprintln!(
        "[profile] {} nodes in {} wire bytes:",
        table.nodes.len(),
        wire.len()
    );
    for chunk in wire.chunks(16) {
        let hex: Vec<String> = chunk.iter().map(|b| format!("{b:02X}")).collect();
        eprintln!("[profile]   {}", hex.join(" "));
    }

    let decoded = decode_frame(&mut wire).ok_or("frame did not decode")?;
    match FrameBody::from_frame(&decoded) {
        Some(FrameBody::ProfileTable(table)) => {
            for node in &table.nodes {
                eprintln!(
                    "[profile] t+{:>5}ms {:>4.1} bar {:>3.1} ml/s ({:?})",
                    node.time_offset_ms,
                    node.pressure_bar.target,
                    node.flow_ml_s.target,
                    node.interpolation
                );
            }
        }
        other => eprintln!("[profile] unexpected body: {other:?}"),
    }
    Ok(())
}
