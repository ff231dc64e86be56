//! Typed payload codecs for brewbus frames.
//!
//! Frames carry raw bytes; this crate gives each message type its fixed
//! binary layout. Analog quantities travel fixed-point: signed
//! centi-units in an i16 for control targets, step-scaled bytes for
//! profile node fields. Round trips are lossy only to quantization, and
//! out-of-range values saturate on encode instead of wrapping or
//! failing.
//!
//! Decoding never allocates an error: a buffer shorter than a layout is
//! `None`, and unknown enum codes pass through as `Unknown` variants.

pub mod dispatch;
pub mod error;
pub mod fixed;
pub mod haptic;
pub mod input;
pub mod menu;
pub mod profile;
pub mod scale;

pub use dispatch::{FrameBody, Payload};
pub use error::{PayloadError, Result};
pub use haptic::{HapticConfig, HapticMode};
pub use input::{InputEvent, InputKind};
pub use menu::{MenuItem, MenuWindow, MAX_MENU_ITEMS};
pub use profile::{
    Band, Interpolation, ProfileNode, ProfilePriority, ProfileStep, ProfileTable, MAX_NODES,
};
pub use scale::ScaleReport;
