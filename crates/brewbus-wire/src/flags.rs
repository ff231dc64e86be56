//! Frame header flag bits.
//!
//! The codec transports these untouched; acknowledgement and retransmit
//! handling live with the caller.

/// Sender expects an `Ack` frame echoing this sequence number.
pub const NEED_ACK: u8 = 0x01;

/// The frame repeats an earlier sequence number.
pub const RETRANSMITTED: u8 = 0x02;

/// Returns true if `flags` has `flag` set.
pub fn has_flag(flags: u8, flag: u8) -> bool {
    flags & flag != 0
}
