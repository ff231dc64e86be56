/// Errors that can occur while building payloads.
///
/// Decoding never errors: a short buffer is `None`, and unknown codes pass
/// through as their `Unknown` variants.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// A profile table holds more nodes than one frame can carry.
    #[error("too many profile nodes ({count}, max {max})")]
    TooManyNodes { count: usize, max: usize },

    /// A menu window holds more items than one frame can carry.
    #[error("too many menu items ({count}, max {max})")]
    TooManyItems { count: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, PayloadError>;
