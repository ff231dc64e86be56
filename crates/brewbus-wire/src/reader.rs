use std::io::{ErrorKind, Read};

use bytes::BytesMut;

use crate::codec::{decode_frame, Frame};
use crate::error::{Result, WireError};

// Frames cap at 239 bytes, so modest buffers hold several of them.
const INITIAL_BUFFER_CAPACITY: usize = 1024;
const READ_CHUNK_SIZE: usize = 512;

/// Counters kept by a [`FrameReader`] over the life of a stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    /// Complete frames handed to the caller.
    pub frames_decoded: u64,
    /// Bytes discarded while hunting for a frame sentinel.
    pub bytes_skipped: u64,
}

/// Reads complete frames from any `Read` stream.
///
/// Handles partial reads and resynchronization internally; callers always
/// get complete frames. Garbage between frames is skipped silently and
/// tallied in [`StreamStats`].
pub struct FrameReader<T> {
    inner: T,
    buf: BytesMut,
    stats: StreamStats,
}

impl<T: Read> FrameReader<T> {
    /// Create a new frame reader.
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            stats: StreamStats::default(),
        }
    }

    /// Read the next complete frame (blocking).
    ///
    /// Returns `Err(WireError::ConnectionClosed)` when EOF is reached.
    pub fn read_frame(&mut self) -> Result<Frame> {
        loop {
            // Drain the buffer: each decode step yields a frame, discards
            // one resync byte, or stalls until more bytes arrive.
            loop {
                let before = self.buf.len();
                if let Some(frame) = decode_frame(&mut self.buf) {
                    self.stats.frames_decoded += 1;
                    return Ok(frame);
                }
                let skipped = before - self.buf.len();
                if skipped == 0 {
                    break; // Need more data
                }
                self.stats.bytes_skipped += skipped as u64;
            }

            let mut chunk = [0u8; READ_CHUNK_SIZE];
            let read = match self.inner.read(&mut chunk) {
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(WireError::Io(err)),
            };

            if read == 0 {
                return Err(WireError::ConnectionClosed);
            }

            self.buf.extend_from_slice(&chunk[..read]);
        }
    }

    /// Counters for this stream so far.
    pub fn stats(&self) -> StreamStats {
        self.stats
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }
}
