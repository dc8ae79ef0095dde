use bytes::{Bytes, BytesMut};

/// Append-only output buffer with a hard capacity.
///
/// Every response is assembled through this type. An append that would grow
/// the buffer past its capacity fails without modifying the buffer, so a
/// serialized response is either complete or never emitted, and a
/// Content-Length header can never describe bytes that were dropped.
#[derive(Debug)]
pub struct ResponseBuffer {
    buf: BytesMut,
    capacity: usize,
}

/// Returned when an append would exceed the buffer's capacity.
///
/// Carries the end offset the rejected append would have reached and the
/// capacity it collided with, so callers can diagnose without guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferOverflow {
    /// Offset the rejected append would have ended at.
    pub attempted: usize,
    /// Hard capacity of the buffer.
    pub capacity: usize,
}

impl ResponseBuffer {
    /// Creates an empty buffer that will never hold more than `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::new(),
            capacity,
        }
    }

    /// Appends `src` at the current offset.
    ///
    /// Returns [`BufferOverflow`] and leaves the buffer unmodified when the
    /// resulting length would exceed the capacity.
    pub fn append(&mut self, src: &[u8]) -> Result<(), BufferOverflow> {
        let attempted = self.buf.len() + src.len();
        if attempted > self.capacity {
            return Err(BufferOverflow {
                attempted,
                capacity: self.capacity,
            });
        }

        self.buf.extend_from_slice(src);
        Ok(())
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consumes the buffer into an immutable byte sequence.
    pub fn freeze(self) -> Bytes {
        self.buf.freeze()
    }
}
