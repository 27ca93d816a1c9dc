//! Bounded byte buffers on either side of the extractor.
//!
//! [`RawBuffer`] is what the transport fills from the serial port;
//! [`NormalizedBuffer`] is what the extractor produces. Both have a fixed
//! capacity chosen at construction and refuse writes past it.

use alloc::vec::Vec;
use core::fmt;

use bstr::{BStr, ByteSlice};

use crate::error::CapacityError;

/// Default capacity of raw and normalized buffers, in bytes.
pub const DEFAULT_CAPACITY: usize = 4096;

/// Bytes read from the receiver, not yet cleaned up.
///
/// The buffer never grows beyond the capacity it was created with.
/// [`fill`](RawBuffer::fill) takes what fits; [`try_extend`](RawBuffer::try_extend)
/// takes everything or nothing.
#[derive(Clone, PartialEq, Eq)]
pub struct RawBuffer {
    data: Vec<u8>,
    capacity: usize,
}

impl RawBuffer {
    /// Creates an empty buffer of [`DEFAULT_CAPACITY`] bytes.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty buffer holding at most `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends as much of `bytes` as fits and returns how many were taken.
    ///
    /// This is the shape a transport read loop wants: it keeps the head of
    /// the chunk and hands the tail to the next cycle.
    pub fn fill(&mut self, bytes: &[u8]) -> usize {
        let n = bytes.len().min(self.remaining());
        self.data.extend_from_slice(&bytes[..n]);
        if n < bytes.len() {
            log::warn!(
                "raw buffer full at {} bytes, {} bytes left unread",
                self.capacity,
                bytes.len() - n
            );
        }
        n
    }

    /// Appends all of `bytes` or nothing.
    ///
    /// # Errors
    ///
    /// [`CapacityError::BufferFull`] if `bytes` does not fit.
    pub fn try_extend(&mut self, bytes: &[u8]) -> Result<(), CapacityError> {
        if bytes.len() > self.remaining() {
            return Err(CapacityError::BufferFull {
                capacity: self.capacity,
            });
        }
        self.data.extend_from_slice(bytes);
        Ok(())
    }

    /// Number of valid bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether no bytes have been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Maximum number of bytes the buffer can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes that can still be written.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity - self.data.len()
    }

    /// The valid bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Discards the contents, keeping the capacity.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl Default for RawBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RawBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawBuffer")
            .field("data", &BStr::new(&self.data))
            .field("capacity", &self.capacity)
            .finish()
    }
}

/// Newline-separated sentences produced by the extractor.
///
/// Every byte is printable ASCII (`0x21..=0x7E`) or `\n`, so the contents
/// are always valid UTF-8 and [`NormalizedBuffer::as_str`] is infallible.
#[derive(Clone, PartialEq, Eq)]
pub struct NormalizedBuffer {
    data: Vec<u8>,
    capacity: usize,
}

impl NormalizedBuffer {
    /// Creates an empty buffer holding at most `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub(crate) fn push(&mut self, b: u8) -> Result<(), CapacityError> {
        if self.data.len() == self.capacity {
            return Err(CapacityError::BufferFull {
                capacity: self.capacity,
            });
        }
        self.data.push(b);
        Ok(())
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.data.truncate(len);
    }

    pub(crate) fn last(&self) -> Option<u8> {
        self.data.last().copied()
    }

    /// Rewrites every `\r` as `\n`, then drops every byte that is neither
    /// printable ASCII nor a line separator, compacting in place.
    pub(crate) fn scrub(&mut self) {
        for b in &mut self.data {
            if *b == b'\r' {
                *b = b'\n';
            }
        }
        self.data
            .retain(|&b| b.is_ascii_graphic() || b == b'\n' || b == b'\r');
    }

    /// Number of bytes held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no sentences.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Maximum number of bytes the buffer can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The contents as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ASCII is ever written; see `scrub`.
        core::str::from_utf8(&self.data).unwrap_or_default()
    }

    /// Iterates over the non-empty lines, without their terminators.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.as_str().split('\n').filter(|l| !l.is_empty())
    }

    /// Returns one reporting cycle of the receiver.
    ///
    /// A receiver emits its sentences in a fixed order once per fix, so the
    /// cycle is everything from the first line starting with `header` up to,
    /// but not including, the next line starting with `header`. The result
    /// keeps its line feeds. `None` if no line starts with `header`.
    ///
    /// ```rust
    /// use nmeamodem::SentenceExtractor;
    ///
    /// let raw = b"$GPGSA,1*00\r\n$GPRMC,1*00\r\n$GPGGA,1*00\r\n$GPRMC,2*00\r\n";
    /// let out = SentenceExtractor::default().extract(raw).unwrap();
    /// assert_eq!(out.cycle("$GPRMC"), Some("$GPRMC,1*00\n$GPGGA,1*00\n"));
    /// ```
    #[must_use]
    pub fn cycle(&self, header: &str) -> Option<&str> {
        let text = self.as_str();
        let mut start = None;
        let mut offset = 0;
        for line in text.split_inclusive('\n') {
            if line.starts_with(header) {
                match start {
                    None => start = Some(offset),
                    Some(s) => return Some(&text[s..offset]),
                }
            }
            offset += line.len();
        }
        start.map(|s| &text[s..])
    }

    /// Whether the buffer is empty or ends in a line feed.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.data.last_byte().is_none_or(|b| b == b'\n')
    }
}

impl fmt::Debug for NormalizedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NormalizedBuffer")
            .field("data", &BStr::new(&self.data))
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl fmt::Display for NormalizedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<[u8]> for NormalizedBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
