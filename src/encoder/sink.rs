//! Byte sinks the encoder writes into

use crate::error::{Error, Result};

/// Destination of an encoded argument value
///
/// The encoder calls `write_bytes` at most once per value, with exactly the
/// value's in-memory size. Where the bytes land is up to the sink.
pub trait ByteSink {
    /// Writes `bytes` into the destination
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()>;
}

/// Writes into a caller-owned byte region at a fixed offset
///
/// A write that does not fit in `region[offset..]` fails without touching the
/// region.
#[derive(Debug)]
pub struct SliceSink<'a> {
    region: &'a mut [u8],
    offset: usize,
    written: usize,
}

impl<'a> SliceSink<'a> {
    /// Creates a sink writing at `offset` within `region`
    pub fn new(region: &'a mut [u8], offset: usize) -> Self {
        Self {
            region,
            offset,
            written: 0,
        }
    }

    /// Number of bytes copied by the last successful write
    #[inline]
    pub fn bytes_written(&self) -> usize {
        self.written
    }
}

impl ByteSink for SliceSink<'_> {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let available = self.region.len().saturating_sub(self.offset);
        if bytes.len() > available {
            return Err(Error::destination_too_small(
                self.offset,
                bytes.len(),
                available,
            ));
        }
        self.region[self.offset..self.offset + bytes.len()].copy_from_slice(bytes);
        self.written = bytes.len();
        Ok(())
    }
}

/// Appends the bytes
impl ByteSink for Vec<u8> {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}
