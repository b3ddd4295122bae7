//! Bounds-checked reads over the input buffer.
//!
//! BMP headers address everything by absolute position (the pixel data
//! offset, the color table, the bitfield masks), so the reader takes an
//! explicit offset on every call instead of tracking a cursor. Any read
//! that would leave the buffer fails with
//! [`BmpError::TruncatedBuffer`](crate::BmpError::TruncatedBuffer).

use crate::error::BmpError;

pub(crate) struct ByteReader<'a> {
    data: &'a [u8],
}

impl<'a> ByteReader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Ensure `len` bytes exist starting at `offset`.
    pub(crate) fn require(&self, offset: usize, len: usize) -> Result<(), BmpError> {
        let end = offset.checked_add(len);
        match end {
            Some(end) if end <= self.data.len() => Ok(()),
            _ => Err(BmpError::TruncatedBuffer {
                offset,
                len,
                total: self.data.len(),
            }),
        }
    }

    fn span(&self, offset: usize, len: usize) -> Result<&'a [u8], BmpError> {
        self.require(offset, len)?;
        Ok(&self.data[offset..offset + len])
    }

    pub(crate) fn u8_at(&self, offset: usize) -> Result<u8, BmpError> {
        self.require(offset, 1)?;
        Ok(self.data[offset])
    }

    pub(crate) fn u16_le_at(&self, offset: usize) -> Result<u16, BmpError> {
        Ok(u16::from_le_bytes(self.array_at::<2>(offset)?))
    }

    pub(crate) fn u32_le_at(&self, offset: usize) -> Result<u32, BmpError> {
        Ok(u32::from_le_bytes(self.array_at::<4>(offset)?))
    }

    pub(crate) fn i32_le_at(&self, offset: usize) -> Result<i32, BmpError> {
        Ok(i32::from_le_bytes(self.array_at::<4>(offset)?))
    }

    pub(crate) fn array_at<const N: usize>(&self, offset: usize) -> Result<[u8; N], BmpError> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.span(offset, N)?);
        Ok(buf)
    }
}
