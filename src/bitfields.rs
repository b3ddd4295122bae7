//! Channel mask resolution for 16-bit and 32-bit pixels.
//!
//! Bitfield compression stores explicit per-channel masks immediately
//! after the DIB header; everything else falls back to the historical
//! defaults (RGB555 at 16 bpp, XRGB8888 at 32 bpp).

use crate::error::BmpError;
use crate::header::{BmpHeader, Compression, FILE_HEADER_SIZE};
use crate::reader::ByteReader;

/// One channel's extraction mask with its precomputed shift.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ChannelMask {
    pub mask: u32,
    /// Trailing zero count of `mask`; 32 when the mask is empty.
    pub shift: u32,
}

impl ChannelMask {
    fn new(mask: u32) -> Self {
        Self {
            mask,
            shift: mask.trailing_zeros(),
        }
    }

    /// The masked value, aligned to bit 0. Zero for an empty mask.
    pub(crate) fn extract(&self, word: u32) -> u32 {
        (word & self.mask).checked_shr(self.shift).unwrap_or(0)
    }

    /// Largest value `extract` can produce.
    pub(crate) fn ceiling(&self) -> u32 {
        self.mask.checked_shr(self.shift).unwrap_or(0)
    }
}

/// Resolved red/green/blue masks for one file.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ChannelMasks {
    pub red: ChannelMask,
    pub green: ChannelMask,
    pub blue: ChannelMask,
}

impl ChannelMasks {
    fn new(red: u32, green: u32, blue: u32) -> Self {
        Self {
            red: ChannelMask::new(red),
            green: ChannelMask::new(green),
            blue: ChannelMask::new(blue),
        }
    }

    /// Combined coverage of the three color masks.
    pub(crate) fn color_bits(&self) -> u32 {
        self.red.mask | self.green.mask | self.blue.mask
    }

    /// Resolve the masks for `header`.
    ///
    /// Bitfields reads three little-endian `u32` masks at
    /// `14 + dib_header_size`; AlphaBitfields reads a fourth (alpha) mask
    /// there too, which is bounds-checked and then discarded since 32-bit
    /// alpha always comes from the bits the color masks leave uncovered.
    pub(crate) fn resolve(
        reader: &ByteReader,
        header: &BmpHeader,
    ) -> Result<ChannelMasks, BmpError> {
        match header.compression {
            Compression::Bitfields | Compression::AlphaBitfields => {
                let offset = FILE_HEADER_SIZE + header.dib_header_size as usize;
                let red = reader.u32_le_at(offset)?;
                let green = reader.u32_le_at(offset + 4)?;
                let blue = reader.u32_le_at(offset + 8)?;
                if header.compression == Compression::AlphaBitfields {
                    reader.u32_le_at(offset + 12)?;
                }
                Ok(Self::new(red, green, blue))
            }
            _ if header.bits_per_pixel == 16 => Ok(Self::new(0x7C00, 0x03E0, 0x001F)),
            _ => Ok(Self::new(0x00FF_0000, 0x0000_FF00, 0x0000_00FF)),
        }
    }
}
