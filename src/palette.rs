//! Color table loading for indexed (1/4/8 bpp) images.

use crate::error::BmpError;
use crate::header::{BmpHeader, Compression, FILE_HEADER_SIZE};
use crate::pixel::Rgba;
use crate::reader::ByteReader;

/// A loaded color table.
///
/// Backed by a full 256-slot array so any 8-bit index is a valid lookup;
/// slots past the declared entry count stay opaque black.
pub(crate) struct ColorTable {
    entries: [Rgba; 256],
}

impl ColorTable {
    pub(crate) fn empty() -> Self {
        Self {
            entries: [Rgba::default(); 256],
        }
    }

    pub(crate) fn get(&self, index: u8) -> Rgba {
        self.entries[usize::from(index)]
    }

    /// Load the color table for an indexed image.
    ///
    /// The table sits after the DIB header and any bitfield mask block.
    /// Entries are 4 bytes `B G R reserved`; the reserved byte is ignored
    /// and every entry is forced opaque. A declared count of zero means
    /// the encoder wrote the full `1 << bpp` table without saying so.
    pub(crate) fn load(reader: &ByteReader, header: &BmpHeader) -> Result<Self, BmpError> {
        if header.color_table_count > 256 {
            return Err(BmpError::ColorTableOverflow(header.color_table_count));
        }

        let count = if header.color_table_count == 0 {
            1usize << header.bits_per_pixel
        } else {
            header.color_table_count as usize
        };

        let mask_block = match header.compression {
            Compression::Bitfields => 12,
            Compression::AlphaBitfields => 16,
            _ => 0,
        };
        let offset = FILE_HEADER_SIZE + header.dib_header_size as usize + mask_block;

        let mut table = Self::empty();
        for i in 0..count {
            let [b, g, r, _] = reader.array_at::<4>(offset + i * 4)?;
            table.entries[i] = Rgba { r, g, b, a: 255 };
        }
        Ok(table)
    }
}
