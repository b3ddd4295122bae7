//! Uncompressed pixel decoding for every supported bit depth.
//!
//! Rows are read in file order starting at the header's pixel data
//! offset; each row occupies `ceil(bpp * width / 32) * 4` bytes including
//! alignment padding. Pixels are appended row-major as working colors;
//! row order is normalized later in the pipeline.

use alloc::vec::Vec;

use crate::bitfields::{ChannelMask, ChannelMasks};
use crate::error::BmpError;
use crate::header::BmpHeader;
use crate::palette::ColorTable;
use crate::pixel::Rgba;
use crate::reader::ByteReader;

/// Bytes per stored row, padded to a 4-byte boundary.
pub(crate) fn row_stride(bits_per_pixel: u16, width: usize) -> usize {
    (usize::from(bits_per_pixel) * width).div_ceil(32) * 4
}

pub(crate) fn decode(
    reader: &ByteReader,
    header: &BmpHeader,
    masks: &ChannelMasks,
    palette: &ColorTable,
    pixels: &mut Vec<Rgba>,
) -> Result<(), BmpError> {
    match header.bits_per_pixel {
        1 => decode_1bit(reader, header, palette, pixels),
        4 => decode_4bit(reader, header, palette, pixels),
        8 => decode_8bit(reader, header, palette, pixels),
        16 => decode_16bit(reader, header, masks, pixels),
        24 => decode_24bit(reader, header, pixels),
        32 => decode_32bit(reader, header, masks, pixels),
        depth => Err(BmpError::UnsupportedColorDepth(depth)),
    }
}

fn decode_1bit(
    reader: &ByteReader,
    header: &BmpHeader,
    palette: &ColorTable,
    pixels: &mut Vec<Rgba>,
) -> Result<(), BmpError> {
    let width = header.width as usize;
    let stride = row_stride(1, width);
    let base = header.data_offset as usize;

    for row in 0..header.height as usize {
        let row_start = base + row * stride;
        for x in 0..width {
            let byte = reader.u8_at(row_start + x / 8)?;
            let index = (byte >> (7 - (x % 8))) & 1;
            pixels.push(palette.get(index));
        }
    }
    Ok(())
}

fn decode_4bit(
    reader: &ByteReader,
    header: &BmpHeader,
    palette: &ColorTable,
    pixels: &mut Vec<Rgba>,
) -> Result<(), BmpError> {
    let width = header.width as usize;
    let stride = row_stride(4, width);
    let base = header.data_offset as usize;

    for row in 0..header.height as usize {
        let row_start = base + row * stride;
        for x in 0..width {
            let byte = reader.u8_at(row_start + x / 2)?;
            let index = if x % 2 == 0 { byte >> 4 } else { byte & 0x0F };
            pixels.push(palette.get(index));
        }
    }
    Ok(())
}

fn decode_8bit(
    reader: &ByteReader,
    header: &BmpHeader,
    palette: &ColorTable,
    pixels: &mut Vec<Rgba>,
) -> Result<(), BmpError> {
    let width = header.width as usize;
    let stride = row_stride(8, width);
    let base = header.data_offset as usize;

    for row in 0..header.height as usize {
        let row_start = base + row * stride;
        for x in 0..width {
            let index = reader.u8_at(row_start + x)?;
            pixels.push(palette.get(index));
        }
    }
    Ok(())
}

/// One channel of a 16-bit pixel.
///
/// The extracted value widens to 8 bits by shifting left by
/// `8 - popcount(low 8 bits of the aligned mask)`; masks wider than
/// 8 bits therefore truncate instead of scaling.
struct Channel16 {
    mask: ChannelMask,
    shiftback: u32,
    /// Widened value a saturated channel produces.
    max: u32,
}

impl Channel16 {
    fn new(mask: ChannelMask) -> Self {
        let shiftback = 8 - u32::from((mask.ceiling() as u8).count_ones());
        Self {
            mask,
            shiftback,
            max: mask.ceiling() << shiftback,
        }
    }

    fn sample(&self, word: u32) -> u8 {
        (self.mask.extract(word) << self.shiftback) as u8
    }
}

fn decode_16bit(
    reader: &ByteReader,
    header: &BmpHeader,
    masks: &ChannelMasks,
    pixels: &mut Vec<Rgba>,
) -> Result<(), BmpError> {
    let width = header.width as usize;
    let stride = row_stride(16, width);
    let base = header.data_offset as usize;
    let red = Channel16::new(masks.red);
    let green = Channel16::new(masks.green);
    let blue = Channel16::new(masks.blue);

    for row in 0..header.height as usize {
        let row_start = base + row * stride;
        for x in 0..width {
            let word = u32::from(reader.u16_le_at(row_start + x * 2)?);
            let r = red.sample(word);
            let g = green.sample(word);
            let b = blue.sample(word);
            // A pixel saturated on all three channels renders as pure
            // white, not the widened mask ceiling (248 under RGB555).
            let pixel = if u32::from(r) == red.max
                && u32::from(g) == green.max
                && u32::from(b) == blue.max
            {
                Rgba {
                    r: 255,
                    g: 255,
                    b: 255,
                    a: 255,
                }
            } else {
                Rgba { r, g, b, a: 255 }
            };
            pixels.push(pixel);
        }
    }
    Ok(())
}

fn decode_24bit(
    reader: &ByteReader,
    header: &BmpHeader,
    pixels: &mut Vec<Rgba>,
) -> Result<(), BmpError> {
    let width = header.width as usize;
    let stride = row_stride(24, width);
    let base = header.data_offset as usize;

    for row in 0..header.height as usize {
        let row_start = base + row * stride;
        for x in 0..width {
            let [b, g, r] = reader.array_at::<3>(row_start + x * 3)?;
            pixels.push(Rgba { r, g, b, a: 255 });
        }
    }
    Ok(())
}

fn decode_32bit(
    reader: &ByteReader,
    header: &BmpHeader,
    masks: &ChannelMasks,
    pixels: &mut Vec<Rgba>,
) -> Result<(), BmpError> {
    let width = header.width as usize;
    let stride = row_stride(32, width);
    let base = header.data_offset as usize;
    // Alpha is whatever the color masks leave in the top byte.
    let alpha_bits = !masks.color_bits();

    for row in 0..header.height as usize {
        let row_start = base + row * stride;
        for x in 0..width {
            let word = reader.u32_le_at(row_start + x * 4)?;
            pixels.push(Rgba {
                r: masks.red.extract(word) as u8,
                g: masks.green.extract(word) as u8,
                b: masks.blue.extract(word) as u8,
                a: ((word & alpha_bits) >> 24) as u8,
            });
        }
    }
    Ok(())
}
