//! Shared helper that synthesizes BMP files in memory.
#![allow(dead_code)]

/// In-memory BMP assembler.
///
/// Lays out a 14-byte file header, a DIB header of the requested size,
/// then bitfield masks, palette entries and pixel data in that order,
/// with the pixel data offset pointing past everything that precedes it.
/// Fields default to a plausible uncompressed file; tests poke the ones
/// they want malformed.
pub struct Bmp {
    pub signature: [u8; 2],
    pub width: i32,
    pub height: i32,
    pub bpp: u16,
    pub compression: u32,
    pub dib_size: u32,
    /// Little-endian mask block written right after the DIB header.
    pub masks: Vec<u32>,
    /// 4-byte `B G R reserved` entries.
    pub palette: Vec<[u8; 4]>,
    /// Overrides the color count field (defaults to `palette.len()`).
    pub color_count: Option<u32>,
    /// Overrides the declared pixel data size (defaults to
    /// `pixel_data.len()`).
    pub declared_size: Option<u32>,
    /// Overrides the pixel data offset field.
    pub data_offset: Option<u32>,
    pub pixel_data: Vec<u8>,
}

impl Bmp {
    pub fn new(width: i32, height: i32, bpp: u16) -> Self {
        Self {
            signature: *b"BM",
            width,
            height,
            bpp,
            compression: 0,
            dib_size: 40,
            masks: Vec::new(),
            palette: Vec::new(),
            color_count: None,
            declared_size: None,
            data_offset: None,
            pixel_data: Vec::new(),
        }
    }

    pub fn build(&self) -> Vec<u8> {
        let header_len = 14 + self.dib_size as usize;
        let data_offset = self
            .data_offset
            .unwrap_or((header_len + 4 * self.masks.len() + 4 * self.palette.len()) as u32);
        let declared = self
            .declared_size
            .unwrap_or(self.pixel_data.len() as u32);
        let colors = self.color_count.unwrap_or(self.palette.len() as u32);

        let mut out = Vec::new();
        out.extend_from_slice(&self.signature);
        out.extend_from_slice(&0u32.to_le_bytes()); // file size, unread
        out.extend_from_slice(&[0; 4]); // reserved
        out.extend_from_slice(&data_offset.to_le_bytes());

        out.extend_from_slice(&self.dib_size.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes()); // planes
        out.extend_from_slice(&self.bpp.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&declared.to_le_bytes());
        out.extend_from_slice(&[0; 8]); // resolution
        out.extend_from_slice(&colors.to_le_bytes());
        out.extend_from_slice(&[0; 4]); // important colors
        if out.len() < header_len {
            out.resize(header_len, 0);
        }

        for mask in &self.masks {
            out.extend_from_slice(&mask.to_le_bytes());
        }
        for entry in &self.palette {
            out.extend_from_slice(entry);
        }
        out.extend_from_slice(&self.pixel_data);
        out
    }
}

/// A color table entry in file order (`B G R reserved`).
pub fn entry(r: u8, g: u8, b: u8) -> [u8; 4] {
    [b, g, r, 0]
}

/// Pack 5-bit channels into a little-endian RGB555 word.
pub fn rgb555(r: u16, g: u16, b: u16) -> [u8; 2] {
    ((r << 10) | (g << 5) | b).to_le_bytes()
}

/// One RGBA pixel out of a [`PixelFormat::Rgba8`]-decoded image.
///
/// [`PixelFormat::Rgba8`]: zendib::PixelFormat::Rgba8
pub fn rgba_at(image: &zendib::DecodedImage, x: u32, y: u32) -> [u8; 4] {
    let bytes = image.as_bytes().unwrap();
    let i = ((y * image.width + x) * 4) as usize;
    [bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]]
}
