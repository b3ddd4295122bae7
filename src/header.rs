//! BMP file header and DIB header parsing.
//!
//! Every field lives at a fixed absolute offset from the start of the
//! file, regardless of which DIB header variant follows the 14-byte file
//! header. Parsing validates signature, header variant, dimensions,
//! compression and bit depth before the decoder allocates anything.

use crate::error::BmpError;
use crate::reader::ByteReader;

/// Signatures seen in the wild. Only `BM` is produced by modern encoders;
/// the rest mark OS/2 bitmap arrays and icon/pointer resources.
const SIGNATURES: [[u8; 2]; 6] = [*b"BM", *b"BA", *b"CI", *b"CP", *b"IC", *b"PT"];

/// Recognized DIB header sizes: BITMAPINFOHEADER, the v2/v3 mask
/// extensions, BITMAPV4HEADER and BITMAPV5HEADER. The 12-byte OS/2 v1 and
/// 64-byte OS/2 v2 headers are not supported.
const DIB_HEADER_SIZES: [u32; 5] = [40, 52, 56, 108, 124];

/// Largest width or height (in pixels) the decoder accepts.
const MAX_DIMENSION: u32 = 32727;

pub(crate) const FILE_HEADER_SIZE: usize = 14;

/// A parse needs at least the file header plus the smallest DIB header.
const MIN_HEADER_BYTES: usize = FILE_HEADER_SIZE + 40;

/// Compression schemes named by the `biCompression` header field.
///
/// Only [`Rgb`](Self::Rgb), the two RLE schemes and the two bitfield
/// schemes can be decoded; the JPEG/PNG passthrough and CMYK family are
/// recognized so they can be rejected with a precise error.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compression {
    /// `BI_RGB`: uncompressed.
    Rgb,
    /// `BI_RLE8`: run-length encoding, one byte per index.
    Rle8,
    /// `BI_RLE4`: run-length encoding, one nibble per index.
    Rle4,
    /// `BI_BITFIELDS`: three explicit channel masks follow the header.
    Bitfields,
    /// `BI_JPEG`: embedded JPEG stream.
    Jpeg,
    /// `BI_PNG`: embedded PNG stream.
    Png,
    /// `BI_ALPHABITFIELDS`: four explicit channel masks follow the header.
    AlphaBitfields,
    /// `BI_CMYK`: uncompressed CMYK (metafile-only).
    Cmyk,
    /// `BI_CMYKRLE8` (metafile-only).
    CmykRle8,
    /// `BI_CMYKRLE4` (metafile-only).
    CmykRle4,
}

impl Compression {
    pub(crate) fn from_u32(num: u32) -> Option<Self> {
        match num {
            0 => Some(Self::Rgb),
            1 => Some(Self::Rle8),
            2 => Some(Self::Rle4),
            3 => Some(Self::Bitfields),
            4 => Some(Self::Jpeg),
            5 => Some(Self::Png),
            6 => Some(Self::AlphaBitfields),
            11 => Some(Self::Cmyk),
            12 => Some(Self::CmykRle8),
            13 => Some(Self::CmykRle4),
            _ => None,
        }
    }

    /// Whether pixel data in this scheme can be decoded at all.
    fn is_decodable(self) -> bool {
        matches!(
            self,
            Self::Rgb | Self::Rle8 | Self::Rle4 | Self::Bitfields | Self::AlphaBitfields
        )
    }
}

/// Validated header fields the decode paths work from.
///
/// `height` is the magnitude; the stored sign is captured in `top_down`.
pub(crate) struct BmpHeader {
    pub width: u32,
    pub height: u32,
    pub top_down: bool,
    pub bits_per_pixel: u16,
    pub compression: Compression,
    pub data_offset: u32,
    pub declared_data_size: u32,
    pub color_table_count: u32,
    pub dib_header_size: u32,
}

impl BmpHeader {
    pub(crate) fn parse(reader: &ByteReader) -> Result<Self, BmpError> {
        reader.require(0, MIN_HEADER_BYTES)?;

        let signature = reader.array_at::<2>(0)?;
        if !SIGNATURES.contains(&signature) {
            return Err(BmpError::InvalidSignature { found: signature });
        }

        let dib_header_size = reader.u32_le_at(14)?;
        if !DIB_HEADER_SIZES.contains(&dib_header_size) {
            return Err(BmpError::UnsupportedHeader(dib_header_size));
        }

        let data_offset = reader.u32_le_at(10)?;
        let width = reader.i32_le_at(18)?;
        let height = reader.i32_le_at(22)?;
        let bits_per_pixel = reader.u16_le_at(28)?;
        let compression_code = reader.u32_le_at(30)?;
        let declared_data_size = reader.u32_le_at(34)?;
        let color_table_count = reader.u32_le_at(46)?;

        if height == 0
            || height.unsigned_abs() > MAX_DIMENSION
            || width <= 0
            || width.unsigned_abs() > MAX_DIMENSION
        {
            return Err(BmpError::InvalidDimensions { width, height });
        }

        let compression = Compression::from_u32(compression_code)
            .filter(|c| c.is_decodable())
            .ok_or(BmpError::UnsupportedCompression(compression_code))?;

        if !matches!(bits_per_pixel, 1 | 4 | 8 | 16 | 24 | 32) {
            return Err(BmpError::UnsupportedColorDepth(bits_per_pixel));
        }

        Ok(Self {
            width: width.unsigned_abs(),
            height: height.unsigned_abs(),
            top_down: height < 0,
            bits_per_pixel,
            compression,
            data_offset,
            declared_data_size,
            color_table_count,
            dib_header_size,
        })
    }
}

/// Header-only information, extracted without decoding pixel data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpInfo {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u16,
    pub compression: Compression,
    /// Whether rows are stored top-down (negative height in the file).
    pub top_down: bool,
}

impl BmpInfo {
    /// Parse the headers of `data` without touching pixel data.
    ///
    /// Succeeds exactly when a full [`decode`](crate::decode) would get
    /// past header validation, so this is the cheap way to size buffers or
    /// reject files up front.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BmpError> {
        let reader = ByteReader::new(data);
        let header = BmpHeader::parse(&reader)?;
        Ok(Self {
            width: header.width,
            height: header.height,
            bits_per_pixel: header.bits_per_pixel,
            compression: header.compression,
            top_down: header.top_down,
        })
    }
}

/// Cheap signature probe: does `data` start like a BMP file?
pub fn is_bmp(data: &[u8]) -> bool {
    data.len() >= 2 && SIGNATURES.contains(&[data[0], data[1]])
}
