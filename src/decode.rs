use alloc::vec::Vec;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use crate::bitfields::ChannelMasks;
use crate::error::BmpError;
use crate::header::{BmpHeader, Compression};
use crate::limits::Limits;
use crate::palette::ColorTable;
use crate::pixel::{PixelFormat, Rgba};
use crate::raster;
use crate::reader::ByteReader;
use crate::rle;

/// Channel data of a decoded image, matching the sample type of the
/// requested [`PixelFormat`].
#[derive(Clone, Debug, PartialEq)]
pub enum PixelData {
    U8(Vec<u8>),
    F32(Vec<f32>),
}

impl PixelData {
    /// Borrow the samples as bytes, or `None` for float data.
    pub fn as_u8(&self) -> Option<&[u8]> {
        match self {
            Self::U8(data) => Some(data),
            Self::F32(_) => None,
        }
    }

    /// Borrow the samples as floats, or `None` for byte data.
    pub fn as_f32(&self) -> Option<&[f32]> {
        match self {
            Self::U8(_) => None,
            Self::F32(data) => Some(data),
        }
    }
}

/// Decoded image: row-major pixels, always top-down.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    data: PixelData,
}

impl DecodedImage {
    /// Access the pixel data.
    pub fn data(&self) -> &PixelData {
        &self.data
    }

    /// Take ownership of the pixel data.
    pub fn into_data(self) -> PixelData {
        self.data
    }

    /// Pixel data as raw bytes; `None` when a float format was requested.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        self.data.as_u8()
    }

    /// Pixel data as floats; `None` when a byte format was requested.
    pub fn as_floats(&self) -> Option<&[f32]> {
        self.data.as_f32()
    }

    /// Bytes per pixel of the output format.
    pub fn bytes_per_pixel(&self) -> usize {
        self.format.bytes_per_pixel()
    }

    /// Channels per pixel of the output format.
    pub fn channels(&self) -> usize {
        self.format.channels()
    }

    /// Reinterpret the pixel data as a typed pixel slice.
    ///
    /// Returns [`BmpError::FormatMismatch`] if the output format doesn't
    /// match `P`.
    #[cfg(feature = "rgb")]
    pub fn as_pixels<P: crate::DecodePixel>(&self) -> Result<&[P], BmpError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        match (&self.data, self.format == P::format()) {
            (PixelData::U8(bytes), true) => Ok(bytes.as_slice().as_pixels()),
            _ => Err(BmpError::FormatMismatch {
                expected: P::format(),
                actual: self.format,
            }),
        }
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of typed pixels.
    ///
    /// Returns [`BmpError::FormatMismatch`] if the output format doesn't
    /// match `P`.
    #[cfg(feature = "imgref")]
    pub fn as_imgref<P: crate::DecodePixel>(&self) -> Result<imgref::ImgRef<'_, P>, BmpError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgRef::new(
            pixels,
            self.width as usize,
            self.height as usize,
        ))
    }

    /// Convert to an [`imgref::ImgVec`] of typed pixels.
    ///
    /// Returns [`BmpError::FormatMismatch`] if the output format doesn't
    /// match `P`.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec<P: crate::DecodePixel>(&self) -> Result<imgref::ImgVec<P>, BmpError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgVec::new(
            pixels.to_vec(),
            self.width as usize,
            self.height as usize,
        ))
    }
}

/// Builder for a decode call.
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    format: PixelFormat,
    limits: Limits,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            format: PixelFormat::Rgba8,
            limits: Limits::default(),
        }
    }

    /// Select the output pixel format (default [`PixelFormat::Rgba8`]).
    pub fn with_format(mut self, format: PixelFormat) -> Self {
        self.format = format;
        self
    }

    /// Apply resource limits to this decode.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Run the decode.
    pub fn decode(self) -> Result<DecodedImage, BmpError> {
        let reader = ByteReader::new(self.data);
        let header = BmpHeader::parse(&reader)?;
        self.limits.check(header.width, header.height)?;

        let width = header.width as usize;
        let height = header.height as usize;
        let pixel_count = width * height;
        self.limits
            .check_memory(pixel_count as u64 * size_of::<Rgba>() as u64)?;
        self.limits
            .check_memory(pixel_count as u64 * self.format.bytes_per_pixel() as u64)?;

        let masks = ChannelMasks::resolve(&reader, &header)?;
        let palette = if header.bits_per_pixel <= 8 {
            ColorTable::load(&reader, &header)?
        } else {
            ColorTable::empty()
        };

        let mut pixels: Vec<Rgba> = Vec::with_capacity(pixel_count);
        match (header.bits_per_pixel, header.compression) {
            (8, Compression::Rle8) => rle::decode_rle8(&reader, &header, &palette, &mut pixels)?,
            (4, Compression::Rle4) => rle::decode_rle4(&reader, &header, &palette, &mut pixels)?,
            _ => raster::decode(&reader, &header, &masks, &palette, &mut pixels)?,
        }

        // Bottom-up files come out of the readers last row first.
        if !header.top_down {
            flip_rows(&mut pixels, width);
        }

        Ok(DecodedImage {
            width: header.width,
            height: header.height,
            format: self.format,
            data: convert(&pixels, self.format),
        })
    }
}

/// Decode with default settings: RGBA8 output, no limits.
pub fn decode(data: &[u8]) -> Result<DecodedImage, BmpError> {
    DecodeRequest::new(data).decode()
}

/// Reverse row order in place. The middle row of an odd-height image
/// stays where it is.
fn flip_rows(pixels: &mut [Rgba], width: usize) {
    let mid = pixels.len() / 2;
    let (top, bottom) = pixels.split_at_mut(mid);
    for (upper, lower) in top
        .chunks_exact_mut(width)
        .zip(bottom.rchunks_exact_mut(width))
    {
        upper.swap_with_slice(lower);
    }
}

/// Map a byte channel onto the unit interval.
fn to_unit(v: u8) -> f32 {
    f32::from(v) / 255.0
}

fn convert(pixels: &[Rgba], format: PixelFormat) -> PixelData {
    match format {
        PixelFormat::Rgb8 => {
            let mut out = Vec::with_capacity(pixels.len() * 3);
            for p in pixels {
                out.extend_from_slice(&[p.r, p.g, p.b]);
            }
            PixelData::U8(out)
        }
        PixelFormat::Rgba8 => {
            let mut out = Vec::with_capacity(pixels.len() * 4);
            for p in pixels {
                out.extend_from_slice(&[p.r, p.g, p.b, p.a]);
            }
            PixelData::U8(out)
        }
        PixelFormat::RgbF32 => {
            let mut out = Vec::with_capacity(pixels.len() * 3);
            for p in pixels {
                out.extend_from_slice(&[to_unit(p.r), to_unit(p.g), to_unit(p.b)]);
            }
            PixelData::F32(out)
        }
        PixelFormat::RgbaF32 => {
            let mut out = Vec::with_capacity(pixels.len() * 4);
            for p in pixels {
                out.extend_from_slice(&[to_unit(p.r), to_unit(p.g), to_unit(p.b), to_unit(p.a)]);
            }
            PixelData::F32(out)
        }
    }
}
