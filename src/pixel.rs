/// Output pixel format for decoded images.
///
/// Byte formats store one `u8` per channel; float formats store one `f32`
/// per channel in `[0.0, 1.0]` (byte value / 255, no gamma applied).
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PixelFormat {
    /// 3 channels, 8-bit RGB.
    Rgb8,
    /// 4 channels, 8-bit RGBA.
    #[default]
    Rgba8,
    /// 3 channels, 32-bit float RGB.
    RgbF32,
    /// 4 channels, 32-bit float RGBA.
    RgbaF32,
}

impl PixelFormat {
    /// Bytes per pixel for this format.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Rgb8 => 3,
            Self::Rgba8 => 4,
            Self::RgbF32 => 12,
            Self::RgbaF32 => 16,
        }
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        match self {
            Self::Rgb8 | Self::RgbF32 => 3,
            Self::Rgba8 | Self::RgbaF32 => 4,
        }
    }

    /// Whether channels are stored as `f32` rather than `u8`.
    pub fn is_float(&self) -> bool {
        matches!(self, Self::RgbF32 | Self::RgbaF32)
    }
}

/// Working color used by the decode paths before format conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Rgba {
    /// Opaque black.
    fn default() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 255,
        }
    }
}

/// Typed pixel that can view a decoded byte buffer.
///
/// Implemented for [`rgb::RGB8`] and [`rgb::RGBA8`]. Float output formats
/// have no typed view; use
/// [`DecodedImage::as_floats`](crate::DecodedImage::as_floats) for those.
#[cfg(feature = "rgb")]
pub trait DecodePixel: Copy {
    /// The output format this pixel type maps onto.
    fn format() -> PixelFormat;
}

#[cfg(feature = "rgb")]
impl DecodePixel for rgb::RGB8 {
    fn format() -> PixelFormat {
        PixelFormat::Rgb8
    }
}

#[cfg(feature = "rgb")]
impl DecodePixel for rgb::RGBA8 {
    fn format() -> PixelFormat {
        PixelFormat::Rgba8
    }
}
