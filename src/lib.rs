//! # zendib
//!
//! Legacy Windows bitmap (BMP/DIB) decoder.
//!
//! Takes a complete BMP file from memory and produces packed row-major
//! pixels in a caller-selected output format. Covers the header variants
//! and bit depths the format accumulated over the years:
//!
//! - BITMAPINFOHEADER (40), the v2/v3 mask extensions (52/56),
//!   BITMAPV4HEADER (108) and BITMAPV5HEADER (124)
//! - 1/4/8-bit palette images, 16- and 32-bit masked images (RGB555,
//!   RGB565, arbitrary bitfields), 24-bit BGR
//! - RLE4 and RLE8 compression
//! - bottom-up and top-down row order, normalized to top-down output
//!
//! Decoding is a pure function of the input bytes: no I/O, no shared
//! state, and a typed [`BmpError`] for every rejection. Malformed input
//! never panics; callers decoding untrusted data can cap allocations
//! with [`Limits`].
//!
//! ## Non-Goals
//!
//! - Embedded JPEG/PNG payloads (`BI_JPEG`/`BI_PNG`): recognized and
//!   rejected, never decoded
//! - The 12-byte OS/2 v1 and 64-byte OS/2 v2 headers
//! - Color management; samples pass through untouched
//!
//! ## Usage
//!
//! ```no_run
//! use zendib::{BmpInfo, DecodeRequest, PixelFormat};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! // Probe without decoding
//! let info = BmpInfo::from_bytes(data)?;
//! println!("{}x{} {}bpp", info.width, info.height, info.bits_per_pixel);
//!
//! // Decode to packed RGBA bytes
//! let image = DecodeRequest::new(data)
//!     .with_format(PixelFormat::Rgba8)
//!     .decode()?;
//! let pixels = image.as_bytes().unwrap();
//! # let _ = pixels;
//! # Ok::<(), zendib::BmpError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bitfields;
mod decode;
mod error;
mod header;
mod limits;
mod palette;
mod pixel;
mod raster;
mod reader;
mod rle;

// Re-exports
pub use decode::{DecodeRequest, DecodedImage, PixelData, decode};
pub use error::BmpError;
pub use header::{BmpInfo, Compression, is_bmp};
pub use limits::Limits;
#[cfg(feature = "rgb")]
pub use pixel::DecodePixel;
pub use pixel::PixelFormat;
