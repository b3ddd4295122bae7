use alloc::string::String;

/// Errors from BMP/DIB decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[error("unrecognized signature bytes: {found:?}")]
    InvalidSignature { found: [u8; 2] },

    #[error("unrecognized DIB header size: {0}")]
    UnsupportedHeader(u32),

    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("unsupported bit depth: {0}")]
    UnsupportedColorDepth(u16),

    #[error("color table declares {0} entries, maximum is 256")]
    ColorTableOverflow(u32),

    #[error("unsupported compression scheme: {0}")]
    UnsupportedCompression(u32),

    #[error("read of {len} bytes at offset {offset} past end of {total}-byte buffer")]
    TruncatedBuffer {
        offset: usize,
        len: usize,
        total: usize,
    },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("pixel format mismatch: expected {expected:?}, got {actual:?}")]
    FormatMismatch {
        expected: crate::PixelFormat,
        actual: crate::PixelFormat,
    },
}
