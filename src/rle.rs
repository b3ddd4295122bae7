//! RLE4 and RLE8 decompression.
//!
//! Both schemes interleave encoded runs with escape sequences introduced
//! by a zero byte:
//!
//! - `n v` (n > 0): run of `n` pixels drawn from `v`
//! - `0 0`: end of line
//! - `0 1`: end of bitmap
//! - `0 2 dx dy`: position delta
//! - `0 n` (n >= 3): absolute run of `n` literal pixels, padded to a
//!   16-bit boundary
//!
//! End of line draws nothing and moves nothing. The delta escape resets
//! to scanning without consuming the offset pair or skipping output
//! pixels, so the pair is picked up as ordinary stream bytes. Decoding
//! consumes at most the declared pixel data size and stops early only at
//! the end-of-bitmap escape. Output is clamped to `width * height`
//! pixels; a short stream leaves the remainder opaque black.

use alloc::vec::Vec;

use crate::error::BmpError;
use crate::header::BmpHeader;
use crate::palette::ColorTable;
use crate::pixel::Rgba;
use crate::reader::ByteReader;

enum State {
    /// Scanning for the next run length or escape introducer.
    Initial,
    /// Saw the escape byte; the next byte selects the escape.
    ZeroByte,
    /// Run pending its value byte.
    Encoded(u8),
    /// Inside an absolute literal run.
    Absolute { remaining: u8, total: u8 },
}

pub(crate) fn decode_rle8(
    reader: &ByteReader,
    header: &BmpHeader,
    palette: &ColorTable,
    pixels: &mut Vec<Rgba>,
) -> Result<(), BmpError> {
    let cap = header.width as usize * header.height as usize;
    let base = header.data_offset as usize;
    let declared = header.declared_data_size as usize;
    let mut pos = 0usize;
    let mut state = State::Initial;

    while pos < declared {
        let byte = reader.u8_at(base + pos)?;
        pos += 1;
        state = match state {
            State::Initial => match byte {
                0 => State::ZeroByte,
                run => State::Encoded(run),
            },
            State::ZeroByte => match byte {
                // End of line; the output position is untouched.
                0 => State::Initial,
                // End of bitmap.
                1 => break,
                // Delta escape; the offset pair is not consumed.
                2 => State::Initial,
                count => State::Absolute {
                    remaining: count,
                    total: count,
                },
            },
            State::Encoded(run) => {
                let color = palette.get(byte);
                for _ in 0..run {
                    if pixels.len() < cap {
                        pixels.push(color);
                    }
                }
                State::Initial
            }
            State::Absolute { remaining, total } => {
                if pixels.len() < cap {
                    pixels.push(palette.get(byte));
                }
                let remaining = remaining - 1;
                if remaining == 0 {
                    // Odd-length payloads carry one alignment byte.
                    if total % 2 == 1 {
                        pos += 1;
                    }
                    State::Initial
                } else {
                    State::Absolute { remaining, total }
                }
            }
        };
    }

    pixels.resize(cap, Rgba::default());
    Ok(())
}

pub(crate) fn decode_rle4(
    reader: &ByteReader,
    header: &BmpHeader,
    palette: &ColorTable,
    pixels: &mut Vec<Rgba>,
) -> Result<(), BmpError> {
    let cap = header.width as usize * header.height as usize;
    let base = header.data_offset as usize;
    let declared = header.declared_data_size as usize;
    let mut pos = 0usize;
    let mut state = State::Initial;

    while pos < declared {
        let byte = reader.u8_at(base + pos)?;
        pos += 1;
        state = match state {
            State::Initial => match byte {
                0 => State::ZeroByte,
                run => State::Encoded(run),
            },
            State::ZeroByte => match byte {
                0 => State::Initial,
                1 => break,
                2 => State::Initial,
                count => State::Absolute {
                    remaining: count,
                    total: count,
                },
            },
            State::Encoded(run) => {
                // The value byte holds two palette indices; the run
                // alternates between them starting with the high nibble.
                let high = palette.get(byte >> 4);
                let low = palette.get(byte & 0x0F);
                for i in 0..run {
                    if pixels.len() < cap {
                        pixels.push(if i % 2 == 0 { high } else { low });
                    }
                }
                State::Initial
            }
            State::Absolute { remaining, total } => {
                if pixels.len() < cap {
                    pixels.push(palette.get(byte >> 4));
                }
                let mut remaining = remaining - 1;
                if remaining > 0 {
                    if pixels.len() < cap {
                        pixels.push(palette.get(byte & 0x0F));
                    }
                    remaining -= 1;
                }
                if remaining == 0 {
                    // Nibble payloads pad to a 16-bit boundary; counts of
                    // 4k and 4k+3 already end on one.
                    if total % 4 == 1 || total % 4 == 2 {
                        pos += 1;
                    }
                    State::Initial
                } else {
                    State::Absolute { remaining, total }
                }
            }
        };
    }

    pixels.resize(cap, Rgba::default());
    Ok(())
}
