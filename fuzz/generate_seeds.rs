#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(width: i32, height: i32, bpp: u16, compression: u32, data_offset: u32, colors: u32) -> Vec<u8> {
    let mut h = vec![0u8; 54];
    h[0] = b'B'; h[1] = b'M';
    h[10..14].copy_from_slice(&data_offset.to_le_bytes());
    h[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    h[18..22].copy_from_slice(&width.to_le_bytes());
    h[22..26].copy_from_slice(&height.to_le_bytes());
    h[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    h[28..30].copy_from_slice(&bpp.to_le_bytes());
    h[30..34].copy_from_slice(&compression.to_le_bytes());
    h[46..50].copy_from_slice(&colors.to_le_bytes());
    h
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // Minimal 1x1 24-bit
    let mut bmp = header(1, 1, 24, 0, 54, 0);
    bmp.extend_from_slice(&[0xff, 0x00, 0x00, 0x00]); // BGR + row padding
    fs::write(format!("{dir}/bmp_1x1_24.bmp"), bmp).unwrap();

    // 2x1 8-bit paletted
    let mut bmp = header(2, 1, 8, 0, 62, 2);
    bmp.extend_from_slice(&[0x00, 0x00, 0xff, 0x00]); // red entry
    bmp.extend_from_slice(&[0xff, 0x00, 0x00, 0x00]); // blue entry
    bmp.extend_from_slice(&[0x00, 0x01, 0x00, 0x00]); // indices + row padding
    fs::write(format!("{dir}/bmp_2x1_pal8.bmp"), bmp).unwrap();

    // 4x1 RLE8: one encoded run plus end-of-bitmap
    let mut bmp = header(4, 1, 8, 1, 62, 2);
    bmp[34..38].copy_from_slice(&4u32.to_le_bytes()); // declared data size
    bmp.extend_from_slice(&[0x00, 0x00, 0xff, 0x00]);
    bmp.extend_from_slice(&[0xff, 0x00, 0x00, 0x00]);
    bmp.extend_from_slice(&[0x04, 0x01, 0x00, 0x01]);
    fs::write(format!("{dir}/bmp_4x1_rle8.bmp"), bmp).unwrap();

    // 1x1 16-bit with RGB565 masks
    let mut bmp = header(1, 1, 16, 3, 66, 0);
    bmp.extend_from_slice(&0xF800u32.to_le_bytes());
    bmp.extend_from_slice(&0x07E0u32.to_le_bytes());
    bmp.extend_from_slice(&0x001Fu32.to_le_bytes());
    bmp.extend_from_slice(&[0xff, 0xff, 0x00, 0x00]); // one word + row padding
    fs::write(format!("{dir}/bmp_1x1_565.bmp"), bmp).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    let mut os2 = header(1, 1, 24, 0, 26, 0);
    os2[14..18].copy_from_slice(&12u32.to_le_bytes());
    fs::write(format!("{dir}/os2_header.bin"), os2).unwrap();

    println!("Generated seed corpus in {dir}/");
}
