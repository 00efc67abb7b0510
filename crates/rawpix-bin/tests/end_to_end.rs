/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Generator-to-viewer pipeline tests going through the raw byte
//! format, the only interface the tools share.
use rawpix_core::{rgb332, PixelFormat};
use rawpix_patterns::{square_pattern, vga_pattern, SQUARE_BLOCK, VGA_BLOCK};
use rawpix_raw::{inversion_estimate, RawDecoder, RawDecoderOptions, RawEncoder};

const VGA_WIDTH: usize = 320;
const VGA_HEIGHT: usize = 240;

#[test]
fn square_generator_through_viewer() {
    let (pixels, side) = square_pattern(1024, SQUARE_BLOCK).unwrap();
    assert_eq!(side, 32);

    let mut raw = Vec::new();
    RawEncoder::new(&mut raw).encode(&pixels, side, side).unwrap();

    // the viewer path with explicit 32x32 must reproduce the matrix
    // byte for byte, no repair triggered
    let options = RawDecoderOptions::default().set_width(32).set_height(32);
    let mut decoder = RawDecoder::new_with_options(&raw, options);
    let viewed = decoder.decode().unwrap();

    assert_eq!(viewed, pixels);
    assert_eq!((decoder.height(), decoder.width()), (32, 32));
}

#[test]
fn vga_generator_through_strict_viewer() {
    let gray = vga_pattern(VGA_WIDTH, VGA_HEIGHT, VGA_BLOCK).unwrap();
    let packed: Vec<u8> = gray.iter().map(|g| rgb332::pack_gray(*g)).collect();

    let mut raw = Vec::new();
    RawEncoder::new(&mut raw)
        .encode(&packed, VGA_WIDTH, VGA_HEIGHT)
        .unwrap();
    assert_eq!(raw.len(), 76800);

    let options = RawDecoderOptions::default()
        .set_width(VGA_WIDTH)
        .set_height(VGA_HEIGHT)
        .set_format(PixelFormat::Rgb332)
        .set_strict(true);
    let rgb = RawDecoder::new_with_options(&raw, options)
        .decode_rgb()
        .unwrap();

    assert_eq!(rgb.len(), 76800 * 3);

    // spot check the first row: gradient floor of the top 3 bits
    for x in 0..VGA_WIDTH {
        let gray_val = usize::from(gray[x]);
        let expected_r3 = (gray_val * 7 / 255) as u8;
        let byte = raw[x];
        assert_eq!(byte >> 5, expected_r3, "red bits mismatch at x={x}");

        let triple = &rgb[x * 3..x * 3 + 3];
        assert_eq!(triple, &rgb332::unpack(byte)[..]);
    }
}

#[test]
fn truncated_vga_frame_is_rejected() {
    let options = RawDecoderOptions::default()
        .set_width(VGA_WIDTH)
        .set_height(VGA_HEIGHT)
        .set_format(PixelFormat::Rgb332)
        .set_strict(true);

    let short = vec![0_u8; 76800 - 1];
    assert!(RawDecoder::new_with_options(&short, options)
        .decode_rgb()
        .is_err());
}

#[test]
fn complementary_buffers_flag_inversion() {
    let (pixels, side) = square_pattern(1024, SQUARE_BLOCK).unwrap();
    let complement: Vec<u8> = pixels.iter().map(|p| 255 - p).collect();

    let options = RawDecoderOptions::default()
        .set_width(side)
        .set_height(side);
    let a = RawDecoder::new_with_options(&pixels, options).decode().unwrap();
    let b = RawDecoder::new_with_options(&complement, options)
        .decode()
        .unwrap();

    assert!(inversion_estimate(&a, &b));
    assert!(!inversion_estimate(&a, &a));
}
